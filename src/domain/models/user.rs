use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type ImageUrl = String;
pub type FullName = String;

/// User record as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, alias = "_id")]
    id: String,
    #[serde(default)]
    full_name: FullName,
    #[serde(default)]
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<ImageUrl>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<FullName>,
        email: impl Into<String>,
        profile_image_url: Option<ImageUrl>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            profile_image_url,
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Profile image url, `None` when unset or blank
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// RFC 3339 timestamp or a bare date. Anything else is dropped.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let Some(raw) = raw.as_str() else {
        return Ok(None);
    };
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc()))
}
