use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder,
    multipart::{Form, Part},
};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::{ApiPaths, ClientConfig, ConfigError},
    domain::{
        models::{
            failure::ApiError,
            image::ProfileImage,
            registration::{RegisterResponse, RegistrationRequest, UploadResponse},
        },
        repositories::auth_repository::AuthRepository,
    },
};

/// Auth api over HTTP
#[derive(Clone, Debug)]
pub struct HttpAuthRepository {
    client: Client,
    base_url: String,
    paths: ApiPaths,
}

impl HttpAuthRepository {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            paths: config.paths.clone(),
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the request and return the success body as json. Anything else
    /// becomes an [`ApiError`].
    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        debug!(status = status.as_u16(), len = bytes.len(), "api response");

        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        if !body.is_object() {
            debug!(status = status.as_u16(), "success body is not a json object");
        }
        Ok(body)
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn upload_image(&self, image: &ProfileImage) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime().as_ref())
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = self.build_url(&self.paths.upload_image);
        debug!(%url, "POST multipart");
        let body = self.send(self.client.post(&url).multipart(form)).await?;
        Ok(UploadResponse::from_value(&body))
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, ApiError> {
        let url = self.build_url(&self.paths.register);
        debug!(%url, "POST json");
        let body = self.send(self.client.post(&url).json(request)).await?;
        Ok(RegisterResponse::from_value(&body))
    }
}
