use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::{error::StorageError, repositories::session_repository::SessionRepository};

type Entries = BTreeMap<String, String>;

/// Key/value storage kept as a json object in a single file
#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Entries, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(entries)?;

        // write then rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_all(&[(key, value)]).await
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut stored = self.load().await?;
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        self.save(&stored).await?;
        debug!(
            keys = ?entries.iter().map(|(key, _)| *key).collect::<Vec<_>>(),
            path = %self.path.display(),
            "stored values"
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
