use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    error::{DomainError, StorageError},
    models::image::{PreviewUrl, ProfileImage},
    services::preview_service::PreviewProvider,
};

const URL_PREFIX: &str = "file://";

/// Writes each preview to its own file under `dir` and deletes it on revoke
#[derive(Debug, Clone)]
pub struct TempFilePreviewProvider {
    dir: PathBuf,
}

impl TempFilePreviewProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Provider rooted in the system temp directory
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("expense-client-previews"))
    }

    fn path_of<'a>(&self, url: &'a PreviewUrl) -> Option<&'a Path> {
        let path = Path::new(url.as_str().strip_prefix(URL_PREFIX)?);
        path.starts_with(&self.dir).then_some(path)
    }
}

impl PreviewProvider for TempFilePreviewProvider {
    fn create(&self, image: &ProfileImage) -> Result<PreviewUrl, DomainError> {
        fs::create_dir_all(&self.dir).map_err(StorageError::from)?;

        let path = self
            .dir
            .join(format!("preview-{}.{}", Uuid::new_v4(), image.extension()));
        fs::write(&path, image.bytes()).map_err(StorageError::from)?;

        debug!(path = %path.display(), "created preview");
        Ok(PreviewUrl::new(format!("{}{}", URL_PREFIX, path.display())))
    }

    fn revoke(&self, url: &PreviewUrl) {
        let Some(path) = self.path_of(url) else {
            return;
        };
        match fs::remove_file(path) {
            Ok(()) => debug!(path = %path.display(), "revoked preview"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "failed to revoke preview"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_writes_and_revoke_deletes_positive() {
        let dir = tempfile::tempdir().unwrap();
        let provider = TempFilePreviewProvider::new(dir.path());
        let image = ProfileImage::from_file_name(b"jpeg".to_vec(), "me.jpeg").unwrap();

        let url = provider.create(&image).unwrap();
        let path = PathBuf::from(url.as_str().strip_prefix(URL_PREFIX).unwrap());
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "jpg");
        assert_eq!(fs::read(&path).unwrap(), b"jpeg");

        provider.revoke(&url);
        assert!(!path.exists());
    }

    #[test]
    fn test_revoke_ignores_foreign_urls_negative() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::NamedTempFile::new().unwrap();
        let provider = TempFilePreviewProvider::new(dir.path().join("previews"));

        provider.revoke(&PreviewUrl::new(format!(
            "{}{}",
            URL_PREFIX,
            outside.path().display()
        )));

        assert!(outside.path().exists());
    }
}
