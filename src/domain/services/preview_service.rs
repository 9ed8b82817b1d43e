use std::sync::Arc;

use crate::domain::{
    error::DomainError,
    models::image::{PreviewUrl, ProfileImage},
};

/// Creates and releases local previews of a chosen image
pub trait PreviewProvider: Send + Sync {
    fn create(&self, image: &ProfileImage) -> Result<PreviewUrl, DomainError>;

    /// Release a preview. Revoking an unknown url is a no-op.
    fn revoke(&self, url: &PreviewUrl);
}

/// Owned preview. The preview is revoked when the handle is dropped.
pub struct PreviewHandle {
    url: PreviewUrl,
    provider: Arc<dyn PreviewProvider>,
}

impl PreviewHandle {
    pub fn acquire(
        provider: Arc<dyn PreviewProvider>,
        image: &ProfileImage,
    ) -> Result<Self, DomainError> {
        let url = provider.create(image)?;
        Ok(Self { url, provider })
    }

    pub fn url(&self) -> &PreviewUrl {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.provider.revoke(&self.url);
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PreviewHandle").field(&self.url).finish()
    }
}
