use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    error::DomainError,
    models::image::{PreviewUrl, ProfileImage},
    services::preview_service::{PreviewHandle, PreviewProvider},
};

/// Profile photo picker on the sign-up form.
///
/// Owns the chosen image and its preview. The preview is released when
/// another image is chosen, when the image is removed, and when the selector
/// is dropped.
pub struct ProfilePhotoSelector {
    provider: Arc<dyn PreviewProvider>,
    image: Option<ProfileImage>,
    preview: Option<PreviewHandle>,
}

impl ProfilePhotoSelector {
    pub fn new(provider: Arc<dyn PreviewProvider>) -> Self {
        Self {
            provider,
            image: None,
            preview: None,
        }
    }

    pub fn choose(&mut self, image: ProfileImage) -> Result<&PreviewUrl, DomainError> {
        // release the old preview before creating the next one
        self.preview = None;
        self.image = None;

        let preview = PreviewHandle::acquire(Arc::clone(&self.provider), &image)?;
        debug!(file_name = image.file_name(), preview = %preview.url(), "profile photo chosen");

        self.image = Some(image);
        Ok(self.preview.insert(preview).url())
    }

    pub fn remove(&mut self) {
        self.image = None;
        self.preview = None;
    }

    pub fn image(&self) -> Option<&ProfileImage> {
        self.image.as_ref()
    }

    pub fn preview_url(&self) -> Option<&PreviewUrl> {
        self.preview.as_ref().map(PreviewHandle::url)
    }

    pub fn render(&self) -> String {
        match self.preview_url() {
            Some(url) => format!("[photo: {}] (remove)", url),
            None => "[no photo] (upload)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::mocks::CountingPreviewProvider;

    fn image(name: &str) -> ProfileImage {
        ProfileImage::from_file_name(vec![1, 2, 3], name).unwrap()
    }

    #[test]
    fn test_choosing_again_releases_previous_preview_positive() {
        let provider = Arc::new(CountingPreviewProvider::default());
        let mut selector = ProfilePhotoSelector::new(provider.clone());

        let first = selector.choose(image("a.png")).unwrap().clone();
        let second = selector.choose(image("b.png")).unwrap().clone();

        assert_ne!(first, second);
        assert_eq!(provider.live(), vec![second]);
        assert_eq!(selector.image().unwrap().file_name(), "b.png");
    }

    #[test]
    fn test_remove_releases_preview_positive() {
        let provider = Arc::new(CountingPreviewProvider::default());
        let mut selector = ProfilePhotoSelector::new(provider.clone());

        selector.choose(image("a.png")).unwrap();
        selector.remove();

        assert!(provider.live().is_empty());
        assert!(selector.image().is_none());
        assert_eq!(selector.render(), "[no photo] (upload)");
    }

    #[test]
    fn test_drop_releases_preview_positive() {
        let provider = Arc::new(CountingPreviewProvider::default());
        {
            let mut selector = ProfilePhotoSelector::new(provider.clone());
            selector.choose(image("a.png")).unwrap();
            assert_eq!(provider.live().len(), 1);
        }
        assert!(provider.live().is_empty());
    }
}
