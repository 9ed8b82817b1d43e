use async_trait::async_trait;

use crate::domain::models::{
    failure::ApiError,
    image::ProfileImage,
    registration::{RegisterResponse, RegistrationRequest, UploadResponse},
};

/// Remote auth api consumed by the registration flow
#[async_trait]
pub trait AuthRepository {
    /// Upload the profile image as a multipart `file` part
    async fn upload_image(&self, image: &ProfileImage) -> Result<UploadResponse, ApiError>;

    /// Submit the registration request
    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, ApiError>;
}
