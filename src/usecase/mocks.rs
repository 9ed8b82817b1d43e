//! In-memory ports shared by the usecase and presentation tests.

use std::{
    collections::BTreeMap,
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use crate::domain::{
    error::{DomainError, StorageError},
    models::{
        failure::ApiError,
        image::{PreviewUrl, ProfileImage},
        registration::{RegisterResponse, RegistrationRequest, UploadResponse},
        route::Route,
    },
    repositories::{auth_repository::AuthRepository, session_repository::SessionRepository},
    services::{navigator::Navigator, preview_service::PreviewProvider},
};

#[derive(Clone)]
pub struct MockAuthRepository {
    upload_result: Result<UploadResponse, ApiError>,
    register_result: Result<RegisterResponse, ApiError>,
    upload_calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RegistrationRequest>>>,
}

impl Default for MockAuthRepository {
    fn default() -> Self {
        Self {
            upload_result: Ok(UploadResponse::default()),
            register_result: Ok(RegisterResponse::default()),
            upload_calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockAuthRepository {
    pub fn with_upload(mut self, result: Result<UploadResponse, ApiError>) -> Self {
        self.upload_result = result;
        self
    }

    pub fn with_register(mut self, result: Result<RegisterResponse, ApiError>) -> Self {
        self.register_result = result;
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RegistrationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn upload_image(&self, _image: &ProfileImage) -> Result<UploadResponse, ApiError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.upload_result.clone()
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.register_result.clone()
    }
}

#[derive(Clone, Default)]
pub struct MemorySessionRepository {
    values: Arc<Mutex<BTreeMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
    failing_keys: Arc<Mutex<Vec<String>>>,
    corrupt: Arc<AtomicBool>,
}

impl MemorySessionRepository {
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().unwrap().is_empty()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Make every read fail as if the stored data were not valid json
    pub fn corrupt(&self) {
        self.corrupt.store(true, Ordering::SeqCst);
    }

    /// Reject any write that touches `key`, leave the others alone
    pub fn fail_writes_to(&self, key: &str) {
        self.failing_keys.lock().unwrap().push(key.to_string());
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only storage").into());
        }
        Ok(())
    }

    fn check_key_writable(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        if self.failing_keys.lock().unwrap().iter().any(|k| k == key) {
            return Err(io::Error::other("disk full").into());
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_all(&[(key, value)]).await
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, _) in entries {
            self.check_key_writable(key)?;
        }
        let mut values = self.values.lock().unwrap();
        for (key, value) in entries {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.corrupt.load(Ordering::SeqCst) {
            let error = serde_json::from_str::<serde_json::Value>("{truncated").unwrap_err();
            return Err(error.into());
        }
        Ok(self.value(key))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.check_writable()?;
        self.values.lock().unwrap().clear();
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &Route) {
        self.routes.lock().unwrap().push(route.clone());
    }
}

/// Hands out numbered previews and remembers which are still live
#[derive(Default)]
pub struct CountingPreviewProvider {
    created: AtomicUsize,
    live: Mutex<Vec<PreviewUrl>>,
}

impl CountingPreviewProvider {
    pub fn live(&self) -> Vec<PreviewUrl> {
        self.live.lock().unwrap().clone()
    }
}

impl PreviewProvider for CountingPreviewProvider {
    fn create(&self, image: &ProfileImage) -> Result<PreviewUrl, DomainError> {
        let n = self.created.fetch_add(1, Ordering::SeqCst);
        let url = PreviewUrl::new(format!("preview://{}/{}", n, image.file_name()));
        self.live.lock().unwrap().push(url.clone());
        Ok(url)
    }

    fn revoke(&self, url: &PreviewUrl) {
        self.live.lock().unwrap().retain(|live| live != url);
    }
}
