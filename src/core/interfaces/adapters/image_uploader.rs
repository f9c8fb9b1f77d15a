use async_trait::async_trait;

use crate::core::models::{UploadRequest, UploadResult};

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Exactly one delivery attempt. Failures are folded into the result.
    async fn send(&self, request: &UploadRequest) -> UploadResult;
}
