use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::CapturedImage;

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn create_entry(&self, display_name: &str, mime_type: &str) -> Result<CapturedImage>;

    async fn read_entry(&self, image: &CapturedImage) -> Result<Vec<u8>>;

    async fn discard_entry(&self, image: &CapturedImage) -> Result<()>;
}
