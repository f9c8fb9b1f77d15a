use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::CapturedImage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraOutcome {
    Captured,
    Cancelled,
}

#[async_trait]
pub trait CameraFacility: Send + Sync {
    async fn capture_into(&self, destination: &CapturedImage) -> Result<CameraOutcome>;
}
