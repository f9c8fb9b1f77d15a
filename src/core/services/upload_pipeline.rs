use crate::core::errors::{PipelineError, ProcessingError};
use crate::core::interfaces::adapters::ImageUploader;
use crate::core::models::{CapturedImage, UploadAttempt, UploadResult, UploadState};
use crate::core::services::image_capture::ImageCapture;
use crate::core::services::upload_client;
use crate::global_constants::LOG_TAG_UPLOAD;

/// Runs one attempt against a session snapshot: decode, encode, build, send.
pub async fn upload_captured_image(
    image_capture: &ImageCapture,
    uploader: &dyn ImageUploader,
    snapshot: Option<CapturedImage>,
) -> Result<UploadResult, PipelineError> {
    let image = snapshot.ok_or_else(|| {
        log::info!("{} upload requested without a captured image", LOG_TAG_UPLOAD);
        PipelineError::NoImageCaptured
    })?;

    let mut attempt = UploadAttempt::begin();
    log::info!(
        "{} attempt {} uploading {}",
        LOG_TAG_UPLOAD,
        attempt.attempt_id,
        image.display_name
    );

    attempt.advance_to(UploadState::Encoding);
    let bitmap = image_capture.decode(&image).await.inspect_err(|e| {
        log::error!("{} attempt {} decode failed: {}", LOG_TAG_UPLOAD, attempt.attempt_id, e);
    })?;

    let request = tokio::task::spawn_blocking(move || {
        upload_client::encode(&bitmap).map(upload_client::build_request_body)
    })
    .await
    .map_err(|e| ProcessingError::EncodeFailed(format!("encoder task failed: {}", e)))?
    .inspect_err(|e| {
        log::error!("{} attempt {} encode failed: {}", LOG_TAG_UPLOAD, attempt.attempt_id, e);
    })?;

    attempt.advance_to(UploadState::Sending);
    let result = uploader.send(&request).await;
    attempt.advance_to(result.terminal_state());

    log::info!(
        "{} attempt {} finished in state {}",
        LOG_TAG_UPLOAD,
        attempt.attempt_id,
        attempt.state()
    );

    Ok(result)
}
