use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera permission was not granted")]
    PermissionDenied,
    #[error("capture failed: {0}")]
    CaptureFailed(CaptureFailure),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureFailure {
    #[error("could not allocate storage: {0}")]
    StorageUnavailable(String),
    #[error("camera did not produce a photo: {0}")]
    CameraAborted(String),
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("image stream is empty")]
    EmptyStream,
    #[error("could not read image: {0}")]
    Unreadable(String),
    #[error("not a valid image: {0}")]
    InvalidImage(String),
    #[error("jpeg encoding failed: {0}")]
    EncodeFailed(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no image has been captured yet")]
    NoImageCaptured,
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
