use std::fmt;

use crate::core::errors::{CaptureError, CaptureFailure, PipelineError};
use crate::core::models::{CapturedImage, UploadResult};
use crate::global_constants;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationDuration {
    Short,
    Long,
}

/// Transient message shown to the user after an action completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    PermissionDenied,
    StorageFailed(String),
    CaptureAborted(String),
    Captured(String),
    NoImageYet,
    UploadSucceeded,
    ServerError(u16),
    TransportError(String),
    ProcessingError(String),
}

impl Notification {
    pub fn from_capture(result: &Result<CapturedImage, CaptureError>) -> Self {
        match result {
            Ok(image) => Notification::Captured(image.display_name.clone()),
            Err(CaptureError::PermissionDenied) => Notification::PermissionDenied,
            Err(CaptureError::CaptureFailed(CaptureFailure::StorageUnavailable(reason))) => {
                Notification::StorageFailed(reason.clone())
            }
            Err(CaptureError::CaptureFailed(CaptureFailure::CameraAborted(reason))) => {
                Notification::CaptureAborted(reason.clone())
            }
        }
    }

    pub fn from_upload(result: &Result<UploadResult, PipelineError>) -> Self {
        match result {
            Ok(UploadResult::Success) => Notification::UploadSucceeded,
            Ok(UploadResult::ServerError { status_code }) => Notification::ServerError(*status_code),
            Ok(UploadResult::TransportError { message }) => {
                Notification::TransportError(message.clone())
            }
            Err(PipelineError::NoImageCaptured) => Notification::NoImageYet,
            Err(PipelineError::Processing(error)) => Notification::ProcessingError(error.to_string()),
        }
    }

    pub fn duration(&self) -> NotificationDuration {
        match self {
            Notification::ServerError(_)
            | Notification::TransportError(_)
            | Notification::ProcessingError(_) => NotificationDuration::Long,
            _ => NotificationDuration::Short,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::PermissionDenied => {
                global_constants::USER_MESSAGE_PERMISSION_DENIED.to_string()
            }
            Notification::StorageFailed(reason) => {
                format!("{}: {}", global_constants::USER_MESSAGE_STORAGE_FAILED, reason)
            }
            Notification::CaptureAborted(reason) => {
                format!("{}: {}", global_constants::USER_MESSAGE_CAPTURE_ABORTED, reason)
            }
            Notification::Captured(name) => {
                format!("{}: {}", global_constants::USER_MESSAGE_CAPTURED, name)
            }
            Notification::NoImageYet => global_constants::USER_MESSAGE_NO_IMAGE.to_string(),
            Notification::UploadSucceeded => {
                global_constants::USER_MESSAGE_UPLOAD_SUCCEEDED.to_string()
            }
            Notification::ServerError(status_code) => {
                format!("{}: {}", global_constants::USER_MESSAGE_SERVER_ERROR, status_code)
            }
            Notification::TransportError(message) => {
                format!("{}: {}", global_constants::USER_MESSAGE_TRANSPORT_ERROR, message)
            }
            Notification::ProcessingError(message) => {
                format!("{}: {}", global_constants::USER_MESSAGE_PROCESSING_ERROR, message)
            }
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
