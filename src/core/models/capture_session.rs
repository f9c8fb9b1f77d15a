use crate::core::models::CapturedImage;

/// The one-screen session: at most one current photo, replaced by each capture.
#[derive(Clone, Debug, Default)]
pub struct CaptureSession {
    current_image: Option<CapturedImage>,
}

impl CaptureSession {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_captured_image(&self, image: CapturedImage) -> Self {
        log::debug!("[SESSION] current image is now {}", image.display_name);

        Self {
            current_image: Some(image),
        }
    }

    pub fn current_image(&self) -> Option<&CapturedImage> {
        self.current_image.as_ref()
    }

    /// Owned copy handed to an upload attempt so later captures never affect it.
    pub fn snapshot(&self) -> Option<CapturedImage> {
        self.current_image.clone()
    }
}
