use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

/// Handle to an image entry owned by the media storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedImage {
    pub display_name: String,
    pub mime_type: String,
    location: PathBuf,
}

impl CapturedImage {
    pub fn at_location(display_name: &str, mime_type: &str, location: PathBuf) -> Self {
        log::debug!(
            "{} new capture handle {} ({}) at {:?}",
            global_constants::LOG_TAG_CAPTURE,
            display_name,
            mime_type,
            location
        );

        Self {
            display_name: display_name.to_string(),
            mime_type: mime_type.to_string(),
            location,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn timestamped_name(epoch_millis: i64) -> String {
        format!("{}{}", global_constants::CAPTURE_NAME_PREFIX, epoch_millis)
    }
}

impl fmt::Display for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.display_name,
            self.mime_type,
            self.location.display()
        )
    }
}
