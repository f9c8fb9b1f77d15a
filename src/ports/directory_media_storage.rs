use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::MediaStorage;
use crate::core::models::CapturedImage;
use crate::global_constants::LOG_TAG_STORAGE;

/// Media storage backed by one directory; each entry is a file.
pub struct DirectoryMediaStorage {
    root_directory: PathBuf,
}

impl DirectoryMediaStorage {
    pub fn at_directory(root_directory: PathBuf) -> Self {
        log::debug!("{} using media directory {:?}", LOG_TAG_STORAGE, root_directory);
        Self { root_directory }
    }

    fn extension_for(mime_type: &str) -> &'static str {
        match mime_type {
            "image/jpeg" => "jpg",
            _ => "bin",
        }
    }
}

#[async_trait]
impl MediaStorage for DirectoryMediaStorage {
    async fn create_entry(&self, display_name: &str, mime_type: &str) -> Result<CapturedImage> {
        tokio::fs::create_dir_all(&self.root_directory)
            .await
            .with_context(|| format!("failed to create {:?}", self.root_directory))?;

        let location = self
            .root_directory
            .join(format!("{}.{}", display_name, Self::extension_for(mime_type)));

        tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&location)
            .await
            .with_context(|| format!("failed to create entry {:?}", location))?;

        log::info!("{} created entry {:?}", LOG_TAG_STORAGE, location);
        Ok(CapturedImage::at_location(display_name, mime_type, location))
    }

    async fn read_entry(&self, image: &CapturedImage) -> Result<Vec<u8>> {
        tokio::fs::read(image.location())
            .await
            .with_context(|| format!("failed to read entry {:?}", image.location()))
    }

    async fn discard_entry(&self, image: &CapturedImage) -> Result<()> {
        match tokio::fs::remove_file(image.location()).await {
            Ok(()) => {
                log::info!("{} discarded entry {:?}", LOG_TAG_STORAGE, image.location());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to discard {:?}", image.location())),
        }
    }
}
