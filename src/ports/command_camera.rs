use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::{CameraFacility, CameraOutcome};
use crate::core::models::CapturedImage;
use crate::global_constants::LOG_TAG_CAMERA;

/// Runs an external capture program with the destination path appended.
pub struct CommandCamera {
    program: String,
    arguments: Vec<String>,
}

impl CommandCamera {
    pub fn from_command_line(command_line: &[String]) -> Result<Self> {
        let (program, arguments) = command_line
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("camera command is empty"))?;

        log::debug!(
            "{} initializing command camera: {} {:?}",
            LOG_TAG_CAMERA,
            program,
            arguments
        );

        Ok(Self {
            program: program.clone(),
            arguments: arguments.to_vec(),
        })
    }

    async fn destination_has_image_bytes(destination: &CapturedImage) -> bool {
        tokio::fs::metadata(destination.location())
            .await
            .map(|metadata| metadata.len() > 0)
            .unwrap_or(false)
    }
}

#[async_trait]
impl CameraFacility for CommandCamera {
    async fn capture_into(&self, destination: &CapturedImage) -> Result<CameraOutcome> {
        log::info!(
            "{} running {} for {}",
            LOG_TAG_CAMERA,
            self.program,
            destination.display_name
        );

        let status = tokio::process::Command::new(&self.program)
            .args(&self.arguments)
            .arg(destination.location())
            .status()
            .await
            .with_context(|| format!("failed to start camera program {}", self.program))?;

        if !status.success() {
            log::warn!("{} camera program exited with {}", LOG_TAG_CAMERA, status);
            return Ok(CameraOutcome::Cancelled);
        }

        if !Self::destination_has_image_bytes(destination).await {
            log::warn!(
                "{} camera program wrote nothing to {:?}",
                LOG_TAG_CAMERA,
                destination.location()
            );
            return Ok(CameraOutcome::Cancelled);
        }

        Ok(CameraOutcome::Captured)
    }
}
