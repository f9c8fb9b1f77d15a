use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::core::interfaces::adapters::ImageUploader;
use crate::core::models::{CaptureSession, Notification};
use crate::core::services::image_capture::ImageCapture;
use crate::core::services::upload_pipeline;
use crate::global_constants::LOG_TAG_ORCHESTRATOR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrchestratorMessage {
    CapturePhoto,
    UploadPhoto,
}

pub struct AppOrchestrator {
    image_capture: Arc<ImageCapture>,
    uploader: Arc<dyn ImageUploader>,
    session: CaptureSession,
    notification_sender: UnboundedSender<Notification>,
    pending_uploads: Vec<JoinHandle<()>>,
}

impl AppOrchestrator {
    pub fn build(
        image_capture: Arc<ImageCapture>,
        uploader: Arc<dyn ImageUploader>,
        notification_sender: UnboundedSender<Notification>,
    ) -> Self {
        Self {
            image_capture,
            uploader,
            session: CaptureSession::empty(),
            notification_sender,
            pending_uploads: Vec::new(),
        }
    }

    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    /// Capture completes inline; uploads report later through the notification channel.
    pub async fn update(&mut self, message: OrchestratorMessage) -> Option<Notification> {
        log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            OrchestratorMessage::CapturePhoto => Some(self.handle_capture_photo().await),
            OrchestratorMessage::UploadPhoto => self.handle_upload_photo(),
        }
    }

    pub async fn wait_for_pending_uploads(&mut self) {
        let pending = std::mem::take(&mut self.pending_uploads);
        if pending.is_empty() {
            return;
        }

        log::info!(
            "{} waiting for {} pending upload(s)",
            LOG_TAG_ORCHESTRATOR,
            pending.len()
        );

        for outcome in futures::future::join_all(pending).await {
            if let Err(e) = outcome {
                log::error!("{} upload task failed: {}", LOG_TAG_ORCHESTRATOR, e);
            }
        }
    }

    async fn handle_capture_photo(&mut self) -> Notification {
        let result = self.image_capture.request_capture().await;

        if let Ok(image) = &result {
            self.session = self.session.with_captured_image(image.clone());
        }

        Notification::from_capture(&result)
    }

    fn handle_upload_photo(&mut self) -> Option<Notification> {
        let Some(snapshot) = self.session.snapshot() else {
            log::info!("{} upload requested before any capture", LOG_TAG_ORCHESTRATOR);
            return Some(Notification::NoImageYet);
        };

        self.pending_uploads.retain(|handle| !handle.is_finished());

        let image_capture = Arc::clone(&self.image_capture);
        let uploader = Arc::clone(&self.uploader);
        let notification_sender = self.notification_sender.clone();

        let handle = tokio::spawn(async move {
            let result =
                upload_pipeline::upload_captured_image(&image_capture, uploader.as_ref(), Some(snapshot))
                    .await;

            if notification_sender
                .send(Notification::from_upload(&result))
                .is_err()
            {
                log::warn!(
                    "{} view closed before upload notification was delivered",
                    LOG_TAG_ORCHESTRATOR
                );
            }
        });

        self.pending_uploads.push(handle);
        None
    }
}
