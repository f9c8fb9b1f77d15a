use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::adapters::HttpUploadClient;
use crate::core::models::{Notification, UserSettings};
use crate::core::orchestrators::app_orchestrator::AppOrchestrator;
use crate::core::services::image_capture::ImageCapture;
use crate::global_constants::LOG_TAG_APP;
use crate::ports::{CommandCamera, ConsoleInput, ConsolePermissionGate, DirectoryMediaStorage};
use crate::presentation::{self, UserAction};

pub struct PhotoUploaderApp {
    orchestrator: AppOrchestrator,
    input: Arc<ConsoleInput>,
    notification_receiver: UnboundedReceiver<Notification>,
}

impl PhotoUploaderApp {
    pub fn build() -> Result<Self> {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let media_directory = settings.resolve_media_directory()?;
        let input = Arc::new(ConsoleInput::from_stdin());

        let image_capture = Arc::new(ImageCapture::build(
            Arc::new(ConsolePermissionGate::initialize(Arc::clone(&input))),
            Arc::new(
                CommandCamera::from_command_line(&settings.camera_command)
                    .context("invalid camera command in settings")?,
            ),
            Arc::new(DirectoryMediaStorage::at_directory(media_directory)),
        ));
        let uploader = Arc::new(HttpUploadClient::initialize()?);

        let (notification_sender, notification_receiver) = mpsc::unbounded_channel();
        let orchestrator = AppOrchestrator::build(image_capture, uploader, notification_sender);

        Ok(Self {
            orchestrator,
            input,
            notification_receiver,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        println!("{}", presentation::render_help());

        loop {
            tokio::select! {
                line = self.input.next_line() => {
                    let Some(line) = line? else {
                        log::info!("{} input closed", LOG_TAG_APP);
                        break;
                    };

                    if !self.handle_action(UserAction::parse(&line)).await {
                        break;
                    }
                }
                Some(notification) = self.notification_receiver.recv() => {
                    println!("{}", presentation::render_notification(&notification));
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction) -> bool {
        if let Some(message) = action.to_orchestrator_message() {
            if let Some(notification) = self.orchestrator.update(message).await {
                println!("{}", presentation::render_notification(&notification));
            }
            return true;
        }

        match action {
            UserAction::Status => println!("{}", presentation::render_status(self.orchestrator.session())),
            UserAction::Help => println!("{}", presentation::render_help()),
            UserAction::Unknown(input) => println!("{}", presentation::render_unknown_action(&input)),
            UserAction::Quit => return false,
            UserAction::Empty | UserAction::Capture | UserAction::Upload => {}
        }

        true
    }

    async fn shutdown(&mut self) {
        self.orchestrator.wait_for_pending_uploads().await;

        while let Ok(notification) = self.notification_receiver.try_recv() {
            println!("{}", presentation::render_notification(&notification));
        }

        log::info!("{} exiting application", LOG_TAG_APP);
    }
}
