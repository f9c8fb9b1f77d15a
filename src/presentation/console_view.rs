use crate::core::models::{CaptureSession, Notification, NotificationDuration};
use crate::core::orchestrators::app_orchestrator::OrchestratorMessage;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Capture,
    Upload,
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl UserAction {
    pub fn parse(line: &str) -> Self {
        let command = line.trim().to_ascii_lowercase();

        match command.as_str() {
            "" => UserAction::Empty,
            "capture" | "c" | "photo" => UserAction::Capture,
            "upload" | "u" | "send" => UserAction::Upload,
            "status" | "s" => UserAction::Status,
            "help" | "h" | "?" => UserAction::Help,
            "quit" | "q" | "exit" => UserAction::Quit,
            _ => UserAction::Unknown(line.trim().to_string()),
        }
    }

    pub fn to_orchestrator_message(&self) -> Option<OrchestratorMessage> {
        match self {
            UserAction::Capture => Some(OrchestratorMessage::CapturePhoto),
            UserAction::Upload => Some(OrchestratorMessage::UploadPhoto),
            _ => None,
        }
    }
}

pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.duration() {
        NotificationDuration::Short => "[i]",
        NotificationDuration::Long => "[!]",
    };

    format!("{} {}", marker, notification.message())
}

pub fn render_status(session: &CaptureSession) -> String {
    match session.current_image() {
        Some(image) => format!("Current photo: {}", image),
        None => global_constants::USER_MESSAGE_NO_IMAGE_PLACEHOLDER.to_string(),
    }
}

pub fn render_help() -> &'static str {
    global_constants::STARTUP_BANNER
}

pub fn render_unknown_action(input: &str) -> String {
    format!("Unknown command '{}', type 'help' for the list", input)
}
