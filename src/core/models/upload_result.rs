use std::fmt;

use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadResult {
    Success,
    ServerError { status_code: u16 },
    TransportError { message: String },
}

impl UploadResult {
    pub fn from_status_code(status_code: u16) -> Self {
        if (200..300).contains(&status_code) {
            UploadResult::Success
        } else {
            UploadResult::ServerError { status_code }
        }
    }

    pub fn terminal_state(&self) -> UploadState {
        match self {
            UploadResult::Success => UploadState::Succeeded,
            UploadResult::ServerError { .. } => UploadState::ServerRejected,
            UploadResult::TransportError { .. } => UploadState::TransportFailed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Encoding,
    Sending,
    Succeeded,
    ServerRejected,
    TransportFailed,
}

impl UploadState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadState::Succeeded | UploadState::ServerRejected | UploadState::TransportFailed
        )
    }

    pub fn can_advance_to(&self, next: UploadState) -> bool {
        match (self, next) {
            (UploadState::Idle, UploadState::Encoding) => true,
            (UploadState::Encoding, UploadState::Sending) => true,
            (UploadState::Sending, terminal) => terminal.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadState::Idle => write!(f, "Idle"),
            UploadState::Encoding => write!(f, "Encoding"),
            UploadState::Sending => write!(f, "Sending"),
            UploadState::Succeeded => write!(f, "Succeeded"),
            UploadState::ServerRejected => write!(f, "ServerRejected"),
            UploadState::TransportFailed => write!(f, "TransportFailed"),
        }
    }
}

/// One upload attempt. Attempts never re-enter `Sending` once terminal.
#[derive(Debug)]
pub struct UploadAttempt {
    pub attempt_id: Uuid,
    state: UploadState,
}

impl UploadAttempt {
    pub fn begin() -> Self {
        let attempt_id = Uuid::new_v4();
        log::debug!("[UPLOAD] attempt {} created", attempt_id);

        Self {
            attempt_id,
            state: UploadState::Idle,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn advance_to(&mut self, next: UploadState) -> bool {
        if !self.state.can_advance_to(next) {
            log::warn!(
                "[UPLOAD] attempt {} refused transition {} -> {}",
                self.attempt_id,
                self.state,
                next
            );
            return false;
        }

        log::debug!(
            "[UPLOAD] attempt {} {} -> {}",
            self.attempt_id,
            self.state,
            next
        );
        self.state = next;
        true
    }
}
