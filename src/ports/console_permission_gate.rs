use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::interfaces::ports::{Capability, PermissionGate};
use crate::global_constants::{LOG_TAG_PERMISSION, PERMISSION_PROMPT_CAMERA};
use crate::ports::ConsoleInput;

/// Asks on the console; a grant lasts for the rest of the process.
pub struct ConsolePermissionGate {
    input: Arc<ConsoleInput>,
    granted: Mutex<HashSet<Capability>>,
}

impl ConsolePermissionGate {
    pub fn initialize(input: Arc<ConsoleInput>) -> Self {
        log::debug!("{} initializing console permission gate", LOG_TAG_PERMISSION);

        Self {
            input,
            granted: Mutex::new(HashSet::new()),
        }
    }

    fn prompt_for(capability: Capability) -> &'static str {
        match capability {
            Capability::Camera => PERMISSION_PROMPT_CAMERA,
        }
    }

    fn is_affirmative(answer: &str) -> bool {
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn record_grant(&self, capability: Capability) {
        if let Ok(mut granted) = self.granted.lock() {
            granted.insert(capability);
        }
    }
}

#[async_trait]
impl PermissionGate for ConsolePermissionGate {
    fn check_granted(&self, capability: Capability) -> bool {
        self.granted
            .lock()
            .map(|granted| granted.contains(&capability))
            .unwrap_or(false)
    }

    async fn request_grant(&self, capability: Capability) -> bool {
        print!("{}", Self::prompt_for(capability));
        let _ = std::io::stdout().flush();

        let answer = match self.input.next_line().await {
            Ok(Some(answer)) => answer,
            Ok(None) => {
                log::warn!("{} input closed while prompting for {:?}", LOG_TAG_PERMISSION, capability);
                return false;
            }
            Err(e) => {
                log::error!("{} failed to read answer: {:#}", LOG_TAG_PERMISSION, e);
                return false;
            }
        };

        let is_granted = Self::is_affirmative(&answer);
        log::info!(
            "{} {:?} permission {}",
            LOG_TAG_PERMISSION,
            capability,
            if is_granted { "granted" } else { "denied" }
        );

        if is_granted {
            self.record_grant(capability);
        }

        is_granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_gate_with_answers(answers: &'static [u8]) -> ConsolePermissionGate {
        ConsolePermissionGate::initialize(Arc::new(ConsoleInput::from_reader(Box::new(answers))))
    }

    #[test]
    fn test_is_affirmative_accepts_yes_variants() {
        assert!(ConsolePermissionGate::is_affirmative("y"));
        assert!(ConsolePermissionGate::is_affirmative(" YES "));
        assert!(!ConsolePermissionGate::is_affirmative("n"));
        assert!(!ConsolePermissionGate::is_affirmative(""));
    }

    #[tokio::test]
    async fn test_grant_is_remembered() {
        let gate = create_gate_with_answers(b"y\n");

        assert!(!gate.check_granted(Capability::Camera));
        assert!(gate.request_grant(Capability::Camera).await);
        assert!(gate.check_granted(Capability::Camera));
    }

    #[tokio::test]
    async fn test_refusal_is_not_remembered_as_grant() {
        let gate = create_gate_with_answers(b"no\n");

        assert!(!gate.request_grant(Capability::Camera).await);
        assert!(!gate.check_granted(Capability::Camera));
    }

    #[tokio::test]
    async fn test_closed_input_denies_permission() {
        let gate = create_gate_with_answers(b"");

        assert!(!gate.request_grant(Capability::Camera).await);
    }
}
