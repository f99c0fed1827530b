//! Permission brokering
//!
//! Maps an engine capability request to a user decision. There is no
//! per-origin grant cache: every request prompts again, and the decision
//! is relayed back to the engine keyed by the origin that asked.

use caravel_engine::{Capability, PermissionDecision};

/// Presentation surface for the permission prompt. The dialog layout
/// itself lives outside the shell core.
pub trait PermissionPrompt: Send + Sync {
    /// Ask the user. `None` means the prompt was dismissed without an
    /// explicit choice.
    fn ask(&self, origin: &str, capability: Capability) -> Option<bool>;
}

pub struct PermissionBroker {
    prompt: std::sync::Arc<dyn PermissionPrompt>,
}

impl PermissionBroker {
    pub fn new(prompt: std::sync::Arc<dyn PermissionPrompt>) -> Self {
        Self { prompt }
    }

    /// Human-readable prompt text for a capability request.
    pub fn prompt_message(capability: Capability) -> &'static str {
        match capability {
            Capability::Audio => "This website wants to use your microphone. Do you allow it?",
            Capability::Video => "This website wants to use your camera. Do you allow it?",
            Capability::AudioVideo => {
                "This website wants to use both your microphone and camera. Do you allow it?"
            }
        }
    }

    /// Resolve one capability request. Dismissal without a choice denies.
    pub fn request(&self, origin: &str, capability: Capability) -> PermissionDecision {
        let decision = match self.prompt.ask(origin, capability) {
            Some(true) => PermissionDecision::Grant,
            Some(false) | None => PermissionDecision::Deny,
        };

        tracing::info!(
            origin = %origin,
            capability = %capability,
            decision = ?decision,
            "permission request resolved"
        );

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct ScriptedPrompt(Option<bool>);

    impl PermissionPrompt for ScriptedPrompt {
        fn ask(&self, _origin: &str, _capability: Capability) -> Option<bool> {
            self.0
        }
    }

    #[test]
    fn test_grant() {
        let broker = PermissionBroker::new(Arc::new(ScriptedPrompt(Some(true))));
        assert_eq!(
            broker.request("https://meet.example.com", Capability::AudioVideo),
            PermissionDecision::Grant
        );
    }

    #[test]
    fn test_refusal_denies() {
        let broker = PermissionBroker::new(Arc::new(ScriptedPrompt(Some(false))));
        assert_eq!(
            broker.request("https://meet.example.com", Capability::Audio),
            PermissionDecision::Deny
        );
    }

    #[test]
    fn test_dismissal_fails_closed() {
        let broker = PermissionBroker::new(Arc::new(ScriptedPrompt(None)));
        assert_eq!(
            broker.request("https://meet.example.com", Capability::Video),
            PermissionDecision::Deny
        );
    }

    #[test]
    fn test_prompt_messages_name_the_capability() {
        assert!(PermissionBroker::prompt_message(Capability::Audio).contains("microphone"));
        assert!(PermissionBroker::prompt_message(Capability::Video).contains("camera"));
        assert!(PermissionBroker::prompt_message(Capability::AudioVideo).contains("both"));
    }
}
