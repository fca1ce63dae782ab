//! Transient feedback messages
//!
//! At most one message is visible. Each message gets a fresh id so an
//! auto-hide timer started for an older message never clears a newer one.

use fleet_core::Severity;

/// A user-visible feedback message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: u64,
    pub severity: Severity,
    pub text: String,
}

/// Holder for the single visible message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
    next_id: u64,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any visible one; returns its id
    pub fn show(&mut self, severity: Severity, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Feedback {
            id,
            severity,
            text: text.into(),
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(Severity::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(Severity::Error, text)
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    /// Hide the visible message
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the message only if it is still the one with `id`
    ///
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|f| f.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_replaces_previous() {
        let mut slot = FeedbackSlot::new();
        slot.success("Saved");
        slot.error("Failed");
        let current = slot.current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.text, "Failed");
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_message() {
        let mut slot = FeedbackSlot::new();
        let first = slot.success("Vehicle deleted");
        let second = slot.error("Could not reload vehicles");

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|f| f.id), Some(second));

        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut slot = FeedbackSlot::new();
        slot.show(Severity::Info, "Hello");
        slot.dismiss();
        assert!(slot.current().is_none());
    }
}
