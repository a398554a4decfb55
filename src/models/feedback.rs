use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// Single-slot transient status message. At most one message is visible at a
/// time and at most one dismiss deadline is pending; showing a new message
/// replaces both.
#[derive(Debug, Default)]
pub struct Feedback {
    text: String,
    severity: Severity,
    visible: bool,
    dismiss_at: Option<Instant>,
}

impl Feedback {
    pub fn show(&mut self, text: String, severity: Severity) {
        self.text = text;
        self.severity = severity;
        self.visible = true;
        self.dismiss_at = None;
    }

    pub fn schedule_dismiss(&mut self, after: Duration) {
        self.dismiss_at = Some(Instant::now() + after);
    }

    /// Hides the message. The text is stale once hidden and is not cleared.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.dismiss_at = None;
    }

    /// Applies an expired dismiss deadline. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        if matches!(self.dismiss_at, Some(at) if at <= now) {
            self.dismiss();
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_makes_message_visible() {
        let mut feedback = Feedback::default();
        assert!(!feedback.visible());

        feedback.show("Signed up".to_owned(), Severity::Success);
        assert!(feedback.visible());
        assert_eq!(feedback.text(), "Signed up");
        assert_eq!(feedback.severity(), Severity::Success);
    }

    #[test]
    fn latest_message_wins_and_drops_pending_deadline() {
        let mut feedback = Feedback::default();
        feedback.show("first".to_owned(), Severity::Success);
        feedback.schedule_dismiss(Duration::from_secs(5));
        assert!(feedback.dismiss_at().is_some());

        feedback.show("second".to_owned(), Severity::Error);
        assert!(feedback.visible());
        assert_eq!(feedback.text(), "second");
        assert_eq!(feedback.severity(), Severity::Error);
        // The old deadline must not dismiss the new message.
        assert_eq!(feedback.dismiss_at(), None);

        feedback.schedule_dismiss(Duration::from_secs(3));
        assert!(feedback.dismiss_at().is_some());
    }

    #[test]
    fn tick_dismisses_only_after_the_deadline() {
        let mut feedback = Feedback::default();
        feedback.show("bye".to_owned(), Severity::Success);
        feedback.schedule_dismiss(Duration::from_secs(3));
        let deadline = feedback.dismiss_at().unwrap();

        feedback.tick(deadline - Duration::from_millis(1));
        assert!(feedback.visible());

        feedback.tick(deadline);
        assert!(!feedback.visible());
        assert_eq!(feedback.dismiss_at(), None);
        // Text survives dismissal; only visibility changes.
        assert_eq!(feedback.text(), "bye");
    }

    #[test]
    fn rescheduling_supersedes_the_previous_deadline() {
        let mut feedback = Feedback::default();
        feedback.show("msg".to_owned(), Severity::Error);
        feedback.schedule_dismiss(Duration::from_secs(3));
        let first = feedback.dismiss_at().unwrap();

        feedback.schedule_dismiss(Duration::from_secs(600));
        feedback.tick(first + Duration::from_secs(5));
        assert!(feedback.visible());
    }
}
