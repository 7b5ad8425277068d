/// Tracks hover sessions for a single tooltip host.
///
/// Every mouse-enter that shows a tooltip opens a new session with a fresh
/// generation number. A removal scheduled on mouse-leave carries the
/// generation it was scheduled for and only goes ahead when that session is
/// still the latest one and has not been re-entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipTracker {
    generation: u64,
    visible: bool,
}

impl TooltipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `message`. Returns `None` for a missing or empty
    /// message, in which case no tooltip should be created.
    pub fn enter(&mut self, message: Option<&str>) -> Option<u64> {
        message.filter(|m| !m.is_empty())?;
        self.generation += 1;
        self.visible = true;
        Some(self.generation)
    }

    /// End the visible session, returning the generation to schedule removal for.
    pub fn leave(&mut self) -> Option<u64> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(self.generation)
    }

    /// Whether a removal scheduled for `generation` should still run.
    pub fn should_remove(&self, generation: u64) -> bool {
        !self.visible && generation == self.generation
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_starts_no_session() {
        let mut tracker = TooltipTracker::new();
        assert_eq!(tracker.enter(None), None);
        assert_eq!(tracker.enter(Some("")), None);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.generation(), 0);
    }

    #[test]
    fn test_enter_leave_remove() {
        let mut tracker = TooltipTracker::new();
        let session = tracker.enter(Some("Rent")).unwrap();
        assert!(tracker.is_visible());

        assert_eq!(tracker.leave(), Some(session));
        assert!(tracker.should_remove(session));
    }

    #[test]
    fn test_leave_without_enter() {
        let mut tracker = TooltipTracker::new();
        assert_eq!(tracker.leave(), None);
    }

    #[test]
    fn test_stale_removal_does_not_touch_newer_session() {
        let mut tracker = TooltipTracker::new();
        let first = tracker.enter(Some("Groceries")).unwrap();
        let scheduled = tracker.leave().unwrap();
        assert_eq!(scheduled, first);

        // hover back in before the fade-out removal fires
        let second = tracker.enter(Some("Groceries")).unwrap();
        assert_ne!(first, second);
        assert!(!tracker.should_remove(scheduled));

        let latest = tracker.leave().unwrap();
        assert!(!tracker.should_remove(scheduled));
        assert!(tracker.should_remove(latest));
    }

    #[test]
    fn test_no_removal_while_visible() {
        let mut tracker = TooltipTracker::new();
        let session = tracker.enter(Some("Savings")).unwrap();
        assert!(!tracker.should_remove(session));
    }
}
