//! Two-phase confirmation state for destructive actions
//!
//! Opening only records what the action would apply to. Nothing happens
//! until [`Confirmation::confirm`] hands the pending target back.

/// Pending confirmation for a target of type `T`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    pending: Option<T>,
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: Clone> Confirmation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation; replaces any earlier pending target
    pub fn open(&mut self, target: T) {
        self.pending = Some(target);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Pass `target` straight through when no confirmation is needed,
    /// otherwise hold it until the user answers
    pub fn guard(&mut self, needs_confirmation: bool, target: T) -> Option<T> {
        if needs_confirmation {
            self.open(target);
            None
        } else {
            Some(target)
        }
    }

    /// Close the prompt and return the target to act on
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_confirm() {
        let mut confirmation = Confirmation::new();
        assert!(!confirmation.is_open());

        confirmation.open(42);
        assert!(confirmation.is_open());
        assert_eq!(confirmation.pending(), Some(&42));

        assert_eq!(confirmation.confirm(), Some(42));
        assert!(!confirmation.is_open());
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn test_cancel_drops_target() {
        let mut confirmation = Confirmation::new();
        confirmation.open("draft");
        confirmation.cancel();
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn test_guard_holds_only_when_needed() {
        let mut confirmation = Confirmation::new();
        assert_eq!(confirmation.guard(false, "/dashboard"), Some("/dashboard"));
        assert!(!confirmation.is_open());

        assert_eq!(confirmation.guard(true, "/profile"), None);
        assert_eq!(confirmation.pending(), Some(&"/profile"));
        assert_eq!(confirmation.confirm(), Some("/profile"));
    }

    #[test]
    fn test_unit_target_for_account_deletion() {
        let mut confirmation = Confirmation::<()>::new();
        confirmation.open(());
        assert!(confirmation.is_open());
        confirmation.cancel();
        assert!(!confirmation.is_open());

        confirmation.open(());
        assert_eq!(confirmation.confirm(), Some(()));
        assert!(!confirmation.is_open());
    }

    #[test]
    fn test_reopen_replaces_target() {
        let mut confirmation = Confirmation::new();
        confirmation.open(1);
        confirmation.open(2);
        assert_eq!(confirmation.confirm(), Some(2));
    }
}
