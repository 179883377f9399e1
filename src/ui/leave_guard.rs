//! Lets a page with unsaved edits intercept navbar navigation

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LeaveGuard {
    blocked: RwSignal<bool>,
    requested: RwSignal<Option<String>>,
}

impl LeaveGuard {
    /// Set by the page that holds unsaved edits
    pub fn block(&self, blocked: bool) {
        self.blocked.set(blocked);
        if !blocked {
            self.requested.set(None);
        }
    }

    /// Called from a link click; true when the page takes over the navigation
    pub fn intercept(&self, to: &str) -> bool {
        if self.blocked.get_untracked() {
            self.requested.set(Some(to.to_string()));
            true
        } else {
            false
        }
    }

    /// Destination of an intercepted click, consumed once
    pub fn take_request(&self) -> Option<String> {
        let to = self.requested.get()?;
        self.requested.set(None);
        Some(to)
    }
}

pub fn provide_leave_guard() {
    provide_context(LeaveGuard {
        blocked: RwSignal::new(false),
        requested: RwSignal::new(None),
    });
}

pub fn use_leave_guard() -> LeaveGuard {
    expect_context::<LeaveGuard>()
}
