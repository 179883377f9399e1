//! Session flag semantics shared by the browser context and the route guard
//!
//! The flag only records that a session cookie is believed to exist. The
//! backend stays the authority; a 401 on any authenticated call clears it.

use crate::core::error::ApiError;

/// Local storage key of the session flag
pub const SESSION_FLAG_KEY: &str = "isAuthenticated";

/// Stored value meaning "authenticated"
pub const SESSION_FLAG_VALUE: &str = "true";

/// Where unauthenticated visitors are sent
pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands
pub const HOME_PATH: &str = "/dashboard";

/// Interpret a raw storage value
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some(SESSION_FLAG_VALUE)
}

/// What a protected route does on this navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Flag not read yet (server render, before hydration)
    Pending,
    /// Render the wrapped view
    Admit,
    /// Redirect to the login view and render nothing
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => GuardDecision::Pending,
            Some(true) => GuardDecision::Admit,
            Some(false) => GuardDecision::Redirect(LOGIN_PATH),
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, GuardDecision::Pending)
    }
}

/// Where the login view sends a visitor once the flag is set; `None`
/// after the first redirect so a repeated flag write never navigates twice
pub fn login_redirect(flag: Option<bool>, already_sent: bool) -> Option<&'static str> {
    (flag == Some(true) && !already_sent).then_some(HOME_PATH)
}

/// Key/value store the flag lives in
pub trait FlagStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn remove(&self);
}

/// Session flag on top of a [`FlagStore`]
#[derive(Debug, Clone, Default)]
pub struct SessionFlag<S> {
    store: S,
}

impl<S: FlagStore> SessionFlag<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn is_set(&self) -> bool {
        parse_flag(self.store.read().as_deref())
    }

    pub fn set(&self) {
        self.store.write(SESSION_FLAG_VALUE);
    }

    pub fn clear(&self) {
        self.store.remove();
    }

    pub fn decision(&self) -> GuardDecision {
        GuardDecision::from_flag(Some(self.is_set()))
    }

    /// Clear the flag when an authenticated call came back 401.
    ///
    /// Returns whether the session was dropped.
    pub fn observe<T>(&self, result: &Result<T, ApiError>) -> bool {
        if result.as_ref().err().is_some_and(ApiError::is_unauthorized) {
            self.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::FlagStore;

    /// In-memory store for tests
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore(pub Rc<RefCell<Option<String>>>);

    impl FlagStore for MemoryStore {
        fn read(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn write(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }

        fn remove(&self) {
            *self.0.borrow_mut() = None;
        }
    }
}
