//! Session context for the whole component tree
//!
//! This module provides a reactive session state that:
//! - Mirrors the `isAuthenticated` flag kept in localStorage
//! - Confirms a stored flag once with `GET /api/user/me`
//! - Drops the session when any authenticated call comes back 401

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::error::ApiError;
use crate::core::profile::Profile;
#[cfg(not(feature = "ssr"))]
use crate::core::session::SESSION_FLAG_KEY;
use crate::core::session::{FlagStore, SessionFlag};

/// localStorage-backed flag store. A no-op during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(feature = "ssr"))]
impl FlagStore for LocalStorage {
    fn read(&self) -> Option<String> {
        local_storage()?.get_item(SESSION_FLAG_KEY).ok()?
    }

    fn write(&self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(SESSION_FLAG_KEY, value);
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_FLAG_KEY);
        }
    }
}

#[cfg(feature = "ssr")]
impl FlagStore for LocalStorage {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&self, _value: &str) {}

    fn remove(&self) {}
}

fn stored_flag() -> SessionFlag<LocalStorage> {
    SessionFlag::new(LocalStorage)
}

/// Session state shared by the navbar, the route guard and the API client
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// `None` until the browser has read localStorage
    pub flag: RwSignal<Option<bool>>,
    /// Profile from the last successful session check
    pub profile: RwSignal<Option<Profile>>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.flag.get() == Some(true)
    }

    /// Record a successful login
    pub fn mark_authenticated(&self) {
        stored_flag().set();
        self.flag.set(Some(true));
    }

    /// Forget the session: logout, 401 or account deletion
    pub fn expire(&self) {
        stored_flag().clear();
        self.flag.set(Some(false));
        self.profile.set(None);
    }

    /// Re-read the stored flag, e.g. when another tab logged out
    pub fn reload(&self) -> bool {
        let stored = stored_flag().is_set();
        if self.flag.get_untracked() != Some(stored) {
            self.flag.set(Some(stored));
        }
        stored
    }

    /// Central 401 handling for authenticated calls
    pub fn observe<T>(&self, result: &Result<T, ApiError>) {
        if stored_flag().observe(result) {
            leptos::logging::warn!("Session expired, clearing local session flag");
            self.flag.set(Some(false));
            self.profile.set(None);
        }
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Unknown on both server and client until hydration is done
    let ctx = SessionContext {
        flag: RwSignal::new(None),
        profile: RwSignal::new(None),
    };
    provide_context(ctx);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if !ctx.reload() {
            return;
        }
        // The flag is only a hint; ask the backend once
        spawn_local(async move {
            let api = crate::ui::api::ApiClient::new(ctx);
            match api.profile().await {
                Ok(profile) => ctx.profile.set(Some(profile)),
                Err(ApiError::Unauthorized) => {}
                Err(e) => leptos::logging::warn!("Session check failed: {}", e),
            }
        });
    });

    ctx
}

/// Get session context from the component tree
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
