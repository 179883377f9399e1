//! Transient success/error banners

use crate::core::error::{ApiError, SESSION_EXPIRED};

/// How long a save or profile notice stays up
pub const NOTICE_DISMISS_MS: u32 = 3_000;

/// How long the "Copied!" feedback stays up
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Delay between a successful signup and the redirect to login
pub const SIGNUP_REDIRECT_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    /// A 401 during an action; rendered with a link back to login
    SessionExpired,
}

/// A banner with its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn session_expired() -> Self {
        Self {
            kind: NoticeKind::SessionExpired,
            message: SESSION_EXPIRED.to_string(),
        }
    }

    /// Notice for a failed action; a 401 asks the user to log in again
    pub fn from_api_error(error: &ApiError, fallback: &str) -> Self {
        if error.is_unauthorized() {
            Self::session_expired()
        } else {
            Self::error(error.user_message(fallback))
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    /// Auto-dismiss delay; the session-expired notice stays so its login
    /// link remains reachable
    pub fn dismiss_after_ms(&self) -> Option<u32> {
        match self.kind {
            NoticeKind::Success | NoticeKind::Error => Some(NOTICE_DISMISS_MS),
            NoticeKind::SessionExpired => None,
        }
    }

    pub fn needs_login(&self) -> bool {
        self.kind == NoticeKind::SessionExpired
    }
}
