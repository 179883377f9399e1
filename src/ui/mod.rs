pub mod api;
pub mod article_actions;
pub mod browser;
pub mod common;
pub mod guard;
pub mod icon;
pub mod leave_guard;
pub mod markdown;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod session;

pub use guard::ProtectedRoute;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use session::{SessionContext, provide_session_context, use_session};
