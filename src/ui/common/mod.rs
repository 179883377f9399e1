//! Common reusable UI components
//!
//! Dialogs, form fields and form messages shared by several pages.

pub mod form;
pub mod message;
pub mod modal;

pub use form::FormField;
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::{BaseModal, ConfirmDialog};
