//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page with the generate form
//! - Login and signup pages
//! - Dashboard (articles list)
//! - Editor page
//! - Profile page

mod dashboard;
mod editor;
mod landing;
mod login;
mod not_found;
mod profile;
mod signup;

pub use dashboard::DashboardPage;
pub use editor::EditorPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;
