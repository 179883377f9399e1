//! Domain models and pure logic: article records, export, formatting,
//! session semantics and error taxonomy

pub mod article;
pub mod config;
pub mod confirm;
pub mod error;
pub mod export;
pub mod format;
pub mod notice;
pub mod profile;
pub mod session;
pub mod validation;
#[cfg(test)]
mod tests;

pub use article::{Article, ArticleCard, ArticleDraft, ArticleId, GeneratedArticle};
pub use error::{ApiError, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use profile::Profile;
