//! Article records mirrored from the backend and the client-side state
//! derived from them.

use serde::{Deserialize, Serialize};

use crate::core::error::{ApiError, decode};

use crate::core::export::thumbnail_url;
use crate::core::format::{format_date, read_time};

/// Backend identifier of a blog post
pub type ArticleId = i64;

/// Blog post as returned by `GET /api/blog-posts` and `GET /api/blog-posts/:id/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub youtube_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Article {
    /// Display record for list views
    pub fn to_card(&self) -> ArticleCard {
        ArticleCard {
            id: self.id,
            title: self.title.clone(),
            thumbnail: thumbnail_url(&self.youtube_url),
            date: format_date(self.created_at.as_deref()),
            read_time: read_time(&self.content),
            youtube_url: self.youtube_url.clone(),
        }
    }

    /// Path of the editor view for this article
    pub fn editor_path(&self) -> String {
        editor_path(self.id)
    }
}

pub fn editor_path(id: ArticleId) -> String {
    format!("/blog/{}", id)
}

/// Dashboard card with derived display fields
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub id: ArticleId,
    pub title: String,
    pub thumbnail: Option<String>,
    pub date: String,
    pub read_time: String,
    pub youtube_url: String,
}

/// Case-insensitive substring filter over card titles.
///
/// An empty or whitespace-only query keeps everything.
pub fn filter_by_title(cards: &[ArticleCard], query: &str) -> Vec<ArticleCard> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return cards.to_vec();
    }
    cards
        .iter()
        .filter(|card| card.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Remove the card with `id`; returns whether anything was removed
pub fn remove_card(cards: &mut Vec<ArticleCard>, id: ArticleId) -> bool {
    let before = cards.len();
    cards.retain(|card| card.id != id);
    cards.len() != before
}

/// `POST /api/generate-blog` body
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub youtube_url: String,
}

/// `POST /api/generate-blog` success body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedArticle {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// The generate endpoint may answer 2xx with `{"error": "..."}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Article(GeneratedArticle),
    Failed { error: String },
}

/// Interpret a successful generate response body
pub fn parse_generate_response(body: &str) -> Result<GeneratedArticle, ApiError> {
    match decode::<GenerateResponse>(body)? {
        GenerateResponse::Article(article) => Ok(article),
        GenerateResponse::Failed { error } => Err(ApiError::Server {
            status: 200,
            message: Some(error),
        }),
    }
}

/// `PUT /api/blog-posts/:id/` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateArticle {
    pub title: String,
    pub content: String,
    pub youtube_url: String,
}

/// Editable copy of an article with the values last persisted on the server
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleDraft {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub youtube_url: String,
    pub created_at: Option<String>,
    original_title: String,
    original_content: String,
}

impl ArticleDraft {
    pub fn from_article(article: Article) -> Self {
        Self {
            id: article.id,
            original_title: article.title.clone(),
            original_content: article.content.clone(),
            title: article.title,
            content: article.content,
            youtube_url: article.youtube_url,
            created_at: article.created_at,
        }
    }

    /// True when title or content differ from the last saved values
    pub fn has_unsaved_changes(&self) -> bool {
        self.title != self.original_title || self.content != self.original_content
    }

    /// Snapshot sent to the backend on save
    pub fn update_request(&self) -> UpdateArticle {
        UpdateArticle {
            title: self.title.clone(),
            content: self.content.clone(),
            youtube_url: self.youtube_url.clone(),
        }
    }

    /// Advance the saved copies to what was actually persisted.
    ///
    /// Edits made while the save was in flight stay dirty.
    pub fn mark_saved(&mut self, saved: &UpdateArticle) {
        self.original_title = saved.title.clone();
        self.original_content = saved.content.clone();
    }

    /// Throw away edits and go back to the saved values
    pub fn discard_changes(&mut self) {
        self.title = self.original_title.clone();
        self.content = self.original_content.clone();
    }

    pub fn read_time(&self) -> String {
        read_time(&self.content)
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.created_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: ArticleId, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            content: "Some content here".to_string(),
            youtube_url: format!("https://www.youtube.com/watch?v=vid{}", id),
            created_at: Some("2024-10-22T09:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_deserialize_list_record() {
        let json = r#"{"id": 7, "title": "T", "content": "C", "youtube_url": "https://youtu.be/x", "created_at": "2024-10-20T00:00:00Z"}"#;
        let parsed: Article = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.created_at.as_deref(), Some("2024-10-20T00:00:00Z"));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let parsed: Article = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(parsed.title.is_empty());
        assert!(parsed.created_at.is_none());
    }

    #[test]
    fn test_parse_generate_response() {
        let ok = parse_generate_response(r##"{"id": 42, "title": "T", "content": "# H"}"##).unwrap();
        assert_eq!(ok.id, 42);
        assert_eq!(ok.title, "T");

        let failed = parse_generate_response(r#"{"error": "Video too long"}"#).unwrap_err();
        assert_eq!(failed.user_message("fallback"), "Video too long");

        assert!(matches!(
            parse_generate_response("not json"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_to_card_derives_display_fields() {
        let card = article(3, "Card").to_card();
        assert_eq!(card.id, 3);
        assert_eq!(card.date, "October 22, 2024");
        assert_eq!(card.read_time, "1 min read");
        assert_eq!(
            card.thumbnail.as_deref(),
            Some("https://img.youtube.com/vi/vid3/maxresdefault.jpg")
        );
    }

    #[test]
    fn test_filter_by_title_case_insensitive() {
        let cards: Vec<_> = ["How AI is Changing Web Development", "React 19 Hooks", "Python vs JS"]
            .iter()
            .enumerate()
            .map(|(i, t)| article(i as ArticleId, t).to_card())
            .collect();

        let filtered = filter_by_title(&cards, "REACT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "React 19 Hooks");

        assert_eq!(filter_by_title(&cards, "").len(), 3);
        assert_eq!(filter_by_title(&cards, "   ").len(), 3);
        assert!(filter_by_title(&cards, "rust").is_empty());
    }

    #[test]
    fn test_remove_card() {
        let mut cards = vec![article(1, "a").to_card(), article(2, "b").to_card()];
        assert!(remove_card(&mut cards, 1));
        assert_eq!(cards.len(), 1);
        assert!(!remove_card(&mut cards, 42));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_draft_clean_after_load() {
        let draft = ArticleDraft::from_article(article(1, "Title"));
        assert!(!draft.has_unsaved_changes());
    }

    #[test]
    fn test_draft_dirty_after_edit_and_clean_after_revert() {
        let mut draft = ArticleDraft::from_article(article(1, "Title"));
        draft.title.push('!');
        assert!(draft.has_unsaved_changes());
        draft.title.pop();
        assert!(!draft.has_unsaved_changes());

        draft.content = "changed".to_string();
        assert!(draft.has_unsaved_changes());
    }

    #[test]
    fn test_draft_mark_saved_clears_dirty_flag() {
        let mut draft = ArticleDraft::from_article(article(1, "Title"));
        draft.title = "New title".to_string();
        let request = draft.update_request();
        draft.mark_saved(&request);
        assert!(!draft.has_unsaved_changes());
        assert_eq!(draft.title, "New title");
    }

    #[test]
    fn test_draft_edits_during_save_stay_dirty() {
        let mut draft = ArticleDraft::from_article(article(1, "Title"));
        draft.content = "first".to_string();
        let request = draft.update_request();
        draft.content = "second".to_string();
        draft.mark_saved(&request);
        assert!(draft.has_unsaved_changes());
    }

    #[test]
    fn test_draft_discard_changes() {
        let mut draft = ArticleDraft::from_article(article(1, "Title"));
        draft.title = "x".to_string();
        draft.content = "y".to_string();
        draft.discard_changes();
        assert_eq!(draft.title, "Title");
        assert!(!draft.has_unsaved_changes());
    }

    #[test]
    fn test_update_request_serializes_expected_fields() {
        let draft = ArticleDraft::from_article(article(5, "T"));
        let value = serde_json::to_value(draft.update_request()).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["youtube_url"], "https://www.youtube.com/watch?v=vid5");
        assert!(value.get("id").is_none());
    }
}
