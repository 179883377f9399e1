#[cfg(test)]
mod tests {
    use crate::core::article::{Article, ArticleDraft, GeneratedArticle, editor_path, filter_by_title};
    use crate::core::confirm::Confirmation;
    use crate::core::error::{ApiError, SESSION_EXPIRED};
    use crate::core::export::{ExportInput, export_html, render_markdown, seo_summary};
    use crate::core::session::memory::MemoryStore;
    use crate::core::notice::{Notice, NoticeKind};
    use crate::core::session::{GuardDecision, HOME_PATH, LOGIN_PATH, SessionFlag};

    fn saved(id: i64, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            content: format!("# {}\n\nBody of {}", title, id),
            youtube_url: "https://youtu.be/abc123".to_string(),
            created_at: Some("2024-10-24T12:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_generate_then_open_in_editor() {
        let response: GeneratedArticle =
            serde_json::from_str(r##"{"id": 42, "title": "T", "content": "# H\nBody"}"##).unwrap();
        assert_eq!(editor_path(response.id), "/blog/42");

        let loaded = Article {
            id: response.id,
            title: response.title.clone(),
            content: response.content.clone(),
            youtube_url: "https://youtu.be/abc123".to_string(),
            created_at: None,
        };
        let draft = ArticleDraft::from_article(loaded);
        assert_eq!(draft.title, "T");
        assert!(render_markdown(&draft.content).contains("<h1>H</h1>"));
        assert!(!draft.has_unsaved_changes());
    }

    #[test]
    fn test_dashboard_search_scenario() {
        let cards: Vec<_> = ["How AI is Changing Web Development Forever", "React 19 Hooks", "Python vs JS"]
            .iter()
            .enumerate()
            .map(|(i, title)| saved(i as i64, title).to_card())
            .collect();

        let filtered = filter_by_title(&cards, "react");
        let titles: Vec<_> = filtered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["React 19 Hooks"]);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut cards: Vec<_> = (1..=3).map(|id| saved(id, "post").to_card()).collect();
        let mut confirmation = Confirmation::new();

        // Clicking delete only records the target
        confirmation.open(2);
        assert_eq!(cards.len(), 3);

        // Cancel leaves the list alone
        confirmation.cancel();
        assert_eq!(cards.len(), 3);

        confirmation.open(3);
        if let Some(id) = confirmation.confirm() {
            crate::core::article::remove_card(&mut cards, id);
        }
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_unauthorized_response_clears_session_and_redirects() {
        let flag = SessionFlag::new(MemoryStore::default());
        flag.set();
        assert_eq!(flag.decision(), GuardDecision::Admit);

        let result: Result<Vec<Article>, ApiError> =
            Err(ApiError::from_response(401, "").unwrap());
        assert!(flag.observe(&result));
        assert_eq!(flag.decision(), GuardDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_unauthorized_save_keeps_edits_and_offers_login() {
        let flag = SessionFlag::new(MemoryStore::default());
        flag.set();
        let mut draft = ArticleDraft::from_article(saved(5, "Draft"));
        draft.title.push_str(" v2");

        let result: Result<(), ApiError> = Err(ApiError::from_response(401, "").unwrap());
        assert!(flag.observe(&result));
        let notice = Notice::from_api_error(&result.unwrap_err(), "Failed to save the article");

        assert_eq!(notice.kind, NoticeKind::SessionExpired);
        assert_eq!(notice.message, SESSION_EXPIRED);
        assert!(notice.needs_login());
        assert!(draft.has_unsaved_changes());
    }

    #[test]
    fn test_leaving_dirty_editor_asks_first() {
        let mut draft = ArticleDraft::from_article(saved(6, "Clean"));
        let mut prompt = Confirmation::new();

        // Clean drafts leave immediately
        assert_eq!(
            prompt.guard(draft.has_unsaved_changes(), "/profile".to_string()),
            Some("/profile".to_string())
        );

        draft.content.push_str("
Edit");
        assert_eq!(prompt.guard(draft.has_unsaved_changes(), "/profile".to_string()), None);

        // A later click replaces the held destination
        prompt.guard(draft.has_unsaved_changes(), HOME_PATH.to_string());
        assert_eq!(prompt.confirm(), Some(HOME_PATH.to_string()));
        draft.discard_changes();
        assert!(!draft.has_unsaved_changes());
    }

    #[test]
    fn test_dirty_flag_across_load_edit_save() {
        let mut draft = ArticleDraft::from_article(saved(9, "Original"));
        assert!(!draft.has_unsaved_changes());

        draft.content.push_str("\nMore");
        assert!(draft.has_unsaved_changes());

        let request = draft.update_request();
        draft.mark_saved(&request);
        assert!(!draft.has_unsaved_changes());
    }

    #[test]
    fn test_export_of_loaded_article() {
        let article = saved(4, "React 19 Hooks");
        let doc = export_html(&ExportInput {
            content: &article.content,
            title: &article.title,
            video_url: Some(&article.youtube_url),
            created_at: article.created_at.as_deref(),
        });
        assert!(doc.contains("<title>React 19 Hooks</title>"));
        assert!(doc.contains("October 24, 2024"));
        assert!(doc.contains("https://img.youtube.com/vi/abc123/maxresdefault.jpg"));
    }

    #[test]
    fn test_summary_property_over_samples() {
        let long = "long *word* ".repeat(80);
        let samples: [&str; 6] = [
            "# A\n## B\n### C",
            "**bold** *em* ***both*** `tick` ``double``",
            "[text](http://x) ![img](http://y) [[n](a)](b)",
            "```\ncode # * `\n```\nafter",
            "# C# and F# *are* languages",
            long.as_str(),
        ];
        for sample in samples {
            let summary = seo_summary(sample);
            assert!(!summary.contains('#'), "{summary:?}");
            assert!(!summary.contains('*'), "{summary:?}");
            assert!(!summary.contains('`'), "{summary:?}");
            assert!(!summary.contains("]("), "{summary:?}");
            assert!(summary.chars().count() <= 163, "{summary:?}");
        }
    }
}
