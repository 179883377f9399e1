//! Copy and export buttons shared by the generate view and the editor

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::export::{ExportInput, export_html, html_filename, markdown_filename};
use crate::core::notice::COPY_FEEDBACK_MS;
use crate::ui::browser::{HTML_MIME, MARKDOWN_MIME, copy_to_clipboard, download_file};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NoticeSlot, flash};

/// What the buttons act on, read at click time
#[derive(Clone, Copy)]
pub struct ArticleSource {
    pub title: Signal<String>,
    pub content: Signal<String>,
    pub video_url: Signal<String>,
    pub created_at: Signal<Option<String>>,
}

#[component]
pub fn ArticleActions(
    source: ArticleSource,
    /// Where copy/export failures are reported
    notices: NoticeSlot,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let handle_copy = move |_| {
        let content = source.content.get_untracked();
        spawn_local(async move {
            match copy_to_clipboard(&content).await {
                Ok(()) => flash(copied, COPY_FEEDBACK_MS),
                Err(e) => {
                    leptos::logging::warn!("{}", e);
                    notices.error("Could not copy to the clipboard");
                }
            }
        });
    };

    let handle_export_html = move |_| {
        let title = source.title.get_untracked();
        let content = source.content.get_untracked();
        let video_url = source.video_url.get_untracked();
        let created_at = source.created_at.get_untracked();

        let document = export_html(&ExportInput {
            content: &content,
            title: &title,
            video_url: Some(video_url.as_str()).filter(|url| !url.trim().is_empty()),
            created_at: created_at.as_deref(),
        });
        if let Err(e) = download_file(&html_filename(&title), &document, HTML_MIME) {
            leptos::logging::warn!("HTML export failed: {}", e);
            notices.error("Could not export the article");
        }
    };

    let handle_export_markdown = move |_| {
        let title = source.title.get_untracked();
        let content = source.content.get_untracked();
        if let Err(e) = download_file(&markdown_filename(&title), &content, MARKDOWN_MIME) {
            leptos::logging::warn!("Markdown export failed: {}", e);
            notices.error("Could not export the article");
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-2">
            <button class="btn-secondary" on:click=handle_copy>
                {move || {
                    if copied.get() {
                        view! {
                            <Icon name=icons::CHECK class="w-4 h-4"/>
                            <span>"Copied!"</span>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Icon name=icons::COPY class="w-4 h-4"/>
                            <span>"Copy Markdown"</span>
                        }
                        .into_any()
                    }
                }}
            </button>
            <button class="btn-secondary" on:click=handle_export_html>
                <Icon name=icons::DOWNLOAD class="w-4 h-4"/>
                "Export HTML"
            </button>
            <button class="btn-secondary" on:click=handle_export_markdown>
                <Icon name=icons::FILE_TEXT class="w-4 h-4"/>
                "Export Markdown"
            </button>
        </div>
    }
}
