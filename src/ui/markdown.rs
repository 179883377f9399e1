//! Markdown preview component for article bodies

use leptos::prelude::*;

use crate::core::export::render_markdown;

/// Render article Markdown as HTML
///
/// Re-renders whenever `content` changes. Raw HTML in the source is
/// passed through, matching what the exported document contains.
#[component]
pub fn Markdown(
    #[prop(into)]
    content: Signal<String>,
    #[prop(default = "article-prose")]
    class: &'static str,
) -> impl IntoView {
    let html = Memo::new(move |_| content.with(|c| render_markdown(c)));

    view! {
        <div class=class inner_html=move || html.get()/>
    }
}
