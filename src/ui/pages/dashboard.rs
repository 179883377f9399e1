//! Dashboard page component
//!
//! Lists the user's articles with search and two-phase delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::article::{ArticleCard, ArticleId, editor_path, filter_by_title, remove_card};
use crate::core::confirm::Confirmation;
use crate::core::error::{ApiError, SESSION_EXPIRED};
use crate::ui::api::use_api;
use crate::ui::common::ConfirmDialog;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NoticeBanner, NoticeSlot};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();

    let cards = RwSignal::new(Vec::<ArticleCard>::new());
    let search_query = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let auth_error = RwSignal::new(false);
    let notices = NoticeSlot::new();

    let confirmation = RwSignal::new(Confirmation::<ArticleId>::new());
    let deleting = RwSignal::new(false);

    // Load articles once
    Effect::new(move |_| {
        spawn_local(async move {
            match api.list_articles().await {
                Ok(articles) => {
                    cards.set(articles.iter().map(|a| a.to_card()).collect());
                    auth_error.set(false);
                }
                Err(ApiError::Unauthorized) => auth_error.set(true),
                Err(e) => error.set(Some(e.user_message("Failed to load your articles"))),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        cards.with(|cards| filter_by_title(cards, &query))
    });

    let request_delete = Callback::new(move |id: ArticleId| {
        confirmation.update(|c| c.open(id));
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = confirmation.with_untracked(|c| c.pending().copied()) else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api.delete_article(id).await {
                Ok(()) => {
                    leptos::logging::log!("Deleted article {}", id);
                    cards.update(|cards| {
                        remove_card(cards, id);
                    });
                    notices.success("Article deleted");
                }
                Err(ApiError::Unauthorized) => auth_error.set(true),
                Err(e) => notices.error(e.user_message("Failed to delete the article")),
            }
            confirmation.update(|c| {
                c.confirm();
            });
            deleting.set(false);
        });
    });

    let cancel_delete = Callback::new(move |_| {
        if !deleting.get_untracked() {
            confirmation.update(|c| c.cancel());
        }
    });

    view! {
        <Title text="My articles - BlogGen.ai"/>

        <main class="container">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"My articles"</h1>
                    <p class="text-theme-secondary">
                        {move || {
                            let count = cards.with(|c| c.len());
                            match count {
                                1 => "1 article".to_string(),
                                n => format!("{} articles", n),
                            }
                        }}
                    </p>
                </div>
                <A href="/" attr:class="btn-primary">
                    <Icon name=icons::PLUS class="w-4 h-4"/>
                    "New article"
                </A>
            </div>

            <NoticeBanner slot=notices/>

            <div class="input-with-icon mb-6">
                <Icon name=icons::SEARCH class="w-5 h-5"/>
                <input
                    type="search"
                    placeholder="Search by title..."
                    class="input"
                    prop:value=move || search_query.get()
                    on:input=move |ev| search_query.set(event_target_value(&ev))
                />
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="page-loading">
                            <Icon name=icons::LOADER class="w-6 h-6 animate-spin"/>
                        </div>
                    }
                    .into_any()
                } else if auth_error.get() {
                    view! { <SessionExpired/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! {
                        <div class="empty-state">
                            <Icon name=icons::ALERT_CIRCLE class="w-8 h-8"/>
                            <p>{message}</p>
                        </div>
                    }
                    .into_any()
                } else if cards.with(|c| c.is_empty()) {
                    view! {
                        <div class="empty-state">
                            <Icon name=icons::FILE_TEXT class="w-8 h-8"/>
                            <h2 class="title-lg">"No articles yet"</h2>
                            <p>"Generate your first article from a YouTube video."</p>
                            <A href="/" attr:class="btn-primary">"Generate an article"</A>
                        </div>
                    }
                    .into_any()
                } else if filtered.with(|f| f.is_empty()) {
                    view! {
                        <div class="empty-state">
                            <Icon name=icons::SEARCH class="w-8 h-8"/>
                            <p>{move || format!("No articles match \"{}\"", search_query.get().trim())}</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || filtered.get()
                                key=|card| card.id
                                children=move |card| view! {
                                    <ArticleCardView card=card on_delete=request_delete/>
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            <ConfirmDialog
                title="Delete article".to_string()
                message="This article will be permanently deleted. This cannot be undone.".to_string()
                is_open=Signal::derive(move || confirmation.with(|c| c.is_open()))
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                confirm_text="Delete".to_string()
                is_destructive=true
                busy=deleting
            />
        </main>
    }
}

/// Message shown when the backend rejected the session
#[component]
pub fn SessionExpired() -> impl IntoView {
    view! {
        <div class="empty-state">
            <Icon name=icons::ALERT_CIRCLE class="w-8 h-8"/>
            <p>{SESSION_EXPIRED}</p>
            <A href="/login" attr:class="btn-primary">"Log in"</A>
        </div>
    }
}

#[component]
fn ArticleCardView(card: ArticleCard, on_delete: Callback<ArticleId>) -> impl IntoView {
    let id = card.id;
    let path = editor_path(id);

    view! {
        <article class="article-card">
            <A href=path.clone() attr:class="block">
                {match card.thumbnail {
                    Some(src) => view! {
                        <img class="article-thumb" src=src alt="" loading="lazy"/>
                    }
                    .into_any(),
                    None => view! {
                        <div class="article-thumb article-thumb-empty">
                            <Icon name=icons::VIDEO class="w-8 h-8"/>
                        </div>
                    }
                    .into_any(),
                }}
            </A>
            <div class="p-4 space-y-2">
                <A href=path.clone() attr:class="article-card-title">
                    {if card.title.trim().is_empty() { "Untitled".to_string() } else { card.title }}
                </A>
                <div class="article-meta">
                    <span class="flex items-center gap-1">
                        <Icon name=icons::CALENDAR class="w-4 h-4"/>
                        {card.date}
                    </span>
                    <span class="flex items-center gap-1">
                        <Icon name=icons::CLOCK class="w-4 h-4"/>
                        {card.read_time}
                    </span>
                </div>
                <div class="flex items-center justify-end gap-2">
                    <A href=path attr:class="btn-icon" attr:title="Edit">
                        <Icon name=icons::EDIT class="w-4 h-4"/>
                    </A>
                    <button
                        class="btn-icon"
                        title="Delete"
                        aria-label="Delete article"
                        on:click=move |_| on_delete.run(id)
                    >
                        <Icon name=icons::TRASH class="w-4 h-4"/>
                    </button>
                </div>
            </div>
        </article>
    }
}
