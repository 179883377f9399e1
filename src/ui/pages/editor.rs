//! Article editor page
//!
//! Loads one article into an [`ArticleDraft`], tracks unsaved changes and
//! offers save, delete, copy, export and a rendered preview. Leaving with
//! unsaved changes, by the back button or the navbar, asks first; closing
//! or reloading the tab triggers the browser's own prompt.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::article::{ArticleDraft, ArticleId};
use crate::core::confirm::Confirmation;
use crate::core::error::ApiError;
use crate::core::format::word_count;
use crate::core::session::HOME_PATH;
use crate::ui::api::use_api;
use crate::ui::article_actions::{ArticleActions, ArticleSource};
use crate::ui::common::ConfirmDialog;
use crate::ui::icon::{Icon, icons};
use crate::ui::leave_guard::use_leave_guard;
use crate::ui::markdown::Markdown;
use crate::ui::notifications::{NoticeBanner, NoticeSlot};
use crate::ui::pages::dashboard::SessionExpired;

/// Actions that need the user's confirmation first
#[derive(Debug, Clone, PartialEq, Eq)]
enum Prompt {
    /// Leave for the given path, dropping unsaved edits
    Discard(String),
    Delete,
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let leave_guard = use_leave_guard();

    let article_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<ArticleId>().ok()))
    });

    let draft = RwSignal::new(None::<ArticleDraft>);
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let auth_error = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let preview = RwSignal::new(false);
    let notices = NoticeSlot::new();
    let prompt = RwSignal::new(Confirmation::<Prompt>::new());

    // Load the article whenever the id in the URL changes
    Effect::new(move |_| {
        let Some(id) = article_id.get() else {
            load_error.set(Some("Article not found".to_string()));
            loading.set(false);
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match api.article(id).await {
                Ok(article) => {
                    draft.set(Some(ArticleDraft::from_article(article)));
                    load_error.set(None);
                }
                Err(ApiError::Unauthorized) => auth_error.set(true),
                Err(ApiError::Server { status: 404, .. }) => {
                    load_error.set(Some("Article not found".to_string()));
                }
                Err(e) => load_error.set(Some(e.user_message("Failed to load the article"))),
            }
            loading.set(false);
        });
    });

    let title = draft_field(draft, |d| d.title.clone());
    let content = draft_field(draft, |d| d.content.clone());
    let video_url = draft_field(draft, |d| d.youtube_url.clone());
    let created_at =
        Signal::derive(move || draft.with(|d| d.as_ref().and_then(|d| d.created_at.clone())));

    let is_dirty = Memo::new(move |_| {
        draft.with(|d| d.as_ref().is_some_and(|d| d.has_unsaved_changes()))
    });

    let handle_save = move |_| {
        if saving.get_untracked() || !is_dirty.get_untracked() {
            return;
        }
        let Some((id, snapshot)) =
            draft.with_untracked(|d| d.as_ref().map(|d| (d.id, d.update_request())))
        else {
            return;
        };

        saving.set(true);
        spawn_local(async move {
            match api.update_article(id, &snapshot).await {
                Ok(()) => {
                    leptos::logging::log!("Saved article {}", id);
                    draft.update(|d| {
                        if let Some(d) = d {
                            d.mark_saved(&snapshot);
                        }
                    });
                    notices.success("Article saved");
                }
                Err(e) => notices.api_error(&e, "Failed to save the article"),
            }
            saving.set(false);
        });
    };

    Effect::new(move |_| leave_guard.block(is_dirty.get()));
    on_cleanup(move || leave_guard.block(false));

    // Navbar clicks intercepted while dirty
    Effect::new(move |_| {
        if let Some(to) = leave_guard.take_request() {
            prompt.update(|p| p.open(Prompt::Discard(to)));
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        let handle_unload = window_event_listener(leptos::ev::beforeunload, move |ev| {
            if is_dirty.get_untracked() {
                ev.prevent_default();
            }
        });
        on_cleanup(move || drop(handle_unload));
    }

    let go_back = move |_| {
        let target = Prompt::Discard(HOME_PATH.to_string());
        let dirty = is_dirty.get_untracked();
        if let Some(Prompt::Discard(to)) = prompt.try_update(|p| p.guard(dirty, target)).flatten() {
            navigate(&to, Default::default());
        }
    };

    let confirm_discard = Callback::new(move |_| {
        let Some(Prompt::Discard(to)) = prompt.try_update(|p| p.confirm()).flatten() else {
            return;
        };
        draft.update(|d| {
            if let Some(d) = d {
                d.discard_changes();
            }
        });
        leave_guard.block(false);
        let navigate = use_navigate();
        navigate(&to, Default::default());
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = article_id.get_untracked() else {
            return;
        };
        deleting.set(true);
        let navigate = use_navigate();
        spawn_local(async move {
            match api.delete_article(id).await {
                Ok(()) => {
                    leptos::logging::log!("Deleted article {}", id);
                    leave_guard.block(false);
                    prompt.update(|p| {
                        p.confirm();
                    });
                    navigate(
                        HOME_PATH,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(e) => {
                    prompt.update(|p| p.cancel());
                    notices.api_error(&e, "Failed to delete the article");
                }
            }
            deleting.set(false);
        });
    });

    let cancel_prompt = Callback::new(move |_| {
        if !deleting.get_untracked() {
            prompt.update(|p| p.cancel());
        }
    });

    let source = ArticleSource {
        title,
        content,
        video_url,
        created_at,
    };

    view! {
        <Title text=move || {
            let title = title.get();
            if title.trim().is_empty() {
                "Editor - BlogGen.ai".to_string()
            } else {
                format!("{} - BlogGen.ai", title)
            }
        }/>

        <main class="container">
            <div class="page-header">
                <button class="btn-secondary" on:click=go_back>
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4"/>
                    "Back to dashboard"
                </button>
                <Show when=move || draft.with(|d| d.is_some())>
                    <div class="flex items-center gap-2">
                        <Show when=move || is_dirty.get()>
                            <span class="badge-warning">"Unsaved changes"</span>
                        </Show>
                        <button
                            class="btn-danger"
                            disabled=move || deleting.get()
                            on:click=move |_| prompt.update(|p| p.open(Prompt::Delete))
                        >
                            <Icon name=icons::TRASH class="w-4 h-4"/>
                            "Delete"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || !is_dirty.get() || saving.get()
                            on:click=handle_save
                        >
                            <Icon name=icons::SAVE class="w-4 h-4"/>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </Show>
            </div>

            <NoticeBanner slot=notices/>

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
                } else if let Some(message) = load_error.get() {
                    view! {
                        <div class="empty-state">
                            <Icon name=icons::ALERT_CIRCLE class="w-8 h-8"/>
                            <p>{message}</p>
                            <A href="/dashboard" attr:class="btn-primary">"Back to dashboard"</A>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="editor-layout">
                            <div class="space-y-4">
                                <input
                                    type="text"
                                    class="input title-input"
                                    placeholder="Article title"
                                    prop:value=move || title.get()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| {
                                            if let Some(d) = d {
                                                d.title = value;
                                            }
                                        });
                                    }
                                />

                                <div class="flex items-center justify-between gap-2 flex-wrap">
                                    <div class="tabs">
                                        <button
                                            class=move || if preview.get() { "tab" } else { "tab tab-active" }
                                            on:click=move |_| preview.set(false)
                                        >
                                            <Icon name=icons::EDIT class="w-4 h-4"/>
                                            "Write"
                                        </button>
                                        <button
                                            class=move || if preview.get() { "tab tab-active" } else { "tab" }
                                            on:click=move |_| preview.set(true)
                                        >
                                            <Icon name=icons::EYE class="w-4 h-4"/>
                                            "Preview"
                                        </button>
                                    </div>
                                    <ArticleActions source=source notices=notices/>
                                </div>

                                <Show
                                    when=move || preview.get()
                                    fallback=move || view! {
                                        <textarea
                                            class="input content-input"
                                            placeholder="Write your article in Markdown..."
                                            prop:value=move || content.get()
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| {
                                                    if let Some(d) = d {
                                                        d.content = value;
                                                    }
                                                });
                                            }
                                        ></textarea>
                                    }
                                >
                                    <div class="card p-6">
                                        <Markdown content=content/>
                                    </div>
                                </Show>
                            </div>

                            <aside class="space-y-4">
                                <MetadataCard icon=icons::VIDEO label="Source video">
                                    {move || {
                                        let url = video_url.get();
                                        if url.trim().is_empty() {
                                            view! { <span>"No source video"</span> }.into_any()
                                        } else {
                                            let href = url.clone();
                                            view! {
                                                <a href=href target="_blank" rel="noopener noreferrer" class="link break-all">
                                                    {url}
                                                </a>
                                            }
                                            .into_any()
                                        }
                                    }}
                                </MetadataCard>
                                <MetadataCard icon=icons::CALENDAR label="Created">
                                    {move || draft.with(|d| d.as_ref().map(|d| d.formatted_date()).unwrap_or_default())}
                                </MetadataCard>
                                <MetadataCard icon=icons::CLOCK label="Read time">
                                    {move || draft.with(|d| d.as_ref().map(|d| d.read_time()).unwrap_or_default())}
                                    <span class="text-theme-secondary">
                                        {move || content.with(|c| format!(" ({} words)", word_count(c)))}
                                    </span>
                                </MetadataCard>
                            </aside>
                        </div>
                    }
                    .into_any()
                }
            }}

            <ConfirmDialog
                title="Discard changes?".to_string()
                message="You have unsaved changes. Leaving now will discard them.".to_string()
                is_open=Signal::derive(move || prompt.with(|p| matches!(p.pending(), Some(Prompt::Discard(_)))))
                on_confirm=confirm_discard
                on_cancel=cancel_prompt
                confirm_text="Discard".to_string()
                cancel_text="Keep editing".to_string()
                is_destructive=true
            />
            <ConfirmDialog
                title="Delete article".to_string()
                message="This article will be permanently deleted. This cannot be undone.".to_string()
                is_open=Signal::derive(move || prompt.with(|p| p.pending() == Some(&Prompt::Delete)))
                on_confirm=confirm_delete
                on_cancel=cancel_prompt
                confirm_text="Delete".to_string()
                is_destructive=true
                busy=deleting
            />
        </main>
    }
}

fn draft_field(
    draft: RwSignal<Option<ArticleDraft>>,
    get: fn(&ArticleDraft) -> String,
) -> Signal<String> {
    Signal::derive(move || draft.with(|d| d.as_ref().map(get).unwrap_or_default()))
}

#[component]
fn MetadataCard(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card p-4">
            <div class="flex items-center gap-2 text-theme-secondary text-sm mb-1">
                <Icon name=icon class="w-4 h-4"/>
                {label}
            </div>
            <div class="text-theme-primary">{children()}</div>
        </div>
    }
}
