//! Landing page with the generate form
//!
//! Paste a YouTube link, get an article back, then copy it, export it or
//! open it in the editor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::article::{GeneratedArticle, editor_path};
use crate::core::error::ApiError;
use crate::core::session::LOGIN_PATH;
use crate::core::validation::validate_video_url;
use crate::ui::api::use_api;
use crate::ui::article_actions::{ArticleActions, ArticleSource};
use crate::ui::common::ErrorMessage;
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;
use crate::ui::notifications::{NoticeBanner, NoticeSlot};
use crate::ui::pages::dashboard::SessionExpired;
use crate::ui::session::use_session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();

    let video_url = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);
    let session_expired = RwSignal::new(false);
    let generated = RwSignal::new(None::<GeneratedArticle>);
    // Submitted URL, kept for the export metadata
    let source_url = RwSignal::new(String::new());
    let notices = NoticeSlot::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if generating.get_untracked() {
            return;
        }

        let url = match validate_video_url(&video_url.get_untracked()) {
            Ok(url) => url,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        if !session.is_authenticated() {
            navigate(LOGIN_PATH, Default::default());
            return;
        }

        error.set(None);
        session_expired.set(false);
        generating.set(true);
        spawn_local(async move {
            match api.generate(&url).await {
                Ok(article) => {
                    leptos::logging::log!("Generated article {}", article.id);
                    source_url.set(url);
                    generated.set(Some(article));
                }
                Err(ApiError::Unauthorized) => {
                    error.set(None);
                    session_expired.set(true);
                }
                Err(e) => {
                    error.set(Some(e.user_message("Failed to generate the article")));
                }
            }
            generating.set(false);
        });
    };

    let source = ArticleSource {
        title: Signal::derive(move || {
            generated.with(|g| g.as_ref().map(|a| a.title.clone()).unwrap_or_default())
        }),
        content: Signal::derive(move || {
            generated.with(|g| g.as_ref().map(|a| a.content.clone()).unwrap_or_default())
        }),
        video_url: source_url.into(),
        created_at: Signal::derive(|| None),
    };

    view! {
        <Title text="BlogGen.ai - Turn YouTube videos into blog posts"/>
        <Meta
            name="description"
            content="Paste a YouTube link and get a ready-to-publish, SEO-friendly blog article."
        />

        <section class="hero">
            <h1 class="hero-title">
                "Turn any YouTube video into a "
                <span class="brand-accent">"blog post"</span>
            </h1>
            <p class="hero-subtitle">
                "Paste a link. BlogGen transcribes the video and writes a structured, SEO-friendly article you can edit and export."
            </p>

            <form class="generate-form" on:submit=on_submit>
                <div class="input-with-icon">
                    <Icon name=icons::VIDEO class="w-5 h-5"/>
                    <input
                        type="url"
                        name="youtube_url"
                        placeholder="https://www.youtube.com/watch?v=..."
                        class="input"
                        prop:value=move || video_url.get()
                        on:input=move |ev| {
                            video_url.set(event_target_value(&ev));
                            error.set(None);
                        }
                        disabled=move || generating.get()
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || generating.get()>
                    {move || {
                        if generating.get() {
                            view! {
                                <Icon name=icons::LOADER class="w-4 h-4 animate-spin"/>
                                <span>"Generating..."</span>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Icon name=icons::SPARKLES class="w-4 h-4"/>
                                <span>"Generate"</span>
                            }
                            .into_any()
                        }
                    }}
                </button>
            </form>
            <div class="mt-3">
                <ErrorMessage error=error/>
            </div>
            <Show when=move || session_expired.get()>
                <SessionExpired/>
            </Show>
            <Show when=move || generating.get()>
                <p class="text-theme-secondary mt-4">
                    "This can take a minute for longer videos."
                </p>
            </Show>
        </section>

        {move || {
            generated
                .get()
                .map(|article| {
                    let path = editor_path(article.id);
                    view! {
                        <section class="container-narrow">
                            <div class="card">
                                <div class="card-header">
                                    <h2 class="title-lg">{article.title.clone()}</h2>
                                    <A href=path attr:class="btn-primary">
                                        <Icon name=icons::EDIT class="w-4 h-4"/>
                                        "Open in editor"
                                    </A>
                                </div>
                                <div class="p-6 space-y-4">
                                    <NoticeBanner slot=notices/>
                                    <ArticleActions source=source notices=notices/>
                                    <Markdown content=source.content/>
                                </div>
                            </div>
                        </section>
                    }
                })
        }}
    }
}
