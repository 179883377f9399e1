//! Inline notice banners for save, profile and generation results
//!
//! Success and error notices dismiss themselves after a delay; a
//! session-expired notice stays with its login link. A pending dismissal
//! never clears a newer notice.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::error::ApiError;
use crate::core::notice::{Notice, NoticeKind};
use crate::core::session::LOGIN_PATH;
use crate::ui::icon::{Icon, icons};

/// Notice slot shared between a page and its banner
#[derive(Clone, Copy)]
pub struct NoticeSlot {
    current: RwSignal<Option<Notice>>,
    generation: RwSignal<u64>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Show a notice, replacing the current one
    pub fn show(&self, notice: Notice) {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        let delay = notice.dismiss_after_ms();
        self.current.set(Some(notice));

        if let Some(ms) = delay {
            let slot = *self;
            after(ms, move || {
                if slot.generation.get_untracked() == generation {
                    slot.current.set(None);
                }
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Notice::error(message));
    }

    /// Report a failed action; a 401 shows the log-in prompt instead
    pub fn api_error(&self, error: &ApiError, fallback: &str) {
        self.show(Notice::from_api_error(error, fallback));
    }

    pub fn clear(&self) {
        self.generation.update(|g| *g += 1);
        self.current.set(None);
    }

    pub fn get(&self) -> Option<Notice> {
        self.current.get()
    }
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Raise `flag` for `ms` milliseconds, e.g. "Copied!" feedback
pub fn flash(flag: RwSignal<bool>, ms: u32) {
    flag.set(true);
    after(ms, move || flag.set(false));
}

/// Run `f` once after `ms` milliseconds in the browser
#[cfg(not(feature = "ssr"))]
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::spawn_local;

    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}

#[cfg(feature = "ssr")]
pub fn after(_ms: u32, _f: impl FnOnce() + 'static) {}

/// Banner for the notice currently held by `slot`
#[component]
pub fn NoticeBanner(slot: NoticeSlot) -> impl IntoView {
    view! {
        {move || {
            slot.get().map(|notice| {
                let (container_class, icon) = match notice.kind {
                    NoticeKind::Success => ("notice notice-success", icons::CHECK),
                    NoticeKind::Error | NoticeKind::SessionExpired => {
                        ("notice notice-error", icons::ALERT_CIRCLE)
                    }
                };
                let needs_login = notice.needs_login();
                view! {
                    <div class=container_class role="status">
                        <Icon name=icon class="icon-text"/>
                        <span class="flex-1">{notice.message}</span>
                        <Show when=move || needs_login>
                            <A href=LOGIN_PATH attr:class="btn-primary">"Log in"</A>
                        </Show>
                        <button
                            class="btn-icon"
                            title="Dismiss"
                            aria-label="Dismiss notice"
                            on:click=move |_| slot.clear()
                        >
                            <Icon name=icons::X class="w-4 h-4"/>
                        </button>
                    </div>
                }
            })
        }}
    }
}
