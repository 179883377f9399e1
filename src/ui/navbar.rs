use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::session::LOGIN_PATH;
use crate::ui::api::use_api;
use crate::ui::icon::{Icon, icons};
use crate::ui::leave_guard::use_leave_guard;
use crate::ui::session::use_session;

/// Top navigation bar; links follow the session flag
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let leave_guard = use_leave_guard();
    let logging_out = RwSignal::new(false);

    // Router skips clicks whose default was prevented
    let guarded = move |to: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            if leave_guard.intercept(to) {
                ev.prevent_default();
            }
        }
    };

    let handle_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let navigate = use_navigate();
        spawn_local(async move {
            api.logout().await;
            logging_out.set(false);
            navigate(LOGIN_PATH, Default::default());
        });
    };

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="brand" on:click=guarded("/")>
                    <Icon name=icons::SPARKLES class="w-6 h-6"/>
                    <span>"BlogGen"<span class="brand-accent">".ai"</span></span>
                </A>

                <nav class="flex items-center gap-2">
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| view! {
                            <A href="/login" attr:class="nav-link">
                                <Icon name=icons::USER class="w-4 h-4"/>
                                "Log in"
                            </A>
                            <A href="/signup" attr:class="btn-primary">"Sign up"</A>
                        }
                    >
                        <A href="/" attr:class="nav-link" on:click=guarded("/")>
                            <Icon name=icons::PLUS class="w-4 h-4"/>
                            "New article"
                        </A>
                        <A href="/dashboard" attr:class="nav-link" on:click=guarded("/dashboard")>
                            <Icon name=icons::FILE_TEXT class="w-4 h-4"/>
                            "Dashboard"
                        </A>
                        <A href="/profile" attr:class="nav-link" on:click=guarded("/profile")>
                            <span class="avatar">
                                {move || {
                                    session
                                        .profile
                                        .get()
                                        .map(|p| p.initials())
                                        .unwrap_or_else(|| "?".to_string())
                                }}
                            </span>
                            "Profile"
                        </A>
                        <button
                            class="nav-link"
                            disabled=move || logging_out.get()
                            on:click=handle_logout
                        >
                            <Icon name=icons::LOGOUT class="w-4 h-4"/>
                            "Log out"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
