//! Login page component
//!
//! Redirects to the dashboard on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::error::ApiError;
use crate::core::profile::LoginRequest;
use crate::core::session::login_redirect;
use crate::core::validation::validate_login;
use crate::ui::api::use_api;
use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::session::use_session;

/// Shown for a 401 from the login endpoint
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Sole redirect after login, also for visitors already logged in
    Effect::new(move |sent: Option<bool>| {
        let sent = sent.unwrap_or(false);
        match login_redirect(session.flag.get(), sent) {
            Some(path) => {
                navigate(path, Default::default());
                true
            }
            None => sent,
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if let Err(e) = validate_login(&email_val, &password_val) {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let request = LoginRequest {
                username: email_val,
                password: password_val,
            };
            match api.login(&request).await {
                Ok(()) => leptos::logging::log!("Logged in"),
                Err(ApiError::Unauthorized) => error.set(Some(INVALID_CREDENTIALS.to_string())),
                Err(e) => error.set(Some(e.user_message("Login failed"))),
            }
            submitting.set(false);
        });
    };

    let clear_error = Callback::new(move |_| error.set(None));

    view! {
        <Title text="Log in - BlogGen.ai"/>

        <main class="auth-page">
            <form class="card auth-card space-y-6" on:submit=on_submit>
                <div class="text-center">
                    <h1 class="page-title">"Welcome back"</h1>
                    <p class="mt-2 text-theme-secondary">"Log in to your BlogGen account"</p>
                </div>

                <ErrorMessage error=error/>

                <FormField
                    label="Email"
                    name="email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    disabled=submitting
                    on_edit=clear_error
                />
                <FormField
                    label="Password"
                    name="password"
                    value=password
                    input_type="password"
                    placeholder="Your password"
                    autocomplete="current-password"
                    disabled=submitting
                    on_edit=clear_error
                />

                <button type="submit" class="btn-primary w-full" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>

                <p class="text-center text-sm text-theme-secondary">
                    "Don't have an account? "
                    <A href="/signup" attr:class="link">"Sign up"</A>
                </p>
            </form>
        </main>
    }
}
