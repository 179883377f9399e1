//! Signup page component
//!
//! Checks the form locally, creates the account, then sends the user to
//! the login page after a short delay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::notice::SIGNUP_REDIRECT_MS;
use crate::core::profile::SignupRequest;
use crate::core::session::LOGIN_PATH;
use crate::core::validation::validate_signup;
use crate::ui::api::use_api;
use crate::ui::common::{ErrorMessage, FormField, SuccessMessage};
use crate::ui::notifications::after;

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() || success.get_untracked().is_some() {
            return;
        }

        let name_val = name.get_untracked().trim().to_string();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if let Err(e) = validate_signup(
            &name_val,
            &email_val,
            &password_val,
            &confirm_password.get_untracked(),
        ) {
            error.set(Some(e.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);
        let navigate = use_navigate();
        spawn_local(async move {
            let request = SignupRequest {
                first_name: name_val,
                email: email_val,
                password: password_val,
            };
            match api.signup(&request).await {
                Ok(()) => {
                    leptos::logging::log!("Account created");
                    success.set(Some("Account created! Redirecting to login...".to_string()));
                    after(SIGNUP_REDIRECT_MS, move || {
                        navigate(LOGIN_PATH, Default::default());
                    });
                }
                Err(e) => error.set(Some(e.user_message("Signup failed"))),
            }
            submitting.set(false);
        });
    };

    let clear_error = Callback::new(move |_| error.set(None));
    let locked = Signal::derive(move || submitting.get() || success.get().is_some());

    view! {
        <Title text="Sign up - BlogGen.ai"/>

        <main class="auth-page">
            <form class="card auth-card space-y-6" on:submit=on_submit>
                <div class="text-center">
                    <h1 class="page-title">"Create your account"</h1>
                    <p class="mt-2 text-theme-secondary">
                        "Start turning videos into articles"
                    </p>
                </div>

                <ErrorMessage error=error/>
                <SuccessMessage message=success/>

                <FormField
                    label="Name"
                    name="first_name"
                    value=name
                    placeholder="Your name"
                    autocomplete="given-name"
                    disabled=locked
                    on_edit=clear_error
                />
                <FormField
                    label="Email"
                    name="email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    disabled=locked
                    on_edit=clear_error
                />
                <FormField
                    label="Password"
                    name="password"
                    value=password
                    input_type="password"
                    placeholder="At least 6 characters"
                    autocomplete="new-password"
                    disabled=locked
                    on_edit=clear_error
                />
                <FormField
                    label="Confirm password"
                    name="confirm_password"
                    value=confirm_password
                    input_type="password"
                    placeholder="Repeat your password"
                    autocomplete="new-password"
                    disabled=locked
                    on_edit=clear_error
                />

                <button type="submit" class="btn-primary w-full" disabled=move || locked.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>

                <p class="text-center text-sm text-theme-secondary">
                    "Already have an account? "
                    <A href="/login" attr:class="link">"Log in"</A>
                </p>
            </form>
        </main>
    }
}
