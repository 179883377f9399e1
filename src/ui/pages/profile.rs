//! User profile page component
//!
//! Shows the account, edits the name, changes the password and deletes
//! the account behind a confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::confirm::Confirmation;
use crate::core::error::ApiError;
use crate::core::profile::{PasswordChange, Profile, ProfileUpdate};
use crate::core::session::LOGIN_PATH;
use crate::core::validation::validate_password_change;
use crate::ui::api::use_api;
use crate::ui::common::{ConfirmDialog, FormField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NoticeBanner, NoticeSlot};
use crate::ui::pages::dashboard::SessionExpired;
use crate::ui::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let loading = RwSignal::new(true);
    let auth_error = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let notices = NoticeSlot::new();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let saving_profile = RwSignal::new(false);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let changing_password = RwSignal::new(false);

    let confirm_delete = RwSignal::new(Confirmation::<()>::new());
    let deleting = RwSignal::new(false);

    let fill_form = move |profile: &Profile| {
        first_name.set(profile.first_name.clone());
        last_name.set(profile.last_name.clone());
    };

    // Fresh copy on every visit
    Effect::new(move |_| {
        spawn_local(async move {
            match api.profile().await {
                Ok(profile) => {
                    fill_form(&profile);
                    session.profile.set(Some(profile));
                }
                Err(ApiError::Unauthorized) => auth_error.set(true),
                Err(e) => load_error.set(Some(e.user_message("Failed to load your profile"))),
            }
            loading.set(false);
        });
    });

    let save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving_profile.get_untracked() {
            return;
        }
        let update = ProfileUpdate {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
        };

        saving_profile.set(true);
        spawn_local(async move {
            match api.update_profile(&update).await {
                Ok(()) => {
                    session.profile.update(|p| {
                        if let Some(p) = p {
                            p.first_name = update.first_name.clone();
                            p.last_name = update.last_name.clone();
                        }
                    });
                    notices.success("Profile updated");
                }
                Err(e) => notices.api_error(&e, "Failed to update your profile"),
            }
            saving_profile.set(false);
        });
    };

    let change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if changing_password.get_untracked() {
            return;
        }
        let change = PasswordChange {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        if let Err(e) = validate_password_change(&change.old_password, &change.new_password) {
            notices.error(e.to_string());
            return;
        }

        changing_password.set(true);
        spawn_local(async move {
            match api.change_password(&change).await {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    notices.success("Password changed");
                }
                Err(e) => notices.api_error(&e, "Failed to change your password"),
            }
            changing_password.set(false);
        });
    };

    let delete_account = Callback::new(move |_| {
        if !confirm_delete.with_untracked(|c| c.is_open()) {
            return;
        }
        deleting.set(true);
        let navigate = use_navigate();
        spawn_local(async move {
            match api.delete_account().await {
                Ok(()) => {
                    leptos::logging::log!("Account deleted");
                    confirm_delete.update(|c| {
                        c.confirm();
                    });
                    navigate(
                        LOGIN_PATH,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(e) => {
                    confirm_delete.update(|c| c.cancel());
                    notices.api_error(&e, "Failed to delete your account");
                }
            }
            deleting.set(false);
        });
    });

    view! {
        <Title text="Profile - BlogGen.ai"/>

        <main class="container-narrow space-y-6">
            <h1 class="page-title">"Profile"</h1>
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
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <section class="card p-6 flex items-center gap-4">
                            <div class="avatar avatar-lg">
                                {move || session.profile.get().map(|p| p.initials()).unwrap_or_default()}
                            </div>
                            <div>
                                <h2 class="title-lg">
                                    {move || session.profile.get().map(|p| p.display_name()).unwrap_or_default()}
                                </h2>
                                <p class="text-theme-secondary">
                                    {move || session.profile.get().map(|p| p.email).unwrap_or_default()}
                                </p>
                            </div>
                        </section>

                        <form class="card p-6 space-y-4" on:submit=save_profile>
                            <h2 class="title-lg">"Personal information"</h2>
                            <div class="grid gap-4 sm:grid-cols-2">
                                <FormField
                                    label="First name"
                                    name="first_name"
                                    value=first_name
                                    autocomplete="given-name"
                                    disabled=saving_profile
                                />
                                <FormField
                                    label="Last name"
                                    name="last_name"
                                    value=last_name
                                    autocomplete="family-name"
                                    disabled=saving_profile
                                />
                            </div>
                            <div class="flex justify-end">
                                <button type="submit" class="btn-primary" disabled=move || saving_profile.get()>
                                    {move || if saving_profile.get() { "Saving..." } else { "Save changes" }}
                                </button>
                            </div>
                        </form>

                        <form class="card p-6 space-y-4" on:submit=change_password>
                            <h2 class="title-lg">"Change password"</h2>
                            <FormField
                                label="Current password"
                                name="old_password"
                                value=old_password
                                input_type="password"
                                autocomplete="current-password"
                                disabled=changing_password
                            />
                            <FormField
                                label="New password"
                                name="new_password"
                                value=new_password
                                input_type="password"
                                autocomplete="new-password"
                                disabled=changing_password
                            />
                            <div class="flex justify-end">
                                <button type="submit" class="btn-primary" disabled=move || changing_password.get()>
                                    {move || if changing_password.get() { "Updating..." } else { "Update password" }}
                                </button>
                            </div>
                        </form>

                        <section class="card card-danger p-6 space-y-4">
                            <h2 class="title-lg">"Danger zone"</h2>
                            <p class="text-theme-secondary">
                                "Deleting your account removes all of your articles. This cannot be undone."
                            </p>
                            <div class="flex justify-end">
                                <button class="btn-danger" on:click=move |_| confirm_delete.update(|c| c.open(()))>
                                    <Icon name=icons::TRASH class="w-4 h-4"/>
                                    "Delete account"
                                </button>
                            </div>
                        </section>
                    }
                    .into_any()
                }
            }}

            <ConfirmDialog
                title="Delete account".to_string()
                message="Your account and all of your articles will be permanently deleted.".to_string()
                is_open=Signal::derive(move || confirm_delete.with(|c| c.is_open()))
                on_confirm=delete_account
                on_cancel=Callback::new(move |_| {
                    if !deleting.get_untracked() {
                        confirm_delete.update(|c| c.cancel());
                    }
                })
                confirm_text="Delete account".to_string()
                is_destructive=true
                busy=deleting
            />
        </main>
    }
}
