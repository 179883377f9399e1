use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop"
                } else {
                    "modal-backdrop opacity-0 pointer-events-none"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    let on_backdrop = e
                        .target()
                        .and_then(|t| t.dyn_ref::<web_sys::Element>().map(|el| el.class_list().contains("modal-backdrop")))
                        .unwrap_or(false);
                    if on_backdrop {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} card", max_width) role="dialog" aria-modal="true">
                <div class="card-header">
                    <h3 class="title-lg">{title}</h3>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for destructive or irreversible actions
///
/// Confirming only runs `on_confirm`; the caller closes the dialog once
/// the action is under way.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    is_open: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm".to_string())]
    confirm_text: String,
    #[prop(default = "Cancel".to_string())]
    cancel_text: String,
    /// Use the danger button style
    #[prop(default = false)]
    is_destructive: bool,
    /// Disables both buttons while the action runs
    #[prop(optional, into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=Callback::new(move |_| {
                if !busy.get_untracked() {
                    on_cancel.run(());
                }
            })
        >
            <div class="space-y-4">
                <p class="text-theme-secondary">{message}</p>

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        class="btn-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        {cancel_text}
                    </button>
                    <button
                        class=if is_destructive { "btn-danger" } else { "btn-primary" }
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_text}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
