use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    label: &'static str,
    /// Used for `id`, `name` and the label's `for`
    name: &'static str,
    value: RwSignal<String>,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Runs on every edit, e.g. to clear a stale error
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>{label}</label>
            <input
                type=input_type
                id=name
                name=name
                class="input"
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(on_edit) = on_edit {
                        on_edit.run(());
                    }
                }
                disabled=move || disabled.get()
            />
        </div>
    }
}
