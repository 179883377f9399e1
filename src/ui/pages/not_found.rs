//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found - BlogGen.ai"/>

        <main class="empty-state min-h-[60vh]">
            <Icon name=icons::FILE_TEXT class="w-12 h-12"/>
            <h1 class="text-6xl font-bold text-theme-primary">"404"</h1>
            <h2 class="title-lg">"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <div class="flex items-center justify-center gap-4">
                <A href="/" attr:class="btn-primary">"Go Home"</A>
                <A href="/dashboard" attr:class="btn-secondary">"My articles"</A>
            </div>
        </main>
    }
}
