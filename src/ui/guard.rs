//! Route guard for pages that need a session

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::session::GuardDecision;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session;

/// Renders `children` only for a logged-in user
///
/// The decision is taken once per mount. A session that expires while
/// the page is open is reported by the page itself; the redirect happens
/// on the next navigation.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let decision = RwSignal::new(GuardDecision::Pending);

    Effect::new(move |_| {
        if decision.get_untracked().is_settled() {
            return;
        }
        if session.flag.get().is_some() {
            // Another tab may have logged out since the app started
            session.reload();
        }
        let next = GuardDecision::from_flag(session.flag.get_untracked());
        if let GuardDecision::Redirect(path) = next {
            leptos::logging::log!("No session, redirecting to {}", path);
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        decision.set(next);
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Admit
            fallback=|| view! {
                <div class="page-loading">
                    <Icon name=icons::LOADER class="w-6 h-6 animate-spin"/>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
