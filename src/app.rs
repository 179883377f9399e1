use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::{API_BASE_META, Config};
use crate::ui::guard::ProtectedRoute;
use crate::ui::leave_guard::provide_leave_guard;
use crate::ui::navbar::Navbar;
use crate::ui::pages::{
    DashboardPage, EditorPage, LandingPage, LoginPage, NotFoundPage, ProfilePage, SignupPage,
};
use crate::ui::session::provide_session_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = Config::current().api_base_url.clone();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session_context();
    provide_leave_guard();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bloggen.css"/>
        <Title text="BlogGen.ai"/>

        <Router>
            <div class="app">
                <Navbar/>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/blog/:id")
                        view=|| view! { <ProtectedRoute><EditorPage/></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </div>
        </Router>
    }
}
