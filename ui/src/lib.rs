//! TaskFlow UI - Leptos frontend
//!
//! Learning dashboard with goal tracking and a chat window to the AI mentor.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path, NavigateOptions,
};

use pages::{dashboard::DashboardPage, goals::GoalsPage, tutor::TutorPage};
use state::AppState;
use taskflow::Route as AppRoute;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-slate-950 text-slate-100">
                <Routes fallback=|| view! { <FallbackRedirect /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/tutor") view=TutorPage />
                    <Route path=path!("/goals") view=GoalsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Paths the router did not match, replacing the history entry: `/tutor/`
/// lands on `/tutor`, anything unknown on the dashboard.
#[component]
fn FallbackRedirect() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    let target = AppRoute::resolve(&pathname);
    tracing::debug!(%pathname, target = target.path(), "Redirecting unmatched path");

    let options = NavigateOptions {
        replace: true,
        ..Default::default()
    };
    view! { <Redirect path=target.path() options=options /> }
}
