//! Top navigation bar

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use taskflow::Route;

#[component]
pub fn TopNav() -> impl IntoView {
    view! {
        <header class="h-16 sticky top-0 z-40 border-b border-slate-800 bg-slate-900/80 backdrop-blur">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Brand
                <a href=Route::Dashboard.path() class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <span class="w-7 h-7 rounded-lg bg-emerald-500 text-slate-900 font-bold flex items-center justify-center">
                        "✓"
                    </span>
                    <span class="text-lg font-semibold">"TaskFlow"</span>
                </a>

                // Navigation
                <nav class="flex items-center gap-1">
                    {Route::NAV.into_iter().map(|route| view! { <NavItem route=route /> }).collect::<Vec<_>>()}
                </nav>

                <button class="p-2 rounded-lg hover:bg-slate-800" title="Settings">"⚙️"</button>
            </div>
        </header>
    }
}

#[component]
fn NavItem(route: Route) -> impl IntoView {
    let location = use_location();
    let is_active = move || route.is_active(&location.pathname.get());

    view! {
        <a
            href=route.path()
            class=move || format!(
                "px-3 py-2 rounded-lg text-sm font-medium transition-colors {}",
                if is_active() { "bg-slate-800 text-white" } else { "text-slate-400 hover:text-slate-100" }
            )
        >
            {route.label()}
        </a>
    }
}
