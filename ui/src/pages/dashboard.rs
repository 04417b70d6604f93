//! Dashboard page - streaks, today's goal, recent activity

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use taskflow::demo::recent_activity;
use taskflow::Route;
use crate::components::{ActivityList, GoalDonut, StatCard, TopNav};
use crate::state::AppState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Demo counters are fixed for the page's lifetime
    let stats = state.stats.get_untracked();
    let breakdown = stats.goal_breakdown();

    view! {
        <Title text="TaskFlow · Dashboard" />
        <div class="min-h-screen flex flex-col">
            <TopNav />

            <div class="max-w-7xl w-full mx-auto px-4 py-8 space-y-8">
                // Hero
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold">"Start Learning with Your Tutor"</h1>
                        <p class="mt-2 text-slate-400">
                            "Your AI mentor tracks your LeetCode progress, goals, and reflections."
                        </p>
                    </div>
                    <button
                        on:click=move |_| navigate(Route::Tutor.path(), Default::default())
                        class="px-5 py-3 bg-blue-600 hover:bg-blue-700 rounded-xl font-medium transition-colors"
                    >
                        "Open AI Tutor →"
                    </button>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard
                        title="Streak"
                        value=format!("{} days", stats.streak_days)
                        subtitle="Keep momentum"
                        icon="🔥"
                    />
                    <StatCard
                        title="Today’s Goal"
                        value=format!("{} problems", stats.today_goal)
                        subtitle="Click to view details"
                        icon="🎯"
                        href=Route::Goals.path()
                    />
                    <StatCard
                        title="Done Today"
                        value=stats.done_today.to_string()
                        subtitle="Completed so far"
                        icon="✅"
                    />
                    <StatCard
                        title="Carryover"
                        value=stats.carryover.to_string()
                        subtitle="Missed yesterday (rolled in)"
                        icon="⏳"
                    />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                    <ActivityList items=recent_activity() />
                    <GoalDonut breakdown=breakdown />
                </div>
            </div>
        </div>
    }
}
