//! Recent activity list

use leptos::prelude::*;
use taskflow::types::{ActivityEntry, ActivityStatus, Difficulty};

#[component]
pub fn ActivityList(items: Vec<ActivityEntry>) -> impl IntoView {
    view! {
        <section class="p-5 bg-slate-900 rounded-xl border border-slate-800">
            <div class="flex items-baseline justify-between mb-4">
                <h2 class="font-semibold">"Recent LeetCode Activity"</h2>
                <span class="text-xs text-slate-500">"Your latest problems + notes"</span>
            </div>

            <div class="space-y-2 max-h-96 overflow-y-auto pr-1">
                {items.into_iter().map(|item| view! {
                    <div class="flex items-start justify-between gap-4 p-3 rounded-lg bg-slate-800/50">
                        <div class="min-w-0">
                            <div class="font-medium truncate">{item.title}</div>
                            <div class="text-sm text-slate-400">{item.note}</div>
                        </div>
                        <div class="flex gap-2 shrink-0">
                            <span class=difficulty_class(item.difficulty)>{item.difficulty.label()}</span>
                            <span class=status_class(item.status)>{item.status.label()}</span>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn difficulty_class(difficulty: Difficulty) -> String {
    let color = match difficulty {
        Difficulty::Easy => "bg-emerald-500/15 text-emerald-300",
        Difficulty::Medium => "bg-amber-500/15 text-amber-300",
        Difficulty::Hard => "bg-rose-500/15 text-rose-300",
    };
    format!("pill {} px-2 py-0.5 rounded-full text-xs {}", difficulty.slug(), color)
}

pub(crate) fn status_class(status: ActivityStatus) -> String {
    let color = match status {
        ActivityStatus::Completed => "bg-emerald-500/15 text-emerald-300",
        ActivityStatus::InProgress | ActivityStatus::ToDo => "bg-blue-500/15 text-blue-300",
        ActivityStatus::Review => "bg-violet-500/15 text-violet-300",
    };
    format!("pill status {} px-2 py-0.5 rounded-full text-xs {}", status.slug(), color)
}
