//! Goal details page - the plan the tutor suggested yesterday

use leptos::prelude::*;
use leptos_meta::Title;
use taskflow::demo::yesterday_plan;
use taskflow::types::ActivityStatus;
use crate::components::activity_list::status_class;
use crate::components::TopNav;

#[component]
pub fn GoalsPage() -> impl IntoView {
    let plan = yesterday_plan();
    let todo = ActivityStatus::ToDo;

    view! {
        <Title text="TaskFlow · Goal Details" />
        <div class="min-h-screen flex flex-col">
            <TopNav />

            <div class="max-w-4xl w-full mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold">"Today’s Goal Details"</h1>
                <p class="mt-2 text-slate-400">
                    {format!("Problems your AI Tutor suggested from {}.", plan.date)}
                </p>

                <div class="mt-6 p-5 bg-slate-900 rounded-xl border border-slate-800">
                    <div class="font-semibold mb-2">{plan.focus}</div>

                    {plan.problems.into_iter().map(|problem| view! {
                        <div class="flex items-start justify-between gap-4 my-3 p-3 rounded-lg bg-slate-800/50">
                            <div class="min-w-0">
                                <div class="font-medium">{problem.title}</div>
                                <div class="text-sm text-slate-400">{problem.reason}</div>
                            </div>
                            <span class=status_class(todo)>{todo.label()}</span>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
