//! Summary statistic card

use leptos::prelude::*;

const CARD: &str = "block p-5 bg-slate-900 rounded-xl border border-slate-800";

/// Dashboard card with a headline value. With `href` set the whole card is a
/// link to that route.
#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    subtitle: &'static str,
    icon: &'static str,
    #[prop(optional)] href: Option<&'static str>,
) -> impl IntoView {
    let body = view! {
        <div class="flex items-center justify-between text-sm text-slate-400">
            <span>{title}</span>
            <span class="text-xl">{icon}</span>
        </div>
        <div class="mt-3 text-2xl font-bold">{value}</div>
        <div class="mt-1 text-xs text-slate-500">{subtitle}</div>
    };

    match href {
        Some(href) => view! {
            <a
                href=href
                class=format!("{} cursor-pointer hover:border-blue-500/60 transition-colors", CARD)
            >
                {body}
            </a>
        }
        .into_any(),
        None => view! { <div class=CARD>{body}</div> }.into_any(),
    }
}
