//! Goal-for-today donut chart

use leptos::prelude::*;
use std::f64::consts::PI;
use taskflow::GoalBreakdown;

/// Slice colors in presentation order.
const PALETTE: [&str; 4] = ["#64748b", "#3b82f6", "#a855f7", "#10b981"];

const SIZE: f64 = 220.0;
const RADIUS: f64 = 90.0;
const RING_WIDTH: f64 = 38.0;

#[component]
pub fn GoalDonut(breakdown: GoalBreakdown) -> impl IntoView {
    let circumference = 2.0 * PI * RADIUS;
    let center = SIZE / 2.0;

    let legend = breakdown
        .slices()
        .iter()
        .zip(PALETTE)
        .map(|(slice, color)| view! {
            <div class="flex items-center gap-2 text-sm">
                <span class="w-2.5 h-2.5 rounded-full" style=format!("background: {}", color)></span>
                <span>{format!("{}: {} ({}%)", slice.label, slice.count, slice.percentage)}</span>
            </div>
        })
        .collect::<Vec<_>>();

    let segments = breakdown
        .arcs()
        .into_iter()
        .zip(PALETTE)
        .filter(|(arc, _)| arc.sweep > 0.0)
        .map(|(arc, color)| view! {
            <circle
                cx=center.to_string()
                cy=center.to_string()
                r=RADIUS.to_string()
                fill="none"
                stroke=color
                stroke-width=RING_WIDTH.to_string()
                stroke-dasharray=format!("{:.3} {:.3}", arc.sweep * circumference, circumference)
                stroke-dashoffset=format!("{:.3}", -arc.start * circumference)
                transform=format!("rotate(-90 {} {})", center, center)
            ></circle>
        })
        .collect::<Vec<_>>();

    view! {
        <section class="p-5 bg-slate-900 rounded-xl border border-slate-800">
            <div class="flex items-baseline justify-between mb-4">
                <h2 class="font-semibold">"Goal for Today"</h2>
                <span class="text-xs text-slate-500">"AI tracks daily plan + carryover"</span>
            </div>

            <div class="flex flex-col sm:flex-row items-center gap-6">
                <div class="space-y-2">
                    {legend}
                    <p class="pt-2 text-xs text-slate-500">
                        "Tip: unfinished goals roll into tomorrow (cumulative)."
                    </p>
                </div>

                <svg
                    class="w-56 h-56 shrink-0"
                    viewBox=format!("0 0 {} {}", SIZE, SIZE)
                    xmlns="http://www.w3.org/2000/svg"
                >
                    {segments}
                </svg>
            </div>
        </section>
    }
}
