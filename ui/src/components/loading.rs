//! Loading indicators

use leptos::prelude::*;
use taskflow::chat::THINKING;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-1.5 h-1.5 bg-blue-400 rounded-full animate-bounce"></span>
            <span class="w-1.5 h-1.5 bg-blue-400 rounded-full animate-bounce [animation-delay:150ms]"></span>
            <span class="w-1.5 h-1.5 bg-blue-400 rounded-full animate-bounce [animation-delay:300ms]"></span>
        </div>
    }
}

/// Assistant-side bubble shown while a mentor request is in flight
#[component]
pub fn ThinkingBubble() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="flex items-center gap-3 px-4 py-3 bg-slate-800 rounded-2xl rounded-tl-sm text-slate-300">
                <span>{THINKING}</span>
                <LoadingDots />
            </div>
        </div>
    }
}
