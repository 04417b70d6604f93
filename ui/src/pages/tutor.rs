//! Tutor page - chat with the AI mentor

use leptos::prelude::*;
use leptos_meta::Title;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use taskflow::{ChatEntry, TutorChat};
use crate::api::send_chat;
use crate::components::{ChatInput, ChatMessage, ThinkingBubble, TopNav};
use crate::state::AppState;

#[component]
pub fn TutorPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Lives as long as this page; a reload or route change starts fresh
    let chat = RwSignal::new(TutorChat::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Auto-scroll to bottom when the log or the thinking bubble changes
    Effect::new(move |_| {
        chat.track();
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send_message = move || send_chat(state.api_base.get_untracked(), chat);

    view! {
        <Title text="TaskFlow · AI Tutor" />
        <div class="h-screen flex flex-col">
            <TopNav />

            <div class="flex-1 min-h-0 max-w-4xl w-full mx-auto px-4 py-6">
                <div class="h-full flex flex-col bg-slate-900 rounded-xl border border-slate-800">
                    <div class="px-5 py-4 border-b border-slate-800 flex items-baseline justify-between">
                        <h1 class="font-semibold">"AI Tutor"</h1>
                        <span class="text-xs text-slate-500">
                            "Ask for hints, plan today’s work, or review mistakes"
                        </span>
                    </div>

                    // Messages area
                    <div class="flex-1 overflow-y-auto px-5 py-6 space-y-4">
                        {move || chat.with(|c| {
                            c.entries()
                                .into_iter()
                                .map(|entry| match entry {
                                    ChatEntry::Message(msg) => view! {
                                        <ChatMessage role=msg.role() content=msg.content().to_string() />
                                    }
                                    .into_any(),
                                    ChatEntry::Thinking => view! { <ThinkingBubble /> }.into_any(),
                                })
                                .collect::<Vec<_>>()
                        })}

                        // Scroll anchor
                        <div node_ref=messages_end_ref></div>
                    </div>

                    <ChatInput
                        chat=chat
                        on_submit=send_message
                        placeholder="Type your question… (e.g., ‘Help me debug Rotate List’)"
                    />
                </div>
            </div>
        </div>
    }
}
