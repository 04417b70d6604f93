//! Chat input component

use leptos::prelude::*;
use taskflow::TutorChat;

/// Textarea bound to the chat's input buffer, plus the Send button
#[component]
pub fn ChatInput(
    /// Chat session owning the input buffer
    chat: RwSignal<TutorChat>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Placeholder text
    #[prop(default = "Type your question\u{2026}")]
    placeholder: &'static str,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        chat.update(|c| c.set_input(text));
    };

    // Enter to submit, Shift+Enter for newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    let on_button_click = move |_| on_submit();
    let can_send = Signal::derive(move || chat.with(|c| c.can_send()));

    view! {
        <div class="flex items-end gap-3 p-4 border-t border-slate-800">
            <textarea
                prop:value=move || chat.with(|c| c.input().to_string())
                on:input=on_input
                on:keydown=on_keydown
                placeholder=placeholder
                rows="2"
                class="flex-1 px-4 py-3 bg-slate-950 border border-slate-700 rounded-xl resize-none
                       text-slate-100 placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
            ></textarea>
            <button
                on:click=on_button_click
                disabled=move || !can_send.get()
                class="px-5 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700
                       disabled:cursor-not-allowed rounded-xl font-medium transition-colors"
            >
                "Send"
            </button>
        </div>
    }
}
