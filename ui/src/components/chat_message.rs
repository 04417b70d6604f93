//! Chat message component

use leptos::prelude::*;
use taskflow::MessageRole;

/// Render a single chat message
#[component]
pub fn ChatMessage(role: MessageRole, content: String) -> impl IntoView {
    let is_user = role == MessageRole::User;

    view! {
        <div class=format!("flex {}", if is_user { "justify-end" } else { "justify-start" })>
            <div class=format!(
                "max-w-[80%] px-4 py-3 rounded-2xl whitespace-pre-wrap break-words {} {}",
                role.as_str(),
                if is_user {
                    "bg-blue-600 text-white rounded-tr-sm"
                } else {
                    "bg-slate-800 text-slate-100 rounded-tl-sm"
                }
            )>
                {content}
            </div>
        </div>
    }
}
