//! # TaskFlow
//!
//! Core of the TaskFlow learning dashboard: the tutor chat session, the
//! client contract for the remote mentor service, the daily goal breakdown,
//! and the client-side route table. The Leptos frontend in `ui/` renders
//! these; everything here builds natively and for `wasm32-unknown-unknown`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taskflow::{Config, HttpMentorClient, MentorClient, TutorChat};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HttpMentorClient::from_config(&Config::from_env());
//!     let mut chat = TutorChat::new();
//!
//!     chat.set_input("Explain sliding window for longest substring.");
//!     if let Some(message) = chat.submit() {
//!         let outcome = client.chat(&message).await;
//!         chat.resolve(outcome);
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `http` (default): [`HttpMentorClient`] over `reqwest`
//! - `dotenv` (default): load `.env` in [`Config::from_env`]

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Tutor chat session and interaction loop.
pub mod chat;
/// Placeholder dashboard data.
pub mod demo;
/// Daily goal breakdown.
pub mod goals;
/// Mentor service client contract and transports.
pub mod mentor;
/// Client-side routes.
pub mod routes;
/// Core types (messages, activity rows, errors).
pub mod types;
/// Configuration.
pub mod utils;

// Re-export commonly used types
pub use chat::{ChatEntry, ChatSession, TutorChat};
pub use goals::{GoalBreakdown, GoalInputs, GoalSlice, SliceLabel};
#[cfg(feature = "http")]
pub use mentor::HttpMentorClient;
pub use mentor::MentorClient;
pub use routes::Route;
pub use types::{ChatError, ChatMessage, MessageRole, Result};
pub use utils::config::Config;
