//! Reusable UI components

pub mod activity_list;
pub mod chat_input;
pub mod chat_message;
pub mod goal_donut;
pub mod loading;
pub mod stat_card;
pub mod top_nav;

pub use activity_list::ActivityList;
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use goal_donut::GoalDonut;
pub use loading::{LoadingDots, ThinkingBubble};
pub use stat_card::StatCard;
pub use top_nav::TopNav;
