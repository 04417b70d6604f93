//! Global application state

use leptos::prelude::*;
use taskflow::demo::DashboardStats;
use taskflow::Config;

/// Mentor base address baked in at build time, e.g.
/// `TASKFLOW_API_BASE=https://mentor.example.com trunk build`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("TASKFLOW_API_BASE");

/// State shared by every page. Chat state is not here: it belongs to the
/// tutor page and is dropped when the page unmounts.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API base URL
    pub api_base: RwSignal<String>,
    /// Dashboard counters
    pub stats: RwSignal<DashboardStats>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::from_value(API_BASE_OVERRIDE);
        tracing::info!(api_base = %config.api_base, "Mentor endpoint configured");

        Self {
            api_base: RwSignal::new(config.api_base),
            stats: RwSignal::new(DashboardStats::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
