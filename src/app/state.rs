//! Central application state.
//!
//! The host owns the selected group.  The tab widget only reads it and
//! reports requested changes, which land in [`AppState::select_group`].

use crate::config::AppConfig;
use crate::ui::photos_tab::PhotosTabState;

/// Top-level application state.
pub struct AppState {
    /// Photo groups shown as tabs, in order.
    pub groups: Vec<String>,
    /// Currently selected group label.
    pub selected_group: String,
    /// Name shown in the feed header.
    pub user_name: String,
    /// Retained tab-row animation state.
    pub tab_state: PhotosTabState,
    /// User-configurable keybindings and settings.
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            groups: config.groups.clone(),
            selected_group: config.selected_group.clone(),
            user_name: config.user_name.clone(),
            tab_state: PhotosTabState::new(config.indicator_spring),
            config,
            should_quit: false,
            status_message: None,
        }
    }

    /// Selection-change callback target for the tab row.
    pub fn select_group(&mut self, label: &str) {
        if self.selected_group == label {
            return;
        }
        tracing::info!(from = %self.selected_group, to = label, "group selected");
        self.selected_group = label.to_string();
        self.status_message = Some(format!("Showing {label}"));
    }
}
