//! Render state - data structure sent from App layer to UI for rendering

use crate::app::directory::EditSession;
use crate::models::{Notification, User};
use crate::theme::ThemeMode;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Directory
    pub users: Vec<User>,
    pub selected: usize,

    // Edit dialog (None = closed)
    pub dialog: Option<EditSession>,

    // Shell
    pub theme: ThemeMode,
    pub drawer_open: bool,

    // Fetch status
    pub pending_fetches: usize,
    pub last_fetch_ms: Option<u64>,
    pub notification: Option<Notification>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }
}
