//! App state - pure data structure with no I/O logic

use std::collections::HashMap;

use crate::app::directory::{reduce, DirectoryAction, DirectoryState};
use crate::messages::RenderState;
use crate::models::Notification;
use crate::theme::ThemeMode;

/// What a pending fetch will do to the directory when it resolves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPurpose {
    /// Startup load, replaces the directory
    Initialize,
    /// "Add User", appends
    Append,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Directory store (records + edit dialog)
    pub directory: DirectoryState,
    pub selected: usize,

    // Shell
    pub theme: ThemeMode,
    pub drawer_open: bool,
    pub show_help: bool,
    pub notification: Option<Notification>,

    // Fetch bookkeeping
    pub pending: HashMap<u64, FetchPurpose>,
    pub next_request_id: u64,
    pub last_fetch_ms: Option<u64>,
    pub initial_count: usize,
}

impl AppState {
    pub fn new(theme: ThemeMode, initial_count: usize) -> Self {
        AppState {
            directory: DirectoryState::new(),
            selected: 0,
            theme,
            drawer_open: false,
            show_help: false,
            notification: None,
            pending: HashMap::new(),
            next_request_id: 1,
            last_fetch_ms: None,
            initial_count,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Run an action through the directory reducer
    pub fn dispatch(&mut self, action: DirectoryAction) {
        let previous = std::mem::take(&mut self.directory);
        self.directory = reduce(previous, action);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.directory.len().saturating_sub(1));
    }

    pub fn dialog_open(&self) -> bool {
        self.directory.dialog().is_open()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            users: self.directory.users().cloned().collect(),
            selected: self.selected,
            dialog: self.directory.dialog().session().cloned(),
            theme: self.theme,
            drawer_open: self.drawer_open,
            pending_fetches: self.pending.len(),
            last_fetch_ms: self.last_fetch_ms,
            notification: self.notification.clone(),
            show_help: self.show_help,
        }
    }
}
