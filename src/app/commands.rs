//! Command handlers - business logic for processing UI events

use crate::app::directory::DirectoryAction;
use crate::app::state::FetchPurpose;
use crate::app::AppState;
use crate::constants::DEFAULT_FETCH_COUNT;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Notification;

impl AppState {
    // ========================
    // Fetching
    // ========================

    /// Startup load of `initial_count` users
    pub fn initialize(&mut self) -> NetworkCommand {
        self.request_fetch(FetchPurpose::Initialize, self.initial_count)
    }

    /// "Add User": fetch one more
    pub fn add_user(&mut self) -> NetworkCommand {
        self.request_fetch(FetchPurpose::Append, DEFAULT_FETCH_COUNT)
    }

    fn request_fetch(&mut self, purpose: FetchPurpose, count: usize) -> NetworkCommand {
        let id = self.next_id();
        self.pending.insert(id, purpose);
        tracing::debug!(id, ?purpose, count, "Requesting users");
        NetworkCommand::FetchUsers { id, count }
    }

    /// Cancel every fetch still in flight
    pub fn cancel_fetches(&self) -> Vec<NetworkCommand> {
        let mut ids: Vec<u64> = self.pending.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(NetworkCommand::CancelFetch).collect()
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        let Some(purpose) = self.pending.remove(&id) else {
            tracing::debug!(id, "Discarding response for a fetch that is no longer pending");
            return;
        };

        match response {
            NetworkResponse::Users { users, time_ms, .. } => {
                self.last_fetch_ms = Some(time_ms);
                match purpose {
                    FetchPurpose::Initialize => self.dispatch(DirectoryAction::Replace(users)),
                    FetchPurpose::Append => self.dispatch(DirectoryAction::Append(users)),
                }
            }
            NetworkResponse::Failed { message, time_ms, .. } => {
                self.last_fetch_ms = Some(time_ms);
                let what = match purpose {
                    FetchPurpose::Initialize => "Could not load users",
                    FetchPurpose::Append => "Could not add user",
                };
                self.notification = Some(Notification::new(format!("{}: {}", what, message)));
            }
            NetworkResponse::Cancelled { .. } => {
                tracing::info!(id, ?purpose, "Fetch cancelled");
            }
        }
    }

    // ========================
    // Table
    // ========================

    pub fn select_next(&mut self) {
        if !self.directory.is_empty() {
            self.selected = (self.selected + 1) % self.directory.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.directory.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.directory.len() - 1);
        }
    }

    pub fn delete_selected(&mut self) {
        self.dispatch(DirectoryAction::DeleteAt(self.selected));
    }

    pub fn edit_selected(&mut self) {
        self.dispatch(DirectoryAction::EditAt(self.selected));
    }

    // ========================
    // Edit dialog
    // ========================

    pub fn dialog_char(&mut self, c: char) {
        self.dispatch(DirectoryAction::InsertChar(c));
    }

    pub fn dialog_backspace(&mut self) {
        self.dispatch(DirectoryAction::Backspace);
    }

    pub fn dialog_cursor_left(&mut self) {
        self.dispatch(DirectoryAction::CursorLeft);
    }

    pub fn dialog_cursor_right(&mut self) {
        self.dispatch(DirectoryAction::CursorRight);
    }

    pub fn dialog_next_field(&mut self) {
        self.dispatch(DirectoryAction::FocusNext);
    }

    pub fn dialog_prev_field(&mut self) {
        self.dispatch(DirectoryAction::FocusPrev);
    }

    pub fn save_edit(&mut self) {
        self.dispatch(DirectoryAction::CommitEdit);
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(DirectoryAction::CancelEdit);
    }

    // ========================
    // Shell
    // ========================

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        tracing::debug!(theme = self.theme.as_str(), "Theme toggled");
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
