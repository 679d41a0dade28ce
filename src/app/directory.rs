//! Directory store - the user list and the edit dialog as a pure reducer
//!
//! `reduce` takes the previous state and an action and returns the next
//! state. Nothing here performs I/O; fetch results arrive as actions.

use crate::models::{DirectoryEntry, EditField, User, UserId};

/// Scratch state of an open edit dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Row the dialog was opened on
    pub index: usize,
    /// Identity of that row's record when the dialog opened
    pub id: UserId,
    pub scratch: User,
    pub focused: EditField,
    /// Byte offset into the focused field
    pub cursor: usize,
}

impl EditSession {
    fn input(&self) -> &str {
        self.scratch.field(self.focused)
    }

    fn focus(&mut self, field: EditField) {
        self.focused = field;
        self.cursor = self.input().len();
    }
}

/// Edit dialog state machine
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EditDialog {
    #[default]
    Closed,
    Open(EditSession),
}

impl EditDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, EditDialog::Open(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditDialog::Open(session) => Some(session),
            EditDialog::Closed => None,
        }
    }
}

/// Actions understood by the directory reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryAction {
    /// Initial load resolved: replace every record
    Replace(Vec<User>),
    /// "Add User" resolved: append at the end
    Append(Vec<User>),
    DeleteAt(usize),
    EditAt(usize),
    InsertChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    FocusNext,
    FocusPrev,
    CommitEdit,
    CancelEdit,
}

/// The in-memory directory plus dialog state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryState {
    entries: Vec<DirectoryEntry>,
    dialog: EditDialog,
    next_id: u64,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.entries.iter().map(|entry| &entry.user)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.entries.get(index).map(|entry| &entry.user)
    }

    pub fn dialog(&self) -> &EditDialog {
        &self.dialog
    }

    fn admit(&mut self, users: Vec<User>) -> impl Iterator<Item = DirectoryEntry> + '_ {
        users.into_iter().map(move |user| {
            let id = UserId(self.next_id);
            self.next_id += 1;
            DirectoryEntry { id, user }
        })
    }

    fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.dialog {
            EditDialog::Open(session) => Some(session),
            EditDialog::Closed => None,
        }
    }

    /// Position of the record an edit session targets, if it still exists
    fn locate(&self, session: &EditSession) -> Option<usize> {
        match self.entries.get(session.index) {
            Some(entry) if entry.id == session.id => Some(session.index),
            _ => self.entries.iter().position(|entry| entry.id == session.id),
        }
    }
}

/// Apply `action` to `state`
pub fn reduce(mut state: DirectoryState, action: DirectoryAction) -> DirectoryState {
    match action {
        DirectoryAction::Replace(users) => {
            let entries: Vec<DirectoryEntry> = state.admit(users).collect();
            state.entries = entries;
        }
        DirectoryAction::Append(users) => {
            let entries: Vec<DirectoryEntry> = state.admit(users).collect();
            state.entries.extend(entries);
        }
        DirectoryAction::DeleteAt(index) => {
            if index < state.entries.len() {
                state.entries.remove(index);
            }
        }
        DirectoryAction::EditAt(index) => {
            if let Some(entry) = state.entries.get(index) {
                let mut session = EditSession {
                    index,
                    id: entry.id,
                    scratch: entry.user.clone(),
                    focused: EditField::FirstName,
                    cursor: 0,
                };
                session.focus(EditField::FirstName);
                state.dialog = EditDialog::Open(session);
            }
        }
        DirectoryAction::InsertChar(c) => {
            if let Some(session) = state.session_mut() {
                let cursor = session.cursor;
                let input = session.scratch.field_mut(session.focused);
                if cursor <= input.len() {
                    input.insert(cursor, c);
                    session.cursor = cursor + c.len_utf8();
                }
            }
        }
        DirectoryAction::Backspace => {
            if let Some(session) = state.session_mut() {
                if session.cursor > 0 {
                    let cursor = session.cursor;
                    let input = session.scratch.field_mut(session.focused);
                    let prev = input[..cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    input.remove(prev);
                    session.cursor = prev;
                }
            }
        }
        DirectoryAction::CursorLeft => {
            if let Some(session) = state.session_mut() {
                if session.cursor > 0 {
                    let prev = session.input()[..session.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    session.cursor = prev;
                }
            }
        }
        DirectoryAction::CursorRight => {
            if let Some(session) = state.session_mut() {
                let cursor = session.cursor;
                let input = session.input();
                if cursor < input.len() {
                    let next = input[cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| cursor + i)
                        .unwrap_or(input.len());
                    session.cursor = next;
                }
            }
        }
        DirectoryAction::FocusNext => {
            if let Some(session) = state.session_mut() {
                session.focus(session.focused.next());
            }
        }
        DirectoryAction::FocusPrev => {
            if let Some(session) = state.session_mut() {
                session.focus(session.focused.prev());
            }
        }
        DirectoryAction::CommitEdit => {
            if let EditDialog::Open(session) = std::mem::take(&mut state.dialog) {
                match state.locate(&session) {
                    Some(index) => state.entries[index].user = session.scratch,
                    None => tracing::debug!(id = session.id.0, "Edited record no longer present"),
                }
            }
        }
        DirectoryAction::CancelEdit => {
            state.dialog = EditDialog::Closed;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User::new("Ann", "Lee", "Rome", "female")
    }

    fn sample(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User::new(format!("First{i}"), format!("Last{i}"), format!("City{i}"), "male"))
            .collect()
    }

    fn loaded(n: usize) -> DirectoryState {
        reduce(DirectoryState::new(), DirectoryAction::Replace(sample(n)))
    }

    fn apply(state: DirectoryState, actions: impl IntoIterator<Item = DirectoryAction>) -> DirectoryState {
        actions.into_iter().fold(state, reduce)
    }

    fn type_text(text: &str) -> Vec<DirectoryAction> {
        text.chars().map(DirectoryAction::InsertChar).collect()
    }

    fn snapshot(state: &DirectoryState) -> Vec<User> {
        state.users().cloned().collect()
    }

    #[test]
    fn test_initial_load_replaces_everything() {
        let state = reduce(loaded(2), DirectoryAction::Replace(sample(5)));
        assert_eq!(state.len(), 5);
        assert_eq!(snapshot(&state), sample(5));
    }

    #[test]
    fn test_append_adds_one_at_the_end() {
        let before = loaded(5);
        let prior = snapshot(&before);
        let state = reduce(before, DirectoryAction::Append(vec![ann()]));

        assert_eq!(state.len(), 6);
        assert_eq!(&snapshot(&state)[..5], prior.as_slice());
        assert_eq!(state.get(5), Some(&ann()));
    }

    #[test]
    fn test_ids_are_unique_across_loads() {
        let state = reduce(loaded(3), DirectoryAction::Append(sample(2)));
        let mut ids: Vec<UserId> = state.entries().iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let users = sample(4);
        let state = reduce(loaded(4), DirectoryAction::DeleteAt(1));

        assert_eq!(state.len(), 3);
        assert_eq!(state.get(0), Some(&users[0]));
        assert_eq!(state.get(1), Some(&users[2]));
        assert_eq!(state.get(2), Some(&users[3]));
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let state = reduce(loaded(2), DirectoryAction::DeleteAt(7));
        assert_eq!(snapshot(&state), sample(2));
    }

    #[test]
    fn test_edit_city_scenario() {
        let state = reduce(DirectoryState::new(), DirectoryAction::Replace(vec![ann()]));
        let mut actions = vec![
            DirectoryAction::EditAt(0),
            DirectoryAction::FocusNext,
            DirectoryAction::FocusNext,
        ];
        actions.extend(std::iter::repeat(DirectoryAction::Backspace).take(4));
        actions.extend(type_text("Milan"));
        actions.push(DirectoryAction::CommitEdit);

        let state = apply(state, actions);
        assert_eq!(snapshot(&state), vec![User::new("Ann", "Lee", "Milan", "female")]);
        assert!(!state.dialog().is_open());
    }

    #[test]
    fn test_commit_touches_only_the_edited_entry() {
        let users = sample(3);
        let mut actions = vec![DirectoryAction::EditAt(1), DirectoryAction::FocusPrev];
        actions.extend(type_text("x"));
        actions.push(DirectoryAction::CommitEdit);

        let state = apply(loaded(3), actions);
        let mut expected = users[1].clone();
        expected.gender.push('x');
        assert_eq!(snapshot(&state), vec![users[0].clone(), expected, users[2].clone()]);
    }

    #[test]
    fn test_cancel_discards_scratch() {
        let mut actions = vec![DirectoryAction::EditAt(0)];
        actions.extend(type_text("zzz"));
        actions.push(DirectoryAction::CancelEdit);

        let state = apply(loaded(2), actions);
        assert_eq!(snapshot(&state), sample(2));
        assert_eq!(state.dialog(), &EditDialog::Closed);
    }

    #[test]
    fn test_cancel_and_commit_when_closed_are_noops() {
        let before = loaded(2);
        let after = apply(before.clone(), [DirectoryAction::CancelEdit, DirectoryAction::CommitEdit]);
        assert_eq!(after, before);
    }

    #[test]
    fn test_edit_out_of_range_stays_closed() {
        let state = reduce(loaded(1), DirectoryAction::EditAt(3));
        assert!(!state.dialog().is_open());
    }

    #[test]
    fn test_scratch_is_a_copy() {
        let state = apply(loaded(1), type_text("q").into_iter().chain([DirectoryAction::EditAt(0)]));
        let state = apply(state, type_text("Q"));

        let session = state.dialog().session().unwrap();
        assert_eq!(session.scratch.name.first, "First0Q");
        assert_eq!(state.get(0).unwrap().name.first, "First0");
    }

    #[test]
    fn test_cursor_edits_in_the_middle() {
        let state = apply(
            reduce(DirectoryState::new(), DirectoryAction::Replace(vec![ann()])),
            [
                DirectoryAction::EditAt(0),
                DirectoryAction::CursorLeft,
                DirectoryAction::CursorLeft,
                DirectoryAction::InsertChar('é'),
                DirectoryAction::CursorRight,
                DirectoryAction::Backspace,
                DirectoryAction::CommitEdit,
            ],
        );
        assert_eq!(state.get(0).unwrap().name.first, "Aén");
    }

    #[test]
    fn test_commit_follows_record_after_earlier_delete() {
        let users = sample(3);
        let mut actions = vec![DirectoryAction::EditAt(2), DirectoryAction::FocusNext];
        actions.extend(type_text("!"));
        actions.push(DirectoryAction::DeleteAt(0));
        actions.push(DirectoryAction::CommitEdit);

        let state = apply(loaded(3), actions);
        let mut expected = users[2].clone();
        expected.name.last.push('!');
        assert_eq!(snapshot(&state), vec![users[1].clone(), expected]);
    }

    #[test]
    fn test_commit_after_edited_record_deleted_is_dropped() {
        let state = apply(
            loaded(2),
            [
                DirectoryAction::EditAt(1),
                DirectoryAction::DeleteAt(1),
                DirectoryAction::CommitEdit,
            ],
        );
        assert_eq!(snapshot(&state), vec![sample(2)[0].clone()]);
        assert!(!state.dialog().is_open());
    }
}
