//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state through the directory reducer, and emits
//! network commands and render state.

pub mod directory;
pub mod state;
pub mod actor;
pub mod commands;

pub use directory::{reduce, DirectoryAction, DirectoryState, EditDialog, EditSession};
pub use state::{AppState, FetchPurpose};
pub use actor::AppActor;
