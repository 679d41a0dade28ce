//! # User Directory TUI
//!
//! A terminal user directory backed by the randomuser.me API.
//!
//! ## Features
//! - Initial load of random users into a table
//! - Add (fetch one more), edit and delete, all in memory
//! - Light/dark theme sampled from the terminal, toggled manually
//! - Navigation drawer, help popup, fetch error notifications
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (reducer-driven state)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod theme;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{DirectoryEntry, EditField, Notification, User, UserId};
pub use config::Config;
pub use error::FetchError;
pub use theme::{Palette, ThemeMode, ThemePreference};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, DirectoryAction, DirectoryState};
pub use network::NetworkActor;
