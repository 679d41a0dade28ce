//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Random-user endpoint queried for new records
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Number of records fetched on startup
pub const DEFAULT_INITIAL_COUNT: usize = 5;

/// Number of records fetched by "Add User" (and by default)
pub const DEFAULT_FETCH_COUNT: usize = 1;

/// HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Automatic retries after a transport failure
pub const DEFAULT_RETRIES: u32 = 1;

/// Log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "userdir.log";

/// Config directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "userdir";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Terminal width (columns) from which the wide layout is used.
/// Roughly a 600px viewport at 8px per cell.
pub const WIDE_LAYOUT_MIN_COLS: u16 = 75;

/// Width of the navigation drawer in columns
pub const DRAWER_WIDTH: u16 = 25;

/// Navigation drawer entries (inert)
pub const NAV_ITEMS: [&str; 3] = ["Dashboard", "Profile", "Settings"];

/// Application name
pub const APP_NAME: &str = "User Directory";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
