//! Constants used throughout the application
//!
//! This module centralizes magic strings, user-facing messages, and default values
//! to improve maintainability and consistency.

// API defaults
pub const DEFAULT_BASE_URL: &str = "https://social-network.samuraijs.com/api/1.1/";
pub const DEFAULT_API_KEY_ENV: &str = "TODOSYNC_API_KEY";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// Upper bound accepted for `api.timeout_seconds`
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
/// Header carrying the API key (header names are case-insensitive)
pub const API_KEY_HEADER: &str = "api-key";

// Error Messages
/// Reported when the server or transport gives no usable message
pub const ERROR_GENERIC: &str = "Some error occurred";
pub const ERROR_TASK_NOT_FOUND: &str = "⚠️  Task not found in the state";

// Config
pub const CONFIG_FILE_NAME: &str = "todosync.toml";
pub const CONFIG_DIR_NAME: &str = "todosync";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "todosync.log";

/// Entries kept by the in-memory log buffer; older ones are dropped first
pub const MAX_LOG_ENTRIES: usize = 1000;
