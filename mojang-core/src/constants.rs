//! Crate-wide constants.

/// Application name, used for the config and log directories.
pub const APP_NAME: &str = "mojang-api";

/// Base URL of the account/profile API.
pub const API_BASE_URL: &str = "https://api.mojang.com";

/// Base URL of the session server (profiles, blocked servers).
pub const SESSION_SERVER_BASE_URL: &str = "https://sessionserver.mojang.com";

/// Base URL of the Yggdrasil authentication server.
pub const AUTH_SERVER_BASE_URL: &str = "https://authserver.mojang.com";

/// Base URL of the service status page.
pub const STATUS_BASE_URL: &str = "https://status.mojang.com";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix for rolling log files.
pub const LOG_FILE_NAME: &str = "mojang-api.log";
