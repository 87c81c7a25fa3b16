//! Constants used throughout the CLI.

/// Default sync server queried when no arguments are given.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8088";

/// Default client UUID.
pub const DEFAULT_UUID: &str = "default-uuid";

/// Default decryption password.
pub const DEFAULT_PASSWORD: &str = "default-password";

/// Env file written into the working directory unless overridden.
pub const DEFAULT_ENV_FILE: &str = "rsshub.env";

/// Built-in site -> environment-variable mapping, extensible via the
/// config file's `[export.mapping]` table.
pub const DEFAULT_ENV_MAPPING: &[(&str, &str)] = &[
    ("bilibili.com", "BILIBILI_COOKIE_12345678"),
    ("zhihu.com", "ZHIHU_COOKIES"),
    ("xiaohongshu.com", "XIAOHONGSHU_COOKIE"),
];

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error
/// - 2: Usage error (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Could not reach the sync server.
    pub const TRANSPORT: i32 = 3;

    /// Invalid user input or configuration.
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (likely wrong password or crypto variant).
    pub const DECRYPT_FAILED: i32 = 5;
}
