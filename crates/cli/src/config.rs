//! Console configuration loaded from environment variables.

/// Console configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `FRONTDESK_NAME` — establishment display name (default: `"Frontdesk"`)
/// - `RUST_LOG` — tracing filter directive (default: `"warn"`, so log lines
///   stay out of the interactive menu unless asked for)
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            name: std::env::var("FRONTDESK_NAME").unwrap_or_else(|_| "Frontdesk".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Frontdesk".to_string(),
            log_level: "warn".to_string(),
        }
    }
}
