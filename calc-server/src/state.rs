//! Application state

use chrono::{DateTime, Utc};

/// Shared application state
///
/// Every field is read-only after startup; handlers only echo them back.
/// Cloning is cheap enough that no Arc wrapper is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment environment name (`APP_ENV`)
    pub environment: String,

    /// Git commit the running build was produced from (`GIT_SHA`)
    pub git_sha: String,

    /// Build timestamp stamped by the pipeline (`BUILD_DATE`)
    pub build_date: String,

    /// Process start time, echoed as `deployed_at`
    pub deployed_at: DateTime<Utc>,
}

impl AppState {
    /// Create application state from the environment
    ///
    /// Unset variables get the conventional defaults; nothing here can fail.
    pub fn from_env() -> Self {
        Self {
            environment: env_or("APP_ENV", "production"),
            git_sha: env_or("GIT_SHA", "unknown"),
            build_date: env_or("BUILD_DATE", "unknown"),
            deployed_at: Utc::now(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
