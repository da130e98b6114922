//! Settings form state.

use serde::{Deserialize, Serialize};

/// Dashboard settings.
///
/// Held in memory only; the settings endpoint replaces the whole value on PUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Email/push notifications enabled.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Dark mode enabled.
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Two-factor authentication enabled.
    #[serde(default)]
    pub two_factor: bool,
    /// Read-only API key shown in the form.
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

fn default_true() -> bool {
    true
}

fn default_api_key() -> String {
    "sk_test_51Mz...".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: default_true(),
            dark_mode: default_true(),
            two_factor: false,
            api_key: default_api_key(),
        }
    }
}
