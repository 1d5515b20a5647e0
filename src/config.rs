use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// User-level rendering preferences, read from
/// `~/.config/gridworld-svg/render.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default = "default_preview_cell_width")]
    pub preview_cell_width: u16,
}

fn default_pretty() -> bool {
    true
}

fn default_preview_cell_width() -> u16 {
    2
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pretty: default_pretty(),
            preview_cell_width: default_preview_cell_width(),
        }
    }
}

impl RenderOptions {
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::config_path()) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }

    /// Parse options, falling back to defaults on malformed input.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(options) => options,
            Err(e) => {
                warn!("invalid render options ({e}), using defaults");
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("gridworld-svg");
        path.push("render.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_keep_defaults() {
        let options = RenderOptions::from_json(r#"{"pretty": false}"#);
        assert!(!options.pretty);
        assert_eq!(options.preview_cell_width, 2);
    }

    #[test]
    fn test_malformed_options_fall_back() {
        assert_eq!(RenderOptions::from_json("not json"), RenderOptions::default());
    }
}
