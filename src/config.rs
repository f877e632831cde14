//! Highlighter configuration persistence
//!
//! Stores user preferences in `~/.config/glint/config.yaml`

use serde::{Deserialize, Serialize};

/// Theme ids for the host's light and dark modes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePair {
    #[serde(default = "default_light_theme")]
    pub light: String,
    #[serde(default = "default_dark_theme")]
    pub dark: String,
}

fn default_light_theme() -> String {
    "github-light".to_string()
}

fn default_dark_theme() -> String {
    "one-dark-pro".to_string()
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            light: default_light_theme(),
            dark: default_dark_theme(),
        }
    }
}

/// Highlighter configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlighterConfig {
    /// Theme ids used in light and dark mode
    #[serde(default)]
    pub theme: ThemePair,
    /// Grammars loaded eagerly at startup
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Load grammars on first use instead of all at startup
    #[serde(default = "default_true")]
    pub lazy_load: bool,
    /// Ask the engine to emit line-number markers
    #[serde(default)]
    pub line_numbers: bool,
    /// Attach a copy control to highlighted blocks
    #[serde(default = "default_true")]
    pub copy_button: bool,
    /// Run fenced-block detection in the live-editing surface
    ///
    /// Read by the host, not this crate: the host decides whether to
    /// construct a [`crate::live::LivePreview`] for its editor view.
    #[serde(default = "default_true")]
    pub live_preview: bool,
}

fn default_true() -> bool {
    true
}

fn default_languages() -> Vec<String> {
    [
        "go",
        "typescript",
        "python",
        "rust",
        "yaml",
        "json",
        "bash",
        "javascript",
        "java",
        "sql",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            theme: ThemePair::default(),
            languages: default_languages(),
            lazy_load: true,
            line_numbers: false,
            copy_button: true,
            live_preview: true,
        }
    }
}

impl HighlighterConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
