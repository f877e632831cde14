//! Theme synchronization with the host's light/dark mode
//!
//! The host owns the light/dark state and its change notifications; the core
//! only maps that boolean through two configured theme ids. There are
//! exactly two states and no caching beyond the two ids, since the mode can
//! flip at any time.
//!
//! The transition effect on a flip (update the pipeline's theme, clear all
//! processed marks, re-render) is owned by the caller; see
//! [`crate::plugin::HighlighterPlugin::handle_mode_change`].

/// Host-reported color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Map the host's dark-mode boolean to a mode
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Mode::Dark
        } else {
            Mode::Light
        }
    }
}

/// Host light/dark mode signal
///
/// `subscribe` registers interest in the host's own change-notification
/// path; the callback is invoked synchronously by the host when the mode
/// flips. Registration is per pipeline instance and is not deduplicated.
pub trait ModeSignal {
    /// Whether the host is currently in dark mode
    fn is_dark_mode(&self) -> bool;

    /// Register a mode-change callback with the host
    fn subscribe(&mut self, callback: Box<dyn FnMut()>);
}

/// Maps the host mode onto configured light/dark theme ids
#[derive(Debug, Clone)]
pub struct ThemeSync {
    light_theme: String,
    dark_theme: String,
}

impl ThemeSync {
    pub fn new(light_theme: impl Into<String>, dark_theme: impl Into<String>) -> Self {
        Self {
            light_theme: light_theme.into(),
            dark_theme: dark_theme.into(),
        }
    }

    /// The theme id for a given mode
    pub fn theme_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.light_theme,
            Mode::Dark => &self.dark_theme,
        }
    }

    /// The theme id the pipeline should render with right now
    pub fn current_theme(&self, signal: &dyn ModeSignal) -> &str {
        self.theme_for(Mode::from_dark_flag(signal.is_dark_mode()))
    }

    /// Replace the configured theme ids (settings change)
    pub fn update_themes(&mut self, light_theme: impl Into<String>, dark_theme: impl Into<String>) {
        self.light_theme = light_theme.into();
        self.dark_theme = dark_theme.into();
    }

    pub fn light_theme(&self) -> &str {
        &self.light_theme
    }

    pub fn dark_theme(&self) -> &str {
        &self.dark_theme
    }
}
