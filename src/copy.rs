//! Copy-to-clipboard affordance
//!
//! Each highlighted block can carry a copy control bound to the block's
//! original code text, not the rendered markup. The control shows a
//! transient "Copied!"/"Failed" status that reverts to idle after a fixed
//! interval; a failed write is never retried.

use std::time::{Duration, Instant};

/// How long the copied/failed status stays visible
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Host clipboard interface
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard backed by `arboard`
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, String> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| format!("Failed to open system clipboard: {}", e))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        self.inner
            .set_text(text)
            .map_err(|e| format!("Failed to write clipboard: {}", e))
    }
}

/// Visible state of a copy control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    /// The label the host should display for this status
    pub fn label(&self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Failed",
        }
    }
}

/// Transient status state for one block's copy control
#[derive(Debug, Default)]
pub struct CopyControl {
    feedback: Option<(CopyStatus, Instant)>,
}

impl CopyControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the block's code to the clipboard and record the outcome
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, code: &str, now: Instant) -> CopyStatus {
        let status = match clipboard.write_text(code) {
            Ok(()) => CopyStatus::Copied,
            Err(e) => {
                tracing::warn!("Copy to clipboard failed: {}", e);
                CopyStatus::Failed
            }
        };
        self.feedback = Some((status, now));
        status
    }

    /// Current status, reverting to idle once the feedback interval elapses
    pub fn status(&mut self, now: Instant) -> CopyStatus {
        match self.feedback {
            Some((status, since)) => {
                if now.duration_since(since) >= Duration::from_millis(COPY_FEEDBACK_MS) {
                    self.feedback = None;
                    CopyStatus::Idle
                } else {
                    status
                }
            }
            None => CopyStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClipboard {
        fail: bool,
        written: Vec<String>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            if self.fail {
                Err("denied".to_string())
            } else {
                self.written.push(text.to_string());
                Ok(())
            }
        }
    }

    #[test]
    fn test_copy_writes_original_code() {
        let mut clipboard = FakeClipboard {
            fail: false,
            written: Vec::new(),
        };
        let mut control = CopyControl::new();
        let now = Instant::now();

        let status = control.copy(&mut clipboard, "fn main() {}", now);

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(clipboard.written, vec!["fn main() {}"]);
    }

    #[test]
    fn test_status_reverts_after_feedback_interval() {
        let mut clipboard = FakeClipboard {
            fail: false,
            written: Vec::new(),
        };
        let mut control = CopyControl::new();
        let base = Instant::now();

        control.copy(&mut clipboard, "code", base);
        assert_eq!(control.status(base + Duration::from_millis(500)), CopyStatus::Copied);
        assert_eq!(
            control.status(base + Duration::from_millis(COPY_FEEDBACK_MS)),
            CopyStatus::Idle
        );
    }

    #[test]
    fn test_failed_write_shows_transient_failure() {
        let mut clipboard = FakeClipboard {
            fail: true,
            written: Vec::new(),
        };
        let mut control = CopyControl::new();
        let base = Instant::now();

        let status = control.copy(&mut clipboard, "code", base);

        assert_eq!(status, CopyStatus::Failed);
        assert_eq!(control.status(base), CopyStatus::Failed);
        assert_eq!(
            control.status(base + Duration::from_millis(COPY_FEEDBACK_MS + 1)),
            CopyStatus::Idle
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CopyStatus::Idle.label(), "Copy");
        assert_eq!(CopyStatus::Copied.label(), "Copied!");
        assert_eq!(CopyStatus::Failed.label(), "Failed");
    }
}
