//! Live preview support for the editing surface
//!
//! Rebuilding highlighting decorations on every keystroke would make typing
//! lag, so view changes are debounced: each change supersedes the previous
//! pending rebuild, and only the most recently scheduled one ever runs. The
//! rebuild itself performs fenced code *detection only* — replacing content
//! under an in-progress edit would corrupt it, so the live surface locates
//! blocks without restyling them.

use std::ops::Range;
use std::time::{Duration, Instant};

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use crate::language;

/// Quiet period after the last view change before a rebuild executes
pub const REBUILD_DEBOUNCE_MS: u64 = 150;

/// Debounced rebuild scheduling with cancellation
///
/// At most one rebuild is pending at a time; the pending deadline is the
/// cancellation handle. Scheduling overwrites it, teardown drops it, and a
/// dropped deadline never fires.
#[derive(Debug, Default)]
pub struct RebuildDebouncer {
    deadline: Option<Instant>,
}

impl RebuildDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view update, canceling any pending rebuild
    ///
    /// A new rebuild is scheduled only when the document or viewport
    /// actually changed.
    pub fn on_view_change(&mut self, changed: bool, now: Instant) {
        self.deadline = None;
        if changed {
            self.deadline = Some(now + Duration::from_millis(REBUILD_DEBOUNCE_MS));
        }
    }

    /// Whether the quiet period has elapsed; consumes the pending rebuild
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel any pending rebuild (called on teardown)
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// A fenced code region detected in the editing surface's source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Byte range of the whole fenced block, fences included
    pub range: Range<usize>,
    /// Raw language tag from the fence info string (empty fence → `text`)
    pub raw_tag: String,
    /// Canonical language id after alias resolution
    pub language: String,
}

/// Locate fenced code blocks and their language tags in markdown source
///
/// Only explicitly fenced blocks count; indented code blocks carry no
/// language annotation and are left to the host's default rendering.
pub fn scan_fenced_blocks(source: &str) -> Vec<FencedBlock> {
    let parser = Parser::new_ext(source, Options::empty());
    let mut blocks = Vec::new();

    for (event, range) in parser.into_offset_iter() {
        if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = event {
            let raw_tag = fence_tag(&info);
            let language = language::resolve(&raw_tag);
            blocks.push(FencedBlock {
                range,
                raw_tag,
                language,
            });
        }
    }

    blocks
}

/// Extract the language tag from a fence info string
///
/// Info strings may carry extra annotations (` ```rust,no_run `); only the
/// first word is the language tag.
fn fence_tag(info: &str) -> String {
    let tag = info
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or("");
    if tag.is_empty() {
        language::PLAIN_TEXT.to_string()
    } else {
        tag.to_string()
    }
}

/// Debounced fenced-block detection for one editing surface
///
/// Owns the debouncer and the last detection results. The host calls
/// [`LivePreview::on_update`] from its view-update hook and
/// [`LivePreview::poll`] from its timer/idle path.
#[derive(Debug, Default)]
pub struct LivePreview {
    debouncer: RebuildDebouncer,
    blocks: Vec<FencedBlock>,
}

impl LivePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a view update (document or viewport change) to the debouncer
    pub fn on_update(&mut self, changed: bool, now: Instant) {
        self.debouncer.on_view_change(changed, now);
    }

    /// Run the detection pass if the quiet period has elapsed
    ///
    /// Returns true when a rescan happened. `source` is the surface's text
    /// at the time of the call, so a superseded schedule never observes
    /// stale content.
    pub fn poll(&mut self, source: &str, now: Instant) -> bool {
        if !self.debouncer.fire_due(now) {
            return false;
        }

        self.blocks = scan_fenced_blocks(source);
        tracing::debug!("Live preview detected {} fenced blocks", self.blocks.len());
        true
    }

    /// The most recent detection results
    pub fn blocks(&self) -> &[FencedBlock] {
        &self.blocks
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Cancel any pending rebuild; no callback runs after teardown
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_debouncer_fires_after_quiet_period() {
        let base = Instant::now();
        let mut debouncer = RebuildDebouncer::new();

        debouncer.on_view_change(true, base);
        assert!(!debouncer.fire_due(at(base, REBUILD_DEBOUNCE_MS - 1)));
        assert!(debouncer.fire_due(at(base, REBUILD_DEBOUNCE_MS)));

        // Consumed: a second poll does not fire again
        assert!(!debouncer.fire_due(at(base, REBUILD_DEBOUNCE_MS + 100)));
    }

    #[test]
    fn test_debouncer_coalesces_rapid_changes() {
        let base = Instant::now();
        let mut debouncer = RebuildDebouncer::new();

        debouncer.on_view_change(true, base);
        debouncer.on_view_change(true, at(base, 50));
        debouncer.on_view_change(true, at(base, 100));

        // Only the last schedule counts
        assert!(!debouncer.fire_due(at(base, 100 + REBUILD_DEBOUNCE_MS - 1)));
        assert!(debouncer.fire_due(at(base, 100 + REBUILD_DEBOUNCE_MS)));
        assert!(!debouncer.fire_due(at(base, 1000)));
    }

    #[test]
    fn test_unchanged_update_cancels_pending_rebuild() {
        let base = Instant::now();
        let mut debouncer = RebuildDebouncer::new();

        debouncer.on_view_change(true, base);
        debouncer.on_view_change(false, at(base, 10));

        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_due(at(base, 1000)));
    }

    #[test]
    fn test_cancel_discards_pending_rebuild() {
        let base = Instant::now();
        let mut debouncer = RebuildDebouncer::new();

        debouncer.on_view_change(true, base);
        debouncer.cancel();

        assert!(!debouncer.fire_due(at(base, 1000)), "Canceled rebuild must never execute");
    }

    #[test]
    fn test_scan_finds_fenced_blocks_with_tags() {
        let source = "# Title\n\n```rust\nfn main() {}\n```\n\ntext\n\n```py\nprint(1)\n```\n";
        let blocks = scan_fenced_blocks(source);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].raw_tag, "rust");
        assert_eq!(blocks[0].language, "rust");
        assert_eq!(blocks[1].raw_tag, "py");
        assert_eq!(blocks[1].language, "python");

        // Ranges cover the fences themselves
        assert!(source[blocks[0].range.clone()].starts_with("```rust"));
    }

    #[test]
    fn test_scan_untagged_fence_is_plain_text() {
        let blocks = scan_fenced_blocks("```\nplain\n```\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw_tag, "text");
    }

    #[test]
    fn test_scan_strips_fence_annotations() {
        let blocks = scan_fenced_blocks("```rust,no_run\nfn f() {}\n```\n");
        assert_eq!(blocks[0].raw_tag, "rust");
    }

    #[test]
    fn test_scan_ignores_indented_code() {
        let blocks = scan_fenced_blocks("para\n\n    indented code\n");
        assert!(blocks.is_empty());
    }
}
