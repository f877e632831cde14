//! glint - syntax-highlighted code blocks for rendered documents
//!
//! This crate provides the core of an editor extension that highlights
//! fenced code blocks in rendered and live-edited documents: language
//! resolution, lazy grammar caching, theme synchronization with the host's
//! light/dark mode, and a debounced detection loop for the editing surface.
//!
//! The highlighting engine, the document view, the mode signal, and the
//! clipboard are host-supplied collaborators behind traits.

pub mod config;
pub mod config_paths;
pub mod copy;
pub mod engine;
pub mod grammar;
pub mod language;
pub mod live;
pub mod pipeline;
pub mod plugin;
pub mod theme;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::HighlighterConfig;
pub use copy::{Clipboard, CopyControl, CopyStatus};
pub use engine::{EngineError, HighlightEngine};
pub use grammar::GrammarCache;
pub use live::{FencedBlock, LivePreview, RebuildDebouncer};
pub use pipeline::{HighlightPipeline, RenderOptions};
pub use plugin::HighlighterPlugin;
pub use theme::{Mode, ModeSignal, ThemeSync};
pub use view::CodeBlock;
