//! Highlighting engine interface
//!
//! The tokenizer/highlighter itself is an external collaborator. Everything
//! the core needs from it is expressed by the [`HighlightEngine`] trait:
//! loading grammars and themes on demand, reporting what is already loaded,
//! and turning `(code, language, theme)` into styled markup.
//!
//! Engine failures are values, never panics. The pipeline converts them into
//! the plain-text fallback so a broken grammar can never break the document
//! view.

use thiserror::Error;

use crate::pipeline::RenderOptions;

/// Errors reported by the external highlighting engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine does not know the requested language
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    /// The engine does not know the requested theme
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// The grammar or theme resource could not be loaded
    #[error("failed to load '{id}': {reason}")]
    LoadFailed { id: String, reason: String },

    /// Tokenizing/rendering failed for a specific input
    #[error("render failed for language '{language}': {reason}")]
    RenderFailed { language: String, reason: String },

    /// The engine itself could not be constructed
    #[error("engine initialization failed: {0}")]
    Init(String),
}

/// External tokenizing/highlighting engine
///
/// Implementations wrap whatever highlighter the host embeds. The core only
/// assumes that grammars and themes are addressed by string ids and that
/// `render` either returns finished markup or an error.
pub trait HighlightEngine {
    /// Load a language grammar into the engine
    fn load_grammar(&mut self, id: &str) -> Result<(), EngineError>;

    /// Ids of all grammars currently loaded (bundled or loaded on demand)
    fn loaded_grammars(&self) -> Vec<String>;

    /// Load a theme into the engine's registered theme set
    fn load_theme(&mut self, id: &str) -> Result<(), EngineError>;

    /// Produce styled markup for `code` under the given language and theme
    fn render(
        &mut self,
        code: &str,
        language: &str,
        theme: &str,
        options: &RenderOptions,
    ) -> Result<String, EngineError>;
}
