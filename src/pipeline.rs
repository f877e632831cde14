//! Highlight pipeline
//!
//! Orchestrates one block's journey from raw fence tag to styled markup:
//! resolve the language, ensure its grammar is loaded, invoke the engine,
//! and on any failure degrade to escaped plain text. `render` never panics
//! and never propagates an engine error to its caller; a broken block must
//! not take the document view down with it.

use crate::engine::HighlightEngine;
use crate::grammar::GrammarCache;
use crate::language;
use crate::view::CodeBlock;

/// Per-render options, replaced wholesale on settings change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Ask the engine to emit line-number markers
    pub line_numbers: bool,
    /// Attach the copy affordance to processed blocks
    pub copy_button: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            copy_button: true,
        }
    }
}

/// Drives highlighting for rendered code blocks
///
/// Holds the currently active theme id and the render-option snapshot. The
/// grammar cache is consulted, never owned; the plugin passes it in so the
/// cache survives across renders and across pipeline reconfiguration.
#[derive(Debug)]
pub struct HighlightPipeline {
    theme: String,
    options: RenderOptions,
}

impl HighlightPipeline {
    /// Create a pipeline rendering under the given theme
    pub fn new(theme: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            theme: theme.into(),
            options,
        }
    }

    /// The active theme id
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Switch the active theme (takes effect on the next render)
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Replace the render-option snapshot
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Highlight one code block, degrading to plain text on any failure
    ///
    /// Returns `None` for empty/whitespace-only content (nothing to do),
    /// otherwise always returns markup.
    pub fn render<E: HighlightEngine + ?Sized>(
        &self,
        engine: &mut E,
        cache: &mut GrammarCache,
        code: &str,
        raw_tag: &str,
    ) -> Option<String> {
        if code.trim().is_empty() {
            return None;
        }

        let id = language::resolve(raw_tag);

        if !cache.ensure_loaded(engine, &id) {
            return Some(plain_text_fallback(code));
        }

        match engine.render(code, &id, &self.theme, &self.options) {
            Ok(markup) => Some(markup),
            Err(e) => {
                tracing::warn!("Highlighting failed for language '{}': {}", id, e);
                Some(plain_text_fallback(code))
            }
        }
    }

    /// Process every unprocessed code block in a rendered container
    ///
    /// Blocks are visited in document order. Each block is handled
    /// independently: a failed highlight degrades that block and never
    /// skips or corrupts its siblings. Successfully rendered blocks are
    /// marked processed and tagged with their resolved language.
    pub fn process_blocks<E, B>(&self, engine: &mut E, cache: &mut GrammarCache, blocks: &mut [B])
    where
        E: HighlightEngine + ?Sized,
        B: CodeBlock,
    {
        for block in blocks.iter_mut() {
            if block.is_processed() {
                continue;
            }

            let tokens = block.class_tokens();
            let raw_tag = language::detect_tag(tokens.iter().map(String::as_str));
            let code = block.source();

            let Some(markup) = self.render(engine, cache, &code, &raw_tag) else {
                continue;
            };

            block.set_markup(markup);
            block.set_language(&language::resolve(&raw_tag));
            block.set_processed(true);

            if self.options.copy_button {
                block.attach_copy(&code);
            }
        }
    }
}

/// Safe fallback markup for unrecognized or failed languages
///
/// Escapes the five reserved characters and wraps the code in a minimal
/// container carrying the theme-background style hook, so degraded blocks
/// still render consistently with highlighted ones.
pub fn plain_text_fallback(code: &str) -> String {
    format!(
        r#"<pre class="glint" style="background-color: var(--code-background)"><code>{}</code></pre>"#,
        escape_html(code)
    )
}

/// Escape the five HTML-reserved characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
