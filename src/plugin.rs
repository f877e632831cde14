//! Top-level plugin wiring
//!
//! [`HighlighterPlugin`] owns the engine, the grammar cache, the pipeline,
//! and the theme mapping, and exposes the handful of hooks the host calls:
//! process a rendered container, react to a mode flip, and apply changed
//! settings.
//!
//! Engine construction is the only fatal failure: if the engine cannot be
//! built, the feature is off for the session and the host keeps rendering
//! raw content. Everything after that degrades per block.

use anyhow::Context;

use crate::config::HighlighterConfig;
use crate::engine::{EngineError, HighlightEngine};
use crate::grammar::GrammarCache;
use crate::language;
use crate::pipeline::{HighlightPipeline, RenderOptions};
use crate::theme::{Mode, ModeSignal, ThemeSync};
use crate::view::CodeBlock;

/// Owns the highlighting feature for one host session
pub struct HighlighterPlugin<E: HighlightEngine> {
    engine: E,
    cache: GrammarCache,
    pipeline: HighlightPipeline,
    theme_sync: ThemeSync,
    config: HighlighterConfig,
}

impl<E: HighlightEngine> HighlighterPlugin<E> {
    /// Initialize the highlighting feature
    ///
    /// Takes the outcome of engine construction: an engine that could not
    /// be built is fatal for the session, logged as an error, and surfaced
    /// to the host so it can keep serving unhighlighted content. Theme and
    /// grammar preloading failures are warnings only.
    pub fn initialize(
        engine: Result<E, EngineError>,
        config: HighlighterConfig,
        signal: &dyn ModeSignal,
    ) -> anyhow::Result<Self> {
        let mut engine = engine
            .map_err(|e| {
                tracing::error!("Failed to initialize highlighting engine: {}", e);
                e
            })
            .context("highlighting engine could not be constructed")?;

        let theme_sync = ThemeSync::new(config.theme.light.clone(), config.theme.dark.clone());

        // Both themes are needed the moment the mode flips, so load them up
        // front; a missing theme degrades that mode, not the session
        for theme in [theme_sync.light_theme(), theme_sync.dark_theme()] {
            if let Err(e) = engine.load_theme(theme) {
                tracing::warn!("Failed to load theme '{}': {}", theme, e);
            }
        }

        let current = theme_sync
            .current_theme(signal)
            .to_string();
        let pipeline = HighlightPipeline::new(
            current,
            RenderOptions {
                line_numbers: config.line_numbers,
                copy_button: config.copy_button,
            },
        );

        let mut cache = GrammarCache::new();
        if !config.lazy_load {
            preload_grammars(&mut engine, &mut cache, &config.languages);
        }

        tracing::info!(
            "Highlighter initialized (theme '{}', {} grammars preloaded)",
            pipeline.theme(),
            cache.loaded_ids().len()
        );

        Ok(Self {
            engine,
            cache,
            pipeline,
            theme_sync,
            config,
        })
    }

    /// Process every unprocessed code block in a rendered container
    pub fn process_document<B: CodeBlock>(&mut self, blocks: &mut [B]) {
        self.pipeline
            .process_blocks(&mut self.engine, &mut self.cache, blocks);
    }

    /// Clear all processed marks and re-highlight the container
    pub fn refresh<B: CodeBlock>(&mut self, blocks: &mut [B]) {
        for block in blocks.iter_mut() {
            block.set_processed(false);
        }
        self.process_document(blocks);
    }

    /// React to a host light/dark mode flip
    ///
    /// Invoked by the host from its own change-notification path. Updates
    /// the pipeline's theme, invalidates every processed mark (they were
    /// set under a theme that is no longer active), and re-renders.
    pub fn handle_mode_change<B: CodeBlock>(&mut self, signal: &dyn ModeSignal, blocks: &mut [B]) {
        let mode = Mode::from_dark_flag(signal.is_dark_mode());
        let theme = self.theme_sync.theme_for(mode).to_string();

        if theme == self.pipeline.theme() {
            return;
        }

        tracing::debug!("Mode changed, switching theme to '{}'", theme);
        self.pipeline.set_theme(theme);
        self.refresh(blocks);
    }

    /// Apply changed settings at runtime
    ///
    /// Updates themes and render options, then invalidates every processed
    /// mark and re-renders the container: marks set under the previous
    /// configuration are stale. Newly configured themes are loaded into
    /// the engine, and the grammar list is preloaded when lazy loading is
    /// off.
    pub fn apply_config<B: CodeBlock>(
        &mut self,
        config: HighlighterConfig,
        signal: &dyn ModeSignal,
        blocks: &mut [B],
    ) {
        self.theme_sync
            .update_themes(config.theme.light.clone(), config.theme.dark.clone());

        for theme in [self.theme_sync.light_theme(), self.theme_sync.dark_theme()] {
            if let Err(e) = self.engine.load_theme(theme) {
                tracing::warn!("Failed to load theme '{}': {}", theme, e);
            }
        }

        let current = self.theme_sync.current_theme(signal).to_string();
        self.pipeline.set_theme(current);
        self.pipeline.set_options(RenderOptions {
            line_numbers: config.line_numbers,
            copy_button: config.copy_button,
        });

        if !config.lazy_load {
            preload_grammars(&mut self.engine, &mut self.cache, &config.languages);
        }

        self.config = config;
        self.refresh(blocks);
    }

    /// The theme id blocks are currently rendered with
    pub fn current_theme(&self) -> &str {
        self.pipeline.theme()
    }

    pub fn grammar_cache(&self) -> &GrammarCache {
        &self.cache
    }

    pub fn config(&self) -> &HighlighterConfig {
        &self.config
    }
}

/// Load the configured grammar list eagerly
///
/// Individual failures are already logged by the cache; preloading never
/// aborts, a missing grammar just falls back to lazy loading later.
fn preload_grammars<E: HighlightEngine>(engine: &mut E, cache: &mut GrammarCache, ids: &[String]) {
    for raw in ids {
        let id = language::resolve(raw);
        cache.ensure_loaded(engine, &id);
    }
}
