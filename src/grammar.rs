//! Lazy grammar cache
//!
//! Tracks which language grammars have been loaded into the highlighting
//! engine so each grammar is requested at most once per session. Load
//! failures are not recorded, so a grammar that failed once is retried the
//! next time a block asks for it.
//!
//! The cache is an explicitly owned instance (held by the plugin) and is
//! passed to every consumer that needs it, never a process-wide singleton.

use std::collections::HashSet;

use crate::engine::HighlightEngine;

/// Tracks loaded grammars and de-duplicates engine load requests
///
/// `ensure_loaded` holds `&mut` on both the cache and the engine for the
/// whole load, so two loads for the same id can never overlap; the loaded
/// set alone carries the at-most-once guarantee.
#[derive(Debug, Default)]
pub struct GrammarCache {
    /// Grammar ids confirmed loaded in the engine
    loaded: HashSet<String>,
}

impl GrammarCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a grammar is loaded, returning whether it is usable
    ///
    /// Fast path: an id already recorded as loaded returns `true` without
    /// touching the engine. Otherwise the engine's loaded set is consulted
    /// (grammars bundled at startup are recorded without a fresh load), and
    /// only then is a load request issued.
    ///
    /// Returns `false` when the load fails; the caller must degrade to the
    /// plain-text path. The failure is not cached.
    pub fn ensure_loaded<E: HighlightEngine + ?Sized>(&mut self, engine: &mut E, id: &str) -> bool {
        if self.loaded.contains(id) {
            return true;
        }

        // The engine may have this grammar bundled already
        if engine.loaded_grammars().iter().any(|g| g == id) {
            self.loaded.insert(id.to_string());
            return true;
        }

        match engine.load_grammar(id) {
            Ok(()) => {
                tracing::debug!("Loaded grammar '{}'", id);
                self.loaded.insert(id.to_string());
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load grammar '{}': {}", id, e);
                false
            }
        }
    }

    /// Whether an id has been recorded as loaded (pure lookup, no engine call)
    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.contains(id)
    }

    /// Snapshot of all loaded grammar ids (order unspecified)
    pub fn loaded_ids(&self) -> Vec<String> {
        self.loaded.iter().cloned().collect()
    }

    /// Drop all entries; subsequent `ensure_loaded` calls re-query the engine
    pub fn clear(&mut self) {
        self.loaded.clear();
    }
}
