//! Shared test doubles for the highlighting pipeline
//!
//! A scriptable engine, an in-memory code block, and a fixed mode signal.
//! The engine records every call so tests can assert on load de-duplication
//! and render inputs.
//!
//! Note: Items may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashSet;

use glint::pipeline::RenderOptions;
use glint::theme::ModeSignal;
use glint::view::CodeBlock;
use glint::EngineError;
use glint::HighlightEngine;

/// Scriptable highlighting engine
///
/// Knows a fixed set of languages; rendering wraps the code in a marker
/// carrying the language and theme so tests can assert on both.
pub struct FakeEngine {
    pub known_languages: HashSet<String>,
    pub bundled: Vec<String>,
    pub failing_languages: HashSet<String>,
    pub failing_themes: HashSet<String>,
    pub load_calls: Vec<String>,
    pub render_calls: Vec<(String, String)>,
    pub theme_loads: Vec<String>,
}

impl FakeEngine {
    pub fn new() -> Self {
        let known = ["rust", "go", "python", "typescript", "javascript", "text"];
        Self {
            known_languages: known.iter().map(|s| s.to_string()).collect(),
            bundled: Vec::new(),
            failing_languages: HashSet::new(),
            failing_themes: HashSet::new(),
            load_calls: Vec::new(),
            render_calls: Vec::new(),
            theme_loads: Vec::new(),
        }
    }
}

impl HighlightEngine for FakeEngine {
    fn load_grammar(&mut self, id: &str) -> Result<(), EngineError> {
        self.load_calls.push(id.to_string());
        if self.known_languages.contains(id) {
            Ok(())
        } else {
            Err(EngineError::UnknownLanguage(id.to_string()))
        }
    }

    fn loaded_grammars(&self) -> Vec<String> {
        self.bundled.clone()
    }

    fn load_theme(&mut self, id: &str) -> Result<(), EngineError> {
        self.theme_loads.push(id.to_string());
        if self.failing_themes.contains(id) {
            Err(EngineError::UnknownTheme(id.to_string()))
        } else {
            Ok(())
        }
    }

    fn render(
        &mut self,
        code: &str,
        language: &str,
        theme: &str,
        _options: &RenderOptions,
    ) -> Result<String, EngineError> {
        self.render_calls
            .push((language.to_string(), theme.to_string()));
        if self.failing_languages.contains(language) {
            return Err(EngineError::RenderFailed {
                language: language.to_string(),
                reason: "simulated".to_string(),
            });
        }
        Ok(format!(
            "<pre class=\"hl\" data-lang=\"{}\" data-theme=\"{}\">{}</pre>",
            language, theme, code
        ))
    }
}

/// In-memory stand-in for a host block element
#[derive(Debug, Default)]
pub struct FakeBlock {
    pub source: String,
    pub classes: Vec<String>,
    pub processed: bool,
    pub markup: Option<String>,
    pub language: Option<String>,
    pub copy_source: Option<String>,
}

impl FakeBlock {
    pub fn new(source: &str, classes: &[&str]) -> Self {
        Self {
            source: source.to_string(),
            classes: classes.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl CodeBlock for FakeBlock {
    fn source(&self) -> String {
        self.source.clone()
    }

    fn class_tokens(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn is_processed(&self) -> bool {
        self.processed
    }

    fn set_processed(&mut self, processed: bool) {
        self.processed = processed;
    }

    fn set_markup(&mut self, markup: String) {
        self.markup = Some(markup);
    }

    fn set_language(&mut self, id: &str) {
        self.language = Some(id.to_string());
    }

    fn attach_copy(&mut self, code: &str) {
        self.copy_source = Some(code.to_string());
    }
}

/// Mode signal with a settable dark flag
pub struct FakeSignal {
    pub dark: bool,
}

impl ModeSignal for FakeSignal {
    fn is_dark_mode(&self) -> bool {
        self.dark
    }

    fn subscribe(&mut self, _callback: Box<dyn FnMut()>) {}
}
