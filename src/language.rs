//! Language tag resolution
//!
//! Authors use informal shorthand in fence annotations (`ts`, `py`, `yml`),
//! while the highlighting engine expects canonical names. Resolution is a
//! pure string pass: lowercase the tag, consult a fixed alias table, and
//! fall back to the lowercased tag unchanged so an unknown language still
//! produces a deterministic id (the pipeline degrades later if the engine
//! rejects it).

/// Class-token prefix marking a block's language tag (`language-rust`)
pub const LANGUAGE_CLASS_PREFIX: &str = "language-";

/// Raw tag used when a block carries no language annotation
pub const PLAIN_TEXT: &str = "text";

/// Resolve a raw fence tag to the engine's canonical language id
///
/// Case-insensitive and total: every input maps to some id.
pub fn resolve(raw_tag: &str) -> String {
    let lower = raw_tag.to_lowercase();
    match lower.as_str() {
        "ts" => "typescript".to_string(),
        "js" => "javascript".to_string(),
        "py" => "python".to_string(),
        "rb" => "ruby".to_string(),
        "sh" => "bash".to_string(),
        "yml" => "yaml".to_string(),
        "golang" => "go".to_string(),
        "md" => "markdown".to_string(),
        "txt" => "text".to_string(),
        _ => lower,
    }
}

/// Detect the raw language tag from a block's class/annotation tokens
///
/// The first token carrying the `language-` prefix wins; a block with no
/// matching token is treated as plain text.
pub fn detect_tag<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    for token in tokens {
        if let Some(tag) = token.strip_prefix(LANGUAGE_CLASS_PREFIX) {
            return tag.to_string();
        }
    }
    PLAIN_TEXT.to_string()
}
