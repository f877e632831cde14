//! Host document view interface
//!
//! The host framework owns the tree of rendered block elements; the core
//! only reads each block's source text and annotations and writes back
//! markup and the processed mark. [`CodeBlock`] is the seam between the two.

/// A candidate code block element supplied by the host document view
///
/// A block is "processed" once it has been highlighted under the currently
/// active theme. The mark is cleared wholesale on a theme flip so the next
/// pass re-highlights everything under the new theme.
pub trait CodeBlock {
    /// The block's original, unmodified code text
    fn source(&self) -> String;

    /// Class/annotation tokens attached to the block (language tag carrier)
    fn class_tokens(&self) -> Vec<String>;

    /// Whether the block already carries a current processed mark
    fn is_processed(&self) -> bool;

    /// Set or clear the processed mark
    fn set_processed(&mut self, processed: bool);

    /// Replace the block's rendered content in place
    fn set_markup(&mut self, markup: String);

    /// Tag the block with its resolved language id
    fn set_language(&mut self, id: &str);

    /// Attach the copy affordance, bound to the original code text
    ///
    /// Only called when the copy affordance is enabled in the render
    /// options. Hosts without a copy UI can ignore it.
    fn attach_copy(&mut self, code: &str);
}
