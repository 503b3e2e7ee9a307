//! Translation options

/// How `[codeblocks]` regions are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CodeBlockMode {
    /// Suppress every line of the block.
    #[default]
    Drop,
    /// Emit the block's lines verbatim inside a Markdown fence.
    Fence,
}

/// Options for documentation translation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Deserialize),
    serde(default)
)]
pub struct TranslateOptions {
    /// Marker appended to the emitter prefix while a documentation block is written
    pub comment_marker: String,
    /// Prefix added per nesting level by [`Emitter::indented_by`](crate::Emitter::indented_by)
    pub indent_unit: String,
    /// What to do with `[codeblocks]` regions
    pub code_blocks: CodeBlockMode,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            comment_marker: "/// ".to_string(),
            indent_unit: "    ".to_string(),
            code_blocks: CodeBlockMode::Drop,
        }
    }
}
