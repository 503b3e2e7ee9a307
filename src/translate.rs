//! The translation entry point: documentation text in, doc-comment lines out.
//!
//! Each line is scanned into segments, tags are rewritten (references through
//! the [`Resolver`], formatting tags through fixed replacements), leading
//! whitespace is trimmed and the result is emitted under the comment marker.
//!
//! Lines between `[codeblocks]` markers never go through the rewriter. By
//! default they are dropped; [`CodeBlockMode::Fence`] keeps them as a fenced
//! block instead.

use std::io;

use crate::emit::Emitter;
use crate::error::DocResult;
use crate::markup::{Segment, segments};
use crate::naming::{NameMapper, SwiftNames};
use crate::options::{CodeBlockMode, TranslateOptions};
use crate::resolve::{ResolvedReference, Resolver};
use crate::symbols::{SymbolIndex, TypeSymbolView};

const BLOCK_OPEN_MARKERS: &[&str] = &["[codeblocks]", "[codeblock]", "[codeblock "];
const BLOCK_CLOSE_MARKERS: &[&str] = &["[/codeblocks]", "[/codeblock]"];

// ============================================================================
// RESULTS
// ============================================================================

/// One rewritten line plus the references resolved while rewriting it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewrittenLine {
    pub text: String,
    pub references: Vec<ResolvedReference>,
}

/// Counters for one call to [`Translator::translate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    /// Lines written to the emitter.
    pub lines_emitted: usize,
    /// Input lines that produced no output (code blocks and their markers).
    pub lines_suppressed: usize,
    /// References that fell back to their raw rendering.
    pub unresolved: usize,
}

// ============================================================================
// TRANSLATOR
// ============================================================================

/// Translates documentation markup against a shared, read-only symbol index.
///
/// The translator itself holds no per-call state, so one instance can serve
/// any number of translations.
pub struct Translator<'i, N: NameMapper = SwiftNames> {
    index: &'i SymbolIndex,
    names: N,
    options: TranslateOptions,
}

impl<'i> Translator<'i> {
    /// A translator using the default naming conventions and options.
    pub fn new(index: &'i SymbolIndex) -> Self {
        Self::with_names(index, SwiftNames)
    }
}

impl<'i, N: NameMapper> Translator<'i, N> {
    pub fn with_names(index: &'i SymbolIndex, names: N) -> Self {
        Self {
            index,
            names,
            options: TranslateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    pub fn index(&self) -> &'i SymbolIndex {
        self.index
    }

    /// An emitter configured with this translator's indentation unit.
    pub fn emitter<W>(&self, out: W) -> Emitter<W> {
        Emitter::new(out).with_indent_unit(self.options.indent_unit.clone())
    }

    /// Rewrite a single line of markup. Never fails.
    pub fn rewrite_line(&self, current: Option<&dyn TypeSymbolView>, line: &str) -> RewrittenLine {
        let resolver = Resolver::new(self.index, &self.names).with_current(current);
        let mut text = String::with_capacity(line.len());
        let mut references = Vec::new();

        for segment in segments(line) {
            match segment {
                Segment::Text(literal) => text.push_str(literal),
                Segment::Tag(tag) => {
                    if let Some(reference) = resolver.resolve(&tag) {
                        text.push_str(&reference.text);
                        references.push(reference);
                    } else if let Some(replacement) = tag.kind.literal_replacement(tag.payload) {
                        text.push_str(replacement);
                    } else {
                        text.push_str(tag.source);
                    }
                }
            }
        }

        RewrittenLine {
            text: text.trim_start().to_string(),
            references,
        }
    }

    /// Translate a documentation block and emit it through `emitter`.
    ///
    /// `None` text returns immediately without touching the emitter. While the
    /// block is written the emitter's prefix is extended by the comment marker;
    /// it is restored before this returns, whatever the outcome.
    ///
    /// The only error is a failing output sink.
    pub fn translate<W: io::Write>(
        &self,
        emitter: &mut Emitter<W>,
        current: Option<&dyn TypeSymbolView>,
        text: Option<&str>,
    ) -> DocResult<TranslationSummary> {
        let Some(text) = text else {
            return Ok(TranslationSummary::default());
        };

        let mut ctx = TranslationContext::new(current);
        let mut out = emitter.with_prefix(&self.options.comment_marker);

        for line in text.lines() {
            let opens = contains_any(line, BLOCK_OPEN_MARKERS);
            let closes = contains_any(line, BLOCK_CLOSE_MARKERS);

            if opens && closes && matches!(ctx.block, BlockState::Normal) {
                tracing::debug!("[TRANSLATE] Single-line code block dropped: {:?}", line.trim());
                ctx.summary.lines_suppressed += 1;
            } else if opens && !closes {
                open_block(&mut ctx, line);
            } else if closes {
                ctx.summary.lines_suppressed += 1;
                self.close_block(&mut ctx, &mut *out)?;
            } else if let BlockState::InCodeBlock { lines } = &mut ctx.block {
                match self.options.code_blocks {
                    CodeBlockMode::Drop => ctx.summary.lines_suppressed += 1,
                    CodeBlockMode::Fence => lines.push(line),
                }
            } else {
                let rewritten = self.rewrite_line(ctx.current, line);
                ctx.summary.unresolved += rewritten
                    .references
                    .iter()
                    .filter(|r| !r.is_resolved())
                    .count();
                out.line(&rewritten.text)?;
                ctx.summary.lines_emitted += 1;
            }
        }

        if matches!(ctx.block, BlockState::InCodeBlock { .. }) {
            tracing::debug!("[TRANSLATE] Code block not closed before end of text");
            self.close_block(&mut ctx, &mut *out)?;
        }

        Ok(ctx.summary)
    }

    fn close_block<W: io::Write>(
        &self,
        ctx: &mut TranslationContext<'_, '_>,
        out: &mut Emitter<W>,
    ) -> io::Result<()> {
        let BlockState::InCodeBlock { lines } = std::mem::take(&mut ctx.block) else {
            tracing::debug!("[TRANSLATE] Stray code block close marker dropped");
            return Ok(());
        };
        tracing::debug!("[TRANSLATE] Leaving code block");

        if self.options.code_blocks == CodeBlockMode::Fence && !lines.is_empty() {
            let fence = "`".repeat(fence_length(&lines));
            let indent = common_indent(&lines);
            out.line(&fence)?;
            for line in &lines {
                out.line(line.get(indent.len()..).unwrap_or("").trim_end())?;
            }
            out.line(&fence)?;
            ctx.summary.lines_emitted += lines.len() + 2;
        }
        Ok(())
    }
}

// ============================================================================
// PER-CALL STATE
// ============================================================================

/// State private to one `translate` call.
struct TranslationContext<'c, 't> {
    current: Option<&'c dyn TypeSymbolView>,
    block: BlockState<'t>,
    summary: TranslationSummary,
}

impl<'c> TranslationContext<'c, '_> {
    fn new(current: Option<&'c dyn TypeSymbolView>) -> Self {
        Self {
            current,
            block: BlockState::Normal,
            summary: TranslationSummary::default(),
        }
    }
}

#[derive(Debug, Default)]
enum BlockState<'t> {
    #[default]
    Normal,
    /// Inside a code block; `lines` is only filled in fence mode.
    InCodeBlock { lines: Vec<&'t str> },
}

// ============================================================================
// CODE BLOCK HELPERS
// ============================================================================

fn open_block(ctx: &mut TranslationContext<'_, '_>, line: &str) {
    ctx.summary.lines_suppressed += 1;
    match ctx.block {
        BlockState::Normal => {
            tracing::debug!("[TRANSLATE] Entering code block at {:?}", line.trim());
            ctx.block = BlockState::InCodeBlock { lines: Vec::new() };
        }
        BlockState::InCodeBlock { .. } => {
            tracing::debug!("[TRANSLATE] Nested code block marker ignored");
        }
    }
}

fn contains_any(line: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| line.contains(m))
}

/// Smallest fence (at least three backticks) longer than any backtick run in `lines`.
fn fence_length(lines: &[&str]) -> usize {
    let mut max_run = 0;
    for line in lines {
        let mut current_run = 0;
        for c in line.chars() {
            if c == '`' {
                current_run += 1;
                max_run = max_run.max(current_run);
            } else {
                current_run = 0;
            }
        }
    }
    max_run.max(2) + 1
}

/// Leading whitespace shared by every non-blank line.
fn common_indent<'t>(lines: &[&'t str]) -> &'t str {
    let mut common: Option<&'t str> = None;
    for &line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let indent = &line[..line.len() - line.trim_start().len()];
        common = Some(match common {
            None => indent,
            Some(prev) => {
                let shared = prev
                    .char_indices()
                    .zip(indent.chars())
                    .find(|((_, a), b)| a != b)
                    .map_or(prev.len().min(indent.len()), |((i, _), _)| i);
                &prev[..shared]
            }
        });
    }
    common.unwrap_or("")
}
