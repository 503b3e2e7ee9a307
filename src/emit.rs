//! Line emission with scoped indentation.
//!
//! An [`Emitter`] owns the output sink and the current line prefix. Prefix
//! changes are scoped: [`Emitter::with_prefix`] and [`Emitter::indented`] hand
//! out a [`PrefixGuard`] that restores the previous prefix when dropped, on
//! every exit path.

use std::borrow::Cow;
use std::io;
use std::ops::{Deref, DerefMut};

/// Writes prefixed lines to an [`io::Write`] sink.
#[derive(Debug)]
pub struct Emitter<W> {
    out: W,
    prefix: String,
    indent_unit: String,
}

impl<W> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prefix: String::new(),
            indent_unit: "    ".to_string(),
        }
    }

    /// Set the string pushed by [`indented`](Self::indented).
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// The prefix every line currently gets.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extend the prefix until the returned guard is dropped.
    pub fn with_prefix(&mut self, extra: &str) -> PrefixGuard<'_, W> {
        let restore_len = self.prefix.len();
        self.prefix.push_str(extra);
        PrefixGuard {
            emitter: self,
            restore_len,
        }
    }

    /// Indent one level (for nested declarations) until the guard is dropped.
    pub fn indented(&mut self) -> PrefixGuard<'_, W> {
        self.indented_by(1)
    }

    /// Indent `level` levels at once until the guard is dropped.
    pub fn indented_by(&mut self, level: usize) -> PrefixGuard<'_, W> {
        let restore_len = self.prefix.len();
        for _ in 0..level {
            self.prefix.push_str(&self.indent_unit);
        }
        PrefixGuard {
            emitter: self,
            restore_len,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Emitter<W> {
    /// Write `prefix + text + "\n"`. No wrapping, no length limit.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(self.prefix.as_bytes())?;
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")
    }
}

impl Emitter<Vec<u8>> {
    /// An emitter that collects into memory.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Everything written so far.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.out)
    }
}

/// Restores the emitter's prefix on drop.
///
/// Derefs to the [`Emitter`], so lines are written through the guard.
#[derive(Debug)]
pub struct PrefixGuard<'e, W> {
    emitter: &'e mut Emitter<W>,
    restore_len: usize,
}

impl<W> Deref for PrefixGuard<'_, W> {
    type Target = Emitter<W>;

    fn deref(&self) -> &Self::Target {
        &*self.emitter
    }
}

impl<W> DerefMut for PrefixGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.emitter
    }
}

impl<W> Drop for PrefixGuard<'_, W> {
    fn drop(&mut self) {
        self.emitter.prefix.truncate(self.restore_len);
    }
}
