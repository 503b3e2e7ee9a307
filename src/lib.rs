//! # docbridge
//!
//! Translates engine API documentation markup (`[method foo]`, `[constant BAR]`,
//! `[Node]`, `[b]...[/b]`, ...) into DocC-style doc comments, resolving
//! cross-references against a symbol index of the bound API.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! translate   → Entry point: line loop, code blocks, summary
//!   ↓
//! emit        → Emitter with scoped prefix guards
//!   ↓
//! resolve     → Reference resolution with fallbacks
//!   ↓
//! naming      → NameMapper trait, Swift conventions
//!   ↓
//! symbols     → SymbolIndex, TypeSymbolView
//!   ↓
//! markup      → Logos lexer, {text | tag} segments
//!   ↓
//! base        → Primitives (TextRange, identifier text utils)
//! ```
//!
//! ## Example
//!
//! ```
//! use docbridge::{Emitter, SymbolIndex, Translator, TypeEntry};
//!
//! let index = SymbolIndex::builder()
//!     .with_type(TypeEntry::class("Node").with_method("get_name", Vec::<&str>::new()))
//!     .build();
//! let node = index.get_type("Node").unwrap();
//!
//! let translator = Translator::new(&index);
//! let mut out = Emitter::buffer();
//! translator
//!     .translate(&mut out, Some(node), Some("Returns [method get_name]."))
//!     .unwrap();
//!
//! assert_eq!(out.text(), "/// Returns ``Node/getName()``.\n");
//! ```

// ============================================================================
// MODULES (dependency order: base → markup → symbols → naming → resolve → emit → translate)
// ============================================================================

/// Foundation types: TextRange, identifier text utilities
pub mod base;

/// Markup scanning: Logos lexer and tag segments
pub mod markup;

/// Symbol index: types, methods, members, enums
pub mod symbols;

/// Naming conventions for the target language
pub mod naming;

/// Reference resolution
pub mod resolve;

/// Line emission with scoped prefixes
pub mod emit;

/// Translation entry point
pub mod translate;

mod error;
mod options;

/// API description loading: JSON → SymbolIndex
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use emit::{Emitter, PrefixGuard};
pub use error::{DocError, DocResult};
pub use naming::{NameMapper, SwiftNames};
pub use options::{CodeBlockMode, TranslateOptions};
pub use resolve::{ResolutionPath, ResolvedReference, Resolver};
pub use symbols::{
    EnumDef, EnumValue, MethodSignature, SymbolIndex, SymbolIndexBuilder, TypeEntry, TypeKind,
    TypeSymbolView,
};
pub use translate::{RewrittenLine, TranslationSummary, Translator};
