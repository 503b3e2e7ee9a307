//! Symbol index: the API surface documentation references resolve against.
//!
//! ## Key Types
//!
//! - [`SymbolIndex`] - type name → methods/members/enums, plus global enums
//! - [`SymbolIndexBuilder`] - collects records, then freezes the index
//! - [`TypeSymbolView`] - what the translator needs from the current type
//! - [`TypeEntry`] - the index's own implementation of that view

mod index;
mod types;
mod view;


pub use index::{SymbolIndex, SymbolIndexBuilder};
pub use types::{EnumDef, EnumValue, EnumValueMatch, MethodSignature, TypeEntry, TypeKind};
pub use view::TypeSymbolView;
