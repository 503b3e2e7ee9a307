//! The capability interface the translator needs from "the type being documented".

use super::types::{EnumDef, MethodSignature, TypeEntry, TypeKind};

/// Read-only view of a type's API surface.
///
/// The translator only ever talks to the current type through this trait, so
/// hosts can hand in their own records instead of an indexed [`TypeEntry`].
pub trait TypeSymbolView {
    /// The type's name as written in the documentation source.
    fn name(&self) -> &str;

    /// Which record shape the type comes from.
    fn kind(&self) -> TypeKind;

    /// Enums declared on this type, in declaration order.
    fn enums(&self) -> &[EnumDef];

    fn find_method(&self, name: &str) -> Option<&MethodSignature>;

    fn has_member(&self, name: &str) -> bool;

    /// Find a local enum by its exact name.
    fn find_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enums().iter().find(|e| e.name == name)
    }
}

impl TypeSymbolView for TypeEntry {
    fn name(&self) -> &str {
        TypeEntry::name(self)
    }

    fn kind(&self) -> TypeKind {
        TypeEntry::kind(self)
    }

    fn enums(&self) -> &[EnumDef] {
        TypeEntry::enums(self)
    }

    fn find_method(&self, name: &str) -> Option<&MethodSignature> {
        TypeEntry::find_method(self, name)
    }

    fn has_member(&self, name: &str) -> bool {
        TypeEntry::has_member(self, name)
    }
}
