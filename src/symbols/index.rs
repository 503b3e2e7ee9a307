//! The symbol index: read-only lookup of types, methods, members and enums.
//!
//! Built once through [`SymbolIndexBuilder`] before any translation runs and
//! never mutated afterwards, so a single index can back any number of
//! translations (including concurrent ones).

use indexmap::IndexMap;
use indexmap::map::Entry;
use smol_str::SmolStr;

use super::types::{EnumDef, EnumValueMatch, MethodSignature, TypeEntry};
use super::view::TypeSymbolView;

// ============================================================================
// SYMBOL INDEX
// ============================================================================

/// Type name → type entry, plus the enums that belong to no type.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    types: IndexMap<SmolStr, TypeEntry>,
    global_enums: Vec<EnumDef>,
}

impl SymbolIndex {
    /// An index with no symbols at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SymbolIndexBuilder {
        SymbolIndexBuilder::new()
    }

    /// Look up a type by its exact name.
    pub fn get_type(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    /// Look up a method declared on `type_name`.
    pub fn lookup_method(&self, type_name: &str, method: &str) -> Option<&MethodSignature> {
        self.get_type(type_name)?.find_method(method)
    }

    /// Check whether `type_name` declares a member called `member`.
    pub fn lookup_member(&self, type_name: &str, member: &str) -> bool {
        self.get_type(type_name)
            .is_some_and(|ty| ty.has_member(member))
    }

    /// Find `value` among the enums declared on `current`.
    ///
    /// Enums are scanned in declaration order, then their values in
    /// declaration order; the first hit wins.
    pub fn lookup_local_enum_value<'a>(
        &self,
        current: Option<&'a dyn TypeSymbolView>,
        value: &str,
    ) -> Option<EnumValueMatch<'a>> {
        find_enum_value(current?.enums(), value)
    }

    /// Find `value` among the global enums (first declared wins).
    pub fn lookup_global_enum_value(&self, value: &str) -> Option<EnumValueMatch<'_>> {
        find_enum_value(&self.global_enums, value)
    }

    pub fn global_enums(&self) -> &[EnumDef] {
        &self.global_enums
    }

    /// Iterate over all types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    /// Number of indexed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// No types indexed. Global enums are not counted, as in [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn find_enum_value<'a>(enums: &'a [EnumDef], value: &str) -> Option<EnumValueMatch<'a>> {
    enums.iter().find_map(|enum_def| {
        enum_def
            .find_value(value)
            .map(|value| EnumValueMatch { enum_def, value })
    })
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects type and enum records, then freezes them into a [`SymbolIndex`].
///
/// Registering the same type or global enum twice keeps the first
/// registration, so feeding the same records again is harmless.
#[derive(Debug, Default)]
pub struct SymbolIndexBuilder {
    types: IndexMap<SmolStr, TypeEntry>,
    global_enums: Vec<EnumDef>,
}

impl SymbolIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, entry: TypeEntry) -> &mut Self {
        match self.types.entry(SmolStr::new(entry.name())) {
            Entry::Occupied(_) => {
                tracing::debug!(
                    "[INDEX] Duplicate type '{}' ignored, keeping first registration",
                    entry.name()
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
        self
    }

    pub fn add_global_enum(&mut self, def: EnumDef) -> &mut Self {
        if self.global_enums.iter().any(|e| e.name == def.name) {
            tracing::debug!(
                "[INDEX] Duplicate global enum '{}' ignored, keeping first registration",
                def.name
            );
        } else {
            self.global_enums.push(def);
        }
        self
    }

    /// Builder-style variant of [`add_type`](Self::add_type).
    pub fn with_type(mut self, entry: TypeEntry) -> Self {
        self.add_type(entry);
        self
    }

    /// Builder-style variant of [`add_global_enum`](Self::add_global_enum).
    pub fn with_global_enum(mut self, def: EnumDef) -> Self {
        self.add_global_enum(def);
        self
    }

    pub fn build(self) -> SymbolIndex {
        tracing::debug!(
            "[INDEX] Built symbol index: {} types, {} global enums",
            self.types.len(),
            self.global_enums.len()
        );
        SymbolIndex {
            types: self.types,
            global_enums: self.global_enums,
        }
    }
}
