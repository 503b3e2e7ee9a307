//! Symbol record types: enums, method signatures and indexed types.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

// ============================================================================
// ENUMS
// ============================================================================

/// A single enum value: its declared name and integer value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub name: SmolStr,
    pub value: i64,
}

/// An enum declaration, either local to a type or global.
///
/// Values keep their declaration order; lookups scan them linearly so the
/// first declared match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDef {
    pub name: SmolStr,
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Builder-style value registration.
    pub fn with_value(mut self, name: impl Into<SmolStr>, value: i64) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value,
        });
        self
    }

    /// Find a value by exact name (first declared wins).
    pub fn find_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// A matched enum value together with the enum that declares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumValueMatch<'a> {
    pub enum_def: &'a EnumDef,
    pub value: &'a EnumValue,
}

impl<'a> EnumValueMatch<'a> {
    pub fn enum_name(&self) -> &'a str {
        &self.enum_def.name
    }

    pub fn value_name(&self) -> &'a str {
        &self.value.name
    }
}

// ============================================================================
// METHODS
// ============================================================================

/// A method signature. Only argument names are kept; types and defaults
/// never show up in a rendered reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: SmolStr,
    pub arguments: Vec<SmolStr>,
}

impl MethodSignature {
    pub fn new<I, S>(name: impl Into<SmolStr>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// The record shape a type was registered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An engine class (reference type with properties).
    Class,
    /// A builtin value type (vectors, strings, arrays...).
    Builtin,
}

/// Everything the index knows about one type.
#[derive(Clone, Debug)]
pub struct TypeEntry {
    name: SmolStr,
    kind: TypeKind,
    methods: Vec<MethodSignature>,
    /// Method name → position in `methods` of its first declaration.
    method_slots: FxHashMap<SmolStr, usize>,
    members: FxHashSet<SmolStr>,
    enums: Vec<EnumDef>,
}

impl TypeEntry {
    pub fn new(name: impl Into<SmolStr>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
            method_slots: FxHashMap::default(),
            members: FxHashSet::default(),
            enums: Vec::new(),
        }
    }

    /// Start a class-like type.
    pub fn class(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Start a builtin value type.
    pub fn builtin(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeKind::Builtin)
    }

    pub fn with_method<I, S>(mut self, name: impl Into<SmolStr>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.add_method(MethodSignature::new(name, arguments));
        self
    }

    pub fn with_member(mut self, name: impl Into<SmolStr>) -> Self {
        self.add_member(name);
        self
    }

    pub fn with_enum(mut self, def: EnumDef) -> Self {
        self.add_enum(def);
        self
    }

    /// Register a method. A later method with an already-known name stays in
    /// declaration order but never shadows the first one.
    pub fn add_method(&mut self, method: MethodSignature) {
        let slot = self.methods.len();
        self.method_slots.entry(method.name.clone()).or_insert(slot);
        self.methods.push(method);
    }

    pub fn add_member(&mut self, name: impl Into<SmolStr>) {
        self.members.insert(name.into());
    }

    pub fn add_enum(&mut self, def: EnumDef) {
        self.enums.push(def);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    pub fn enums(&self) -> &[EnumDef] {
        &self.enums
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodSignature> {
        self.method_slots.get(name).map(|&slot| &self.methods[slot])
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}
