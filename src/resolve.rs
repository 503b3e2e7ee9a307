//! Reference resolution: turning tag payloads into rendered cross-references.
//!
//! Resolution never fails. Every lookup has a fallback rendering, and the
//! [`ResolutionPath`] attached to each result records which branch produced it.
//!
//! Disambiguation order for bare constant names:
//!
//! 1. Values of enums declared on the current type (`.shortForm`)
//! 2. Values of global enums (``` ``Host/shortForm`` ```)
//! 3. The raw token, wrapped as a symbol link

use crate::base::text_utils::drop_matching_prefix;
use crate::markup::{RawToken, TagKind};
use crate::naming::NameMapper;
use crate::symbols::{MethodSignature, SymbolIndex, TypeSymbolView};

// ============================================================================
// RESOLUTION RESULT
// ============================================================================

/// Which branch of the resolver produced a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionPath {
    /// A value of an enum declared on the current type.
    LocalEnumValue,
    /// A value of a global enum.
    GlobalEnumValue,
    /// A method found on the current type.
    LocalMethod,
    /// A `Type.method` reference found on the named type.
    QualifiedMethod,
    /// A member of the current type.
    LocalMember,
    /// A `Type.member` reference found on the named type.
    QualifiedMember,
    /// An enum declared on the current type.
    LocalEnum,
    /// An enum declared globally.
    GlobalEnum,
    /// A bare type name.
    TypeName,
    /// A parameter name.
    Parameter,
    /// A cross-module reference (`@GlobalScope.remap`), passed through as is.
    External,
    /// Nothing matched; the raw token was rendered as best we could.
    Unresolved,
}

/// The rendered text for one reference tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedReference {
    pub text: String,
    pub path: ResolutionPath,
}

impl ResolvedReference {
    pub fn new(text: impl Into<String>, path: ResolutionPath) -> Self {
        Self {
            text: text.into(),
            path,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.path != ResolutionPath::Unresolved
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves reference payloads against the symbol index and the current type.
pub struct Resolver<'a, N: NameMapper + ?Sized> {
    index: &'a SymbolIndex,
    names: &'a N,
    /// The type whose documentation is being translated, if any.
    current: Option<&'a dyn TypeSymbolView>,
}

impl<'a, N: NameMapper + ?Sized> Resolver<'a, N> {
    /// Create a resolver with no current type (context-free text).
    pub fn new(index: &'a SymbolIndex, names: &'a N) -> Self {
        Self {
            index,
            names,
            current: None,
        }
    }

    /// Set the current type.
    pub fn with_current(mut self, current: Option<&'a dyn TypeSymbolView>) -> Self {
        self.current = current;
        self
    }

    /// Dispatch on the tag kind.
    ///
    /// Returns `None` for formatting tags and for `Type.name` references with
    /// an empty side (`[method .foo]`), which stay as written.
    pub fn resolve(&self, tag: &RawToken<'_>) -> Option<ResolvedReference> {
        let token = tag.payload;
        Some(match tag.kind {
            TagKind::Method | TagKind::Member if split_qualified(token).is_none() => {
                tracing::debug!("[RESOLVE] Malformed reference {:?} left as written", tag.source);
                return None;
            }
            TagKind::Param => self.resolve_parameter(token),
            TagKind::Constant => self.resolve_constant(token),
            TagKind::Method => self.resolve_method(token),
            TagKind::Member => self.resolve_member(token),
            TagKind::Enum => self.resolve_enum_tag(token),
            TagKind::TypeReference => self.resolve_type_reference(token),
            _ => return None,
        })
    }

    /// `[param x]` → `` `x` `` using the argument naming convention.
    pub fn resolve_parameter(&self, token: &str) -> ResolvedReference {
        ResolvedReference::new(
            format!("`{}`", self.names.argument_name(token)),
            ResolutionPath::Parameter,
        )
    }

    /// `[constant X]`: local enum values, then global enum values, then the raw token.
    pub fn resolve_constant(&self, token: &str) -> ResolvedReference {
        if let Some(found) = self.index.lookup_local_enum_value(self.current, token) {
            let trimmed = drop_matching_prefix(found.enum_name(), found.value_name());
            tracing::trace!(
                "[RESOLVE] Constant '{}' is local enum value {}.{}",
                token,
                found.enum_name(),
                found.value_name()
            );
            return ResolvedReference::new(
                format!(".{}", self.names.enum_case_name(trimmed)),
                ResolutionPath::LocalEnumValue,
            );
        }

        if let Some(found) = self.index.lookup_global_enum_value(token) {
            let trimmed = drop_matching_prefix(found.enum_name(), found.value_name());
            tracing::trace!(
                "[RESOLVE] Constant '{}' is global enum value {}.{}",
                token,
                found.enum_name(),
                found.value_name()
            );
            let host = self.names.enum_host_type(found.enum_name());
            let case = self.names.enum_case_name(trimmed);
            return ResolvedReference::new(
                symbol_link(&format!("{host}/{case}")),
                ResolutionPath::GlobalEnumValue,
            );
        }

        tracing::debug!(
            "[RESOLVE] Constant '{}' not found in '{}' or global enums",
            token,
            self.current_name()
        );
        ResolvedReference::new(symbol_link(token), ResolutionPath::Unresolved)
    }

    /// `[method x]` / `[method Type.x]` → ``` ``Type/x(a:b:)`` ```.
    ///
    /// Unknown types or methods keep the same shape with an empty argument list.
    pub fn resolve_method(&self, token: &str) -> ResolvedReference {
        if token.starts_with('@') {
            tracing::trace!("[RESOLVE] Method '{}' is an external reference", token);
            return ResolvedReference::new(symbol_link(token), ResolutionPath::External);
        }

        let Some((owner, name)) = split_qualified(token) else {
            return ResolvedReference::new(symbol_link(token), ResolutionPath::Unresolved);
        };
        let method = self.names.method_name(name);

        if let Some(owner) = owner {
            return match self.index.lookup_method(owner, name) {
                Some(signature) => {
                    tracing::trace!("[RESOLVE] Method '{}' found on '{}'", name, owner);
                    ResolvedReference::new(
                        symbol_link(&format!(
                            "{owner}/{method}({})",
                            self.argument_labels(signature)
                        )),
                        ResolutionPath::QualifiedMethod,
                    )
                }
                None => {
                    tracing::debug!("[RESOLVE] Method '{}' not found on '{}'", name, owner);
                    ResolvedReference::new(
                        symbol_link(&format!("{owner}/{method}()")),
                        ResolutionPath::Unresolved,
                    )
                }
            };
        }

        let local = self
            .current
            .and_then(|current| current.find_method(name).map(|sig| (current, sig)));

        match local {
            Some((current, signature)) => {
                tracing::trace!("[RESOLVE] Method '{}' found on '{}'", name, current.name());
                ResolvedReference::new(
                    symbol_link(&format!(
                        "{}/{method}({})",
                        current.name(),
                        self.argument_labels(signature)
                    )),
                    ResolutionPath::LocalMethod,
                )
            }
            None => {
                tracing::debug!(
                    "[RESOLVE] Method '{}' not found on '{}'",
                    name,
                    self.current_name()
                );
                ResolvedReference::new(
                    symbol_link(&format!("{method}()")),
                    ResolutionPath::Unresolved,
                )
            }
        }
    }

    /// `[member x]` / `[member Type.x]`. Members are referenced by name only,
    /// existence only affects the reported path.
    pub fn resolve_member(&self, token: &str) -> ResolvedReference {
        let Some((owner, name)) = split_qualified(token) else {
            return ResolvedReference::new(symbol_link(token), ResolutionPath::Unresolved);
        };
        let member = self.names.member_name(name);

        match owner {
            Some(owner) => {
                let path = if self.index.lookup_member(owner, name) {
                    ResolutionPath::QualifiedMember
                } else {
                    ResolutionPath::Unresolved
                };
                ResolvedReference::new(symbol_link(&format!("{owner}/{member}")), path)
            }
            None => {
                let path = if self.current.is_some_and(|c| c.has_member(name)) {
                    ResolutionPath::LocalMember
                } else {
                    ResolutionPath::Unresolved
                };
                ResolvedReference::new(symbol_link(&member), path)
            }
        }
    }

    /// `[enum X]` → ``` ``Current/X`` ``` for local enums, ``` ``X`` ``` otherwise.
    pub fn resolve_enum_tag(&self, token: &str) -> ResolvedReference {
        if let Some(current) = self.current.filter(|c| c.find_enum(token).is_some()) {
            return ResolvedReference::new(
                symbol_link(&format!("{}/{token}", current.name())),
                ResolutionPath::LocalEnum,
            );
        }

        let path = if self.index.global_enums().iter().any(|e| e.name == token) {
            ResolutionPath::GlobalEnum
        } else {
            ResolutionPath::Unresolved
        };
        ResolvedReference::new(symbol_link(token), path)
    }

    /// `[TypeName]` → ``` ``MappedTypeName`` ```.
    pub fn resolve_type_reference(&self, token: &str) -> ResolvedReference {
        ResolvedReference::new(
            symbol_link(&self.names.type_name(token)),
            ResolutionPath::TypeName,
        )
    }

    /// Argument names, each followed by `:`. No types, no defaults.
    fn argument_labels(&self, signature: &MethodSignature) -> String {
        signature
            .arguments
            .iter()
            .map(|arg| format!("{}:", self.names.argument_name(arg)))
            .collect()
    }

    fn current_name(&self) -> &str {
        self.current.map_or("<global>", |c| c.name())
    }
}

/// `Type.name` → `(Some("Type"), "name")`, `name` → `(None, "name")`.
///
/// Splits on the first dot only. `None` when either side of the dot is empty.
pub fn split_qualified(token: &str) -> Option<(Option<&str>, &str)> {
    match token.split_once('.') {
        Some((owner, name)) if owner.is_empty() || name.is_empty() => None,
        Some((owner, name)) => Some((Some(owner), name)),
        None => Some((None, token)),
    }
}

/// Wrap an identifier as a DocC symbol link.
pub fn symbol_link(inner: &str) -> String {
    format!("``{inner}``")
}
