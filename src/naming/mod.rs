//! Naming conventions: mapping engine identifiers to target-language identifiers.
//!
//! The translator never hard-codes a naming convention. Everything goes through
//! [`NameMapper`], and [`SwiftNames`] is the default implementation.

mod swift;

pub use swift::SwiftNames;

/// Pure identifier conversions used while rendering references.
pub trait NameMapper {
    /// Argument label for a method parameter (`force_readable_name` → `forceReadableName`).
    fn argument_name(&self, raw: &str) -> String;

    /// Method name as exposed by the bindings.
    fn method_name(&self, raw: &str) -> String;

    /// Property / member name as exposed by the bindings.
    fn member_name(&self, raw: &str) -> String;

    /// Type name as exposed by the bindings (`Array` → `GArray`).
    fn type_name(&self, raw: &str) -> String;

    /// Displayable form of the type that hosts a global enum.
    fn enum_host_type(&self, enum_owner: &str) -> String;

    /// Enum case name for a value whose enum-name prefix has already been trimmed.
    fn enum_case_name(&self, trimmed_value: &str) -> String;
}

impl<T: NameMapper + ?Sized> NameMapper for &T {
    fn argument_name(&self, raw: &str) -> String {
        (**self).argument_name(raw)
    }

    fn method_name(&self, raw: &str) -> String {
        (**self).method_name(raw)
    }

    fn member_name(&self, raw: &str) -> String {
        (**self).member_name(raw)
    }

    fn type_name(&self, raw: &str) -> String {
        (**self).type_name(raw)
    }

    fn enum_host_type(&self, enum_owner: &str) -> String {
        (**self).enum_host_type(enum_owner)
    }

    fn enum_case_name(&self, trimmed_value: &str) -> String {
        (**self).enum_case_name(trimmed_value)
    }
}
