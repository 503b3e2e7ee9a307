//! Swift naming conventions for the generated bindings.

use super::NameMapper;
use crate::base::text_utils::{is_identifier, snake_to_camel};

/// Engine type names that the bindings rename to avoid clashing with the
/// Swift standard library.
const TYPE_RENAMES: &[(&str, &str)] = &[
    ("Array", "GArray"),
    ("Dictionary", "GDictionary"),
    ("Error", "GodotError"),
    ("Type", "GType"),
    ("bool", "Bool"),
    ("float", "Double"),
    ("int", "Int"),
];

/// Words that must be backtick-escaped when used as an identifier.
const RESERVED_WORDS: &[&str] = &[
    "Protocol", "Self", "Type", "as", "associatedtype", "break", "case", "catch", "class",
    "continue", "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough",
    "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "open", "operator", "private", "protocol", "public",
    "repeat", "rethrows", "return", "self", "static", "struct", "subscript", "super", "switch",
    "throw", "throws", "true", "try", "typealias", "var", "where", "while",
];

/// Default [`NameMapper`]: `snake_case` engine names become `lowerCamelCase`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwiftNames;

impl SwiftNames {
    /// Escape an identifier so it can be used verbatim in Swift source.
    pub fn escape(name: &str) -> String {
        if RESERVED_WORDS.contains(&name) {
            format!("`{name}`")
        } else if !name.is_empty() && !is_identifier(name) {
            format!("_{name}")
        } else {
            name.to_string()
        }
    }
}

impl NameMapper for SwiftNames {
    fn argument_name(&self, raw: &str) -> String {
        snake_to_camel(raw)
    }

    fn method_name(&self, raw: &str) -> String {
        snake_to_camel(raw)
    }

    fn member_name(&self, raw: &str) -> String {
        snake_to_camel(raw)
    }

    fn type_name(&self, raw: &str) -> String {
        TYPE_RENAMES
            .iter()
            .find(|(from, _)| *from == raw)
            .map_or_else(|| raw.to_string(), |(_, to)| (*to).to_string())
    }

    fn enum_host_type(&self, enum_owner: &str) -> String {
        enum_owner
            .split('.')
            .map(|segment| self.type_name(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn enum_case_name(&self, trimmed_value: &str) -> String {
        Self::escape(&snake_to_camel(trimmed_value))
    }
}
