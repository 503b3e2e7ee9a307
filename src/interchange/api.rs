//! Serde model of the engine API description.

use serde::Deserialize;

use crate::error::DocResult;
use crate::symbols::{EnumDef, MethodSignature, SymbolIndex, SymbolIndexBuilder, TypeEntry};

/// The top-level API description document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDescription {
    #[serde(default)]
    pub global_enums: Vec<ApiEnum>,
    #[serde(default)]
    pub classes: Vec<ApiClass>,
    #[serde(default)]
    pub builtin_classes: Vec<ApiBuiltinClass>,
}

/// An engine class: methods, properties, enums.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiClass {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<ApiMethod>,
    #[serde(default)]
    pub properties: Vec<ApiProperty>,
    #[serde(default)]
    pub enums: Vec<ApiEnum>,
}

/// A builtin value type: methods, members, enums.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiBuiltinClass {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<ApiMethod>,
    #[serde(default)]
    pub members: Vec<ApiProperty>,
    #[serde(default)]
    pub enums: Vec<ApiEnum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMethod {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ApiArgument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiArgument {
    pub name: String,
}

/// A class property or builtin member.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProperty {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<ApiEnumValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnumValue {
    pub name: String,
    #[serde(default)]
    pub value: i64,
}

impl ApiDescription {
    /// Decode a description from JSON bytes.
    pub fn read(input: &[u8]) -> DocResult<Self> {
        Ok(serde_json::from_slice(input)?)
    }

    /// Decode a description from a JSON string.
    pub fn from_json_str(input: &str) -> DocResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build the symbol index. Classes are registered before builtin types.
    pub fn into_index(self) -> SymbolIndex {
        let mut builder = SymbolIndexBuilder::new();

        for class in self.classes {
            let mut entry = TypeEntry::class(class.name);
            fill_entry(&mut entry, class.methods, class.enums);
            for property in class.properties {
                entry.add_member(property.name);
            }
            builder.add_type(entry);
        }

        for builtin in self.builtin_classes {
            let mut entry = TypeEntry::builtin(builtin.name);
            fill_entry(&mut entry, builtin.methods, builtin.enums);
            for member in builtin.members {
                entry.add_member(member.name);
            }
            builder.add_type(entry);
        }

        for global in self.global_enums {
            builder.add_global_enum(global.into());
        }

        builder.build()
    }
}

fn fill_entry(entry: &mut TypeEntry, methods: Vec<ApiMethod>, enums: Vec<ApiEnum>) {
    for method in methods {
        entry.add_method(MethodSignature::new(
            method.name,
            method.arguments.into_iter().map(|arg| arg.name),
        ));
    }
    for def in enums {
        entry.add_enum(def.into());
    }
}

impl From<ApiEnum> for EnumDef {
    fn from(api: ApiEnum) -> Self {
        api.values
            .into_iter()
            .fold(EnumDef::new(api.name), |def, v| def.with_value(v.name, v.value))
    }
}
