//! Loading a [`SymbolIndex`] from an engine API description.
//!
//! The description is the JSON document the engine dumps for binding
//! generators. Only the parts needed for documentation references are read:
//!
//! ```text
//! {
//!   "global_enums":    [ { "name", "values": [ { "name", "value" } ] } ],
//!   "classes":         [ { "name", "methods", "properties", "enums" } ],
//!   "builtin_classes": [ { "name", "methods", "members",    "enums" } ]
//! }
//! ```
//!
//! Unknown fields are ignored and missing lists are treated as empty.
//!
//! ## Usage
//!
//! ```ignore
//! use docbridge::interchange::ApiDescription;
//!
//! let bytes = std::fs::read("extension_api.json")?;
//! let index = ApiDescription::read(&bytes)?.into_index();
//! ```

mod api;

pub use api::{
    ApiArgument, ApiBuiltinClass, ApiClass, ApiDescription, ApiEnum, ApiEnumValue, ApiMethod,
    ApiProperty,
};

use crate::error::DocResult;
use crate::symbols::SymbolIndex;

/// Decode an API description and build the symbol index from it.
pub fn index_from_json(input: &[u8]) -> DocResult<SymbolIndex> {
    Ok(ApiDescription::read(input)?.into_index())
}
