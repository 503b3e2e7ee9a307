//! Building the symbol index from an API description.

use docbridge::interchange::{ApiDescription, index_from_json};
use docbridge::{CodeBlockMode, DocError, TranslateOptions, TypeKind};

use crate::helpers::translate_helpers::translate;

const API: &str = r#"{
    "header": { "version_major": 4, "version_minor": 2 },
    "global_enums": [
        { "name": "Error", "values": [ { "name": "OK", "value": 0 }, { "name": "ERR_BUSY", "value": 44 } ] },
        { "name": "Variant.Type", "values": [ { "name": "TYPE_NIL", "value": 0 } ] }
    ],
    "classes": [
        { "name": "Node", "inherits": "Object", "api_type": "core",
          "methods": [
            { "name": "add_child", "is_virtual": false,
              "arguments": [ { "name": "node", "type": "Node" },
                             { "name": "force_readable_name", "type": "bool" } ] },
            { "name": "get_name", "return_value": { "type": "StringName" } }
          ],
          "properties": [ { "name": "process_mode", "type": "int" } ],
          "enums": [ { "name": "ProcessMode", "is_bitfield": false,
                       "values": [ { "name": "PROCESS_MODE_DISABLED", "value": 4 } ] } ] }
    ],
    "builtin_classes": [
        { "name": "Color",
          "members": [ { "name": "r", "type": "float" } ],
          "methods": [ { "name": "lerp", "arguments": [ { "name": "to" }, { "name": "weight" } ] } ] }
    ]
}"#;

#[test]
fn test_loaded_index_drives_translation() {
    let index = index_from_json(API.as_bytes()).unwrap();
    let out = translate(
        &index,
        Some("Node"),
        "Call [method add_child] while [constant PROCESS_MODE_DISABLED].\nFails with [constant ERR_BUSY].",
    );
    assert_eq!(
        out,
        "/// Call ``Node/addChild(node:forceReadableName:)`` while .disabled.\n/// Fails with ``GodotError/errBusy``.\n"
    );
}

#[test]
fn test_builtin_classes_are_loaded() {
    let index = ApiDescription::read(API.as_bytes()).unwrap().into_index();
    let color = index.get_type("Color").unwrap();
    assert_eq!(color.kind(), TypeKind::Builtin);
    assert!(index.lookup_member("Color", "r"));
    assert_eq!(
        translate(&index, None, "[method Color.lerp]"),
        "/// ``Color/lerp(to:weight:)``\n"
    );
}

#[test]
fn test_malformed_description_is_an_error() {
    let err = index_from_json(br#"{ "classes": 3 }"#).unwrap_err();
    assert!(matches!(err, DocError::Json(_)));
}

#[test]
fn test_options_decode_with_defaults() {
    let options: TranslateOptions = serde_json::from_str(r#"{"code_blocks":"fence"}"#).unwrap();
    assert_eq!(options.code_blocks, CodeBlockMode::Fence);
    assert_eq!(options.comment_marker, "/// ");
    assert_eq!(options.indent_unit, "    ");

    let options: TranslateOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, TranslateOptions::default());
}

#[test]
fn test_options_reject_unknown_code_block_mode() {
    assert!(serde_json::from_str::<TranslateOptions>(r#"{"code_blocks":"Fence"}"#).is_err());
}
