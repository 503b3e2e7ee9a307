//! Symbol index fixtures for translation tests.

use docbridge::{EnumDef, SymbolIndex, TypeEntry};

const NO_ARGS: [&str; 0] = [];

/// `Node`: a class with methods, members and local enums.
pub fn node_type() -> TypeEntry {
    TypeEntry::class("Node")
        .with_method("get_name", NO_ARGS)
        .with_method("add_child", ["node", "force_readable_name"])
        .with_method("queue_free", NO_ARGS)
        .with_method("_ready", NO_ARGS)
        .with_member("process_mode")
        .with_member("name")
        .with_enum(
            EnumDef::new("ProcessMode")
                .with_value("PROCESS_MODE_INHERIT", 0)
                .with_value("PROCESS_MODE_PAUSABLE", 1)
                .with_value("PROCESS_MODE_ALWAYS", 3),
        )
}

/// `Vector2`: a builtin value type.
pub fn vector2_type() -> TypeEntry {
    TypeEntry::builtin("Vector2")
        .with_method("dot", ["with"])
        .with_method("rotated", ["angle"])
        .with_member("x")
        .with_member("y")
        .with_enum(
            EnumDef::new("Axis")
                .with_value("AXIS_X", 0)
                .with_value("AXIS_Y", 1),
        )
}

pub fn global_enums() -> Vec<EnumDef> {
    vec![
        EnumDef::new("Side")
            .with_value("SIDE_LEFT", 0)
            .with_value("SIDE_TOP", 1),
        EnumDef::new("Error")
            .with_value("OK", 0)
            .with_value("FAILED", 1)
            .with_value("ERR_CANT_CREATE", 20),
        EnumDef::new("Key")
            .with_value("KEY_A", 65)
            .with_value("KEY_0", 48),
        EnumDef::new("Variant.Type")
            .with_value("TYPE_NIL", 0)
            .with_value("TYPE_INT", 2),
    ]
}

/// Node, Vector2 and a handful of global enums.
pub fn engine_index() -> SymbolIndex {
    let mut builder = SymbolIndex::builder();
    builder.add_type(node_type()).add_type(vector2_type());
    for def in global_enums() {
        builder.add_global_enum(def);
    }
    builder.build()
}

/// A local enum value and a global enum value with the same name.
pub fn colliding_index() -> SymbolIndex {
    SymbolIndex::builder()
        .with_type(
            TypeEntry::class("Control").with_enum(
                EnumDef::new("LayoutDirection")
                    .with_value("LAYOUT_DIRECTION_INHERITED", 0)
                    .with_value("LAYOUT_DIRECTION_LTR", 2),
            ),
        )
        .with_global_enum(EnumDef::new("TextDirection").with_value("LAYOUT_DIRECTION_LTR", 1))
        .build()
}
