//! Reference resolution through the public translator.

use docbridge::{ResolutionPath, Resolver, SwiftNames, Translator};
use rstest::rstest;

use crate::helpers::fixtures::{colliding_index, engine_index};
use crate::helpers::translate_helpers::{current, rewrite};

// ============================================================================
// Constants
// ============================================================================

#[rstest]
#[case(Some("Node"), "[constant PROCESS_MODE_ALWAYS]", ".always")]
#[case(Some("Vector2"), "[constant AXIS_Y]", ".y")]
#[case(None, "[constant SIDE_LEFT]", "``Side/left``")]
#[case(None, "[constant ERR_CANT_CREATE]", "``GodotError/errCantCreate``")]
#[case(None, "[constant OK]", "``GodotError/ok``")]
#[case(None, "[constant TYPE_INT]", "``Variant.GType/int``")]
#[case(None, "[constant KEY_0]", "``Key/key0``")]
#[case(None, "[constant KEY_A]", "``Key/a``")]
#[case(Some("Node"), "[constant FOO_BAR]", "``FOO_BAR``")]
fn test_constant(#[case] ctx: Option<&str>, #[case] input: &str, #[case] expected: &str) {
    let index = engine_index();
    assert_eq!(rewrite(&index, ctx, input), expected);
}

#[test]
fn test_local_constant_needs_a_current_type() {
    let index = engine_index();
    assert_eq!(
        rewrite(&index, None, "[constant PROCESS_MODE_ALWAYS]"),
        "``PROCESS_MODE_ALWAYS``"
    );
    assert_eq!(
        rewrite(&index, Some("Vector2"), "[constant PROCESS_MODE_ALWAYS]"),
        "``PROCESS_MODE_ALWAYS``"
    );
}

#[test]
fn test_local_enum_value_wins_over_global() {
    let index = colliding_index();
    assert_eq!(
        rewrite(&index, Some("Control"), "[constant LAYOUT_DIRECTION_LTR]"),
        ".ltr"
    );
    assert_eq!(
        rewrite(&index, None, "[constant LAYOUT_DIRECTION_LTR]"),
        "``TextDirection/layoutDirectionLtr``"
    );
}

// ============================================================================
// Methods
// ============================================================================

#[rstest]
#[case(Some("Node"), "[method get_name]", "``Node/getName()``")]
#[case(Some("Node"), "[method add_child]", "``Node/addChild(node:forceReadableName:)``")]
#[case(Some("Node"), "[method _ready]", "``Node/_ready()``")]
#[case(Some("Node"), "[method frobnicate]", "``frobnicate()``")]
#[case(None, "[method get_name]", "``getName()``")]
#[case(None, "[method Vector2.dot]", "``Vector2/dot(with:)``")]
#[case(Some("Node"), "[method Vector2.rotated]", "``Vector2/rotated(angle:)``")]
#[case(None, "[method Missing.do_it]", "``Missing/doIt()``")]
#[case(None, "[method Node.do_it]", "``Node/doIt()``")]
#[case(Some("Node"), "[method @GlobalScope.remap]", "``@GlobalScope.remap``")]
fn test_method(#[case] ctx: Option<&str>, #[case] input: &str, #[case] expected: &str) {
    let index = engine_index();
    assert_eq!(rewrite(&index, ctx, input), expected);
}

// ============================================================================
// Members, Enums, Types, Parameters
// ============================================================================

#[rstest]
#[case(Some("Node"), "[member process_mode]", "``processMode``")]
#[case(None, "[member process_mode]", "``processMode``")]
#[case(None, "[member Node.name]", "``Node/name``")]
#[case(Some("Node"), "[member Vector2.x]", "``Vector2/x``")]
#[case(Some("Node"), "[enum ProcessMode]", "``Node/ProcessMode``")]
#[case(Some("Vector2"), "[enum ProcessMode]", "``ProcessMode``")]
#[case(None, "[enum Side]", "``Side``")]
#[case(None, "[Array]", "``GArray``")]
#[case(None, "[Dictionary]", "``GDictionary``")]
#[case(None, "[Node]", "``Node``")]
#[case(None, "[param force_readable_name]", "`forceReadableName`")]
fn test_other_references(
    #[case] ctx: Option<&str>,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let index = engine_index();
    assert_eq!(rewrite(&index, ctx, input), expected);
}

// ============================================================================
// Resolution Paths
// ============================================================================

#[test]
fn test_rewrite_reports_resolution_paths() {
    let index = engine_index();
    let translator = Translator::new(&index);
    let line = translator.rewrite_line(
        current(&index, "Node"),
        "[constant PROCESS_MODE_INHERIT] [constant SIDE_TOP] [method queue_free] [method nope] [member name] [Node]",
    );

    let paths: Vec<_> = line.references.iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            ResolutionPath::LocalEnumValue,
            ResolutionPath::GlobalEnumValue,
            ResolutionPath::LocalMethod,
            ResolutionPath::Unresolved,
            ResolutionPath::LocalMember,
            ResolutionPath::TypeName,
        ]
    );
}

#[test]
fn test_resolver_used_directly() {
    let index = engine_index();
    let names = SwiftNames;
    let resolver = Resolver::new(&index, &names).with_current(current(&index, "Node"));

    let qualified = resolver.resolve_member("Vector2.y");
    assert_eq!(qualified.text, "``Vector2/y``");
    assert_eq!(qualified.path, ResolutionPath::QualifiedMember);

    let missing = resolver.resolve_member("Vector2.z");
    assert_eq!(missing.text, "``Vector2/z``");
    assert!(!missing.is_resolved());

    let global = resolver.resolve_enum_tag("Key");
    assert_eq!(global.path, ResolutionPath::GlobalEnum);

    let external = resolver.resolve_method("@GDScript.load");
    assert_eq!(external.path, ResolutionPath::External);
    assert!(external.is_resolved());
}
