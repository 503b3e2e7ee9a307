//! Emission under the comment marker and scoped prefixes.

use std::io;

use docbridge::{DocError, Emitter, NameMapper, SymbolIndex, TranslateOptions, Translator};

use crate::helpers::fixtures::engine_index;
use crate::helpers::translate_helpers::{current, translate, translate_block};

#[test]
fn test_round_trip_on_node() {
    let index = engine_index();
    let out = translate(
        &index,
        Some("Node"),
        "[b]Note:[/b] use [method get_name] or [constant FOO_BAR].\n",
    );
    assert_eq!(out, "/// > Note: use ``Node/getName()`` or ``FOO_BAR``.\n");
}

#[test]
fn test_blank_and_indented_lines() {
    let index = SymbolIndex::empty();
    assert_eq!(translate(&index, None, "\n\t\tHello.\n\t"), "/// \n/// Hello.\n/// \n");
}

#[test]
fn test_none_and_empty_text_write_nothing() {
    let index = SymbolIndex::empty();
    let translator = Translator::new(&index);

    let (out, summary) = translate_block(&translator, None, None);
    assert_eq!(out, "");
    assert_eq!(summary.lines_emitted, 0);

    let (out, _) = translate_block(&translator, None, Some(""));
    assert_eq!(out, "");
}

#[test]
fn test_prefix_restored_inside_nested_scope() {
    let index = engine_index();
    let translator = Translator::new(&index);
    let node = current(&index, "Node");
    let mut emitter = translator.emitter(Vec::new());

    {
        let mut member = emitter.indented();
        assert_eq!(member.prefix(), "    ");

        translator
            .translate(&mut *member, node, Some("Returns [member name]."))
            .unwrap();
        assert_eq!(member.prefix(), "    ");

        translator.translate(&mut *member, node, Some("")).unwrap();
        assert_eq!(member.prefix(), "    ");

        translator.translate(&mut *member, node, None).unwrap();
        assert_eq!(member.prefix(), "    ");

        member.line("var name: String").unwrap();
    }

    assert_eq!(emitter.prefix(), "");
    assert_eq!(
        String::from_utf8(emitter.into_inner()).unwrap(),
        "    /// Returns ``name``.\n    var name: String\n"
    );
}

#[test]
fn test_translate_at_nesting_level() {
    let index = engine_index();
    let translator = Translator::new(&index).with_options(TranslateOptions {
        indent_unit: "  ".to_string(),
        ..TranslateOptions::default()
    });
    let mut emitter = translator.emitter(Vec::new());
    {
        let mut nested = emitter.indented_by(2);
        translator
            .translate(&mut *nested, current(&index, "Node"), Some("See [method queue_free]."))
            .unwrap();
    }
    assert_eq!(emitter.prefix(), "");
    assert_eq!(emitter.text(), "    /// See ``Node/queueFree()``.\n");
}

#[test]
fn test_custom_comment_marker() {
    let index = SymbolIndex::empty();
    let translator = Translator::new(&index).with_options(TranslateOptions {
        comment_marker: "//! ".to_string(),
        ..TranslateOptions::default()
    });
    let (out, _) = translate_block(&translator, None, Some("First.\nSecond [b]line[/b]."));
    assert_eq!(out, "//! First.\n//! Second **line**.\n");
}

#[test]
fn test_summary_counts_unresolved_references() {
    let index = engine_index();
    let (_, summary) = translate_block(
        &Translator::new(&index),
        Some("Node"),
        Some("[method get_name] [method nope]\n[constant NOPE] [Node]"),
    );
    assert_eq!(summary.lines_emitted, 2);
    assert_eq!(summary.unresolved, 2);
}

/// Leaves every identifier as written.
struct Verbatim;

impl NameMapper for Verbatim {
    fn argument_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn method_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn member_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn type_name(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn enum_host_type(&self, enum_owner: &str) -> String {
        enum_owner.to_string()
    }

    fn enum_case_name(&self, trimmed_value: &str) -> String {
        trimmed_value.to_string()
    }
}

#[test]
fn test_custom_name_mapper() {
    let index = engine_index();
    let translator = Translator::with_names(&index, Verbatim);
    let line = translator.rewrite_line(
        current(&index, "Node"),
        "[method add_child] [Array] [constant SIDE_LEFT]",
    );
    assert_eq!(
        line.text,
        "``Node/add_child(node:force_readable_name:)`` ``Array`` ``Side/LEFT``"
    );
}

/// A sink that refuses every write.
struct Broken;

impl io::Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_reported_and_prefix_restored() {
    let index = SymbolIndex::empty();
    let translator = Translator::new(&index);
    let mut emitter = Emitter::new(Broken);

    let err = translator
        .translate(&mut emitter, None, Some("text"))
        .unwrap_err();
    assert!(matches!(err, DocError::Io(_)));
    assert!(err.to_string().starts_with("IO error"));
    assert_eq!(emitter.prefix(), "");
}
