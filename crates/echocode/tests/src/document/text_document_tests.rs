use tower_lsp::lsp_types::{self, Range};

use super::*;

fn test_doc(text: &str) -> Document {
    Document::new(Url::parse("file:///test.py").unwrap(), "python", text.to_string(), 1)
}

#[test]
fn line_offsets_empty() {
    let doc = test_doc("");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_text(0), Some(""));
}

#[test]
fn line_offsets_basic() {
    let doc = test_doc("hello\nworld\n");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(0), Some("hello"));
    assert_eq!(doc.line_text(1), Some("world"));
    assert_eq!(doc.line_text(2), Some(""));
    assert_eq!(doc.line_text(3), None);
}

#[test]
fn offset_roundtrip() {
    let doc = test_doc("x = 1\ny = 2\n");
    let pos = Position::new(1, 0);
    let off = doc.offset_of(pos).unwrap();
    assert_eq!(off, 6); // byte offset of second line
    assert_eq!(doc.position_of(off), pos);
}

#[test]
fn language_from_id_or_extension() {
    assert_eq!(test_doc("").language(), Some(Language::Python));

    let by_extension = Document::new(Url::parse("file:///src/Main.java").unwrap(), "", String::new(), 1);
    assert_eq!(by_extension.language(), Some(Language::Java));

    let unknown = Document::new(Url::parse("file:///notes.txt").unwrap(), "plaintext", String::new(), 1);
    assert_eq!(unknown.language(), None);
}

#[test]
fn text_in_range() {
    let doc = test_doc("class A:\n    def f(self):\n        pass\n");
    let range = TextRange::new(Position::new(1, 4), Position::new(2, 12));
    assert_eq!(doc.text_in(range), Some("def f(self):\n        pass"));
}

#[test]
fn incremental_change() {
    let mut doc = test_doc("hello world");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: Some(Range {
                start: lsp_types::Position {
                    line: 0,
                    character: 6,
                },
                end: lsp_types::Position {
                    line: 0,
                    character: 11,
                },
            }),
            range_length: None,
            text: "python".to_string(),
        }],
        2,
    );
    assert_eq!(doc.text, "hello python");
    assert_eq!(doc.version, 2);
}

#[test]
fn incremental_change_rebuilds_lines() {
    let mut doc = test_doc("one\ntwo");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: Some(Range {
                start: lsp_types::Position {
                    line: 1,
                    character: 3,
                },
                end: lsp_types::Position {
                    line: 1,
                    character: 3,
                },
            }),
            range_length: None,
            text: "\nthree\n".to_string(),
        }],
        2,
    );
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line_text(2), Some("three"));
}

#[test]
fn full_content_change() {
    let mut doc = test_doc("old content");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "new content".to_string(),
        }],
        3,
    );
    assert_eq!(doc.text, "new content");
    assert_eq!(doc.version, 3);
}
