use crate::{
    symbols::{SymbolKind, flatten},
    text_pos::TextRange,
};

use super::*;

fn sym(
    name: &str,
    kind: SymbolKind,
    start_line: u32,
    end_line: u32,
) -> Symbol {
    Symbol::new(name, kind, TextRange::new(Position::new(start_line, 0), Position::new(end_line, 40)))
}

/// `class Foo` on 0..=19 with `bar` on 2..=4 and `baz` on 6..=9.
fn foo_tree() -> Vec<Symbol> {
    vec![sym("Foo", SymbolKind::Class, 0, 19).with_children(vec![
        sym("bar", SymbolKind::Method, 2, 4),
        sym("baz", SymbolKind::Method, 6, 9),
    ])]
}

fn names(path: &[&Symbol]) -> Vec<String> {
    path.iter().map(|symbol| symbol.name.clone()).collect()
}

#[test]
fn resolves_outermost_first() {
    let tree = foo_tree();
    let path = resolve_ancestry(&tree, Position::new(3, 8));
    assert_eq!(names(&path), vec!["Foo", "bar"]);
}

#[test]
fn each_level_descends_from_the_previous() {
    let tree = foo_tree();
    let position = Position::new(7, 4);
    let path = resolve_ancestry(&tree, position);
    for pair in path.windows(2) {
        assert!(pair[0].children.iter().any(|child| std::ptr::eq(child, pair[1])));
    }
    for symbol in &path {
        assert!(symbol.range.contains(position) || symbol.range.start.line == position.line);
    }
}

#[test]
fn global_scope_is_empty() {
    let tree = foo_tree();
    assert!(resolve_ancestry(&tree, Position::new(24, 0)).is_empty());
    assert!(resolve_ancestry(&[], Position::new(0, 0)).is_empty());
}

#[test]
fn header_line_counts_as_inside() {
    // Range starts at column 4, cursor sits before it on the same line.
    let method = Symbol::new("run", SymbolKind::Method, TextRange::new(Position::new(5, 4), Position::new(8, 0)));
    let tree = vec![sym("Job", SymbolKind::Class, 0, 10).with_children(vec![method])];
    let path = resolve_ancestry(&tree, Position::new(5, 0));
    assert_eq!(names(&path), vec!["Job", "run"]);
}

#[test]
fn first_matching_sibling_wins() {
    let tree = vec![sym("first", SymbolKind::Function, 0, 5), sym("second", SymbolKind::Function, 5, 9)];
    let path = resolve_ancestry(&tree, Position::new(5, 0));
    assert_eq!(names(&path), vec!["first"]);
}

#[test]
fn between_children_stays_in_parent() {
    let tree = foo_tree();
    let path = resolve_ancestry(&tree, Position::new(5, 0));
    assert_eq!(names(&path), vec!["Foo"]);
}

#[test]
fn untracked_nodes_are_part_of_the_path() {
    let tree = vec![sym("app", SymbolKind::Namespace, 0, 30).with_children(vec![
        sym("Widget", SymbolKind::Struct, 1, 10).with_children(vec![sym("size", SymbolKind::Field, 2, 2)]),
    ])];
    let path = resolve_ancestry(&tree, Position::new(2, 10));
    assert_eq!(names(&path), vec!["app", "Widget", "size"]);

    assert_eq!(innermost_symbol(&tree, Position::new(2, 10)).map(|s| s.name.as_str()), Some("size"));
    assert_eq!(innermost_tracked_symbol(&tree, Position::new(2, 10)).map(|s| s.name.as_str()), Some("Widget"));
}

#[test]
fn enclosing_symbol_of_picks_outermost_of_category() {
    let tree = vec![sym("Outer", SymbolKind::Class, 0, 20).with_children(vec![
        sym("Inner", SymbolKind::Class, 2, 12).with_children(vec![sym("work", SymbolKind::Method, 4, 8)]),
    ])];
    let at = Position::new(5, 8);
    assert_eq!(enclosing_symbol_of(&tree, at, SymbolCategory::Class).map(|s| s.name.as_str()), Some("Outer"));
    assert_eq!(enclosing_symbol_of(&tree, at, SymbolCategory::Function).map(|s| s.name.as_str()), Some("work"));
    assert!(enclosing_symbol_of(&tree, Position::new(15, 0), SymbolCategory::Function).is_none());
}

#[test]
fn resolving_twice_is_identical() {
    let tree = foo_tree();
    let position = Position::new(8, 2);
    assert_eq!(resolve_ancestry(&tree, position), resolve_ancestry(&tree, position));
    assert_eq!(flatten(&tree), flatten(&tree));
}
