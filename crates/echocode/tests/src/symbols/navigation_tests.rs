use crate::{symbols::SymbolKind, text_pos::TextRange};

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

fn target_name<'a>(jump: &Jump<'a>) -> Option<&'a str> {
    jump.target.map(|symbol| symbol.name.as_str())
}

#[test]
fn next_from_inside_bar_goes_to_baz() {
    let tree = foo_tree();
    let jump = navigate(&tree, Direction::Next, Position::new(3, 4));
    assert_eq!(target_name(&jump), Some("baz"));
    assert!(!jump.wrapped);
    assert_eq!(jump.reason, JumpReason::NormalJump);
    assert_eq!(jump.direction, Direction::Next);
}

#[test]
fn previous_from_inside_bar_goes_to_foo() {
    let tree = foo_tree();
    let jump = navigate(&tree, Direction::Previous, Position::new(3, 4));
    assert_eq!(target_name(&jump), Some("Foo"));
    assert!(!jump.wrapped);
}

#[test]
fn next_past_everything_wraps_to_first() {
    let tree = foo_tree();
    let jump = navigate(&tree, Direction::Next, Position::new(24, 0));
    assert_eq!(target_name(&jump), Some("Foo"));
    assert!(jump.wrapped);
}

#[test]
fn next_from_last_wraps_to_first() {
    let tree = foo_tree();
    let flat = flatten(&tree);
    let jump = compute_jump(&flat, Direction::Next, Position::new(7, 0), Some(flat[2]));
    assert_eq!(target_name(&jump), Some("Foo"));
    assert!(jump.wrapped);
}

#[test]
fn previous_from_first_wraps_to_last() {
    let tree = foo_tree();
    let flat = flatten(&tree);
    let jump = compute_jump(&flat, Direction::Previous, Position::new(0, 2), Some(flat[0]));
    assert_eq!(target_name(&jump), Some("baz"));
    assert!(jump.wrapped);
}

#[test]
fn single_symbol_ignores_direction() {
    let tree = vec![sym("only", SymbolKind::Function, 4, 8)];
    for direction in [Direction::Next, Direction::Previous] {
        for line in [0, 5, 30] {
            let jump = navigate(&tree, direction, Position::new(line, 0));
            assert_eq!(target_name(&jump), Some("only"));
            assert_eq!(jump.reason, JumpReason::OnlyOneSymbol);
            assert!(!jump.wrapped);
        }
    }
}

#[test]
fn empty_list_has_no_target() {
    for direction in [Direction::Next, Direction::Previous] {
        let jump = compute_jump(&[], direction, Position::new(3, 0), None);
        assert_eq!(jump.target, None);
        assert_eq!(jump.reason, JumpReason::NoSymbols);
        assert_eq!(jump.direction, direction);
    }
}

#[test]
fn untracked_only_tree_has_no_symbols() {
    let tree = vec![sym("LIMIT", SymbolKind::Variable, 0, 0), sym("Color", SymbolKind::Enum, 2, 5)];
    let jump = navigate(&tree, Direction::Next, Position::new(1, 0));
    assert_eq!(jump.reason, JumpReason::NoSymbols);
}

#[test]
fn global_scope_uses_line_comparison() {
    let tree = vec![
        sym("alpha", SymbolKind::Function, 2, 4),
        sym("beta", SymbolKind::Function, 8, 10),
        sym("gamma", SymbolKind::Function, 14, 16),
    ];
    let between = Position::new(6, 0);
    assert_eq!(target_name(&navigate(&tree, Direction::Next, between)), Some("beta"));
    assert_eq!(target_name(&navigate(&tree, Direction::Previous, between)), Some("alpha"));

    let before_all = Position::new(0, 0);
    let jump = navigate(&tree, Direction::Previous, before_all);
    assert_eq!(target_name(&jump), Some("gamma"));
    assert!(jump.wrapped);
}

#[test]
fn unmatched_current_falls_back_to_lines() {
    let tree = vec![sym("alpha", SymbolKind::Function, 2, 4), sym("beta", SymbolKind::Function, 8, 10)];
    let flat = flatten(&tree);
    let stranger = sym("stranger", SymbolKind::Function, 5, 6);
    let jump = compute_jump(&flat, Direction::Next, Position::new(5, 0), Some(&stranger));
    assert_eq!(target_name(&jump), Some("beta"));
}

#[test]
fn current_is_matched_by_range() {
    let tree = foo_tree();
    let flat = flatten(&tree);
    // A fresh copy, as a provider would hand out on the next query.
    let bar_again = sym("bar", SymbolKind::Method, 2, 4);
    let jump = compute_jump(&flat, Direction::Next, Position::new(3, 0), Some(&bar_again));
    assert_eq!(target_name(&jump), Some("baz"));
}

#[test]
fn variable_under_cursor_resolves_to_enclosing_function() {
    let tree = vec![
        sym("first", SymbolKind::Function, 0, 5).with_children(vec![sym("total", SymbolKind::Variable, 1, 1)]),
        sym("second", SymbolKind::Function, 7, 9),
    ];
    let jump = navigate(&tree, Direction::Previous, Position::new(1, 6));
    assert_eq!(target_name(&jump), Some("second"));
    assert!(jump.wrapped);
}

#[test]
fn direction_parses_and_displays() {
    assert_eq!("next".parse::<Direction>(), Ok(Direction::Next));
    assert_eq!("prev".parse::<Direction>(), Ok(Direction::Previous));
    assert_eq!("previous".parse::<Direction>(), Ok(Direction::Previous));
    assert!("sideways".parse::<Direction>().is_err());
    assert_eq!(Direction::Previous.to_string(), "previous");
}
