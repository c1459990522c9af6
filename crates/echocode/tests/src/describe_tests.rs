use expect_test::expect;

use crate::{
    symbols::{SymbolKind, compute_jump, flatten, navigate, resolve_ancestry},
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

fn foo_tree() -> Vec<Symbol> {
    vec![sym("Foo", SymbolKind::Class, 0, 19).with_children(vec![
        sym("bar", SymbolKind::Method, 2, 4),
        sym("baz", SymbolKind::Method, 6, 9),
    ])]
}

#[test]
fn position_inside_nested_symbols() {
    let tree = foo_tree();
    let position = Position::new(3, 8);
    let message = describe_position(&resolve_ancestry(&tree, position), position);
    expect![[r#"You are in function "bar", inside class "Foo", at line 4, column 9."#]].assert_eq(&message);
}

#[test]
fn position_in_global_scope() {
    let tree = foo_tree();
    let position = Position::new(24, 3);
    let message = describe_position(&resolve_ancestry(&tree, position), position);
    expect![[r#"You are in global scope, at line 25"#]].assert_eq(&message);
}

#[test]
fn untracked_levels_use_their_kind_name() {
    let tree =
        vec![sym("util", SymbolKind::Namespace, 0, 9).with_children(vec![sym("LIMIT", SymbolKind::Constant, 1, 1)])];
    let position = Position::new(1, 0);
    let message = describe_position(&resolve_ancestry(&tree, position), position);
    expect![[r#"You are in constant "LIMIT", inside namespace "util", at line 2, column 1."#]].assert_eq(&message);
}

#[test]
fn jump_messages() {
    let tree = foo_tree();

    let down = navigate(&tree, Direction::Next, Position::new(3, 0));
    expect![[r#"Moving cursor down to function baz on line 7"#]].assert_eq(&describe_jump(&down));

    let up = navigate(&tree, Direction::Previous, Position::new(3, 0));
    expect![[r#"Moving cursor up to class Foo on line 1"#]].assert_eq(&describe_jump(&up));

    let wrapped_forward = navigate(&tree, Direction::Next, Position::new(24, 0));
    expect![[r#"Moving cursor up to the first class Foo on line 1"#]].assert_eq(&describe_jump(&wrapped_forward));

    let wrapped_back = navigate(&tree, Direction::Previous, Position::new(0, 0));
    expect![[r#"Moving cursor down to the last function baz on line 7"#]].assert_eq(&describe_jump(&wrapped_back));
}

#[test]
fn jump_message_trims_parameter_list() {
    let tree = vec![sym("render(int width, int height)", SymbolKind::Function, 10, 20)];
    let jump = navigate(&tree, Direction::Next, Position::new(0, 0));
    expect![[r#"Moving cursor to function render on line 11"#]].assert_eq(&describe_jump(&jump));
}

#[test]
fn jump_message_without_symbols() {
    let flat = flatten(&[]);
    let jump = compute_jump(&flat, Direction::Next, Position::new(0, 0), None);
    expect![[r#"No class or function definitions found. Not moving cursor."#]].assert_eq(&describe_jump(&jump));
}
