//! Sentences announced to the user after a "where am I" or jump request.

use crate::{
    symbols::{Direction, Jump, JumpReason, Symbol, generic_kind},
    text_pos::Position,
};

/// `You are in function "bar", inside class "Foo", at line 5, column 9.`
///
/// `ancestry` is outermost first; the sentence reads innermost first.
pub fn describe_position(
    ancestry: &[&Symbol],
    position: Position,
) -> String {
    if ancestry.is_empty() {
        return format!("You are in global scope, at line {}", position.line + 1);
    }

    let levels: Vec<String> =
        ancestry.iter().rev().map(|symbol| format!("{} \"{}\"", generic_kind(symbol.kind), symbol.name)).collect();
    format!(
        "You are in {}, at line {}, column {}.",
        levels.join(", inside "),
        position.line + 1,
        position.character + 1
    )
}

/// `Moving cursor down to function baz on line 7`
pub fn describe_jump(jump: &Jump<'_>) -> String {
    let Some(target) = jump.target else {
        return "No class or function definitions found. Not moving cursor.".to_string();
    };

    let movement = match (jump.reason, jump.direction, jump.wrapped) {
        (JumpReason::OnlyOneSymbol, ..) => "to",
        (_, Direction::Previous, true) => "down to the last",
        (_, Direction::Previous, false) => "up to",
        (_, Direction::Next, true) => "up to the first",
        (_, Direction::Next, false) => "down to",
    };

    format!(
        "Moving cursor {movement} {} {} on line {}",
        generic_kind(target.kind),
        target.display_name(),
        target.range.start.line + 1
    )
}

#[cfg(test)]
#[path = "../tests/src/describe_tests.rs"]
mod tests;
