use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::text_pos::Position;

use super::{ancestry::innermost_tracked_symbol, flatten::flatten, types::Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Direction::Next),
            "previous" | "prev" => Ok(Direction::Previous),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Why a jump landed where it did. Callers branch on this to phrase the
/// announcement; none of these are failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JumpReason {
    NoSymbols,
    OnlyOneSymbol,
    NormalJump,
}

/// Outcome of a next/previous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump<'a> {
    pub target: Option<&'a Symbol>,
    pub wrapped: bool,
    pub reason: JumpReason,
    pub direction: Direction,
}

impl<'a> Jump<'a> {
    fn none(direction: Direction) -> Self {
        Self {
            target: None,
            wrapped: false,
            reason: JumpReason::NoSymbols,
            direction,
        }
    }

    fn to(
        target: &'a Symbol,
        wrapped: bool,
        reason: JumpReason,
        direction: Direction,
    ) -> Self {
        Self {
            target: Some(target),
            wrapped,
            reason,
            direction,
        }
    }
}

/// Next or previous function/class relative to the cursor, wrapping around
/// at either end of `flat`.
///
/// `current` is the innermost function/class enclosing the cursor. It is
/// matched against `flat` by exact range, because providers hand out fresh
/// objects on every query. A `current` that cannot be found is treated as
/// global scope.
pub fn compute_jump<'a>(
    flat: &[&'a Symbol],
    direction: Direction,
    position: Position,
    current: Option<&Symbol>,
) -> Jump<'a> {
    let (first, last) = match (flat.first(), flat.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Jump::none(direction),
    };
    if flat.len() == 1 {
        return Jump::to(first, false, JumpReason::OnlyOneSymbol, direction);
    }

    let current_index = current.and_then(|current| flat.iter().position(|symbol| symbol.range == current.range));

    let Some(index) = current_index else {
        let line = position.line;
        return match direction {
            Direction::Next => match flat.iter().copied().find(|symbol| symbol.range.start.line > line) {
                Some(next) => Jump::to(next, false, JumpReason::NormalJump, direction),
                None => Jump::to(first, true, JumpReason::NormalJump, direction),
            },
            Direction::Previous => match flat.iter().rev().copied().find(|symbol| symbol.range.start.line < line) {
                Some(previous) => Jump::to(previous, false, JumpReason::NormalJump, direction),
                None => Jump::to(last, true, JumpReason::NormalJump, direction),
            },
        };
    };

    match direction {
        Direction::Next => match flat.get(index + 1).copied() {
            Some(next) => Jump::to(next, false, JumpReason::NormalJump, direction),
            None => Jump::to(first, true, JumpReason::NormalJump, direction),
        },
        Direction::Previous => match index.checked_sub(1).and_then(|i| flat.get(i)).copied() {
            Some(previous) => Jump::to(previous, false, JumpReason::NormalJump, direction),
            None => Jump::to(last, true, JumpReason::NormalJump, direction),
        },
    }
}

/// Flattens `tree`, finds the function/class under the cursor and computes
/// the jump from there.
pub fn navigate(
    tree: &[Symbol],
    direction: Direction,
    position: Position,
) -> Jump<'_> {
    let flat = flatten(tree);
    let current = innermost_tracked_symbol(tree, position);
    compute_jump(&flat, direction, position, current)
}

#[cfg(test)]
#[path = "../../tests/src/symbols/navigation_tests.rs"]
mod tests;
