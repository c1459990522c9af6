use crate::text_pos::Position;

use super::types::{Symbol, SymbolCategory};

/// Path of symbols enclosing `position`, outermost first.
///
/// A symbol matches when its range contains the position or when the
/// position sits on the symbol's first line, so a cursor on a `def` header
/// counts as inside that function. Only the first matching sibling on each
/// level is followed. An empty path means global scope.
pub fn resolve_ancestry(
    tree: &[Symbol],
    position: Position,
) -> Vec<&Symbol> {
    let mut path = Vec::new();
    let mut level = tree;

    while let Some(symbol) = level.iter().find(|symbol| encloses(symbol, position)) {
        path.push(symbol);
        level = &symbol.children;
    }

    path
}

/// Innermost symbol of any kind at `position`.
pub fn innermost_symbol(
    tree: &[Symbol],
    position: Position,
) -> Option<&Symbol> {
    resolve_ancestry(tree, position).pop()
}

/// Innermost function or class at `position`. Untracked symbols nested
/// deeper in the path (variables, fields) are skipped over.
pub fn innermost_tracked_symbol(
    tree: &[Symbol],
    position: Position,
) -> Option<&Symbol> {
    resolve_ancestry(tree, position).into_iter().rev().find(|symbol| symbol.is_tracked())
}

/// Outermost enclosing symbol of `category`, e.g. the whole class around a
/// cursor sitting in one of its methods.
pub fn enclosing_symbol_of(
    tree: &[Symbol],
    position: Position,
    category: SymbolCategory,
) -> Option<&Symbol> {
    resolve_ancestry(tree, position).into_iter().find(|symbol| symbol.category() == Some(category))
}

fn encloses(
    symbol: &Symbol,
    position: Position,
) -> bool {
    symbol.range.contains(position) || symbol.range.start.line == position.line
}

#[cfg(test)]
#[path = "../../tests/src/symbols/ancestry_tests.rs"]
mod tests;
