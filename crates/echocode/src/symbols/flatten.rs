use super::types::Symbol;

/// Every function/method and class/struct in the tree, in document order.
///
/// Untracked containers are still descended into, so a function inside a
/// namespace or a method inside a class both show up next to their parent.
pub fn flatten(tree: &[Symbol]) -> Vec<&Symbol> {
    let mut flat = Vec::new();
    collect_tracked(tree, &mut flat);
    // Providers do not always report siblings in order.
    flat.sort_by_key(|symbol| symbol.range.start);
    flat
}

fn collect_tracked<'a>(
    symbols: &'a [Symbol],
    out: &mut Vec<&'a Symbol>,
) {
    for symbol in symbols {
        if symbol.is_tracked() {
            out.push(symbol);
        }
        collect_tracked(&symbol.children, out);
    }
}

/// Every symbol in the tree, depth-first, parents before children.
pub fn walk(tree: &[Symbol]) -> Vec<&Symbol> {
    let mut result = Vec::new();
    for symbol in tree {
        result.push(symbol);
        result.extend(walk(&symbol.children));
    }
    result
}

#[cfg(test)]
#[path = "../../tests/src/symbols/flatten_tests.rs"]
mod tests;
