use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    symbols::types::{Symbol, SymbolKind},
    text_pos::{LineIndex, Position, TextRange},
};

use super::mask::{MaskStyle, mask_source};

static DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:async\s+)?def\s+([^\W\d]\w*)").expect("valid def regex"));
static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^class\s+([^\W\d]\w*)").expect("valid class regex"));
static ASSIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\W\d]\w*)\s*(?::[^=]+)?=(?:[^=]|$)").expect("valid assignment regex"));

const TAB_WIDTH: usize = 8;

/// First physical line of a logical Python line.
#[derive(Debug, Clone, Copy)]
struct LogicalLine {
    line: usize,
    indent: usize,
    /// Leading whitespace in UTF-16 units, used as the symbol's start column.
    indent_units: u32,
}

struct OpenBlock {
    indent: usize,
    symbol: Symbol,
}

/// Build the symbol tree of a Python module from indentation.
///
/// `def`/`async def` become functions (methods when their nearest enclosing
/// symbol is a class), `class` becomes a class, and plain assignments at
/// module or class level become variables. A block closes at the first later
/// logical line indented at or left of its header; its range ends at the end
/// of the last line that carries code.
pub(crate) fn scan_python(text: &str) -> Vec<Symbol> {
    let masked = mask_source(text, MaskStyle::Python);
    let index = LineIndex::new(text);
    let line_count = index.line_count();

    let mut has_code = vec![false; line_count];
    let mut logical_lines = Vec::new();
    let mut depth: usize = 0;
    let mut backslash_continuation = false;

    for line in 0..line_count {
        let Some((start, end)) = index.line_span(&masked.text, line) else {
            continue;
        };
        let content = &masked.text[start..end];
        let trimmed = content.trim();
        has_code[line] = !trimmed.is_empty();

        let in_literal = masked.starts_in_literal.get(line).copied().unwrap_or(false);
        let is_logical_start = depth == 0 && !in_literal && !backslash_continuation;
        if is_logical_start && !trimmed.is_empty() {
            let leading = &content[..content.len() - content.trim_start().len()];
            logical_lines.push(LogicalLine {
                line,
                indent: visual_width(leading),
                indent_units: leading.chars().count() as u32,
            });
        }

        for b in content.bytes() {
            match b {
                b'(' | b'[' | b'{' => depth += 1,
                b')' | b']' | b'}' => depth = depth.saturating_sub(1),
                _ => {},
            }
        }
        backslash_continuation = content.trim_end().ends_with('\\');
    }

    let last_code_line = |before: usize| (0..before).rev().find(|&line| has_code[line]);
    let end_of = |line: usize| index.line_end_position(text, line).unwrap_or_default();

    let mut roots = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();

    for (k, logical) in logical_lines.iter().enumerate() {
        let closing_line = last_code_line(logical.line).unwrap_or(logical.line);
        while stack.last().is_some_and(|open| open.indent >= logical.indent) {
            if let Some(open) = stack.pop() {
                let mut symbol = open.symbol;
                symbol.range.end = end_of(closing_line);
                attach(&mut stack, &mut roots, symbol);
            }
        }

        let Some((start, end)) = index.line_span(&masked.text, logical.line) else {
            continue;
        };
        let statement = masked.text[start..end].trim_start();
        let header_start = Position::new(logical.line as u32, logical.indent_units);
        let parent_kind = stack.last().map(|open| open.symbol.kind);

        if let Some(caps) = DEF_RE.captures(statement) {
            let kind = if parent_kind == Some(SymbolKind::Class) { SymbolKind::Method } else { SymbolKind::Function };
            stack.push(OpenBlock {
                indent: logical.indent,
                symbol: Symbol::new(&caps[1], kind, TextRange::new(header_start, header_start)),
            });
            continue;
        }

        if let Some(caps) = CLASS_RE.captures(statement) {
            stack.push(OpenBlock {
                indent: logical.indent,
                symbol: Symbol::new(&caps[1], SymbolKind::Class, TextRange::new(header_start, header_start)),
            });
            continue;
        }

        let at_module_level = parent_kind.is_none() && logical.indent == 0;
        if (at_module_level || parent_kind == Some(SymbolKind::Class))
            && let Some(caps) = ASSIGN_RE.captures(statement)
        {
            let statement_end = logical_lines
                .get(k + 1)
                .and_then(|next| last_code_line(next.line))
                .or_else(|| last_code_line(line_count))
                .unwrap_or(logical.line)
                .max(logical.line);
            let range = TextRange::new(header_start, end_of(statement_end));
            let symbol = Symbol::new(&caps[1], SymbolKind::Variable, range);
            attach(&mut stack, &mut roots, symbol);
        }
    }

    let final_line = last_code_line(line_count).unwrap_or(0);
    while let Some(open) = stack.pop() {
        let mut symbol = open.symbol;
        symbol.range.end = end_of(final_line).max(symbol.range.start);
        attach(&mut stack, &mut roots, symbol);
    }

    roots
}

fn attach(
    stack: &mut [OpenBlock],
    roots: &mut Vec<Symbol>,
    symbol: Symbol,
) {
    match stack.last_mut() {
        Some(parent) => parent.symbol.children.push(symbol),
        None => roots.push(symbol),
    }
}

fn visual_width(leading: &str) -> usize {
    leading.chars().fold(0, |width, ch| match ch {
        '\t' => (width / TAB_WIDTH + 1) * TAB_WIDTH,
        _ => width + 1,
    })
}

#[cfg(test)]
#[path = "../../../tests/src/symbols/scanner/python_tests.rs"]
mod tests;
