use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    symbols::types::{Symbol, SymbolKind},
    text_pos::{LineIndex, TextRange},
};

use super::mask::{MaskStyle, mask_source};

static ACCESS_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:public|private|protected)\s*:\s*)+").expect("valid access regex"));
static NAMESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bnamespace\s+([^\W\d]\w*(?:\s*::\s*[^\W\d]\w*)*)\s*$").expect("valid namespace regex"));
static ENUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\benum\s+(?:(?:class|struct)\s+)?([^\W\d]\w*)").expect("valid enum regex"));
static RECORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\brecord\s+([^\W\d]\w*)\s*\(").expect("valid record regex"));
static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(class|struct|interface)\s+([^\W\d]\w*)").expect("valid type regex"));
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\s+throws\s+[\w.,\s]+|\s*->\s*[\w:<>,\s*&]+|\s*\b(?:const|noexcept|override|final|volatile|mutable)\b|\s*&&?)$",
    )
    .expect("valid suffix regex")
});
static FUNCTION_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(operator\s*(?:\(\)|\[\]|[^\w\s(]+|\w+)|~?[^\W\d]\w*(?:\s*::\s*~?[^\W\d]\w*)*)\s*$")
        .expect("valid function name regex")
});

const NOT_FUNCTIONS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "sizeof", "alignof", "decltype", "synchronized", "else",
    "do", "try", "new", "delete", "throw", "case", "using", "typeof", "foreach", "constexpr",
];

struct Frame {
    symbol: Option<Symbol>,
}

/// Build the symbol tree of a C++ or Java source from its braces.
///
/// The text before each `{`, back to the previous `;`, `{` or `}`, is the
/// block header. Headers naming a namespace, class, struct, interface, enum,
/// record or function open a symbol spanning header to closing brace;
/// anything else (control flow, initializers, lambdas) is an anonymous block
/// whose nested symbols attach to the nearest named ancestor.
pub(crate) fn scan_c_family(text: &str) -> Vec<Symbol> {
    let masked = mask_source(text, MaskStyle::CFamily);
    let index = LineIndex::new(text);
    let bytes = masked.text.as_bytes();

    let mut roots = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut segment_start = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            // `a{x}` inside `P(int x) : a{x}, b{0} {` belongs to the header.
            b'{' if opens_member_initializer(&masked.text[segment_start..i]) => {
                i = skip_braced(bytes, i);
                continue;
            },
            b'{' => {
                let enclosing = frames.iter().rev().find_map(|frame| frame.symbol.as_ref().map(|s| s.kind));
                let symbol = classify_header(&masked.text, segment_start, i, enclosing).map(|(name, kind, start)| {
                    let start = index.position_of(text, start);
                    Symbol::new(name, kind, TextRange::new(start, start))
                });
                frames.push(Frame {
                    symbol,
                });
                segment_start = i + 1;
            },
            b'}' => {
                if let Some(frame) = frames.pop()
                    && let Some(mut symbol) = frame.symbol
                {
                    symbol.range.end = index.position_of(text, i + 1);
                    attach(&mut frames, &mut roots, symbol);
                }
                segment_start = i + 1;
            },
            b';' => segment_start = i + 1,
            _ => {},
        }
        i += 1;
    }

    let end = index.position_of(text, text.len());
    while let Some(frame) = frames.pop() {
        if let Some(mut symbol) = frame.symbol {
            symbol.range.end = end;
            attach(&mut frames, &mut roots, symbol);
        }
    }

    roots
}

fn attach(
    frames: &mut [Frame],
    roots: &mut Vec<Symbol>,
    symbol: Symbol,
) {
    match frames.iter_mut().rev().find_map(|frame| frame.symbol.as_mut()) {
        Some(parent) => parent.children.push(symbol),
        None => roots.push(symbol),
    }
}

/// Returns the symbol name, kind and the byte offset the header starts at.
fn classify_header(
    masked: &str,
    segment_start: usize,
    brace: usize,
    enclosing: Option<SymbolKind>,
) -> Option<(String, SymbolKind, usize)> {
    let segment = &masked[segment_start..brace];
    let leading_ws = segment.len() - segment.trim_start().len();
    let mut header_start = segment_start + leading_ws;
    let mut header = segment.trim();

    if let Some(prefix) = ACCESS_PREFIX_RE.find(header) {
        header_start += prefix.end();
        header = &header[prefix.end()..];
    }
    if header.is_empty() {
        return None;
    }

    if let Some(caps) = NAMESPACE_RE.captures(header) {
        let name: String = caps[1].split_whitespace().collect();
        return Some((name, SymbolKind::Namespace, header_start));
    }

    let outer = strip_angle_brackets(header);
    if let Some(caps) = RECORD_RE.captures(&outer) {
        return Some((caps[1].to_string(), SymbolKind::Class, header_start));
    }

    let signature = strip_signature_suffix(header);
    if signature.ends_with(')') {
        return function_name(signature).map(|name| {
            let inside_type = matches!(
                enclosing,
                Some(SymbolKind::Class | SymbolKind::Struct | SymbolKind::Interface | SymbolKind::Enum)
            );
            let kind = if inside_type || name.contains("::") { SymbolKind::Method } else { SymbolKind::Function };
            (name, kind, header_start)
        });
    }

    if let Some(caps) = ENUM_RE.captures(&outer) {
        return Some((caps[1].to_string(), SymbolKind::Enum, header_start));
    }

    let caps = TYPE_RE.captures(&outer)?;
    let kind = match &caps[1] {
        "struct" => SymbolKind::Struct,
        "interface" => SymbolKind::Interface,
        _ => SymbolKind::Class,
    };
    Some((caps[2].to_string(), kind, header_start))
}

/// Drop constructor initializer lists and trailing qualifiers so the header
/// ends with the parameter list.
fn strip_signature_suffix(header: &str) -> &str {
    let mut signature = cut_initializer_list(header).trim_end();
    while let Some(found) = SUFFIX_RE.find(signature) {
        if found.start() == found.end() {
            break;
        }
        signature = signature[..found.start()].trim_end();
    }
    signature
}

/// `Foo::Foo(int x) : a(x), b{0}` -> `Foo::Foo(int x)`
fn cut_initializer_list(header: &str) -> &str {
    match initializer_colon(header) {
        Some(colon) => header[..colon].trim_end(),
        None => header,
    }
}

/// Byte offset of the `:` that starts a constructor initializer list.
fn initializer_colon(header: &str) -> Option<usize> {
    header.bytes().enumerate().filter(|&(_, b)| b == b')').find_map(|(i, _)| {
        let after_ws = header[i + 1..].trim_start();
        (after_ws.starts_with(':') && !after_ws.starts_with("::")).then(|| header.len() - after_ws.len())
    })
}

/// True when a `{` right after `segment` opens a member's brace initializer
/// rather than the constructor body: the segment has an initializer list
/// whose last entry is still a bare member or base name.
fn opens_member_initializer(segment: &str) -> bool {
    let Some(colon) = initializer_colon(segment) else {
        return false;
    };
    let list = segment[colon + 1..].trim_end();
    let entry = list.rsplit(',').next().unwrap_or(list).trim();
    entry.ends_with(|ch: char| ch.is_alphanumeric() || ch == '_' || ch == '>')
}

/// Index just past the `}` matching the `{` at `open`, or the end of input.
fn skip_braced(
    bytes: &[u8],
    open: usize,
) -> usize {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            },
            _ => {},
        }
    }
    bytes.len()
}

fn function_name(signature: &str) -> Option<String> {
    let open = matching_open_paren(signature)?;
    let before = &signature[..open];
    let caps = FUNCTION_NAME_RE.captures(before)?;
    let found = caps.get(1)?;
    let name: String = found.as_str().split_whitespace().collect();

    let preceding = before[..found.start()].trim_end();
    if ends_with_word(preceding, "new") || preceding.ends_with('=') || preceding.ends_with('.') {
        return None;
    }
    if NOT_FUNCTIONS.contains(&name.as_str()) {
        return None;
    }
    Some(name)
}

fn ends_with_word(
    text: &str,
    word: &str,
) -> bool {
    text.strip_suffix(word)
        .is_some_and(|rest| !rest.chars().next_back().is_some_and(|ch| ch.is_alphanumeric() || ch == '_'))
}

/// Index of the `(` matching the final `)` of `signature`.
fn matching_open_paren(signature: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in signature.bytes().enumerate().rev() {
        match b {
            b')' => depth += 1,
            b'(' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            },
            _ => {},
        }
    }
    None
}

/// Remove template argument lists so `template <class T> struct Box` reads
/// as `template  struct Box`.
fn strip_angle_brackets(header: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(header.len());
    for ch in header.chars() {
        match ch {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(ch),
            _ => {},
        }
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/src/symbols/scanner/c_family_tests.rs"]
mod tests;
