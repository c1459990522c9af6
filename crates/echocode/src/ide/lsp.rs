use tower_lsp::lsp_types;

use crate::{
    symbols::{Symbol, SymbolKind},
    text_pos::{Position, TextRange},
};

pub fn lsp_position_to_ide(position: lsp_types::Position) -> Position {
    Position::new(position.line, position.character)
}

pub fn ide_position_to_lsp(position: Position) -> lsp_types::Position {
    lsp_types::Position::new(position.line, position.character)
}

pub fn lsp_range_to_ide(range: lsp_types::Range) -> TextRange {
    TextRange::new(lsp_position_to_ide(range.start), lsp_position_to_ide(range.end))
}

pub fn ide_range_to_lsp(range: TextRange) -> lsp_types::Range {
    lsp_types::Range::new(ide_position_to_lsp(range.start), ide_position_to_lsp(range.end))
}

pub fn symbol_kind_to_lsp(kind: SymbolKind) -> lsp_types::SymbolKind {
    match kind {
        SymbolKind::File => lsp_types::SymbolKind::FILE,
        SymbolKind::Module => lsp_types::SymbolKind::MODULE,
        SymbolKind::Namespace => lsp_types::SymbolKind::NAMESPACE,
        SymbolKind::Package => lsp_types::SymbolKind::PACKAGE,
        SymbolKind::Class => lsp_types::SymbolKind::CLASS,
        SymbolKind::Method => lsp_types::SymbolKind::METHOD,
        SymbolKind::Property => lsp_types::SymbolKind::PROPERTY,
        SymbolKind::Field => lsp_types::SymbolKind::FIELD,
        SymbolKind::Constructor => lsp_types::SymbolKind::CONSTRUCTOR,
        SymbolKind::Enum => lsp_types::SymbolKind::ENUM,
        SymbolKind::Interface => lsp_types::SymbolKind::INTERFACE,
        SymbolKind::Function => lsp_types::SymbolKind::FUNCTION,
        SymbolKind::Variable => lsp_types::SymbolKind::VARIABLE,
        SymbolKind::Constant => lsp_types::SymbolKind::CONSTANT,
        SymbolKind::String => lsp_types::SymbolKind::STRING,
        SymbolKind::Number => lsp_types::SymbolKind::NUMBER,
        SymbolKind::Boolean => lsp_types::SymbolKind::BOOLEAN,
        SymbolKind::Array => lsp_types::SymbolKind::ARRAY,
        SymbolKind::Object => lsp_types::SymbolKind::OBJECT,
        SymbolKind::Key => lsp_types::SymbolKind::KEY,
        SymbolKind::Null => lsp_types::SymbolKind::NULL,
        SymbolKind::EnumMember => lsp_types::SymbolKind::ENUM_MEMBER,
        SymbolKind::Struct => lsp_types::SymbolKind::STRUCT,
        SymbolKind::Event => lsp_types::SymbolKind::EVENT,
        SymbolKind::Operator => lsp_types::SymbolKind::OPERATOR,
        SymbolKind::TypeParameter => lsp_types::SymbolKind::TYPE_PARAMETER,
    }
}

/// Nested `DocumentSymbol` for `textDocument/documentSymbol`.
pub fn symbol_to_lsp(symbol: &Symbol) -> lsp_types::DocumentSymbol {
    let range = ide_range_to_lsp(symbol.range);
    let selection_start = ide_position_to_lsp(symbol.range.start);
    let children: Vec<lsp_types::DocumentSymbol> = symbol.children.iter().map(symbol_to_lsp).collect();

    #[allow(deprecated)]
    lsp_types::DocumentSymbol {
        name: symbol.name.clone(),
        detail: None,
        kind: symbol_kind_to_lsp(symbol.kind),
        tags: None,
        deprecated: None,
        range,
        selection_range: lsp_types::Range::new(selection_start, selection_start),
        children: if children.is_empty() {
            None
        } else {
            Some(children)
        },
    }
}
