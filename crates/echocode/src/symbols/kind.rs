use std::borrow::Cow;

use super::types::{SymbolCategory, SymbolKind};

impl SymbolKind {
    /// Collapses method/function and class/struct into the two navigation
    /// categories. Every other kind is untracked.
    pub fn category(self) -> Option<SymbolCategory> {
        match self {
            SymbolKind::Function | SymbolKind::Method => Some(SymbolCategory::Function),
            SymbolKind::Class | SymbolKind::Struct => Some(SymbolCategory::Class),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::File => "File",
            SymbolKind::Module => "Module",
            SymbolKind::Namespace => "Namespace",
            SymbolKind::Package => "Package",
            SymbolKind::Class => "Class",
            SymbolKind::Method => "Method",
            SymbolKind::Property => "Property",
            SymbolKind::Field => "Field",
            SymbolKind::Constructor => "Constructor",
            SymbolKind::Enum => "Enum",
            SymbolKind::Interface => "Interface",
            SymbolKind::Function => "Function",
            SymbolKind::Variable => "Variable",
            SymbolKind::Constant => "Constant",
            SymbolKind::String => "String",
            SymbolKind::Number => "Number",
            SymbolKind::Boolean => "Boolean",
            SymbolKind::Array => "Array",
            SymbolKind::Object => "Object",
            SymbolKind::Key => "Key",
            SymbolKind::Null => "Null",
            SymbolKind::EnumMember => "EnumMember",
            SymbolKind::Struct => "Struct",
            SymbolKind::Event => "Event",
            SymbolKind::Operator => "Operator",
            SymbolKind::TypeParameter => "TypeParameter",
        }
    }
}

/// Label used when speaking or displaying a symbol: `"function"`, `"class"`,
/// or the lowercased kind name for anything untracked.
///
/// Display only. Control flow goes through [`SymbolKind::category`].
pub fn generic_kind(kind: SymbolKind) -> Cow<'static, str> {
    match kind.category() {
        Some(category) => Cow::Borrowed(category.as_str()),
        None => Cow::Owned(kind.name().to_lowercase()),
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/kind_tests.rs"]
mod tests;
