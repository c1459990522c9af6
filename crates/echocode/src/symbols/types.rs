use serde::{Deserialize, Serialize};

use crate::text_pos::TextRange;

/// Kind reported for a symbol. Mirrors the LSP symbol kinds so trees coming
/// from any code-intelligence layer can be represented without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

/// The two kinds of symbol navigation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Function,
    Class,
}

impl SymbolCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolCategory::Function => "function",
            SymbolCategory::Class => "class",
        }
    }
}

/// One named code construct and everything nested inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Full span, header and body included.
    pub range: TextRange,
    /// Nested symbols in source order.
    #[serde(default)]
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        range: TextRange,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(
        mut self,
        children: Vec<Symbol>,
    ) -> Self {
        self.children = children;
        self
    }

    pub fn category(&self) -> Option<SymbolCategory> {
        self.kind.category()
    }

    pub fn is_tracked(&self) -> bool {
        self.category().is_some()
    }

    /// Name with any parameter list some providers append trimmed off.
    pub fn display_name(&self) -> &str {
        match self.name.split_once('(') {
            Some((head, _)) => head.trim_end(),
            None => &self.name,
        }
    }
}
