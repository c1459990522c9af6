use tracing::debug;

use crate::language::Language;

use super::{flatten::walk, scanner::scan, types::Symbol};

/// Produces symbol trees for documents.
///
/// Holds no state: every call re-scans the text it is given, since the
/// document may have been edited since the last request.
#[derive(Clone, Debug, Default)]
pub struct SymbolProvider;

impl SymbolProvider {
    pub fn new() -> Self {
        Self
    }

    /// Symbol tree for `text`, top-level symbols in source order.
    pub fn document_symbols(
        &self,
        language: Language,
        text: &str,
    ) -> Vec<Symbol> {
        let symbols = scan(language, text);
        debug!(
            "[symbols] scanned {language} document: {} top-level, {} total",
            symbols.len(),
            walk(&symbols).len()
        );
        symbols
    }
}
