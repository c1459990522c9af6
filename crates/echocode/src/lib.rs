pub mod describe;
pub mod document;
pub mod ide;
pub mod language;
pub mod server;
pub mod symbols;
pub mod text_pos;

pub use describe::{describe_jump, describe_position};
pub use language::{Language, is_supported_language};
pub use server::{EchoLanguageServer, ServerSettings};
pub use symbols::{
    Direction, Jump, JumpReason, Symbol, SymbolCategory, SymbolKind, SymbolProvider, compute_jump,
    enclosing_symbol_of, flatten, generic_kind, innermost_symbol, innermost_tracked_symbol, navigate,
    resolve_ancestry,
};
pub use text_pos::{Position, TextRange};
