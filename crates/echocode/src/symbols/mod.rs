mod ancestry;
mod flatten;
mod kind;
mod navigation;
mod provider;
mod scanner;
mod types;

pub use ancestry::{enclosing_symbol_of, innermost_symbol, innermost_tracked_symbol, resolve_ancestry};
pub use flatten::{flatten, walk};
pub use kind::generic_kind;
pub use navigation::{Direction, Jump, JumpReason, compute_jump, navigate};
pub use provider::SymbolProvider;
pub use types::{Symbol, SymbolCategory, SymbolKind};
