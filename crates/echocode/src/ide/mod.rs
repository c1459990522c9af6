//! Conversions between the crate's own position/symbol types and
//! `lsp_types`.

pub mod lsp;
