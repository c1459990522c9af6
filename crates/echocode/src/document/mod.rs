//! Open-document bookkeeping: text, version and language id of every file
//! the client currently has open.

mod document_store;
mod text_document;

pub use document_store::DocumentStore;
pub use text_document::Document;
