pub(crate) mod announce;
pub mod commands;
pub(crate) mod handler;
pub mod settings;
pub(crate) mod state;

pub use settings::ServerSettings;
pub use state::EchoLanguageServer;
