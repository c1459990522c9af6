use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::RwLock;
use tower_lsp::{Client, lsp_types::Url};

use crate::{
    document::{Document, DocumentStore},
    server::{announce::Announcer, commands::CommandError, settings::ServerSettings},
    symbols::{Symbol, SymbolProvider},
};

/// The echocode backend that implements the Language Server Protocol.
pub struct EchoLanguageServer {
    /// The LSP client handle, used to send notifications and requests back.
    pub(crate) client: Client,

    /// Thread-safe store of all open documents.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Builds symbol trees from document text on demand.
    pub(crate) symbol_provider: Arc<SymbolProvider>,

    /// Debounced `window/showMessage` announcements.
    pub(crate) announcer: Announcer,

    /// Whether the client accepts `window/showDocument` with a selection,
    /// which is how a jump moves the cursor.
    pub(crate) client_can_show_document: AtomicBool,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,
}

impl EchoLanguageServer {
    /// Create a new `EchoLanguageServer` wired to the given LSP client.
    pub fn new(client: Client) -> Self {
        let announcer = Announcer::new(client.clone());
        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            symbol_provider: Arc::new(SymbolProvider::new()),
            announcer,
            client_can_show_document: AtomicBool::new(false),
            settings: Arc::new(RwLock::new(ServerSettings::default())),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        *self.settings.write().await = settings;
    }

    pub(crate) fn set_client_can_show_document(
        &self,
        supported: bool,
    ) {
        self.client_can_show_document.store(supported, Ordering::Relaxed);
    }

    pub(crate) fn client_can_show_document(&self) -> bool {
        self.client_can_show_document.load(Ordering::Relaxed)
    }

    /// Fetch an open document together with a freshly scanned symbol tree.
    ///
    /// Fails when the document is unknown or its language is not enabled.
    pub(crate) async fn document_with_symbols(
        &self,
        uri: &Url,
    ) -> Result<(Document, Vec<Symbol>), CommandError> {
        let document = self.document_store.get(uri).ok_or_else(|| CommandError::DocumentNotOpen(uri.clone()))?;
        let settings = self.settings_snapshot().await;
        let language = document
            .language()
            .filter(|language| settings.languages.is_enabled(*language))
            .ok_or_else(|| CommandError::UnsupportedLanguage(document.language_id.clone()))?;

        let symbols = self.symbol_provider.document_symbols(language, &document.text);
        Ok((document, symbols))
    }
}
