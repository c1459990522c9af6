use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde_json::Value;
use tower_lsp::{LanguageServer, jsonrpc::Result, lsp_types::*};
use tracing::{debug, info, warn};

use crate::{
    describe::{describe_jump, describe_position},
    ide::lsp::{ide_position_to_lsp, symbol_to_lsp},
    server::{
        commands::{
            ALL_COMMANDS, Command, CommandError, CursorArgs, JumpResponse, SymbolSummary, SymbolTextResponse,
            WhereAmIResponse,
        },
        settings::ServerSettings,
        state::EchoLanguageServer,
    },
    symbols::{Direction, SymbolCategory, enclosing_symbol_of, navigate, resolve_ancestry},
    text_pos::Position as IdePosition,
};

const CLIENT_NOTIFICATION_PREFIX: &str = "echocode:";

#[tower_lsp::async_trait]
impl LanguageServer for EchoLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing echocode...");

        let initial_settings = ServerSettings::from_lsp_payload(params.initialization_options.as_ref());
        self.apply_settings(initial_settings).await;

        let can_show_document = params
            .capabilities
            .window
            .as_ref()
            .and_then(|window| window.show_document.as_ref())
            .is_some_and(|show_document| show_document.support);
        self.set_client_can_show_document(can_show_document);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL)),
                document_symbol_provider: Some(OneOf::Left(true)),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: ALL_COMMANDS.iter().map(|command| command.to_string()).collect(),
                    work_done_progress_options: Default::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "echocode".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        info!("echocode initialized");
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        self.apply_settings(merged).await;
        info!("Applied updated echocode settings");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down echocode");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let document = params.text_document;
        let filename = short_name(&document.uri);
        info!("Opened {filename} ({}, v{}, {} bytes)", document.language_id, document.version, document.text.len());

        if self.settings_snapshot().await.logging.level.allows_info() {
            self.log_to_client(MessageType::INFO, format!("Opened {filename}")).await;
        }

        self.document_store.open(document.uri, document.language_id, document.text, document.version);
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        self.document_store.apply_changes(&uri, params.content_changes, params.text_document.version);
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        debug!("Closed {}", short_name(&uri));
        self.document_store.close(&uri);
        self.announcer.cancel_pending(&uri);
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        match self.document_with_symbols(&params.text_document.uri).await {
            Ok((_, symbols)) => {
                Ok(Some(DocumentSymbolResponse::Nested(symbols.iter().map(symbol_to_lsp).collect())))
            },
            Err(error) => {
                debug!("documentSymbol skipped: {error}");
                Ok(None)
            },
        }
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<Value>> {
        let command = Command::parse(&params.command, &params.arguments).inspect_err(|error| {
            warn!("Rejected {}: {error}", params.command);
        })?;

        let outcome = match &command {
            Command::WhereAmI(cursor) => self.where_am_i(cursor).await,
            Command::Jump(direction, cursor) => self.jump(*direction, cursor).await,
            Command::EnclosingSymbolText(cursor, category) => self.enclosing_symbol_text(cursor, *category).await,
        };

        match outcome {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!("{} failed for {}: {error}", params.command, short_name(&command.cursor().uri));
                Err(error.into())
            },
        }
    }
}

impl EchoLanguageServer {
    async fn where_am_i(
        &self,
        cursor: &CursorArgs,
    ) -> std::result::Result<Value, CommandError> {
        let (_, symbols) = self.document_with_symbols(&cursor.uri).await?;
        let ancestry = resolve_ancestry(&symbols, cursor.position);
        let message = describe_position(&ancestry, cursor.position);
        debug!("[where-am-i] {} at {}: {message}", short_name(&cursor.uri), cursor.position);

        self.announce(&cursor.uri, &message).await;
        let response = WhereAmIResponse {
            message,
            ancestry: ancestry.into_iter().map(SymbolSummary::from).collect(),
        };
        Ok(to_value(&response))
    }

    async fn jump(
        &self,
        direction: Direction,
        cursor: &CursorArgs,
    ) -> std::result::Result<Value, CommandError> {
        let (_, symbols) = self.document_with_symbols(&cursor.uri).await?;
        let jump = navigate(&symbols, direction, cursor.position);
        let message = describe_jump(&jump);
        debug!(
            "[jump] {} {direction} from {}: {:?} (wrapped: {})",
            short_name(&cursor.uri),
            cursor.position,
            jump.reason,
            jump.wrapped
        );

        if let Some(target) = jump.target {
            self.move_cursor(&cursor.uri, target.range.start).await;
        }
        self.announce(&cursor.uri, &message).await;

        Ok(to_value(&JumpResponse::new(&jump, message)))
    }

    async fn enclosing_symbol_text(
        &self,
        cursor: &CursorArgs,
        category: SymbolCategory,
    ) -> std::result::Result<Value, CommandError> {
        let (document, symbols) = self.document_with_symbols(&cursor.uri).await?;
        let Some(symbol) = enclosing_symbol_of(&symbols, cursor.position, category) else {
            debug!("[symbol-text] no enclosing {} at {}", category.as_str(), cursor.position);
            return Ok(Value::Null);
        };
        let text = document.text_in(symbol.range).unwrap_or_default().to_string();
        Ok(to_value(&SymbolTextResponse {
            symbol: SymbolSummary::from(symbol),
            text,
        }))
    }

    /// Ask the client to put the cursor at `start` and reveal it.
    async fn move_cursor(
        &self,
        uri: &Url,
        start: IdePosition,
    ) {
        if !self.client_can_show_document() || !self.settings_snapshot().await.navigation.move_cursor {
            return;
        }

        let start = ide_position_to_lsp(start);
        let params = ShowDocumentParams {
            uri: uri.clone(),
            external: Some(false),
            take_focus: Some(true),
            selection: Some(Range::new(start, start)),
        };
        match AssertUnwindSafe(self.client.show_document(params)).catch_unwind().await {
            Ok(Ok(true)) => {},
            Ok(Ok(false)) => debug!("client declined to move the cursor in {}", short_name(uri)),
            Ok(Err(error)) => warn!("window/showDocument failed: {error}"),
            Err(_) => warn!("show_document panicked (client may have disconnected)"),
        }
    }

    async fn announce(
        &self,
        uri: &Url,
        message: &str,
    ) {
        let settings = self.settings_snapshot().await;
        self.announcer.announce(uri, message.to_string(), &settings.announcements);
    }

    async fn log_to_client(
        &self,
        level: MessageType,
        message: String,
    ) {
        let result = AssertUnwindSafe(self.client.log_message(level, prefixed_client_message(message)))
            .catch_unwind()
            .await;
        if result.is_err() {
            warn!("log_message panicked (client may have disconnected)");
        }
    }
}

fn to_value<T: serde::Serialize>(response: &T) -> Value {
    serde_json::to_value(response).unwrap_or(Value::Null)
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}

fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
