use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_lsp::{
    jsonrpc,
    lsp_types::{self, Url},
};

use crate::{
    ide::lsp::{ide_range_to_lsp, lsp_position_to_ide},
    symbols::{Direction, Jump, JumpReason, Symbol, SymbolCategory, generic_kind},
    text_pos::Position,
};

pub const WHERE_AM_I: &str = "echocode.whereAmI";
pub const JUMP_TO_NEXT_FUNCTION: &str = "echocode.jumpToNextFunction";
pub const JUMP_TO_PREVIOUS_FUNCTION: &str = "echocode.jumpToPreviousFunction";
pub const ENCLOSING_SYMBOL_TEXT: &str = "echocode.enclosingSymbolText";

pub const ALL_COMMANDS: [&str; 4] =
    [WHERE_AM_I, JUMP_TO_NEXT_FUNCTION, JUMP_TO_PREVIOUS_FUNCTION, ENCLOSING_SYMBOL_TEXT];

/// A parsed `workspace/executeCommand` request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    WhereAmI(CursorArgs),
    Jump(Direction, CursorArgs),
    EnclosingSymbolText(CursorArgs, SymbolCategory),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CursorArgs {
    pub(crate) uri: Url,
    pub(crate) position: Position,
}

#[derive(Debug, Deserialize)]
struct RawCursorArgs {
    uri: Url,
    position: lsp_types::Position,
    #[serde(default)]
    category: Option<SymbolCategory>,
}

impl Command {
    pub(crate) fn parse(
        name: &str,
        arguments: &[Value],
    ) -> Result<Self, CommandError> {
        if !ALL_COMMANDS.contains(&name) {
            return Err(CommandError::UnknownCommand(name.to_string()));
        }

        let first = arguments.first().ok_or_else(|| CommandError::MissingArguments(name.to_string()))?;
        let raw: RawCursorArgs = serde_json::from_value(first.clone()).map_err(|error| {
            CommandError::InvalidArguments {
                command: name.to_string(),
                reason: error.to_string(),
            }
        })?;
        let cursor = CursorArgs {
            uri: raw.uri,
            position: lsp_position_to_ide(raw.position),
        };

        match name {
            WHERE_AM_I => Ok(Command::WhereAmI(cursor)),
            JUMP_TO_NEXT_FUNCTION => Ok(Command::Jump(Direction::Next, cursor)),
            JUMP_TO_PREVIOUS_FUNCTION => Ok(Command::Jump(Direction::Previous, cursor)),
            _ => {
                let category = raw.category.unwrap_or(SymbolCategory::Function);
                Ok(Command::EnclosingSymbolText(cursor, category))
            },
        }
    }

    pub(crate) fn cursor(&self) -> &CursorArgs {
        match self {
            Command::WhereAmI(cursor) | Command::Jump(_, cursor) | Command::EnclosingSymbolText(cursor, _) => cursor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CommandError {
    UnknownCommand(String),
    MissingArguments(String),
    InvalidArguments {
        command: String,
        reason: String,
    },
    DocumentNotOpen(Url),
    UnsupportedLanguage(String),
}

impl Display for CommandError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand(command) => write!(f, "unknown command '{command}'"),
            CommandError::MissingArguments(command) => {
                write!(f, "'{command}' expects a {{ uri, position }} argument")
            },
            CommandError::InvalidArguments {
                command,
                reason,
            } => write!(f, "invalid arguments for '{command}': {reason}"),
            CommandError::DocumentNotOpen(uri) => write!(f, "document is not open: {uri}"),
            CommandError::UnsupportedLanguage(language_id) => {
                write!(f, "navigation is not available for language '{language_id}'")
            },
        }
    }
}

impl std::error::Error for CommandError {}

impl From<CommandError> for jsonrpc::Error {
    fn from(error: CommandError) -> Self {
        match error {
            CommandError::UnknownCommand(_) => {
                let mut rpc = jsonrpc::Error::method_not_found();
                rpc.message = error.to_string().into();
                rpc
            },
            _ => jsonrpc::Error::invalid_params(error.to_string()),
        }
    }
}

// ── responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub name: String,
    pub kind: String,
    /// Spoken kind: `function`, `class`, or the lowercased kind name.
    pub label: String,
    pub range: lsp_types::Range,
}

impl From<&Symbol> for SymbolSummary {
    fn from(symbol: &Symbol) -> Self {
        Self {
            name: symbol.display_name().to_string(),
            kind: symbol.kind.name().to_string(),
            label: generic_kind(symbol.kind).into_owned(),
            range: ide_range_to_lsp(symbol.range),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereAmIResponse {
    pub message: String,
    /// Outermost first.
    pub ancestry: Vec<SymbolSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpResponse {
    pub message: String,
    pub direction: Direction,
    pub reason: JumpReason,
    pub wrapped: bool,
    pub target: Option<SymbolSummary>,
}

impl JumpResponse {
    pub(crate) fn new(
        jump: &Jump<'_>,
        message: String,
    ) -> Self {
        Self {
            message,
            direction: jump.direction,
            reason: jump.reason,
            wrapped: jump.wrapped,
            target: jump.target.map(SymbolSummary::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolTextResponse {
    pub symbol: SymbolSummary,
    pub text: String,
}

#[cfg(test)]
#[path = "../../tests/src/server/commands_tests.rs"]
mod tests;
