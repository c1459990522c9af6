use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use echocode::EchoLanguageServer;

const LOG_FILE_NAME: &str = "echocode-server.log";

#[derive(Parser, Debug)]
#[command(name = "echocode-server", version, about)]
struct Args {
    /// Log debug output for echocode and the LSP transport.
    #[arg(long, short)]
    verbose: bool,

    /// Write the log here instead of `~/.echocode/echocode-server.log`.
    #[arg(long)]
    log_file: Option<String>,
}

fn default_log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

fn log_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = PathBuf::from(home).join(".echocode");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}

/// Install the stderr and file subscribers, returning the log file path.
fn init_logging(args: &Args) -> PathBuf {
    let (stderr_directives, file_directives) = if args.verbose {
        ("echocode=debug,tower_lsp=debug", "echocode=debug,tower_lsp=info")
    } else {
        ("echocode=info,tower_lsp=warn", "echocode=info,tower_lsp=warn")
    };

    let log_path = args
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path);

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path
            .file_name()
            .unwrap_or(OsStr::new(LOG_FILE_NAME)),
    );

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(file_directives));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(stderr_directives));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    log_path
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let log_path = init_logging(&args);

    info!("Starting echocode server v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());

    let (service, socket) = LspService::new(EchoLanguageServer::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;

    info!("echocode server stopped");
}
