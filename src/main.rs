//! wsgate command line.
//!
//! Runs the adapter over event files so a captured gateway payload can be
//! inspected the way the application would see it.
//!
//! ```text
//! event.json ──▶ handler::handler_for ──▶ Request ──▶ stdout (JSON)
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use wsgate::config::{load_config, override_log_level, AdapterConfig};
use wsgate::handler::{handler_for, infer_handler};
use wsgate::http::{to_gateway_reply, Request, RequestBuilder, Response};
use wsgate::observability::{init_logging, observer_for};
use wsgate::InvocationContext;

#[derive(Parser)]
#[command(name = "wsgate")]
#[command(about = "Inspect API Gateway WebSocket events as normalized requests", long_about = None)]
struct Cli {
    /// Adapter configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized request for an event ("-" reads stdin)
    Request {
        event: PathBuf,
        /// Invocation context file (JSON).
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Write the decoded message body to stdout
    Body { event: PathBuf },
    /// Print the event type recognized for an event
    Infer { event: PathBuf },
    /// Print the gateway reply for a status code
    Reply {
        #[arg(long)]
        status: u16,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AdapterConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config = override_log_level(config, level)?;
    }

    init_logging(&config.observability)?;

    let builder = RequestBuilder::new(config.request.clone())
        .with_observer(observer_for(&config.observability));

    match cli.command {
        Commands::Request { event, context } => {
            let context = match context {
                Some(path) => InvocationContext::from_slice(&read_input(&path)?)?,
                None => InvocationContext::default(),
            };
            let handler = handler_for(read_event(&event)?, Arc::new(context), builder)?;
            let request = handler.request()?;
            tracing::debug!(
                event_type = handler.event_type(),
                headers = request.headers.len(),
                body_len = request.body.len(),
                "Request normalized"
            );
            println!("{}", serde_json::to_string_pretty(&render_request(&request))?);
        }
        Commands::Body { event } => {
            let handler = handler_for(read_event(&event)?, Arc::default(), builder)?;
            let body = handler.body()?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&body)?;
            stdout.flush()?;
        }
        Commands::Infer { event } => {
            println!("{}", infer_handler(&read_event(&event)?)?);
        }
        Commands::Reply { status } => {
            let reply = to_gateway_reply(&Response::new(status));
            println!("{}", serde_json::to_string(&reply)?);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

fn read_event(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_slice(&read_input(path)?)?)
}

/// JSON view of a request, with byte fields shown as (lossy) text.
fn render_request(request: &Request) -> Value {
    json!({
        "event_type": request.event_type,
        "scheme": request.scheme,
        "path": request.path,
        "query_string": lossy(&request.query_string),
        "server": [request.server.0, request.server.1],
        "client": [request.client.0, request.client.1],
        "headers": request
            .headers
            .iter()
            .map(|(name, value)| [lossy(name), lossy(value)])
            .collect::<Vec<_>>(),
        "body": lossy(&request.body),
    })
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
