use anyhow::{anyhow, Context, Result};
use bat::PrettyPrinter;
use clap::{Parser, Subcommand};
use cliclack::spinner;
use console::style;
use dotenv::dotenv;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wit::configs::wit::WIT_HOST;
use wit::{MessageRequest, WitClient, WitConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wit access token (can also be set via WIT_ACCESS_TOKEN environment variable)
    #[arg(short, long)]
    access_token: Option<String>,

    /// API host
    #[arg(long, default_value = WIT_HOST)]
    host: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the entity IDs of the app
    Entities,
    /// Show a single entity
    Entity { id: String },
    /// List the intents of the app
    Intents,
    /// Analyse a text message
    Message {
        text: String,
        /// Number of outcomes to return
        #[arg(short, long)]
        n: Option<u32>,
        #[arg(long)]
        msg_id: Option<String>,
    },
    /// Show the stored analysis of an earlier message
    Messages { id: String },
    /// Analyse an audio file
    Audio {
        path: PathBuf,
        #[arg(short, long, default_value = "audio/wav")]
        content_type: String,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Get access token from command line or environment variable
    let access_token = cli
        .access_token
        .or_else(|| env::var("WIT_ACCESS_TOKEN").ok())
        .context(
            "Access token must be provided via --access-token or WIT_ACCESS_TOKEN environment variable",
        )?;

    let client = WitClient::new(WitConfig::new(access_token).with_host(cli.host))?;

    let spin = spinner();
    spin.start("waiting for wit.ai");
    let result = run(&client, cli.command);
    spin.stop("");

    let (title, json) = result?;
    println!("{}", style(title).bold());
    render(&json)?;
    println!();
    Ok(())
}

fn run(client: &WitClient, command: Command) -> Result<(&'static str, String)> {
    match command {
        Command::Entities => pretty("Entities", &client.entities()?),
        Command::Entity { id } => pretty("Entity", &client.entity(&id)?),
        Command::Intents => pretty("Intents", &client.intents()?),
        Command::Message { text, n, msg_id } => {
            let mut request = MessageRequest::text(text);
            request.n = n;
            request.msg_id = msg_id;
            pretty("Message", &client.message(&request)?)
        }
        Command::Messages { id } => pretty("Message", &client.messages(&id)?),
        Command::Audio { path, content_type } => {
            let request = MessageRequest::audio_file(path, content_type);
            pretty("Message", &client.audio_message(&request)?)
        }
    }
}

fn pretty<T: Serialize>(title: &'static str, value: &T) -> Result<(&'static str, String)> {
    Ok((title, serde_json::to_string_pretty(value)?))
}

fn render(content: &str) -> Result<()> {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("json")
        .print()
        .map_err(|e| anyhow!("Failed to render output: {}", e))?;
    Ok(())
}
