// songcraft - songwriting assistant backend
//
// Subcommands:
// - `songcraft serve` - Run the local HTTP API (default)
// - `songcraft generate <request.json>` - Generate one song
// - `songcraft parse <raw.txt>` - Parse a saved song response
// - `songcraft history ...` - List, show, delete or clear saved songs
// - `songcraft key ...` - Manage the Gemini API key

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use songcraft_lib::commands::{self, AppState};
use songcraft_lib::config::AppConfig;
use songcraft_lib::i18n::Language;
use songcraft_lib::server;
use songcraft_lib::telemetry;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "songcraft")]
#[command(about = "Songwriting assistant: prompt assembly, lyric parsing and Gemini calls")]
#[command(version)]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// UI language (en, th, zh, ja, ko)
    #[arg(long, global = true)]
    language: Option<Language>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the local HTTP API
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// HTTP port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Require a freshly generated bearer token (printed on start)
        #[arg(long)]
        generate_token: bool,
    },

    /// Generate a song from a JSON request file ("-" reads stdin)
    Generate {
        request: PathBuf,

        /// Print the full result as JSON instead of the raw song
        #[arg(long)]
        json: bool,
    },

    /// Parse a raw song response file
    Parse {
        file: PathBuf,

        /// Requested section order, e.g. "[Intro],[Verse 1],[Chorus]"
        #[arg(long, value_delimiter = ',')]
        structure: Vec<String>,
    },

    /// Manage saved songs
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Manage the Gemini API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved songs, newest first
    List,
    /// Print one saved song
    Show { id: i64 },
    /// Delete one saved song
    Delete { id: i64 },
    /// Delete every saved song
    Clear,
}

#[derive(Subcommand)]
enum KeyAction {
    /// Store a key (read from stdin when omitted)
    Set { key: Option<String> },
    /// Remove the stored key
    Delete,
    /// Show whether a key is configured
    Status,
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(level) = cli.log {
        config.log_level = level;
    }
    telemetry::init(&config.log_level);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        generate_token: false,
    }) {
        Commands::Serve {
            host,
            port,
            generate_token,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            let token = if generate_token {
                let token = server::generate_token();
                println!("Bearer token: {}", token);
                Some(token)
            } else {
                config.auth_token.clone()
            };
            songcraft_lib::run(config, token).await.map_err(|e| anyhow!(e))?;
        }

        Commands::Generate { request, json } => {
            let input = read_input(&request)?;
            let request = commands::song::request_from_json(&input, config.language)?;
            let state = AppState::open(config)?;
            let generated = commands::song::generate_song(&state, request).await?;
            if json {
                println!("{}", to_json(&generated)?);
            } else {
                println!("{}", generated.history_item.song_data);
            }
        }

        Commands::Parse { file, structure } => {
            let raw = read_input(&file)?;
            let parsed = commands::song::parse_song(&raw, &structure);
            println!("{}", to_json(&parsed)?);
        }

        Commands::History { action } => {
            let state = AppState::open(config)?;
            match action {
                HistoryAction::List => {
                    for item in commands::history::list_history(&state)? {
                        println!(
                            "{:>5}  {}  {}  ({})",
                            item.id,
                            item.created_at.format("%Y-%m-%d %H:%M"),
                            item.title,
                            item.style
                        );
                    }
                }
                HistoryAction::Show { id } => match commands::history::restore_history(&state, id)? {
                    Some(restored) => println!("{}", restored.item.song_data),
                    None => bail!("no history item {}", id),
                },
                HistoryAction::Delete { id } => {
                    if !commands::history::delete_history(&state, id)? {
                        bail!("no history item {}", id);
                    }
                    println!("Deleted {}", id);
                }
                HistoryAction::Clear => {
                    let removed = commands::history::clear_history(&state)?;
                    println!("Removed {} item(s)", removed);
                }
            }
        }

        Commands::Key { action } => {
            let state = AppState::open(config)?;
            match action {
                KeyAction::Set { key } => {
                    let key = match key {
                        Some(key) => key,
                        None => read_input(&PathBuf::from("-"))?,
                    };
                    let source = commands::settings::set_api_key(&state, key.trim())?;
                    println!("API key stored ({:?})", source);
                }
                KeyAction::Delete => {
                    commands::settings::delete_api_key(&state)?;
                    println!("API key deleted");
                }
                KeyAction::Status => {
                    let status = commands::settings::api_key_status(&state);
                    match status.source {
                        Some(source) => println!("Configured ({:?})", source),
                        None => println!("Not configured"),
                    }
                }
            }
        }
    }

    Ok(())
}
