//! `arena` command-line client.
//!
//! Signs in to Are.na through the OAuth code flow and prints API responses
//! as JSON on stdout. Logs go to stderr (`RUST_LOG` controls verbosity).

mod config;

use std::path::Path;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use arena_client::api::{Direction, Sort};
use arena_client::{ArenaClient, DEFAULT_PAGE, DatabaseTokenStore};
use arena_db::Database;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Are.na API client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the URL to open in a browser to authorize this app.
    AuthUrl,
    /// Exchange an authorization code for an access token and store it.
    Login { code: String },
    /// Forget the stored access token.
    Logout,
    /// Show whether a token is stored and where.
    Status,
    /// The authenticated user.
    Me,
    /// Channels owned by a user.
    UserChannels {
        user_id: u64,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },
    /// A single channel.
    Channel { id: u64 },
    /// Blocks of a channel.
    Contents {
        id: u64,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(long, default_value_t = Sort::default())]
        sort: Sort,
        #[arg(long, default_value_t = Direction::default())]
        direction: Direction,
    },
    /// Thumbnail blocks of a channel.
    Thumbs { id: u64 },
    /// Search channels.
    Search {
        query: String,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },
}

impl Command {
    fn needs_credentials(&self) -> bool {
        matches!(self, Command::AuthUrl | Command::Login { .. })
    }
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::debug!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    load_dotenv();
    let config = AppConfig::load();

    if cli.command.needs_credentials() {
        let missing = config.missing_credentials();
        if !missing.is_empty() {
            anyhow::bail!("missing settings: {}", missing.join(", "));
        }
    }

    std::fs::create_dir_all(&config.data_dir)?;
    let db_path = config.db_path();
    tracing::debug!("Opening database at {}", db_path.display());
    let db = Database::open(&db_path)?;

    let client = ArenaClient::builder(config.arena_config())
        .storage(DatabaseTokenStore::new(db))
        .build()?;

    match cli.command {
        Command::AuthUrl => println!("{}", client.authorization_url()),
        Command::Login { code } => {
            let token = client.exchange_code(&code).await?;
            ensure_signed_in(&client, &db_path)?;
            print_json(&token)?;
        }
        Command::Logout => client.sign_out(),
        Command::Status => print_json(&serde_json::json!({
            "signed_in": client.is_signed_in(),
            "database": db_path,
        }))?,
        Command::Me => print_json(&client.get_current_user().await?)?,
        Command::UserChannels { user_id, page } => {
            print_json(&client.get_user_channels(user_id, page).await?)?
        }
        Command::Channel { id } => print_json(&client.get_channel(id).await?)?,
        Command::Contents {
            id,
            page,
            sort,
            direction,
        } => print_json(
            &client
                .get_channel_contents(id, page, sort, direction)
                .await?,
        )?,
        Command::Thumbs { id } => print_json(&client.get_channel_thumbnails(id).await?)?,
        Command::Search { query, page } => {
            print_json(&client.search_channels(&query, page).await?)?
        }
    }

    Ok(())
}

/// The token store swallows write failures, so confirm the token landed.
fn ensure_signed_in(client: &ArenaClient, db_path: &Path) -> anyhow::Result<()> {
    if !client.is_signed_in() {
        anyhow::bail!("access token was not saved to {}", db_path.display());
    }
    Ok(())
}
