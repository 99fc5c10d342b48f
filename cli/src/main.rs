use canvas::doc::Card;
use canvas::engine::EngineCore;
use canvas::geometry::Size;
use canvas::layout::LayoutConfig;
use canvas::render::CardView;
use clap::{Parser, Subcommand};
use client::app::PostcardApp;
use client::config::{ClientConfig, DEFAULT_API_URL};
use client::headless::HeadlessSurface;
use client::net::api::{CardRepository, HttpCardRepository};
use client::net::error::RepositoryError;
use client::state::form::{CardForm, FormError};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("server did not confirm deletion of card {0}")]
    NotDeleted(i64),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "postcards-cli", about = "Postcard board API CLI")]
struct Cli {
    #[arg(long, env = "POSTCARDS_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the card API answers.
    Ping,
    /// List cards, newest first.
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Create a card. Blank sender or recipient become "Anónimo".
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "")]
        sender: String,
        #[arg(long, default_value = "")]
        recipient: String,
    },
    /// Delete a card by id.
    Delete {
        id: i64,
    },
    /// Load every card onto a headless board and print where each lands.
    Layout {
        #[arg(long, help = "Board width; defaults to the configured container")]
        width: Option<f64>,
        #[arg(long, help = "Board height; defaults to the configured container")]
        height: Option<f64>,
        #[arg(long, help = "Seed for reproducible placement")]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_api_url(&cli.base_url);
    let repo = HttpCardRepository::new(&config)?;

    match cli.command {
        Command::Ping => run_ping(&repo).await,
        Command::List { json } => run_list(&repo, json).await,
        Command::Create { title, message, sender, recipient } => {
            run_create(&repo, &CardForm::new(&title, &message, &sender, &recipient)).await
        }
        Command::Delete { id } => run_delete(&repo, id).await,
        Command::Layout { width, height, seed } => {
            run_layout(repo, layout_container(&config, width, height), seed).await
        }
    }
}

async fn run_ping(repo: &HttpCardRepository) -> Result<(), CliError> {
    repo.ping().await?;
    println!("ok");
    Ok(())
}

async fn run_list(repo: &HttpCardRepository, json: bool) -> Result<(), CliError> {
    let cards = repo.list().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }
    for card in &cards {
        println!("{}", card_line(card));
    }
    Ok(())
}

async fn run_create(repo: &HttpCardRepository, form: &CardForm) -> Result<(), CliError> {
    let card = repo.create(&form.validate()?).await?;
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}

async fn run_delete(repo: &HttpCardRepository, id: i64) -> Result<(), CliError> {
    if !repo.delete(id).await? {
        return Err(CliError::NotDeleted(id));
    }
    println!("deleted {id}");
    Ok(())
}

async fn run_layout(repo: HttpCardRepository, container: Size, seed: Option<u64>) -> Result<(), CliError> {
    // The board soft-fails on an unreachable server; the CLI should not.
    repo.ping().await?;

    let config = LayoutConfig { container, ..LayoutConfig::default() };
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut app = PostcardApp::new(repo, HeadlessSurface::new(), EngineCore::with_rng(config, rng));
    let count = app.load().await;

    println!("{count} cards on a {}x{} board", container.width, container.height);
    for view in app.surface().views() {
        println!("{}", layout_line(view));
    }
    Ok(())
}

fn layout_container(config: &ClientConfig, width: Option<f64>, height: Option<f64>) -> Size {
    Size::new(width.unwrap_or(config.container.width), height.unwrap_or(config.container.height))
}

fn card_line(card: &Card) -> String {
    format!("{}\t{}\t{}\tDe: {}\tPara: {}", card.id, card.date, card.title, card.sender, card.recipient)
}

fn layout_line(view: &CardView) -> String {
    format!("{}\t({}, {})\tz={}\t{}", view.card_id, view.origin.x.round(), view.origin.y.round(), view.z_index, view.title)
}
