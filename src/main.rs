mod cli;
mod groq_client;
mod planner;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use eyre::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::cli::trip::config::{ConfigOverrides, PlannerSettings};
use crate::cli::trip::PlannerContext;
use crate::groq_client::GroqClient;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// City for the day trip
    #[arg(short, long)]
    city: Option<String>,

    /// Comma-separated interests, e.g. "museums, food"
    #[arg(short, long)]
    interests: Option<String>,

    /// Groq API key (defaults to GROQ_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Model to request (defaults to GROQ_MODEL or llama-3.3-70b-versatile)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Sampling temperature
    #[arg(short, long, global = true)]
    temperature: Option<f32>,

    /// Base URL of the OpenAI-compatible API (defaults to GROQ_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the session's turn log after the itinerary
    #[arg(long, global = true)]
    transcript: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for city and interests until /quit
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Travel Itinerary Planner");

    let overrides = ConfigOverrides {
        api_key: cli.api_key,
        model: cli.model,
        base_url: cli.base_url,
        temperature: cli.temperature,
    };

    let settings = match PlannerSettings::from_env(overrides) {
        Ok(settings) => settings,
        Err(e) => {
            println!("Failed to initialize Groq client: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut planner = PlannerContext::new(
        Box::new(io::stdout()),
        Box::new(GroqClient::new(settings.base_url)),
        settings.completion,
        cli.transcript,
    );

    match cli.command {
        Some(Commands::Interactive) => planner.run_interactive().await,
        // Without flags there is nothing to plan from, so fall back to prompting
        None if cli.city.is_none() && cli.interests.is_none() => planner.run_interactive().await,
        None => planner.run_once(cli.city, cli.interests).await,
    }
}
