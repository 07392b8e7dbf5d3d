//! hookcheck CLI - Manual webhook integration testing
//!
//! Registers a webhook.site callback with the API, pings it and fires a
//! sample payment or event so deliveries can be checked by eye.

mod browser;
mod flow;
mod prompt;
mod report;

use std::io;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hookcheck::{ConfigError, EventType, HookcheckClient, Settings, SettingsSource, TestMethod};
use tracing_subscriber::EnvFilter;

use flow::Integrator;
use prompt::TerminalPrompter;

#[derive(Parser)]
#[command(name = "hookcheck")]
#[command(about = "hookcheck - Register, ping and trigger webhooks by hand", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL, e.g. https://your-ngrok-url.ngrok.io (falls back to NGROK_URL)
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full integration sequence (default)
    Run,

    /// Register the webhook URL for an event type
    Register {
        /// Event type (falls back to EVENT_TYPE, then a menu)
        #[arg(short, long)]
        event_type: Option<String>,
    },

    /// Ping all registered webhooks
    Ping,

    /// Create a test payment
    Pay,

    /// Trigger a specific event
    Trigger {
        /// Event type (falls back to TRIGGER_EVENT_TYPE, then a menu)
        #[arg(short, long)]
        event_type: Option<String>,
    },

    /// List event types advertised by the API
    Events,

    /// Remove the webhook registration for an event type
    Unregister {
        /// Event type (falls back to EVENT_TYPE, then a menu)
        #[arg(short, long)]
        event_type: Option<String>,
    },

    /// Show resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match Settings::resolve(SettingsSource::from_env(cli.base_url)) {
        Ok(settings) => settings,
        Err(ConfigError::MissingBaseUrl) => {
            println!("No base URL provided. Please provide the ngrok URL when running hookcheck.");
            println!("Example: hookcheck https://your-ngrok-url.ngrok.io");
            process::exit(1);
        }
    };

    let client = HookcheckClient::new(&settings.base_url);
    let mut integrator = Integrator::new(settings, client, TerminalPrompter, io::stdout());

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => integrator.run().await?,
        Commands::Register { event_type } => {
            integrator.announce()?;
            integrator.ensure_webhook_url()?;
            integrator.register_webhook(parse_event(event_type)).await?;
        }
        Commands::Ping => {
            integrator.test_ping().await?;
        }
        Commands::Pay => {
            integrator.create_payment().await?;
        }
        Commands::Trigger { event_type } => {
            integrator.trigger_event(parse_event(event_type)).await?;
        }
        Commands::Events => {
            integrator.list_events().await?;
        }
        Commands::Unregister { event_type } => {
            integrator.unregister_webhook(parse_event(event_type)).await?;
        }
        Commands::Config => cmd_config(integrator.settings()),
    }

    Ok(())
}

fn parse_event(label: Option<String>) -> Option<EventType> {
    label.as_deref().map(EventType::from)
}

fn cmd_config(settings: &Settings) {
    println!("{}", "Configuration:".bold());
    println!("  Base URL: {}", settings.base_url);
    println!("  Swagger UI: {}", settings.swagger_url());
    println!(
        "  Webhook URL: {}",
        match &settings.webhook_url {
            Some(url) => url.cyan(),
            None => "Not set".red(),
        }
    );
    println!(
        "  Secret Key: {}{}",
        settings.masked_secret(),
        if settings.secret_generated {
            " (generated for this run)".dimmed().to_string()
        } else {
            String::new()
        }
    );
    println!(
        "  Event Type: {}",
        settings
            .event_type
            .as_ref()
            .map_or_else(|| "Ask".dimmed(), |e| e.to_string().cyan())
    );
    println!(
        "  Trigger Event Type: {}",
        settings
            .trigger_event_type
            .as_ref()
            .map_or_else(|| "Ask".dimmed(), |e| e.to_string().cyan())
    );
    println!(
        "  Auto Open: {}",
        if settings.auto_open { "Yes".green() } else { "No".red() }
    );
    println!(
        "  Test Method: {}",
        match settings.test_method {
            TestMethod::Payment => "payment",
            TestMethod::Trigger => "trigger",
            TestMethod::Ask => "ask",
        }
    );
}
