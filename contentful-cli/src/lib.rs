//! Argument parsing and command dispatch for the `contentful` binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contentful_client::{Client, ClientConfig, DEFAULT_BASE_URL};
use contentful_model::Versioned;
use serde_json::json;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "contentful")]
#[command(about = "Inspect content types and entries through the Contentful management API")]
pub struct Cli {
    /// Management API base URL
    #[arg(long, env = "CONTENTFUL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Content management token
    #[arg(long, env = "CONTENTFUL_MANAGEMENT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Space id
    #[arg(long, env = "CONTENTFUL_SPACE_ID")]
    pub space: String,

    /// Environment id (defaults to the space's master environment)
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every content type in the space
    ContentTypes,
    /// Show one content type
    ContentType { id: String },
    /// Show one entry
    Entry {
        id: String,
        /// Return field values for a single locale
        #[arg(long)]
        locale: Option<String>,
    },
    /// Resolve an entry field's value and declared type
    Field { entry_id: String, field_id: String },
}

impl Cli {
    pub fn config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.token.clone()).with_base_url(self.base_url.clone());
        match &self.environment {
            Some(env) => config.with_environment(env.clone()),
            None => config,
        }
    }
}

/// Installs the stderr log subscriber.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Runs `cli.command` and returns the pretty-printed JSON to print.
pub async fn run(cli: &Cli) -> Result<String> {
    let client = Client::new(cli.config()).context("invalid client configuration")?;
    debug!("Running {:?} against space {}", cli.command, cli.space);

    let output = match &cli.command {
        Command::ContentTypes => {
            let content_types = client
                .content_types(&cli.space)
                .list()
                .collect_all()
                .await
                .context("listing content types")?;
            serde_json::to_value(content_types)?
        }
        Command::ContentType { id } => {
            let content_type = client
                .content_types(&cli.space)
                .get(id)
                .await
                .with_context(|| format!("fetching content type {id}"))?;
            serde_json::to_value(content_type)?
        }
        Command::Entry { id, locale } => {
            let entry = client
                .entries(&cli.space)
                .get(id, locale.as_deref())
                .await
                .with_context(|| format!("fetching entry {id}"))?;
            serde_json::to_value(entry)?
        }
        Command::Field { entry_id, field_id } => {
            let entries = client.entries(&cli.space);
            let entry = entries
                .get(entry_id, None)
                .await
                .with_context(|| format!("fetching entry {entry_id}"))?;
            let field = entries
                .field(&entry, field_id)
                .await
                .with_context(|| format!("resolving field {field_id} on entry {entry_id}"))?;
            json!({
                "entry": entry.id(),
                "field": field_id,
                "type": field.kind().map(|kind| kind.as_str()),
                "value": field.value(),
            })
        }
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
