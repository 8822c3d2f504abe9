//! Contentful management CLI
//!
//! Usage:
//!   contentful --space <id> content-types
//!   contentful --space <id> entry <entry-id> --locale en-US
//!   contentful --space <id> field <entry-id> <field-id>
//!
//! The token is read from `--token` or `CONTENTFUL_MANAGEMENT_TOKEN`.

use anyhow::Result;
use clap::Parser;
use contentful_cli::{Cli, init_logging, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run(&cli).await?;
    println!("{output}");
    Ok(())
}
