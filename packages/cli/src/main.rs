mod commands;
mod config;
mod context;
mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use common::{RecordId, ResourceKind};
use tracing::Level;

use crate::context::Context;

#[derive(Parser)]
#[command(name = "slt-admin", version, about = "Manage banners, services and blogs", long_about = None)]
struct Cli {
    /// Config file (TOML). Defaults to config/config.toml or the user config dir.
    #[arg(long, global = true, env = "SLT_ADMIN_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all records of a resource
    List {
        #[arg(value_name = "RESOURCE")]
        resource: ResourceKind,
    },

    /// Create a record
    Create(CreateArgs),

    /// Update a record (blogs only)
    Edit(EditArgs),

    /// Delete a record after confirmation
    Delete {
        #[arg(value_name = "RESOURCE")]
        resource: ResourceKind,
        #[arg(value_name = "ID")]
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Flip the visibility of a banner or blog
    Toggle {
        #[arg(value_name = "RESOURCE")]
        resource: ResourceKind,
        #[arg(value_name = "ID")]
        id: RecordId,
    },

    /// Interactive admin shell
    Shell {
        /// Route to open first
        #[arg(long, default_value = "/admin", value_name = "PATH")]
        route: String,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(value_name = "RESOURCE")]
    pub resource: ResourceKind,

    /// Field value, e.g. --set title="Express freight"
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,

    /// Append to a list field, e.g. --item points="Same-day delivery"
    #[arg(long = "item", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub items: Vec<(String, String)>,

    /// Image to upload
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

#[derive(Args)]
pub struct EditArgs {
    #[arg(value_name = "RESOURCE")]
    pub resource: ResourceKind,

    #[arg(value_name = "ID")]
    pub id: RecordId,

    /// Field value, e.g. --set title="New title"
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,

    /// Replace the image
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((field.to_string(), value.to_string()))
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    let ctx = Context::new(config).context("Failed to build HTTP client")?;

    match cli.command {
        Command::List { resource } => commands::list(&ctx, resource).await,
        Command::Create(args) => commands::create(&ctx, args).await,
        Command::Edit(args) => commands::edit(&ctx, args).await,
        Command::Delete { resource, id, yes } => commands::delete(&ctx, resource, id, yes).await,
        Command::Toggle { resource, id } => commands::toggle(&ctx, resource, id).await,
        Command::Shell { route } => commands::shell(&ctx, &route).await,
    }
}
