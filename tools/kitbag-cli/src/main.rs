//! Kitbag CLI - drive the cart store from the command line.
//!
//! Commands:
//! - `kitbag add` - Add a product size to the cart
//! - `kitbag remove` - Remove a cart line
//! - `kitbag update` - Set a cart line's quantity
//! - `kitbag clear` - Empty the cart and delete its slot
//! - `kitbag show` - Print the cart

mod commands;
mod config;
mod context;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, RemoveArgs, UpdateArgs};

/// Kitbag CLI - inspect and edit the persisted storefront cart
#[derive(Parser)]
#[command(name = "kitbag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the slot directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product in a given size
    Add(AddArgs),

    /// Remove a cart line
    Remove(RemoveArgs),

    /// Set the quantity of a cart line
    Update(UpdateArgs),

    /// Empty the cart
    Clear,

    /// Show the cart
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.data_dir, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(2);
        }
    };

    logging::init(&ctx.config.logging, cli.verbose);
    tracing::debug!(data_dir = %ctx.data_dir().display(), slot = %ctx.config.store.slot_key, "context loaded");

    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Update(args) => commands::cart::update(args, &ctx),
        Commands::Clear => commands::cart::clear(&ctx),
        Commands::Show => commands::cart::show(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
