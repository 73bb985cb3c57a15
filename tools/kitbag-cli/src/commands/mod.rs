//! CLI command implementations.

pub mod cart;

use std::path::PathBuf;

use clap::Args;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product JSON file, as served by the catalog.
    pub product: PathBuf,

    /// Size to add (must match a variant exactly).
    pub size: String,

    /// Number of units.
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Cart line ID.
    pub item_id: String,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Cart line ID.
    pub item_id: String,

    /// New quantity, stored as given.
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}
