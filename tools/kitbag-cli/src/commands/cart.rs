//! Cart commands.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use kitbag_commerce::cart::AddOutcome;
use kitbag_commerce::catalog::Product;
use kitbag_commerce::ids::CartItemId;

use super::{AddArgs, RemoveArgs, UpdateArgs};
use crate::context::Context;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let product = load_product(&ctx.resolve_path(&args.product))?
        .in_currency(ctx.config.store.currency);
    let mut store = ctx.open_store()?;

    match store.add_to_cart(&product, &args.size, args.quantity) {
        Ok(outcome) => {
            let verb = match outcome {
                AddOutcome::Inserted(_) => "Added",
                AddOutcome::Merged(_) => "Updated",
            };
            ctx.output.changed(&format!(
                "{} {} ({}) x{} [{}]",
                verb,
                product.name,
                args.size,
                args.quantity,
                outcome.item_id()
            ));
            ctx.output.totals(store.cart());
            Ok(())
        }
        Err(e) if e.is_variant_not_found() => {
            let sizes: Vec<&str> = product.sizes().collect();
            ctx.output
                .warn(&format!("Available sizes: {}", sizes.join(", ")));
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let item_id = CartItemId::new(args.item_id);

    if store.remove_from_cart(&item_id)? {
        ctx.output.changed(&format!("Removed {}", item_id));
    } else {
        ctx.output.unchanged(&format!("No cart line {}; nothing to remove", item_id));
    }
    ctx.output.totals(store.cart());
    Ok(())
}

/// Run the update command.
pub fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let item_id = CartItemId::new(args.item_id);

    if store.update_quantity(&item_id, args.quantity)? {
        if args.quantity <= 0 {
            ctx.output.warn(&format!(
                "Line {} now has quantity {}; it stays in the cart",
                item_id, args.quantity
            ));
        } else {
            ctx.output
                .changed(&format!("Set {} to quantity {}", item_id, args.quantity));
        }
    } else {
        ctx.output.unchanged(&format!("No cart line {}; nothing to update", item_id));
    }
    ctx.output.totals(store.cart());
    Ok(())
}

/// Run the clear command.
pub fn clear(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    store.clear_cart()?;
    ctx.output.changed("Cart cleared");
    ctx.output.totals(store.cart());
    Ok(())
}

/// Run the show command.
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.output.cart(store.cart());
    Ok(())
}

fn load_product(path: &Path) -> Result<Product> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file: {}", path.display()))?;
    let product: Product = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse product file: {}", path.display()))?;
    if product.variants.is_empty() {
        bail!("Product {} has no variants", product.id);
    }
    Ok(product)
}
