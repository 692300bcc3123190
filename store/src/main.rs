//! Larder
//!
//! Loads configuration, wires the store and prints a summary of one user's
//! collections.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use larder_store::domain::entities::OwnerId;
use larder_store::{Config, Larder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,larder_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let owner: OwnerId = std::env::var("LARDER_OWNER_ID")
        .context("LARDER_OWNER_ID must be set")?
        .into();

    let larder = Larder::from_config(&config)?;
    let snapshot = larder.accounts.snapshot(&owner).await?;

    tracing::info!(
        owner = %owner,
        profile = snapshot.user.is_some(),
        recipes = snapshot.recipes.len(),
        shopping_lists = snapshot.shopping_lists.len(),
        pantry = snapshot.pantry.len(),
        "Loaded collections"
    );

    for recipe in &snapshot.recipes {
        let state = if recipe.is_draft() { " (draft)" } else { "" };
        tracing::info!("recipe {}: {}{}", recipe.id, recipe.name, state);
    }
    for list in &snapshot.shopping_lists {
        tracing::info!(
            "shopping list {} from {}: {} items",
            list.id,
            list.created_at.format("%Y-%m-%d"),
            list.items.len()
        );
    }
    for item in &snapshot.pantry {
        tracing::info!("pantry: {}", item.as_ingredient());
    }

    Ok(())
}
