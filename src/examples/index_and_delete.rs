//! Index and Delete Example
//!
//! Stores one document, then deletes it twice to show the `found` flag.
//! Needs a search server at the configured base URL (default
//! http://localhost:9200).
//!
//! Run with: cargo run --example index_and_delete

use esdoc_rs::{Client, Config, Document, QueryParams};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("esdoc_rs=debug")),
        )
        .with_target(false)
        .init();

    let config = Config::load("config.json").unwrap_or_else(|_| {
        tracing::warn!("Failed to load config.json, using defaults");
        Config::default()
    });

    let client = Client::from_config(&config)?;
    println!("Connected to {}\n", client.base_url());

    let mut doc = Document::new();
    doc.insert("name".to_string(), json!("widget"));
    doc.insert("price".to_string(), json!(9.5));

    let mut params = QueryParams::new();
    params.insert("refresh".to_string(), "true".to_string());

    let id = client
        .index("products", "item", "", &doc, Some(&params))
        .await?;
    println!("📝 Indexed document: {}", id);

    let found = client.delete("products", "item", &id, None).await?;
    println!("🗑️  First delete, found: {}", found);

    let found = client.delete("products", "item", &id, None).await?;
    println!("🗑️  Second delete, found: {}", found);

    Ok(())
}
