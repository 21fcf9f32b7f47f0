//! repcache CLI - inspect and maintain the on-device fitness data store.
//!
//! The mobile app embeds the library; this binary is the maintenance tool
//! for the same data directory: seed defaults, inspect collections, and
//! review or clear the pending-sync ledger.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repcache::utils::{format_minutes, truncate_string};
use repcache::{Config, EntityKind, LocalStore};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load()?;
    let data_dir = config.data_dir()?;
    info!(data_dir = %data_dir.display(), "opening local store");
    let store = LocalStore::new(data_dir)?;

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("--summary") => print_summary(&store).await,
        Some("--seed") => {
            store.initialize_default_data().await?;
            println!("default data seeded");
            print_summary(&store).await;
        }
        Some("--templates") => print_templates(&store).await,
        Some("--pending") => print_pending(&store).await,
        Some("--clear-pending") => {
            store.clear_pending_sync().await?;
            println!("pending-sync ledger cleared");
        }
        Some("--dump") => dump_collection(&store, args.get(2).map(String::as_str)).await?,
        Some(other) => {
            eprintln!("unknown option: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("usage: repcache [--summary | --seed | --templates | --pending | --clear-pending | --dump <collection>]");
    eprintln!("collections: templates plans sessions clients exercises pending");
}

async fn print_summary(store: &LocalStore) {
    let summary = store.summary().await;
    println!("store: {}", store.data_dir().display());
    println!("  templates: {}", summary.templates);
    println!("  plans:     {}", summary.plans);
    println!("  sessions:  {}", summary.sessions);
    println!("  clients:   {}", summary.clients);
    println!("  exercises: {}", summary.exercises);
    println!("  pending:   {}", summary.pending);
}

async fn print_templates(store: &LocalStore) {
    let templates = store.templates().await;
    if templates.is_empty() {
        println!("no templates stored");
        return;
    }
    for t in templates {
        println!(
            "{:<30} {:<12} {:>7}  {} exercises, {} sets",
            truncate_string(&t.name, 30),
            t.category,
            format_minutes(t.duration),
            t.exercises.len(),
            t.total_sets(),
        );
    }
}

async fn print_pending(store: &LocalStore) {
    let pending = store.pending_sync().await;
    if pending.is_empty() {
        println!("nothing waiting to sync");
        return;
    }
    for entry in pending {
        println!(
            "{:<9} {:<7} {:<28} {}",
            entry.kind.to_string(),
            entry.action.to_string(),
            truncate_string(&entry.id, 28),
            entry.age_display(),
        );
    }
}

async fn dump_collection(store: &LocalStore, name: Option<&str>) -> Result<()> {
    let key = match name {
        Some("templates") => EntityKind::Template.collection_key(),
        Some("plans") => EntityKind::Plan.collection_key(),
        Some("sessions") => EntityKind::Session.collection_key(),
        Some("clients") => EntityKind::Client.collection_key(),
        Some("exercises") => EntityKind::Exercise.collection_key(),
        Some("pending") => "pending_sync",
        _ => {
            print_usage();
            std::process::exit(2);
        }
    };

    let value: serde_json::Value = store
        .read_value(key)
        .await
        .unwrap_or(serde_json::Value::Array(Vec::new()));
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
