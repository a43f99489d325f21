use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use client_manager::ClientStore;
use client_manager::config;
use client_manager::models::{ClientFilter, ClientUpdate};

/// Client-record management utility.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite URL of the client database, overriding DATABASE_URL.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = config::init()?;
    let database_url = args
        .database_url
        .unwrap_or_else(|| config.database_url().to_string());

    let store = ClientStore::connect(&database_url).await?;
    info!(%database_url, "database connection established");

    store.init_schema().await?;

    run_demo(&store).await?;

    store.close().await;
    Ok(())
}

/// The illustrative sequence: a few sample records, one of each operation,
/// then a search printed to stdout.
async fn run_demo(store: &ClientStore) -> Result<()> {
    let ivan = store
        .add_client(
            "Ivan",
            "Ivanov",
            "ivan@example.com",
            &["1234567890", "9876543210"],
        )
        .await?;
    let petr = store
        .add_client("Petr", "Petrov", "petr@example.com", &[])
        .await?;
    let sergey = store
        .add_client("Sergey", "Sergeev", "sergey@example.com", &["1111111111"])
        .await?;
    info!(ivan, petr, sergey, "sample clients inserted");

    store
        .update_client(
            petr,
            &ClientUpdate {
                first_name: Some("Pyotr".to_string()),
                last_name: Some("Petrovsky".to_string()),
                email: Some("newemail@example.com".to_string()),
                ..ClientUpdate::default()
            },
        )
        .await?;

    // Not among Petr's numbers, so nothing is removed
    let removed = store.delete_phone(petr, "1111111111").await?;
    info!(client_id = petr, removed, "phone delete finished");

    store.delete_client(sergey).await?;

    let matches = store
        .find_clients(&ClientFilter {
            first_name: Some("Ivan".to_string()),
            ..ClientFilter::default()
        })
        .await?;

    for m in &matches {
        println!(
            "ID: {}, first name: {}, last name: {}, email: {}, phone: {}",
            m.id,
            m.first_name.as_deref().unwrap_or("-"),
            m.last_name.as_deref().unwrap_or("-"),
            m.email.as_deref().unwrap_or("-"),
            m.phone_number.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
