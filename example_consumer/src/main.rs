//! Example consumer: a separate Rust project that uses unit-sdk as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer -- <account-id>`
//! Requires `UNIT_API_TOKEN` (a `.env` file works).

use std::sync::Arc;
use unit_sdk::resources::DepositAccount;
use unit_sdk::{standard_registry, Client, ClientConfig, HttpTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("unit_sdk=debug")),
        )
        .init();

    let account_id = std::env::args().nth(1).ok_or("usage: example-consumer <account-id>")?;

    let config = ClientConfig::from_env()?;
    let transport = HttpTransport::new(&config)?;
    let client = Client::new(Arc::new(transport), Arc::new(standard_registry()?));

    let account = client.find(DepositAccount::NAME, &account_id).await?;
    tracing::info!(
        id = account.id().unwrap_or_default(),
        status = account.get_str("status").unwrap_or("unknown"),
        "loaded deposit account"
    );
    for (name, value) in account.attributes() {
        if let Some(value) = value {
            println!("{name:>24}: {}", value.to_wire());
        }
    }

    if let Some(customer) = client.related(&account, "customer").await? {
        tracing::info!(id = customer.id().unwrap_or_default(), "account holder");
    }
    Ok(())
}
