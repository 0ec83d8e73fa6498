//! `tarjetero` -- card collection smoke client.
//!
//! Resolves a session against the remote user directory, loads the
//! owner's card collection, and prints the masked summary. Useful for
//! checking a deployment end to end without any UI.
//!
//! # Environment variables
//!
//! | Variable             | Required | Description                              |
//! |----------------------|----------|------------------------------------------|
//! | `TARJETERO_API_BASE` | yes      | Service root, e.g. `https://host`        |
//! | `TARJETERO_USERNAME` | yes      | Login username                           |
//! | `TARJETERO_PASSWORD` | yes      | Login password                           |

use std::sync::Arc;

use tarjetero_session::{resolve, Credentials};
use tarjetero_store::{CardStoreApi, UserDirectory};
use tarjetero_view::CardCollectionViewModel;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn require_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::error!("{name} environment variable is required");
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarjetero=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = require_env("TARJETERO_API_BASE");
    let credentials = Credentials {
        username: require_env("TARJETERO_USERNAME"),
        password: require_env("TARJETERO_PASSWORD"),
    };

    // One pooled HTTP client shared by the roster and card endpoints.
    let http = reqwest::Client::new();
    let directory = UserDirectory::with_client(http.clone(), base_url.clone());
    let store = Arc::new(CardStoreApi::with_client(http, base_url));

    let roster = directory.fetch_roster().await?;
    let session = resolve(&credentials, &roster)?;

    tracing::info!(
        owner_id = session.owner_id,
        display_name = %session.display_name,
        "Session resolved",
    );

    let vm = CardCollectionViewModel::new(store, session.owner_id);
    vm.refresh().await?;

    let snapshot = vm.snapshot();
    println!(
        "{}: {} card(s), total balance ${:.2}",
        session.display_name, snapshot.summary.count, snapshot.summary.total_balance
    );
    for card in &snapshot.cards {
        println!(
            "  [{}] {} {} {}  ${:.2}  exp {}",
            card.id, card.kind, card.issuer, card.display_number, card.balance, card.expiration
        );
    }

    Ok(())
}
