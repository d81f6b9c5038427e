//
//  keycloak-admin
//  demos/attack_detection_clear.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Clears brute force lockouts for every user of a realm.
//!
//! ```text
//! KEYCLOAK_URL=http://keycloak:8080 cargo run --example attack_detection_clear -- master
//! ```

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keycloak_admin::Keycloak;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let realm = std::env::args().nth(1).unwrap_or_else(|| "master".to_string());
    let keycloak = connect()?;

    keycloak.attack_detection().clear(&realm).await?;
    println!("Cleared login failures for all users of realm '{}'", realm);

    Ok(())
}

fn connect() -> Result<Keycloak> {
    let env = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
    Ok(Keycloak::new(
        env("KEYCLOAK_URL", "http://keycloak:8080"),
        env("KEYCLOAK_USER", "admin"),
        env("KEYCLOAK_PASSWORD", "admin"),
    )?)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("KEYCLOAK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
