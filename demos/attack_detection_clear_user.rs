//
//  keycloak-admin
//  demos/attack_detection_clear_user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shows and clears the brute force state of one user.
//!
//! ```text
//! cargo run --example attack_detection_clear_user -- afab8ba7-e278-4dda-8970-bd5a2a4c7bfb [realm]
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keycloak_admin::Keycloak;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let user_id = args
        .next()
        .context("usage: attack_detection_clear_user <user-id> [realm]")?;
    let realm = args.next().unwrap_or_else(|| "master".to_string());

    let keycloak = connect()?;
    let attack_detection = keycloak.attack_detection();

    let status = attack_detection.user_status(&realm, &user_id).await?;
    println!(
        "{}: {} failure(s), locked: {}",
        user_id,
        status.num_failures.unwrap_or(0),
        status.is_locked()
    );

    attack_detection.clear_user(&realm, &user_id).await?;
    println!("Cleared login failures for {}", user_id);

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
