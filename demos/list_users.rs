//
//  keycloak-admin
//  demos/list_users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lists the users of a realm, optionally filtered by a search term.
//!
//! ```text
//! KEYCLOAK_LOG=keycloak_admin=debug cargo run --example list_users -- master jdoe
//! ```

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keycloak_admin::{Criteria, Keycloak};

const PAGE_SIZE: u32 = 50;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let realm = args.next().unwrap_or_else(|| "master".to_string());
    let search = args.next();

    let keycloak = connect()?;
    if let Some(version) = keycloak.server_version().await? {
        println!("Keycloak {} at {}", version, keycloak.base_url());
    }

    let users = keycloak.users();
    let mut criteria = Criteria::new().brief_representation(true);
    if let Some(term) = &search {
        criteria = criteria.search(term);
    }

    let total = users.count(&realm, Some(&criteria)).await?;
    println!("{} user(s) in realm '{}'", total, realm);

    let mut first = 0;
    loop {
        let page = users
            .all(&realm, Some(&criteria.clone().first(first).max(PAGE_SIZE)))
            .await?;

        for user in &page {
            println!(
                "  {:<36}  {:<24}  {}",
                user.id.as_deref().unwrap_or("-"),
                user.username.as_deref().unwrap_or("-"),
                user.email.as_deref().unwrap_or("")
            );
        }

        if page.count() < PAGE_SIZE as usize {
            break;
        }
        first += PAGE_SIZE;
    }

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
