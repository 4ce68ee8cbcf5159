pub mod config;
pub mod console;
pub mod domain;
pub mod gateway;
pub mod models;

use std::sync::Arc;
use std::time::Duration;

pub use config::Config;
use console::{DirectoryView, UserDirectory};
use gateway::GraphQlGateway;
use models::UserRecord;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Hosts the console: loads config, sets up tracing, pulls the directory
/// once and renders it. The surrounding application chrome (navigation,
/// static pages, theming) lives outside this crate.
pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Connecting to gateway at {}", config.gateway.endpoint);

    let gateway = GraphQlGateway::new(
        &config.gateway.endpoint,
        Duration::from_secs(config.gateway.timeout_seconds),
    )?;

    let mut directory = UserDirectory::new(Arc::new(gateway));
    directory.resync().await;

    match directory.view() {
        DirectoryView::Loading => println!("Loading..."),
        DirectoryView::Failed(message) => println!("Error: {message}"),
        DirectoryView::Ready => print_directory(directory.rows()),
    }

    Ok(())
}

fn print_directory(rows: &[UserRecord]) {
    if rows.is_empty() {
        println!("No user accounts found.");
        return;
    }

    println!("Users ({} total)", rows.len());
    println!("{:-<70}", "");

    for user in rows {
        let status_indicator = if user.status.is_active() { "●" } else { "○" };

        let access = UserDirectory::badge(user).map_or_else(
            || format!("? ({})", user.role_id),
            |badge| format!("{} {}", badge.icon.glyph(), badge.level),
        );

        println!("{} {} <{}>", status_indicator, user.name, user.email);
        println!(
            "  ID: {} | Phone: {} | Access: {} | Status: {}",
            user.id, user.phone_number, access, user.status
        );
    }

    println!();
    println!("Legend: ● Active | ○ Inactive");
}
