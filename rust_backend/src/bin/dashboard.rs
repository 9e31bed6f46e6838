//! Cold-room dashboard demo.
//!
//! Builds the service layer from `coldroom.toml` (or the defaults), signs in
//! as the seeded admin and logs what the dashboard would show.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin coldroom-dashboard
//!
//! # Skip the artificial delays
//! COLDROOM_LATENCY=off cargo run --bin coldroom-dashboard
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)
//! - `COLDROOM_LATENCY`: `off` disables the artificial latency

use chrono::Utc;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use coldroom_rust::db::{RepositoryBuilder, RepositoryConfig};
use coldroom_rust::routes::Route;
use coldroom_rust::session::Session;
use coldroom_rust::transformations::{
    all_critical_items, maintenance_overview, room_cards, room_detail,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting cold-room dashboard");

    let config = match RepositoryConfig::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default configuration: {}", e);
            RepositoryConfig::default()
        }
    };
    let api = RepositoryBuilder::from_config(&config).build();
    info!("Service layer ready (latency enabled: {})", api.latency().enabled);

    let mut session = Session::new();
    info!("Anonymous visit to / resolves to {}", Route::resolve("/", false));
    session
        .sign_in(&api, "admin@example.com", "password")
        .await?;

    let unit = session.temperature_unit();
    let today = Utc::now().date_naive();
    let rooms = api.cold_rooms().get_all().await?;

    for card in room_cards(&rooms, unit) {
        info!(
            "{} [{}] {}% used, {} ({})",
            card.location,
            card.status,
            card.capacity_percentage,
            card.temperature,
            card.status_color.classes()
        );
    }

    for room in &rooms {
        let detail = room_detail(room, today, unit);
        if let Some(alert) = &detail.maintenance_alert {
            warn!("{}: {}", room.location, alert.message());
        }
        info!(
            "{}: {} incoming, {} outgoing, {} pickups",
            room.location,
            detail.incoming.len(),
            detail.outgoing.len(),
            detail.pickups.len()
        );
    }

    for item in all_critical_items(&rooms, today) {
        match item.days_left {
            Some(days) => info!("Critical: {} {} ({} days left)", item.item, item.quantity, days),
            None => info!("Critical: {} {}", item.item, item.quantity),
        }
    }

    let records = api.maintenance().get_all().await?;
    let overview = maintenance_overview(&records);
    info!(
        "Maintenance: {} total, {} pending, {} scheduled, {} completed, {} overdue",
        overview.all, overview.pending, overview.scheduled, overview.completed, overview.overdue
    );

    let reports = api.reports().get_all().await?;
    info!("{} reports on file", reports.len());

    session.logout();
    Ok(())
}
