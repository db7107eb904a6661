// Team Lineage - Web Server
// Read-only JSON API over the team catalog

use anyhow::{Context, Result};
use team_lineage::api::{router, AppState};
use team_lineage::logging::init_logging;
use team_lineage::{Catalog, Config, League};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    println!("🌐 Team Lineage - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = Config::discover(None).context("Failed to load configuration")?;
    let catalog = Catalog::from_config(&config).context("Failed to build team catalog")?;

    for league in League::ALL {
        let registry = catalog.league(league).registry();
        println!("✓ {}: {} team records", league.full_name(), registry.len());
    }

    let app = router(AppState::new(catalog));

    let addr = config.server.addr.as_str();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/mlb/teams/Marlins?date=2011-09-28", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
