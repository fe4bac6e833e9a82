use dotenvy::dotenv;
use toiplan::{App, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal; env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Build the controller: preferences from disk, seed data from
    // TOIPLAN_SEED when set, the built-in sample otherwise
    let app = App::bootstrap()?;

    let state = app.state();
    info!(
        events = state.events.len(),
        guests = state.guests.len(),
        families = state.families.len(),
        venues = state.venues.len(),
        theme = ?app.prefs().theme,
        language = ?app.prefs().language,
        "application core ready"
    );
    info!(screen = ?state.screen, "initial screen resolved");

    Ok(())
}
