use tracing_subscriber::EnvFilter;

use game_advisor::session::{Session, StdConsole};
use game_advisor::{Catalog, Config};

fn main() {
    init_tracing();

    if let Err(error) = run() {
        eprintln!("Fatal error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let catalog = Catalog::with_default_library()?;

    tracing::info!(
        games = catalog.all_games().len(),
        genres = catalog.all_genres().len(),
        "catalog ready"
    );

    let mut session = Session::new(&catalog, config, StdConsole::new());
    session.run()?;
    Ok(())
}

/// Respects the `ADVISOR_LOG` environment variable, defaulting to `info`.
/// Logs go to stderr so the session output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ADVISOR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
