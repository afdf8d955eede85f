use anyhow::Context;
use clap::Parser;
use stay_updated::cli::Cli;
use stay_updated::domain::PageRegistry;
use stay_updated::logging::init_tracing;
use stay_updated::ui::app::App;
use std::sync::Arc;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(err) = cli.check() {
        err.exit();
    }
    let config = cli.resolve_config().context("loading configuration")?;
    init_tracing(&config.logging).context("initializing logging")?;
    tracing::debug!(?config, "Configuration loaded");

    let pages = Arc::new(PageRegistry::new());
    let mut app = App::new(pages, &config.ui);
    if cli.open != "/" {
        app.open(&cli.open, cli.payload())
            .with_context(|| format!("opening route '{}'", cli.open))?;
    }

    stay_updated::ui::run(app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("running terminal UI")?;
    Ok(())
}
