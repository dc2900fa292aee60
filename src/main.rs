use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use product_view::cli::Cli;
use product_view::client::ProductClient;
use product_view::headless::run_once;
use product_view::logging::{init_tracing, LogTarget};
use product_view::render::RenderState;
use product_view::shutdown::{signal_on_os_interrupt, ShutdownHandle};
use product_view::store::ProductStore;
use product_view::ui::{self, RunOptions};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;

    let log_target = if cli.once {
        LogTarget::Stderr
    } else {
        LogTarget::for_screen(&config.logging)
    };
    init_tracing(&config.logging, &log_target).context("Failed to initialise logging")?;
    tracing::info!(url = %config.endpoint.url, "Starting product-view");

    let client = ProductClient::new(&config.endpoint).context("Failed to build HTTP client")?;
    let store = ProductStore::new(Arc::new(client));

    let shutdown = ShutdownHandle::new();
    signal_on_os_interrupt(shutdown.clone());

    if cli.once {
        let mut stdout = io::stdout();
        let last = run_once(&store, &shutdown, &mut stdout).await?;
        return Ok(match last {
            RenderState::Success { .. } => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        });
    }

    let options = RunOptions {
        endpoint: config.endpoint.url.clone(),
        tick_rate: config.ui.tick_rate(),
        show_version: config.ui.show_version,
        autofetch: !cli.no_autofetch,
    };
    ui::run(&store, options, shutdown).await?;
    tracing::info!(fetches = store.fetch_count(), "Exiting");
    Ok(ExitCode::SUCCESS)
}
