//! migration-dash: terminal dashboard for application migration progress
//!
//! Shows completion by workstream, application and phase for a
//! read-only migration dataset.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::panic;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use migration_dash::domain::sample;
use migration_dash::services::{DataSource, DatasetService};
use migration_dash::{App, DashboardConfig};

/// Setup the terminal for TUI mode
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Load the dataset, falling back to the sample on failure
async fn load_applications(
    source: DataSource,
) -> (Vec<migration_dash::domain::Application>, String, Option<String>) {
    let label = source.describe();
    match DatasetService::new(source).load().await {
        Ok(applications) => (applications, label, None),
        Err(e) => {
            tracing::warn!("Falling back to sample data: {}", e);
            (
                sample::applications(),
                DataSource::Builtin.describe(),
                Some(format!("{}\n\nShowing sample data instead.", e)),
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    install_panic_hook();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = DashboardConfig::load(Some(project_root.as_path())).unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        DashboardConfig::default()
    });

    let source = DataSource::from_config(&config.data, &project_root);
    tracing::info!("Starting migration-dash with {}", source.describe());

    let (applications, source_label, load_error) = load_applications(source).await;

    let mut terminal = setup_terminal()?;

    let result = {
        let mut app = App::new(config, source_label, applications);
        app.error_message = load_error;

        // Run with Ctrl+C signal handling
        tokio::select! {
            res = app.run(&mut terminal) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, shutting down gracefully");
                Ok(())
            }
        }
    };

    // Restore terminal (always, even on error)
    restore_terminal(&mut terminal)?;

    result?;

    Ok(())
}
