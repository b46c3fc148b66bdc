//! shelfscan - ISBN Intake Terminal
//!
//! Scan a barcode (or type an ISBN), confirm the looked-up title, enter price,
//! quantity and stocking location, and save the record to the inventory
//! service.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info};

use shelfscan::application::{App, Intent, MetadataResolver, RecordSaver};
use shelfscan::infrastructure::{
    Cli, Config, DetectionSink, Dispatcher, HttpCatalog, init_logging, spawn_device_reader,
};
use shelfscan::presentation::{InputHandler, render_ui};

const TICK: Duration = Duration::from_millis(100);

/// Entry point for the intake terminal.
///
/// Loads configuration, wires the HTTP catalog and background dispatcher,
/// then runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the log file cannot be
/// opened, or the terminal interface fails.
fn main() -> anyhow::Result<()> {
    let config = Config::load(Cli::parse()).context("loading configuration")?;
    init_logging(&config.log_file, config.log_level)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;
    info!(lookup = %config.lookup_url, save = %config.save_url, "starting shelfscan");

    let catalog = Arc::new(
        HttpCatalog::new(&config.lookup_url, &config.save_url, config.timeout)
            .context("building HTTP client")?,
    );
    let (tx, rx) = mpsc::channel::<Intent>();
    let dispatcher = Dispatcher::new(
        MetadataResolver::new(catalog.clone()),
        RecordSaver::new(catalog),
        tx.clone(),
    );

    if let Some(device) = config.scanner_device.clone() {
        spawn_device_reader(device.clone(), DetectionSink::new(tx.clone()))
            .with_context(|| format!("opening scanner device {}", device.display()))?;
    }
    drop(tx);

    let mut app = App::new(Box::new(dispatcher));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "terminal loop failed");
    }
    info!("shutting down");
    res.context("running terminal interface")
}

/// Main application event loop.
///
/// Redraws, waits up to one tick for a key, then applies every result the
/// background workers and scanner device have posted since the last pass.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &Receiver<Intent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }

        while let Ok(intent) = events.try_recv() {
            app.apply(intent);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
