//! Terminal lifecycle, event loop, and cleanup for the palette TUI.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use sitekit_palette::app::App;
use sitekit_palette::catalog::Catalog;
use sitekit_palette::config::Config;
use sitekit_palette::dispatch::RecordingDispatcher;
use sitekit_palette::events::{key_to_action, TICK_RATE};
use sitekit_palette::ui;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    info!(
        commands = catalog.len(),
        threshold = config.matcher.threshold(),
        "starting palette"
    );

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(catalog, config.matcher, RecordingDispatcher::new());
    app.bootstrap();

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    info!(dispatched = app.dispatcher().calls().len(), "palette exited");
    result
}

/// The UI owns stdout, so logs go to a file or nowhere (RUST_LOG replaces the default filter).
fn init_tracing(config: &Config) -> Result<()> {
    let writer = match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::sink),
    };
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<RecordingDispatcher>,
) -> Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(&key, app.state.palette.visible) {
                    app.dispatch(action);
                }
            }
        }
    }
}
