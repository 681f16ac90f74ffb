use roblox_tracker::app::App;
use roblox_tracker::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use roblox_tracker::ui;

use color_eyre::{eyre::WrapErr, Result};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set up tracing to a log file.
///
/// The TUI owns stdout, so log output goes to a file instead: the path in
/// `ROBLOX_TRACKER_LOG`, or `roblox-tracker.log` in the working directory.
/// Level filtering follows `RUST_LOG`, defaulting to `info`.
fn init_logging() -> Result<()> {
    let path = std::env::var("ROBLOX_TRACKER_LOG")
        .unwrap_or_else(|_| "roblox-tracker.log".to_string());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err(format!("Failed to open log file {}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Draw-then-wait event loop. Redraws after every handled event; there is
/// no background work, so nothing else can invalidate the frame.
async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .wrap_err("Failed to draw frame")?;

        match events.next().await {
            Some(Ok(Event::Key(key))) => app.handle_key(key),
            // Resize redraws on the next loop iteration; nothing to do here.
            Some(Ok(_)) => {}
            Some(Err(err)) => {
                tracing::error!(error = %err, "terminal event stream error");
                break;
            }
            None => break,
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;
    setup_panic_hook();

    tracing::info!(version = VERSION, "starting roblox-tracker");

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout).wrap_err("Failed to set up terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).wrap_err("Failed to create terminal")?;

    let mut app = App::new();
    let result = run(&mut terminal, &mut app).await;

    // Always restore the terminal, even when the loop errored.
    leave_tui_mode(&mut io::stdout());

    tracing::info!("shutting down");
    result
}
