mod app;
mod events;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use scrollsense::config::{Config, Overrides};
use scrollsense::log;

use app::App;
use events::EventHandler;

/// Interval for bounce spring-back animation
const TICK: Duration = Duration::from_millis(80);

/// Parse command line flags. Unknown flags are ignored with a warning.
fn parse_args(args: &[String]) -> Overrides {
    let mut overrides = Overrides::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--debounce-ms" | "-d" => {
                match args.get(i + 1).map(|v| v.parse::<u64>()) {
                    Some(Ok(ms)) if ms > 0 => overrides.debounce_ms = Some(ms),
                    _ => eprintln!("Warning: --debounce-ms requires a positive number"),
                }
                i += 1;
            }
            "--axes" | "-a" => {
                match args.get(i + 1).map(|v| v.parse()) {
                    Some(Ok(axes)) => overrides.axes = Some(axes),
                    Some(Err(e)) => eprintln!("Warning: {}", e),
                    None => eprintln!("Warning: --axes requires v, h or both"),
                }
                i += 1;
            }
            "--lines" | "-n" => {
                match args.get(i + 1).map(|v| v.parse::<usize>()) {
                    Some(Ok(n)) => overrides.lines = Some(n),
                    _ => eprintln!("Warning: --lines requires a number"),
                }
                i += 1;
            }
            "--no-bounce" => overrides.bounces = Some(false),
            "--hide-indicators" => overrides.shows_indicators = Some(false),
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    overrides
}

#[tokio::main]
async fn main() -> Result<()> {
    // Panic hook first so the terminal is restored even without a log file
    log::install_panic_hook();
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }

    // Load config with precedence: CLI > env var > file > default
    let args: Vec<String> = std::env::args().collect();
    let config = Config::load().with_overrides(parse_args(&args));
    let options = config.scroll_view_options();
    log::log(&format!("Scroll view options: {:?}", options));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(options, config.lines());

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Tear down before the terminal goes away so nothing fires late
    app.scroll.dispose();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            // Terminal events (keyboard, mouse, resize)
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action);
                    }
                    Some(Err(e)) => log::log(&format!("Event stream error: {}", e)),
                    None => break,
                }
            }

            // Scroll settled
            Some(ended) = app.scroll.next_scroll_end() => {
                app.record_scroll_end(ended);
            }

            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }
        }

        app.apply_scroll_requests();
    }

    Ok(())
}
