//! confdeck: browse conference planning data in the terminal.

use std::io;

use anyhow::anyhow;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, warn};

use confdeck::app::App;
use confdeck::cli::{self, Cli, Command};
use confdeck::config::Config;
use confdeck::error::{AppError, Result};
use confdeck::events::EventHandler;
use confdeck::logging;
use confdeck::ui::init_theme;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging is disabled: {}", e);
    }

    let result = run(&cli);
    logging::shutdown();

    result.map_err(|err| {
        if err.is_critical() {
            error!(error = %err, "confdeck failed");
        } else {
            warn!(error = %err, "confdeck stopped on a usage error");
        }
        match err.suggested_action() {
            Some(action) => anyhow!("{}\n{}", err.user_message(), action),
            None => anyhow!(err.user_message()),
        }
    })
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config)?;

    match cli.command() {
        Command::List(args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            cli::run_list(&args, &config.settings, &mut out)
        }
        Command::Tui { .. } => run_tui(&config),
    }
}

fn run_tui(config: &Config) -> Result<()> {
    init_theme(&config.settings.theme);
    // Build before touching the terminal so fixture errors print normally.
    let mut app = App::new(config)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(AppError::terminal(e.to_string()));
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(AppError::from)
        .and_then(|mut terminal| event_loop(&mut terminal, &mut app));

    restore_terminal().map_err(|e| AppError::terminal(e.to_string()))?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let events = EventHandler::new();
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        app.update(events.next()?);
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
