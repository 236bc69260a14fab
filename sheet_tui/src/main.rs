//! sheet_tui - Convert character-builder exports to Improved Initiative stat blocks

mod app;
mod error;
mod ui;

use app::{App, Loaded};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::AppError;
use ratatui::{backend::CrosstermBackend, Terminal};
use sheet_core::{default_rules, load_rules, ConversionRules};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sheet_tui", about = "Convert a character export into an Improved Initiative stat block")]
struct Cli {
    /// Character JSON exported from the character service
    input: Option<PathBuf>,

    /// TOML file overriding the built-in conversion rules
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print the stat block as JSON instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Write the stat block to this file (implies --print)
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let batch = cli.print || cli.output.is_some();

    // The viewer owns the terminal, so logging stays off there unless RUST_LOG asks for it
    let default_filter = if batch { "warn" } else { "off" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let result = resolve_rules(&cli).and_then(|rules| {
        if batch {
            run_batch(&cli, &rules)
        } else {
            run_viewer(&cli, &rules)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_rules(cli: &Cli) -> Result<ConversionRules, AppError> {
    match &cli.rules {
        Some(path) => Ok(load_rules(path)?),
        None => Ok(default_rules()),
    }
}

fn run_batch(cli: &Cli, rules: &ConversionRules) -> Result<(), AppError> {
    let input = cli.input.as_deref().ok_or(AppError::MissingContext)?;
    let loaded = Loaded::from_path(input, rules)?;

    match &cli.output {
        Some(path) => std::fs::write(path, &loaded.block_json).map_err(|source| {
            AppError::Write {
                path: path.clone(),
                source,
            }
        })?,
        None => println!("{}", loaded.block_json),
    }
    Ok(())
}

fn run_viewer(cli: &Cli, rules: &ConversionRules) -> Result<(), AppError> {
    let mut app = App::new(cli.input.as_deref(), rules);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Char('?'), _) => app.set_tab(3),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::PageUp, _) => app.page_up(),
                    (KeyCode::PageDown, _) => app.page_down(),
                    (KeyCode::Char('s'), _) => app.on_save(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
