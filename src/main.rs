// Envista: interactive environment variable viewer and editor

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;

use envista::cli::{Cli, Command};
use envista::commands;
use envista::error::EnvError;
use envista::snapshot::Snapshot;
use envista::ui::App;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut snapshot = Snapshot::capture();

    let result = match cli.command {
        Command::List => {
            commands::list(&snapshot);
            Ok(())
        }
        Command::Edit => run_session(snapshot),
        Command::Save { file } => commands::save(&snapshot, file),
        Command::Set { name, value } => {
            commands::set(&mut snapshot, &name, &value);
            Ok(())
        }
        Command::Clip => commands::clip(&snapshot),
        Command::Conflict { name } => commands::conflict(&snapshot, &name),
        Command::Dedup { name } => commands::dedup(&mut snapshot, &name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // absent or wrongly-typed variables are user messages, not failures
        Err(e @ (EnvError::NotFound { .. } | EnvError::NotAPathGroup { .. })) => {
            println!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Bracket one interactive session with raw mode and the alternate screen.
fn run_session(snapshot: Snapshot) -> Result<(), EnvError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(snapshot);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(EnvError::from)
}
