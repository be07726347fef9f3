use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use repz::api::RepzApi;
use repz::error::Result;
use repz::store::DataStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{print, styles, Signal};
use crate::args;

/// Runs the session loop. A real terminal gets line editing and history;
/// piped stdin is read line by line so scripted sessions work the same.
///
/// Session errors (bad input, unknown datasets) are printed and the loop
/// continues. Only losing stdin itself ends the session early.
pub fn run<S: DataStore>(api: &mut RepzApi<S>, history_path: Option<PathBuf>) -> Result<()> {
    if io::stdin().is_terminal() {
        run_interactive(api, history_path)
    } else {
        run_piped(api)
    }
}

fn run_interactive<S: DataStore>(
    api: &mut RepzApi<S>,
    history_path: Option<PathBuf>,
) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(to_io_error)?;
    if let Some(path) = &history_path {
        // No history yet on first run
        let _ = editor.load_history(path);
    }

    println!(
        "repz {}. Logging to '{}'. Type 'help' for commands, 'quit' to exit.",
        args::get_version(),
        styles::ACCENT.apply_to(api.dataset_name())
    );

    loop {
        let prompt = format!("{}> ", api.dataset_name());
        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match super::dispatch(api, &line) {
                    Ok(Signal::Quit) => break,
                    Ok(Signal::Continue) => {}
                    Err(e) => print::print_error(&e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(to_io_error(e).into()),
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }
    Ok(())
}

fn run_piped<S: DataStore>(api: &mut RepzApi<S>) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        match super::dispatch(api, &line) {
            Ok(Signal::Quit) => break,
            Ok(Signal::Continue) => {}
            Err(e) => print::print_error(&e),
        }
    }
    Ok(())
}

fn to_io_error(e: ReadlineError) -> io::Error {
    io::Error::other(e.to_string())
}
