//! Line dispatch and terminal I/O for the repz binary.
//!
//! Every frontend (interactive REPL, piped stdin, `-c` one-liners) funnels
//! through [`dispatch`]: one line of input in, one API call out, output
//! printed. This is the only layer that touches stdout/stderr.

mod print;
pub mod repl;
mod styles;

use repz::api::RepzApi;
use repz::error::Result;
use repz::store::DataStore;

/// What the loop driving [`dispatch`] should do next.
#[derive(Debug)]
pub enum Signal {
    Continue,
    Quit,
}

/// Executes one line of input against the session and prints the outcome.
///
/// Argument mistakes the user can fix by retyping (missing arguments,
/// unknown commands) are printed as hints and the session continues;
/// everything else surfaces as an error for the caller to handle.
pub fn dispatch<S: DataStore>(api: &mut RepzApi<S>, line: &str) -> Result<Signal> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Signal::Continue);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "add" | "a" => {
            if rest.is_empty() {
                println!("Usage: add <exercise> <reps> <weight> [date]");
                return Ok(Signal::Continue);
            }
            let result = api.add(rest)?;
            print::print_messages(&result.messages);
        }
        "view" | "v" => {
            let result = api.view(rest)?;
            print::print_entries(&result.listed_entries);
        }
        "sort" | "s" => {
            if rest.is_empty() {
                println!("Usage: sort <column>");
                return Ok(Signal::Continue);
            }
            let result = api.sort(rest)?;
            print::print_entries(&result.listed_entries);
            print::print_messages(&result.messages);
        }
        "exercises" | "ex" => {
            let result = api.exercises()?;
            print::print_names(&result.listed_names);
            print::print_messages(&result.messages);
        }
        "merge" => {
            if rest.is_empty() {
                println!("Usage: merge <file.csv>");
                return Ok(Signal::Continue);
            }
            let result = api.merge(rest)?;
            print::print_messages(&result.messages);
        }
        "files" | "ls" => {
            let result = api.files()?;
            print::print_names(&result.listed_names);
            print::print_messages(&result.messages);
        }
        "open" | "o" => {
            if rest.is_empty() {
                println!("Usage: open <dataset>");
                return Ok(Signal::Continue);
            }
            let result = api.open(rest)?;
            print::print_messages(&result.messages);
        }
        "help" | "h" => print::print_help(),
        "clear" => print::clear_screen(),
        "quit" | "exit" | "q" => return Ok(Signal::Quit),
        _ => println!("Unknown command: {} (try 'help')", command),
    }

    Ok(Signal::Continue)
}

/// Runs the lines given via `-c` in order. The first failing line aborts
/// the run; main turns that into a non-zero exit.
pub fn run_commands<S: DataStore>(api: &mut RepzApi<S>, lines: &[String]) -> Result<()> {
    for line in lines {
        if let Signal::Quit = dispatch(api, line)? {
            break;
        }
    }
    Ok(())
}
