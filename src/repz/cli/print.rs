use colored::Colorize;
use console::Term;
use repz::api::{CmdMessage, MessageLevel};
use repz::error::RepzError;
use repz::model::Entry;
use repz::schema::HEADER;
use unicode_width::UnicodeWidthStr;

use super::styles;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|e| {
            [
                e.exercise.clone(),
                e.reps.to_string(),
                e.weight.to_string(),
                e.date.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for (i, name) in HEADER.iter().enumerate() {
        widths[i] = name.width();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header = HEADER.map(String::from);
    println!("{}", styles::TABLE_HEADER.apply_to(format_row(&header, &widths)));
    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
}

/// Exercise left-aligned, numeric columns right-aligned, date as-is.
/// Exercise padding goes by display width so wide glyphs stay lined up.
fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let name_pad = " ".repeat(widths[0].saturating_sub(cells[0].width()));
    format!(
        "{}{}  {:>reps$}  {:>weight$}  {}",
        cells[0],
        name_pad,
        cells[1],
        cells[2],
        cells[3],
        reps = widths[1],
        weight = widths[2],
    )
}

pub(super) fn print_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

pub(super) fn print_error(err: &RepzError) {
    eprintln!("{}", format!("Error: {}", err).red());
}

pub(super) fn print_help() {
    println!("Commands:");
    println!("  add <exercise> <reps> <weight> [date]   Record a set (date defaults to today)");
    println!("  view [column:value ...]                 List entries, optionally filtered");
    println!("  sort <column>                           Sort by column, descending");
    println!("  exercises                               List distinct exercise names");
    println!("  merge <file.csv>                        Append rows from another CSV file");
    println!("  files                                   List datasets");
    println!("  open <dataset>                          Switch to another dataset");
    println!("  clear                                   Clear the screen");
    println!("  help                                    Show this help");
    println!("  quit                                    Exit");
    println!();
    println!("Aliases: a, v, s, ex, ls, o, h, q");
}

pub(super) fn clear_screen() {
    let _ = Term::stdout().clear_screen();
}
