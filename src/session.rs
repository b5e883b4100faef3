use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::colors::ColorScheme;
use crate::curator::CuratedList;
use crate::display;
use crate::error::Result;
use crate::export::export_list;
use crate::utils::format_number;

/// One line of operator input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Order(Vec<String>),
    Move { id: usize, position: usize },
    Drop { id: usize },
    Save,
    Help,
    Done,
}

/// Parse a session command line. Errors are messages meant for the
/// operator, never fatal.
pub fn parse_command(input: &str) -> std::result::Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Err("Type 'help' for the command list".to_string());
    };

    match keyword.to_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "order" => {
            let tokens: Vec<String> = parts.map(str::to_string).collect();
            if tokens.is_empty() {
                Err("'order' needs at least one entry id, e.g. 'order 3 1 2'".to_string())
            } else {
                Ok(Command::Order(tokens))
            }
        }
        "move" | "mv" => {
            let id = parse_id(parts.next(), "move")?;
            let position = parts
                .next()
                .and_then(|token| token.parse::<usize>().ok())
                .ok_or_else(|| "'move' takes an entry id and a position, e.g. 'move 3 1'".to_string())?;
            Ok(Command::Move { id, position })
        }
        "drop" | "rm" => {
            let id = parse_id(parts.next(), "drop")?;
            Ok(Command::Drop { id })
        }
        "save" | "export" => Ok(Command::Save),
        "help" | "?" => Ok(Command::Help),
        "done" | "quit" | "exit" | "q" => Ok(Command::Done),
        unknown => Err(format!(
            "Unknown command '{}', type 'help' for the command list",
            unknown
        )),
    }
}

fn parse_id(token: Option<&str>, command: &str) -> std::result::Result<usize, String> {
    token
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(|| format!("'{}' takes an entry id, e.g. '{} 3'", command, command))
}

/// Drive the curation session over any line-based input.
///
/// Returns whether the list was exported at least once. EOF is
/// treated the same as 'done'. A failed export is reported and the
/// session stays open, so nothing curated so far is lost.
pub fn run_session<R: BufRead>(
    list: &mut CuratedList,
    input: R,
    export_path: &Path,
    colors: &ColorScheme,
) -> Result<bool> {
    let mut saved = false;

    display::display_session_intro(colors);

    let mut lines = input.lines();
    loop {
        print!("aotyfm> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Ok(Command::List) => display::display_list(list, colors),
            Ok(Command::Order(tokens)) => {
                let outcome = list.reorder(&tokens);
                for token in &outcome.skipped {
                    println!(
                        "{} Skipped '{}': not a usable entry id",
                        colors.warning("⚠️"),
                        token
                    );
                }
                for text in &outcome.dropped {
                    println!("{} Dropped {}", colors.warning("⚠️"), text);
                }
                display::display_list(list, colors);
            }
            Ok(Command::Move { id, position }) => match list.move_entry(id, position) {
                Ok(()) => display::display_list(list, colors),
                Err(message) => println!("{} {}", colors.warning("⚠️"), message),
            },
            Ok(Command::Drop { id }) => match list.discard(id) {
                Ok(entry) => println!("🗑️  Discarded {}", entry.text()),
                Err(message) => println!("{} {}", colors.warning("⚠️"), message),
            },
            Ok(Command::Save) => match export_list(list, export_path) {
                Ok(()) => {
                    saved = true;
                    println!(
                        "{} Saved {} albums to {}",
                        colors.success("💾"),
                        colors.number(&format_number(list.len() as u64)),
                        export_path.display()
                    );
                }
                Err(error) => println!(
                    "{} Could not save the list to {}: {}",
                    colors.warning("⚠️"),
                    export_path.display(),
                    error
                ),
            },
            Ok(Command::Help) => display::display_session_help(colors),
            Ok(Command::Done) => break,
            Err(message) => println!("{} {}", colors.warning("⚠️"), message),
        }
    }

    Ok(saved)
}
