//! Interactive numbered menu.
//!
//! One action runs to completion before the next line is read. Input errors
//! and failed actions are reported and the menu is shown again; end of input
//! exits like option 0.

use std::io::{BufRead, Write};

use tracing::warn;

use super::{Session, cmd_alive, cmd_authors, cmd_books, cmd_language, cmd_search};
use crate::cli::present;

const MENU: &str = "\
-------------
Choose an option by number:
1 - Search book by title
2 - List registered books
3 - List registered authors
4 - List authors alive in a given year
5 - List books by language
0 - Exit";

/// Run the menu until the user picks 0 or input ends
pub async fn run_menu<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = read_line(input)? else {
            break;
        };

        let Ok(option) = choice.parse::<u32>() else {
            writeln!(out, "Only numbers are accepted in the menu")?;
            continue;
        };

        let result = match option {
            0 => {
                writeln!(out, "See you next time")?;
                break;
            }
            1 => {
                writeln!(out, "Type the title of the book to search for")?;
                match read_line(input)? {
                    Some(title) => cmd_search(session, &title, out).await,
                    None => break,
                }
            }
            2 => cmd_books(session, out).await,
            3 => cmd_authors(session, out).await,
            4 => {
                writeln!(out, "Enter the year to check:")?;
                match read_line(input)? {
                    Some(year) => cmd_alive(session, &year, out).await,
                    None => break,
                }
            }
            5 => {
                writeln!(out, "{}", present::language_prompt())?;
                match read_line(input)? {
                    Some(code) => cmd_language(session, &code, out).await,
                    None => break,
                }
            }
            _ => {
                writeln!(out, "Invalid option")?;
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!(option, error = %e, "Menu action failed");
            writeln!(out, "Error: {}", e)?;
        }
    }
    Ok(())
}

/// Read one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
