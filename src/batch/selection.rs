//! Interactive numbered-menu selection

use std::io::{BufRead, Write};

use crate::config::batch;
use crate::error::Result;

/// Result of parsing an interactive selection line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen repository names, in the order entered
    pub chosen: Vec<String>,
    /// Tokens that were not a valid menu number
    pub skipped: Vec<String>,
}

/// Parse a selection line against the rendered menu.
///
/// `all` selects every entry; otherwise each whitespace token naming a
/// 1-based index selects that entry.
pub fn parse_selection(input: &str, repos: &[String]) -> Selection {
    let input = input.trim();
    if input.eq_ignore_ascii_case(batch::SELECT_ALL_TOKEN) {
        return Selection {
            chosen: repos.to_vec(),
            skipped: Vec::new(),
        };
    }

    let mut selection = Selection::default();
    for token in input.split_whitespace() {
        match token.parse::<usize>() {
            Ok(n) if (1..=repos.len()).contains(&n) => {
                selection.chosen.push(repos[n - 1].clone());
            }
            _ => selection.skipped.push(token.to_string()),
        }
    }
    selection
}

/// Print the numbered menu
pub fn render_menu<W: Write>(repos: &[String], out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    for (i, repo) in repos.iter().enumerate() {
        writeln!(out, "{:3}) {}", i + 1, repo)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Enter repository numbers to delete (space-separated, e.g., 1 3 5):"
    )?;
    writeln!(
        out,
        "Or enter '{}' to select all repositories",
        batch::SELECT_ALL_TOKEN
    )?;
    out.flush()
}

/// Show the menu, read one line, and report skipped tokens.
/// End of input yields an empty selection.
pub fn prompt_selection<R: BufRead, W: Write>(
    repos: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<Vec<String>> {
    render_menu(repos, out)?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let selection = parse_selection(&line, repos);
    for token in &selection.skipped {
        writeln!(out, "\x1b[1;33m⚠️  Skipping invalid selection: {}\x1b[0m", token)?;
    }
    Ok(selection.chosen)
}
