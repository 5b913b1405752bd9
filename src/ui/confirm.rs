//! Typed confirmation before irreversible deletions

use std::io::{self, BufRead, Write};

use crate::config::batch;
use crate::gh::RepoRef;

/// Show the deletion plan and require the operator to type `DELETE`.
///
/// Returns `true` only for an exact match. Only the line terminator is
/// stripped from the input; end of input declines.
pub fn confirm_deletion<R: BufRead, W: Write>(
    owner: &str,
    repos: &[String],
    dry_run: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    writeln!(out, "\x1b[0;36mRepositories to be deleted:\x1b[0m")?;
    for name in repos {
        writeln!(out, "  - {}", RepoRef::new(owner, name))?;
    }
    writeln!(out)?;

    if !dry_run {
        writeln!(out, "\x1b[0;31m⚠️  WARNING: This action is IRREVERSIBLE!\x1b[0m")?;
        writeln!(
            out,
            "\x1b[1;33m⚠️  Make sure you have backups of important code!\x1b[0m"
        )?;
        writeln!(out)?;
    }

    write!(
        out,
        "Are you absolutely sure? Type '{}' to confirm: ",
        batch::CONFIRMATION_TOKEN
    )?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }

    Ok(strip_line_ending(&line) == batch::CONFIRMATION_TOKEN)
}

/// Remove a trailing `\n` or `\r\n`, nothing else
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
