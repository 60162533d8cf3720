//! Interactive session setup: player name and board dimensions.
//!
//! Runs in cooked mode before the terminal switches to raw mode. Generic
//! over the reader and writer so the re-prompt loop is testable.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use tui_pong_types::BoardSize;

/// Everything the driver needs to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub player: String,
    pub size: BoardSize,
}

/// Prompt for the player name, then loop on board dimensions until valid.
///
/// Equal dimensions or anything outside `[20, 40]` is rejected with a
/// re-prompt; nothing is clamped silently.
pub fn read_session(input: &mut impl BufRead, output: &mut impl Write) -> Result<SessionConfig> {
    write!(output, "Enter player name: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading player name")?;
    let player = line.trim().to_string();

    let size = loop {
        write!(
            output,
            "Enter board size as rows and cols (20-40, rows != cols): "
        )?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line).context("reading board size")? == 0 {
            bail!("input ended before a valid board size was given");
        }
        match parse_size(&line) {
            Some(size) => break size,
            None => writeln!(output, "Invalid input, try again.")?,
        }
    };

    Ok(SessionConfig { player, size })
}

/// Parse `"rows cols"` and validate through [`BoardSize::new`].
fn parse_size(line: &str) -> Option<BoardSize> {
    let mut parts = line.split_whitespace();
    let rows: i16 = parts.next()?.parse().ok()?;
    let cols: i16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    BoardSize::new(rows, cols).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_valid() {
        let size = parse_size("25 30\n").unwrap();
        assert_eq!(size.rows(), 25);
        assert_eq!(size.cols(), 30);
    }

    #[test]
    fn test_parse_size_rejects() {
        assert!(parse_size("").is_none());
        assert!(parse_size("25").is_none());
        assert!(parse_size("25 30 35").is_none());
        assert!(parse_size("twenty 30").is_none());
        assert!(parse_size("20 20").is_none());
        assert!(parse_size("19 30").is_none());
        assert!(parse_size("25 41").is_none());
    }
}
