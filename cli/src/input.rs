//! Piped input

use std::io::{self, IsTerminal, Read};

/// Reads the whole standard input, unless it is a terminal
pub fn read_piped() -> io::Result<Option<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(Some(buf))
}

/// Picks the message to send
///
/// Non-blank piped input wins over the command argument.
pub fn message_body(arg: Option<String>, piped: Option<String>) -> Option<String> {
    piped
        .map(|input| input.trim().to_string())
        .filter(|input| !input.is_empty())
        .or(arg)
}
