//! Clipboard writes through the terminal.
//!
//! Uses the OSC 52 escape sequence, which most modern terminals (and tmux
//! with `set-clipboard on`) forward to the system clipboard. Works over SSH
//! with no display server.

use std::io::stdout;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crossterm::execute;
use crossterm::style::Print;

/// OSC 52 "set clipboard" sequence carrying `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub fn copy(text: &str) -> std::io::Result<()> {
    execute!(stdout(), Print(osc52_sequence(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_encodes_text() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_sequence_keeps_newlines_inside_payload() {
        let seq = osc52_sequence("curl \\\n  -X POST");
        assert!(!seq.contains('\n'));
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
    }
}
