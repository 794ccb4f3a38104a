// src/prompt.rs

//! Interactive confirmation for destructive commands.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read one line from stdin
///
/// Only an explicit `y` / `yes` counts as approval; anything else, including
/// an empty line, declines.
pub fn confirm(question: &str) -> io::Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N]: ", question)?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_affirmative(&input))
}

/// Check whether an answer counts as yes
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_tokens() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  YES \n"));
    }

    #[test]
    fn test_everything_else_declines() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("oui"));
    }
}
