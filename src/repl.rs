use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::scanner::{Scanner, TokenKind};

/// Run the interactive shell. Each line gets a fresh Scanner and every
/// non-Eof token is printed, illegal ones included.
pub fn run_repl() -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("Welcome to the tablang REPL! Start writing commands down below.");

    loop {
        match editor.readline(">>> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if is_quit_command(trimmed) {
                    break;
                }
                editor.add_history_entry(trimmed)?;

                // Scan the raw line so printed offsets match what was typed;
                // leading whitespace is skipped by the scanner anyway.
                let mut scanner = Scanner::new(&line);
                loop {
                    let token = scanner.next_token();
                    if token.kind == TokenKind::Eof {
                        break;
                    }
                    println!("{token}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn is_quit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), ":q" | "quit()" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_command_detection() {
        assert!(is_quit_command(":q"));
        assert!(is_quit_command("quit()"));
        assert!(is_quit_command("exit"));
        assert!(is_quit_command("EXIT"));
        assert!(is_quit_command("Quit()"));
        assert!(!is_quit_command("quit"));
        assert!(!is_quit_command("x = 1"));
    }
}
