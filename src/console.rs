//! Display and input surfaces.
//!
//! The browsing loop talks to the terminal only through the [`Console`]
//! trait, so the loop is testable without a TTY. [`TermConsole`] is the
//! real implementation over stdout/stdin. When a choice set is supplied
//! to [`Console::prompt`], the surface itself enforces membership and
//! re-prompts — out-of-vocabulary input never reaches the pager.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

/// Abstraction over the terminal for the browsing loop.
pub trait Console {
    /// Emit the start-of-screen banner.
    fn banner(&mut self) -> io::Result<()>;

    /// Display a rendered table.
    fn show_table(&mut self, rendered: &str) -> io::Result<()>;

    /// Display a navigation hint line.
    fn hint(&mut self, text: &str) -> io::Result<()>;

    /// Blocking prompt. With `choices`, re-prompt until the input is a
    /// member of the set; the returned string is always legal.
    fn prompt(&mut self, text: &str, choices: Option<&[String]>) -> io::Result<String>;

    /// Report a recoverable error (back-callback failures).
    fn report_error(&mut self, message: &str);
}

// ============================================================================
// REAL TERMINAL
// ============================================================================

/// Console backed by stdout/stderr/stdin.
pub struct TermConsole {
    banner: String,
}

impl TermConsole {
    pub fn new() -> Self {
        TermConsole {
            banner: format!("table-pager v{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the banner line printed before each page.
    pub fn with_banner(banner: impl Into<String>) -> Self {
        TermConsole {
            banner: banner.into(),
        }
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        // Strip the line terminator only; inner whitespace is input.
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        TermConsole::new()
    }
}

impl Console for TermConsole {
    fn banner(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        writeln!(out)?;
        writeln!(out, "{}", self.banner.as_str().bold())?;
        Ok(())
    }

    fn show_table(&mut self, rendered: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{rendered}")
    }

    fn hint(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout(), "\n{}", text.green())
    }

    fn prompt(&mut self, text: &str, choices: Option<&[String]>) -> io::Result<String> {
        loop {
            write!(io::stdout(), "{}: ", text.cyan())?;
            io::stdout().flush()?;

            let input = self.read_line()?;

            match choices {
                None => return Ok(input),
                Some(set) if set.iter().any(|c| c == &input) => return Ok(input),
                Some(_) => {
                    tracing::debug!(input = %input, "rejected out-of-vocabulary input");
                    writeln!(io::stdout(), "{}", "Invalid choice, try again.".yellow())?;
                }
            }
        }
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}

// ============================================================================
// SCRIPTED CONSOLE (test support)
// ============================================================================


// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::testing::ScriptedConsole;
    use super::*;

    #[test]
    fn scripted_prompt_returns_inputs_in_order() {
        let mut console = ScriptedConsole::with_inputs(["", "3"]);
        assert_eq!(console.prompt("p", None).unwrap(), "");
        assert_eq!(console.prompt("p", None).unwrap(), "3");
    }

    #[test]
    fn scripted_prompt_exhaustion_is_an_error() {
        let mut console = ScriptedConsole::with_inputs(Vec::<String>::new());
        let err = console.prompt("p", None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn choice_set_rejects_out_of_vocabulary_input() {
        let choices: Vec<String> = vec!["0".into(), "1".into(), "q".into(), "".into()];
        let mut console = ScriptedConsole::with_inputs(["7", "x", "1"]);

        let accepted = console.prompt("p", Some(&choices)).unwrap();
        assert_eq!(accepted, "1");
        assert_eq!(console.rejected, vec!["7".to_string(), "x".to_string()]);
    }

    #[test]
    fn empty_string_can_be_a_legal_choice() {
        let choices: Vec<String> = vec!["0".into(), "".into()];
        let mut console = ScriptedConsole::with_inputs([""]);
        assert_eq!(console.prompt("p", Some(&choices)).unwrap(), "");
    }
}
