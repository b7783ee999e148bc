//! Input commands: raw prompt text → semantic command.
//!
//! The prompt returns an arbitrary string; this boundary turns it into a
//! tagged command so the transition function can match exhaustively
//! instead of comparing strings per branch. Control tokens (`q`, empty,
//! `back`) are recognized here; everything else is a selection and passes
//! through verbatim for the caller to interpret.

/// Semantic user command, decoupled from raw prompt text.
///
/// Variants that terminate the loop carry the raw input so the run result
/// is returned exactly as typed (`Q` stays `Q`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the loop (`q`, any case).
    Quit(String),
    /// Advance to the next page, or wrap on the last one (empty input).
    NextPage,
    /// Re-enter the upstream search flow (`back`, any case).
    Back,
    /// Anything else: a selection expression for the caller (an index,
    /// `*`, `1-4`, `3-*`, ...). Never interpreted here.
    Selection(String),
}

impl Command {
    /// Parse one line of prompt input. Total — every string maps to a
    /// command.
    pub fn parse(raw: &str) -> Command {
        if raw.is_empty() {
            Command::NextPage
        } else if raw.eq_ignore_ascii_case("q") {
            Command::Quit(raw.to_string())
        } else if raw.eq_ignore_ascii_case("back") {
            Command::Back
        } else {
            Command::Selection(raw.to_string())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_next_page() {
        assert_eq!(Command::parse(""), Command::NextPage);
    }

    #[test]
    fn q_is_quit_in_any_case() {
        assert_eq!(Command::parse("q"), Command::Quit("q".into()));
        assert_eq!(Command::parse("Q"), Command::Quit("Q".into()));
    }

    #[test]
    fn quit_preserves_raw_casing() {
        match Command::parse("Q") {
            Command::Quit(raw) => assert_eq!(raw, "Q"),
            other => panic!("Expected Quit, got {:?}", other),
        }
    }

    #[test]
    fn back_is_case_insensitive() {
        assert_eq!(Command::parse("back"), Command::Back);
        assert_eq!(Command::parse("BACK"), Command::Back);
        assert_eq!(Command::parse("Back"), Command::Back);
    }

    #[test]
    fn selections_pass_through_verbatim() {
        for raw in ["3", "*", "1-2", "3-*", "qq", " q", "backed"] {
            assert_eq!(Command::parse(raw), Command::Selection(raw.into()));
        }
    }
}
