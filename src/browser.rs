//! The browsing loop: owns the record set and drives pagination.
//!
//! This is the effects boundary. All transition intelligence lives in the
//! pure layers (`command`, `pager`); this module renders the current
//! slice, reads one input through the console seam, and interprets the
//! resulting outcome. The "back to search" action is an injected
//! callback — absence or failure is recoverable per iteration and never
//! exits the loop.

use std::error::Error;
use std::io;

use crate::command::Command;
use crate::console::Console;
use crate::pager::{step, Outcome, PageWindow};
use crate::render::render_table;
use crate::types::{ColumnSchema, InputMode, Record};

/// Error type produced by an injected back callback.
///
/// Opaque to the loop: it is reported and swallowed, never propagated.
pub type BackError = Box<dyn Error + Send + Sync>;

/// Injected "re-enter search" callback. Called with `None` to mean
/// "interactive search with no preset term".
pub type BackCallback<'a> = dyn FnMut(Option<&str>) -> Result<(), BackError> + 'a;

const HINT_MORE: &str = "Press Enter for next page, 'q' to quit, or 'back' to search.";
const HINT_END: &str =
    "You've reached the end. Enter for first page, 'q' to quit, or 'back' to search.";
const PROMPT_FREE: &str =
    "Insert index (e.g., 1), * for all, a range (e.g., 1-2), or an open range (e.g., 3-*)";
const PROMPT_STRICT: &str = "Insert index";

// ============================================================================
// BROWSER
// ============================================================================

/// Interactive paginated table browser.
///
/// Constructed once per browsing session. The owning pipeline populates
/// the schema and record set before calling [`TableBrowser::run`]; the
/// whole object may be [`TableBrowser::reset`] and refilled for a new
/// record set.
pub struct TableBrowser<C: Console> {
    console: C,
    schema: ColumnSchema,
    records: Vec<Record>,
    window: PageWindow,
}

impl<C: Console> TableBrowser<C> {
    pub fn new(console: C) -> Self {
        TableBrowser {
            console,
            schema: ColumnSchema::new(),
            records: Vec::new(),
            window: PageWindow::default(),
        }
    }

    /// Replace the column schema wholesale.
    pub fn configure_columns(&mut self, schema: ColumnSchema) {
        self.schema = schema;
    }

    /// Append one record to the end of the record set.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Override the page size before the first render. Sets both the
    /// per-page step and the end of the first slice.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.window = PageWindow::new(page_size);
    }

    /// Empty the record set. Pagination bounds are left untouched.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run the interactive loop until the user quits or selects.
    ///
    /// Returns the terminating input verbatim: `q`/`Q`, or a selection
    /// expression for the caller to interpret. Page advances and `back`
    /// delegations are handled internally and never returned.
    pub fn run(
        &mut self,
        mode: InputMode,
        mut back: Option<&mut BackCallback<'_>>,
    ) -> io::Result<String> {
        let total = self.records.len();

        loop {
            self.console.banner()?;

            let (lo, hi) = self.window.slice_bounds(total);
            let table = render_table(&self.schema, &self.records[lo..hi]);
            self.console.show_table(&table.to_string())?;

            let hint = if self.window.has_more(total) {
                HINT_MORE
            } else {
                HINT_END
            };
            self.console.hint(hint)?;

            let raw = match mode {
                InputMode::FreeForm => self.console.prompt(PROMPT_FREE, None)?,
                InputMode::Strict { max_index } => {
                    let choices = strict_choices(max_index);
                    self.console.prompt(PROMPT_STRICT, Some(&choices))?
                }
            };

            match step(self.window, Command::parse(&raw), total) {
                Outcome::Continue(window) => {
                    tracing::debug!(start = window.start(), end = window.end(), "page change");
                    self.window = window;
                }
                Outcome::Delegate(window) => {
                    self.window = window;
                    self.delegate_back(back.as_deref_mut());
                }
                Outcome::Finished(last) => {
                    tracing::debug!(command = %last, "loop finished");
                    return Ok(last);
                }
            }
        }
    }

    /// Invoke the back callback, if any. Failures are reported to the
    /// console and swallowed; the loop continues either way.
    fn delegate_back(&mut self, back: Option<&mut BackCallback<'_>>) {
        match back {
            Some(callback) => {
                tracing::info!("delegating to search callback");
                if let Err(e) = callback(None) {
                    tracing::warn!(error = %e, "search callback failed");
                    self.console.report_error(&format!("Error during search: {e}"));
                }
            }
            None => {
                tracing::debug!("no search callback available, 'back' ignored");
            }
        }
    }
}

/// The strict-mode vocabulary: `"0" .. "max_index-1"` plus the control
/// tokens.
fn strict_choices(max_index: usize) -> Vec<String> {
    let mut choices: Vec<String> = (0..max_index).map(|i| i.to_string()).collect();
    choices.push("q".to_string());
    choices.push(String::new());
    choices.push("back".to_string());
    choices
}

// ============================================================================
// TESTS
// ============================================================================
