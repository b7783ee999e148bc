//! table-pager: interactive paginated table browser for the terminal.
//!
//! Renders a styled, column-configurable table of records one page at a
//! time and resolves user input into a state transition: advance page,
//! wrap to the first page, delegate to an injected "back to search"
//! callback, or terminate with a selection string for the caller to
//! interpret.

pub mod browser;
pub mod command;
pub mod console;
pub mod pager;
pub mod render;
pub mod source;
pub mod types;
