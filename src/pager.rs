//! Pagination state machine: pure transitions, zero effects.
//!
//! `PageWindow` owns the slice bounds; `step` decides, given one command
//! and the record count, whether the loop renders another page, delegates
//! to the back callback, or finishes with a result string. Fully testable
//! without a terminal — the browsing loop interprets the outcome.

use crate::command::Command;

/// Default page size when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

// ============================================================================
// PAGE WINDOW
// ============================================================================

/// The slice bounds of the page currently on screen.
///
/// `step` is fixed at construction and is the increment for every
/// advance; `end` is clamped to the record count when advancing, and
/// [`PageWindow::slice_bounds`] clamps again at render time so the window
/// never indexes out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: usize,
    end: usize,
    step: usize,
}

impl PageWindow {
    /// Create a window on the first page.
    ///
    /// A zero page size is clamped to 1 — it could never advance.
    pub fn new(page_size: usize) -> Self {
        let step = page_size.max(1);
        PageWindow {
            start: 0,
            end: step,
            step,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The per-page increment (the initial slice width).
    pub fn step(&self) -> usize {
        self.step
    }

    /// Bounds of the visible slice, clamped to the record count.
    pub fn slice_bounds(&self, total: usize) -> (usize, usize) {
        (self.start.min(total), self.end.min(total))
    }

    /// Whether records remain beyond the current page.
    pub fn has_more(&self, total: usize) -> bool {
        self.end < total
    }

    /// The next page: both bounds advance by `step`, `end` clamped to
    /// `total`.
    fn advanced(&self, total: usize) -> Self {
        let end = self.end + self.step;
        PageWindow {
            start: self.start + self.step,
            end: end.min(total),
            step: self.step,
        }
    }

    /// Back to the first page: `(0, step)`.
    fn rewound(&self) -> Self {
        PageWindow {
            start: 0,
            end: self.step,
            step: self.step,
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        PageWindow::new(DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of one pure transition.
///
/// Pure code describes what should happen; the browsing loop interprets
/// it and performs the effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render this window on the next iteration.
    Continue(PageWindow),
    /// Invoke the back callback, then render this window again
    /// (bounds unchanged).
    Delegate(PageWindow),
    /// Exit the loop, returning the raw terminating input.
    Finished(String),
}

/// Pure transition: `(window, command, total) → outcome`.
///
/// Empty input advances while pages remain and wraps to the first page
/// once the end is on screen. `q` and selections terminate from any page.
pub fn step(window: PageWindow, command: Command, total: usize) -> Outcome {
    match command {
        Command::Quit(raw) => Outcome::Finished(raw),
        Command::Selection(raw) => Outcome::Finished(raw),
        Command::Back => Outcome::Delegate(window),
        Command::NextPage => {
            if window.has_more(total) {
                Outcome::Continue(window.advanced(total))
            } else {
                Outcome::Continue(window.rewound())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn next(window: PageWindow, total: usize) -> PageWindow {
        match step(window, Command::NextPage, total) {
            Outcome::Continue(w) => w,
            other => panic!("Expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn new_window_covers_first_page() {
        let w = PageWindow::new(5);
        assert_eq!((w.start(), w.end()), (0, 5));
        assert_eq!(w.step(), 5);
    }

    #[test]
    fn zero_page_size_clamps_to_one() {
        let w = PageWindow::new(0);
        assert_eq!((w.start(), w.end()), (0, 1));
        assert_eq!(w.step(), 1);
    }

    #[test]
    fn advance_moves_both_bounds_by_step() {
        let w = next(PageWindow::new(5), 20);
        assert_eq!((w.start(), w.end()), (5, 10));
        let w = next(w, 20);
        assert_eq!((w.start(), w.end()), (10, 15));
    }

    #[test]
    fn advance_clamps_end_to_total() {
        let w = next(PageWindow::new(5), 12);
        assert_eq!((w.start(), w.end()), (5, 10));
        let w = next(w, 12);
        assert_eq!((w.start(), w.end()), (10, 12));
    }

    #[test]
    fn end_never_exceeds_total() {
        let mut w = PageWindow::new(3);
        for _ in 0..10 {
            w = next(w, 8);
            assert!(w.end() <= 8);
        }
    }

    #[test]
    fn empty_input_on_last_page_wraps_to_first() {
        // End on screen: (10, 12) with total 12
        let w = next(next(PageWindow::new(5), 12), 12);
        assert_eq!((w.start(), w.end()), (10, 12));
        assert!(!w.has_more(12));

        let w = next(w, 12);
        assert_eq!((w.start(), w.end()), (0, 5));
    }

    #[test]
    fn wrap_then_advance_matches_fresh_second_page() {
        // Walk to the end, wrap, advance once more.
        let w = next(next(next(PageWindow::new(5), 12), 12), 12);
        assert_eq!((w.start(), w.end()), (0, 5));
        let w = next(w, 12);

        // Identical to a fresh session's second page.
        let fresh = next(PageWindow::new(5), 12);
        assert_eq!(w, fresh);
        assert_eq!((w.start(), w.end()), (5, 10));
    }

    #[test]
    fn empty_record_set_wraps_in_place() {
        // end >= total holds immediately; empty input just rewinds.
        let w = next(PageWindow::new(5), 0);
        assert_eq!((w.start(), w.end()), (0, 5));
        assert_eq!(w.slice_bounds(0), (0, 0));
    }

    #[test]
    fn slice_bounds_clamp_to_total() {
        let w = PageWindow::new(5);
        assert_eq!(w.slice_bounds(3), (0, 3));
        assert_eq!(w.slice_bounds(12), (0, 5));
    }

    #[test]
    fn quit_finishes_with_raw_input_from_any_page() {
        let first = PageWindow::new(5);
        assert_eq!(
            step(first, Command::Quit("Q".into()), 12),
            Outcome::Finished("Q".into())
        );

        let last = next(next(first, 12), 12);
        assert_eq!(
            step(last, Command::Quit("q".into()), 12),
            Outcome::Finished("q".into())
        );
    }

    #[test]
    fn selection_finishes_verbatim() {
        let w = PageWindow::new(5);
        assert_eq!(
            step(w, Command::Selection("3-*".into()), 12),
            Outcome::Finished("3-*".into())
        );
    }

    #[test]
    fn back_delegates_without_touching_bounds() {
        let w = next(PageWindow::new(5), 12);
        assert_eq!(step(w, Command::Back, 12), Outcome::Delegate(w));
    }

    #[test]
    fn full_session_page_size_5_total_12() {
        // render 0..5 → "" → (5,10) → "" → (10,12) → "" → wrapped (0,5)
        // → "3" → finished with "3"
        let total = 12;
        let w0 = PageWindow::new(5);
        assert_eq!(w0.slice_bounds(total), (0, 5));

        let w1 = next(w0, total);
        assert_eq!((w1.start(), w1.end()), (5, 10));

        let w2 = next(w1, total);
        assert_eq!((w2.start(), w2.end()), (10, 12));

        let w3 = next(w2, total);
        assert_eq!((w3.start(), w3.end()), (0, 5));

        assert_eq!(
            step(w3, Command::parse("3"), total),
            Outcome::Finished("3".into())
        );
    }
}
