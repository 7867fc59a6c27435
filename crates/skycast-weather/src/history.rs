//! Weekly grid: restructure the flat lookup history for calendar-style
//! display.

use crate::types::HistoryEntry;

/// Number of slots per grid row.
pub const WEEK_WIDTH: usize = 7;

/// Partition `history` into rows of at most [`WEEK_WIDTH`] entries,
/// preserving input order, and pad the final row with empty slots to uniform
/// width. Empty input produces no rows.
///
/// Pure and deterministic: no I/O, same input always yields the same grid.
pub fn weekly_grid(history: &[HistoryEntry]) -> Vec<Vec<Option<HistoryEntry>>> {
    history
        .chunks(WEEK_WIDTH)
        .map(|chunk| {
            let mut row: Vec<Option<HistoryEntry>> = chunk.iter().cloned().map(Some).collect();
            row.resize(WEEK_WIDTH, None);
            row
        })
        .collect()
}
