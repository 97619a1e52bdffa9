use mealplanner_shared::Result;

use crate::Range;

/// The grid the planner reads recipes from and writes plans into.
///
/// Cells are plain strings; an absent cell reads as `""`. Implementations
/// are not expected to be shared between concurrent runs.
pub trait GridStore {
    fn has_sheet(&self, name: &str) -> bool;

    /// Adds an empty sheet. Does nothing when the sheet already exists.
    fn add_sheet(&mut self, name: &str) -> Result<()>;

    fn clear_sheet(&mut self, name: &str) -> Result<()>;

    /// Number of leading rows up to and including the last non-empty one.
    fn last_row(&self, sheet: &str) -> Result<usize>;

    /// Reads exactly `range.rows` rows of `range.cols` cells.
    fn read(&self, range: &Range) -> Result<Vec<Vec<String>>>;

    /// Writes `rows` into `range`; the shapes must match.
    fn write(&mut self, range: &Range, rows: &[Vec<String>]) -> Result<()>;
}
