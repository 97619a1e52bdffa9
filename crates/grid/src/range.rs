/// A rectangular block of cells on one sheet. Coordinates are 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range {
    pub sheet: String,
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Range {
    pub fn new(
        sheet: impl Into<String>,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            row,
            col,
            rows,
            cols,
        }
    }

    pub fn row(sheet: impl Into<String>, row: usize, col: usize, cols: usize) -> Self {
        Self::new(sheet, row, col, 1, cols)
    }

    pub fn cell(sheet: impl Into<String>, row: usize, col: usize) -> Self {
        Self::new(sheet, row, col, 1, 1)
    }

    pub fn end_row(&self) -> usize {
        self.row + self.rows
    }

    pub fn end_col(&self) -> usize {
        self.col + self.cols
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}!R{}C{}:R{}C{}",
            self.sheet,
            self.row + 1,
            self.col + 1,
            self.end_row(),
            self.end_col()
        )
    }
}
