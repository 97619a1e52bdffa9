use mealplanner_shared::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{io::ErrorKind, path::Path};

use crate::{GridStore, Range};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: vec![],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn set(&mut self, row: usize, col: usize, value: &str) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }

        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }

        cells[col] = value.to_owned();
    }

    fn trim(&mut self) {
        for cells in self.rows.iter_mut() {
            while cells.last().is_some_and(|c| c.is_empty()) {
                cells.pop();
            }
        }

        while self.rows.last().is_some_and(|r| r.is_empty()) {
            self.rows.pop();
        }
    }
}

/// In-memory grid persisted as a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the workbook at `path`, or an empty one when the file is missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "workbook not found, starting empty");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let workbook = serde_json::from_str(&content)?;

        Ok(workbook)
    }

    /// Writes through a sibling temp file renamed over `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        std::fs::rename(&tmp, path)?;

        tracing::debug!(path = %path.display(), sheets = self.sheets.len(), "workbook saved");

        Ok(())
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::Grid(format!("sheet '{name}' not found")))
    }
}

impl GridStore for Workbook {
    fn has_sheet(&self, name: &str) -> bool {
        self.sheet(name).is_some()
    }

    fn add_sheet(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Grid("sheet name must not be empty".to_owned()));
        }

        if !self.has_sheet(name) {
            self.sheets.push(Sheet::new(name));
        }

        Ok(())
    }

    fn clear_sheet(&mut self, name: &str) -> Result<()> {
        self.sheet_mut(name)?.rows.clear();

        Ok(())
    }

    fn last_row(&self, sheet: &str) -> Result<usize> {
        let sheet = self
            .sheet(sheet)
            .ok_or_else(|| Error::Grid(format!("sheet '{sheet}' not found")))?;

        Ok(sheet
            .rows
            .iter()
            .rposition(|r| r.iter().any(|c| !c.is_empty()))
            .map(|i| i + 1)
            .unwrap_or_default())
    }

    fn read(&self, range: &Range) -> Result<Vec<Vec<String>>> {
        let sheet = self
            .sheet(&range.sheet)
            .ok_or_else(|| Error::Grid(format!("sheet '{}' not found", range.sheet)))?;

        Ok((range.row..range.end_row())
            .map(|row| {
                (range.col..range.end_col())
                    .map(|col| sheet.get(row, col).to_owned())
                    .collect()
            })
            .collect())
    }

    fn write(&mut self, range: &Range, rows: &[Vec<String>]) -> Result<()> {
        if rows.len() != range.rows || rows.iter().any(|r| r.len() != range.cols) {
            return Err(Error::Grid(format!(
                "shape mismatch writing {range}: expected {}x{}",
                range.rows, range.cols
            )));
        }

        let sheet = self.sheet_mut(&range.sheet)?;
        for (i, cells) in rows.iter().enumerate() {
            for (j, value) in cells.iter().enumerate() {
                sheet.set(range.row + i, range.col + j, value);
            }
        }
        sheet.trim();

        Ok(())
    }
}
