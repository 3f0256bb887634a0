use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Raw cell grid of a CSV file with no header interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvGrid {
    pub rows: Vec<Vec<String>>,
}

impl CsvGrid {
    /// True when no cell holds a value.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(String::is_empty)
    }

    /// Cells of column `index`, top to bottom. Short rows yield blanks.
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Every column, left to right.
    pub fn columns(&self) -> Vec<Vec<&str>> {
        (0..self.width()).map(|index| self.column(index)).collect()
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Read every row of `path`, blank ones included, so row positions keep
/// their meaning. Ragged rows are kept as they are.
pub fn read_csv_grid(path: &Path) -> Result<CsvGrid> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| IngestError::csv(path, err))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::csv(path, err))?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(CsvGrid { rows })
}
