//! Spreadsheet reading via calamine.

use super::Table;
use crate::error::{FaqbotError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::debug;

/// Read the first worksheet, treating its first row as the header.
pub(crate) fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FaqbotError::Config(format!("{} has no worksheets", path.display())))??;

    debug!("Worksheet range {:?}", range.get_size());

    let mut rows = range.rows();
    let header = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(Table { header, rows })
}

/// Render a cell as text. Integral floats lose their trailing `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
