//! Snapshot parsing and serialization
//!
//! The rule engine prints its board as a nested list of integers,
//! `[[c11,c12,...],[c21,...],...]`. That syntax is also valid JSON, so the
//! nesting, bracket balance and integer checks are delegated to `serde_json`;
//! this module only adds the rectangularity check and the code conversion.
//!
//! Parsing is a left inverse of [`serialize`]: for any rectangular grid,
//! `parse(&serialize(&grid)) == Ok(grid)`.

use super::grid::Grid;
use super::types::CellCode;
use crate::game::error::{SyncError, SyncResult};
use tracing::debug;

/// Parse snapshot text into a grid of cell codes
///
/// Anything before the first `[` is skipped; engine replies may carry a
/// status prefix. Trailing text after the outer list is rejected.
pub fn parse(text: &str) -> SyncResult<Grid<CellCode>> {
    let start = text
        .find('[')
        .ok_or_else(|| SyncError::malformed("no opening bracket"))?;
    let body = text[start..].trim_end();

    let rows: Vec<Vec<i64>> = serde_json::from_str(body)
        .map_err(|e| SyncError::malformed(format!("not a nested integer list: {e}")))?;

    let Some(first) = rows.first() else {
        return Err(SyncError::malformed("snapshot has no rows"));
    };
    let cols = first.len();
    if cols == 0 {
        return Err(SyncError::malformed("snapshot rows are empty"));
    }

    if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(SyncError::malformed(format!(
            "row {index} has {} cells, expected {cols}",
            row.len()
        )));
    }

    debug!("[SNAPSHOT] Parsed {}x{} snapshot", rows.len(), cols);

    Ok(Grid::from_rows(
        rows.into_iter()
            .map(|row| row.into_iter().map(CellCode::from_raw).collect())
            .collect(),
    ))
}

/// Render a grid of codes in the engine's list syntax (no whitespace)
pub fn serialize(grid: &Grid<CellCode>) -> String {
    let rows: Vec<String> = (0..grid.rows())
        .filter_map(|row| grid.row(row))
        .map(|row| {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            format!("[{}]", cells.join(","))
        })
        .collect();
    format!("[{}]", rows.join(","))
}
