//! Scripted input from CSV.
//!
//! Header names the six controls; any subset may be present, missing
//! columns read as released. Cells are booleans or 0/1; nulls are released.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;
use tricollide::api::InputFlags;

pub const COLUMNS: [&str; 6] = ["left", "right", "up", "down", "rotate_left", "rotate_right"];

fn column_flags(df: &DataFrame, name: &str) -> Result<Option<Vec<bool>>> {
    let Ok(series) = df.column(name) else {
        return Ok(None);
    };
    let cast = series
        .cast(&DataType::Boolean)
        .with_context(|| format!("column {name} is not boolean or 0/1"))?;
    let flags = cast.bool()?.into_iter().map(|v| v.unwrap_or(false)).collect();
    Ok(Some(flags))
}

pub fn read_input_csv(path: &Path) -> Result<Vec<InputFlags>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let mut cols: Vec<Option<Vec<bool>>> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        cols.push(column_flags(&df, name)?);
    }
    if cols.iter().all(Option::is_none) {
        bail!(
            "{}: expected at least one of the columns {COLUMNS:?}",
            path.display()
        );
    }
    let at = |c: usize, row: usize| cols[c].as_ref().is_some_and(|v| v[row]);
    let frames: Vec<InputFlags> = (0..df.height())
        .map(|row| InputFlags {
            left: at(0, row),
            right: at(1, row),
            up: at(2, row),
            down: at(3, row),
            rotate_left: at(4, row),
            rotate_right: at(5, row),
        })
        .collect();
    tracing::info!(rows = frames.len(), path = %path.display(), "input_csv");
    Ok(frames)
}
