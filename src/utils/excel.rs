/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Keyed row lookup in `.xlsx` workbooks
//!
//! The first row of a sheet holds the column headers; every later row is a
//! record identified by the text in its first column. [`read_row`] returns the
//! first record whose key matches (ignoring case) as an ordered
//! header → value map.
//!
//! ```ignore
//! use user_api_client::utils::excel::read_row;
//!
//! let row = read_row("tests/fixtures/testdata.xlsx", "Sheet1", "LoginTest");
//! if let Some(username) = row.get("username") {
//!     println!("logging in as {username}");
//! }
//! ```

use crate::error::AppError;
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, error};

/// Header → cell value for one record, in column order
pub type RowData = IndexMap<String, String>;

/// Reads the record keyed by `row_key` from `sheet_name`
///
/// Returns an empty map when the sheet does not exist, when no record
/// matches, or when the workbook cannot be read. Read failures are logged.
///
/// # Arguments
/// * `path` - Location of the `.xlsx` file
/// * `sheet_name` - Sheet to search
/// * `row_key` - Key compared case-insensitively with each record's first cell
pub fn read_row<P: AsRef<Path>>(path: P, sheet_name: &str, row_key: &str) -> RowData {
    let path = path.as_ref();
    match try_read_row(path, sheet_name, row_key) {
        Ok(row) => row,
        Err(e) => {
            error!(
                "Failed to read row '{}' from {} [{}]: {}",
                row_key,
                path.display(),
                sheet_name,
                e
            );
            RowData::new()
        }
    }
}

/// Same lookup as [`read_row`], but reports workbook failures to the caller
///
/// A missing sheet or key is still `Ok` with an empty map.
pub fn try_read_row<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    row_key: &str,
) -> Result<RowData, AppError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let Some(sheet) = resolve_sheet_name(&workbook.sheet_names(), sheet_name) else {
        debug!("Sheet '{}' not found in {}", sheet_name, path.display());
        return Ok(RowData::new());
    };

    let values = workbook.worksheet_range(&sheet)?;
    let formulas = workbook.worksheet_formula(&sheet)?;

    let row = find_row(&values, &formulas, row_key);
    if row.is_empty() {
        debug!("No row keyed '{}' in sheet '{}'", row_key, sheet);
    }
    Ok(row)
}

/// Exact sheet name first, then a case-insensitive match
fn resolve_sheet_name(names: &[String], wanted: &str) -> Option<String> {
    names
        .iter()
        .find(|name| name.as_str() == wanted)
        .or_else(|| names.iter().find(|name| eq_ignore_case(name, wanted)))
        .cloned()
}

fn find_row(values: &Range<Data>, formulas: &Range<String>, row_key: &str) -> RowData {
    let mut row_data = RowData::new();
    let (Some((header_row, _)), Some((last_row, last_col))) = (values.start(), values.end())
    else {
        return row_data;
    };

    let headers: Vec<(u32, String)> = (0..=last_col)
        .filter_map(|col| {
            let header = cell_text(
                values.get_value((header_row, col)),
                formula_at(formulas, header_row, col),
            );
            (!header.is_empty()).then_some((col, header))
        })
        .collect();

    for row in (header_row + 1)..=last_row {
        if !is_matching_row(values, formulas, row, row_key) {
            continue;
        }
        for (col, header) in &headers {
            let value = cell_text(
                values.get_value((row, *col)),
                formula_at(formulas, row, *col),
            );
            row_data.insert(header.clone(), value);
        }
        break;
    }

    row_data
}

/// Only a literal string in the first column can key a record
fn is_matching_row(
    values: &Range<Data>,
    formulas: &Range<String>,
    row: u32,
    row_key: &str,
) -> bool {
    if formula_at(formulas, row, 0).is_some() {
        return false;
    }
    matches!(values.get_value((row, 0)), Some(Data::String(key)) if eq_ignore_case(key, row_key))
}

fn formula_at(formulas: &Range<String>, row: u32, col: u32) -> Option<&str> {
    formulas
        .get_value((row, col))
        .map(String::as_str)
        .filter(|formula| !formula.is_empty())
}

/// Renders a cell the way the test data expects it
///
/// Formula cells yield their formula text, numbers go through
/// [`format_numeric`] (`42` → `"42.0"`), booleans are `true`/`false`, and empty or error cells
/// are blank.
fn cell_text(cell: Option<&Data>, formula: Option<&str>) -> String {
    if let Some(formula) = formula {
        return formula.to_string();
    }
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(f)) => format_numeric(*f),
        Some(Data::Int(i)) => format_numeric(*i as f64),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => format_numeric(dt.as_f64()),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => s.clone(),
        Some(Data::Error(_)) | Some(Data::Empty) | None => String::new(),
    }
}

/// Decimal rendering of a numeric cell
///
/// Magnitudes in `[1e-3, 1e7)` are written in plain notation with at least
/// one fractional digit (`42.0`, `0.25`). Anything else uses scientific
/// notation with an upper-case `E` and a fractional mantissa (`9.844232432E9`,
/// `1.0E-4`). Non-finite values are `NaN`, `Infinity` and `-Infinity`.
pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            value.to_string()
        }
    } else {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => scientific,
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
