//! Fixed 14-column schema for the tail grids and per-cell projection.
//!
//! Columns: Date, P&L Vector, then Current/Previous/Change for each of
//! Macro, FX, Rates and EM Macro. Missing fields project to empty cells.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::net::types::{CellScalar, TailRecord};
use crate::util::format::format_number;

/// How a column is filtered, formatted and styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// ISO date, displayed as `DD-MM-YYYY`, date-range filterable.
    Date,
    /// Free text, contains-filterable.
    Text,
    /// Numeric current/previous value, range filterable.
    Value,
    /// Numeric day-on-day change; also gets sign-based styling.
    Change,
}

/// One column of the fixed schema.
#[derive(Clone, Copy, Debug)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub header: &'static str,
    pub kind: ColumnKind,
}

/// The full schema, in display order.
pub const COLUMNS: [ColumnSpec; 14] = [
    ColumnSpec { field: "Date", header: "Date", kind: ColumnKind::Date },
    ColumnSpec { field: "Pnl_Vector_Name", header: "P&L Vector", kind: ColumnKind::Text },
    ColumnSpec { field: "Macro_DVaR_Value_Current", header: "Macro Current", kind: ColumnKind::Value },
    ColumnSpec { field: "Macro_DVaR_Value_Previous", header: "Macro Previous", kind: ColumnKind::Value },
    ColumnSpec { field: "Macro_DVaR_Change", header: "Macro Change", kind: ColumnKind::Change },
    ColumnSpec { field: "FX_DVaR_Value_Current", header: "FX Current", kind: ColumnKind::Value },
    ColumnSpec { field: "FX_DVaR_Value_Previous", header: "FX Previous", kind: ColumnKind::Value },
    ColumnSpec { field: "FX_DVaR_Change", header: "FX Change", kind: ColumnKind::Change },
    ColumnSpec { field: "Rates_DVaR_Value_Current", header: "Rates Current", kind: ColumnKind::Value },
    ColumnSpec { field: "Rates_DVaR_Value_Previous", header: "Rates Previous", kind: ColumnKind::Value },
    ColumnSpec { field: "Rates_DVaR_Change", header: "Rates Change", kind: ColumnKind::Change },
    ColumnSpec { field: "EM_Macro_DVaR_Value_Current", header: "EM Macro Current", kind: ColumnKind::Value },
    ColumnSpec { field: "EM_Macro_DVaR_Value_Previous", header: "EM Macro Previous", kind: ColumnKind::Value },
    ColumnSpec { field: "EM_Macro_DVaR_Change", header: "EM Macro Change", kind: ColumnKind::Change },
];

/// A projected cell value, ready for display, comparison and filtering.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Date(NaiveDate),
    Number(f64),
    /// Unparseable or non-numeric input, passed through unformatted.
    Text(String),
}

impl Cell {
    /// Display string for the cell. Numbers get two decimals with
    /// thousands grouping, dates render `DD-MM-YYYY`, text passes through.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Date(d) => d.format("%d-%m-%Y").to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Project one field of a record into a [`Cell`]. Out-of-range columns
/// and missing fields are empty, never an error.
pub fn cell(record: &TailRecord, column: usize) -> Cell {
    let Some(spec) = COLUMNS.get(column) else {
        return Cell::Empty;
    };
    match spec.kind {
        ColumnKind::Date => match record.date.as_deref() {
            None | Some("") => Cell::Empty,
            Some(raw) => {
                let date_part = raw.split('T').next().unwrap_or(raw);
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                    .map_or_else(|_| Cell::Text(raw.to_owned()), Cell::Date)
            }
        },
        ColumnKind::Text => match record.pnl_vector_name.as_deref() {
            None | Some("") => Cell::Empty,
            Some(name) => Cell::Text(name.to_owned()),
        },
        ColumnKind::Value | ColumnKind::Change => match scalar_field(record, column) {
            None => Cell::Empty,
            Some(CellScalar::Number(n)) => Cell::Number(*n),
            Some(CellScalar::Text(s)) => Cell::Text(s.clone()),
        },
    }
}

fn scalar_field(record: &TailRecord, column: usize) -> Option<&CellScalar> {
    match column {
        2 => record.macro_current.as_ref(),
        3 => record.macro_previous.as_ref(),
        4 => record.macro_change.as_ref(),
        5 => record.fx_current.as_ref(),
        6 => record.fx_previous.as_ref(),
        7 => record.fx_change.as_ref(),
        8 => record.rates_current.as_ref(),
        9 => record.rates_previous.as_ref(),
        10 => record.rates_change.as_ref(),
        11 => record.em_macro_current.as_ref(),
        12 => record.em_macro_previous.as_ref(),
        13 => record.em_macro_change.as_ref(),
        _ => None,
    }
}

/// CSS class for sign-based change styling. Zero and non-numeric cells
/// get no highlight.
pub fn sign_class(cell: &Cell) -> Option<&'static str> {
    match cell.as_number() {
        Some(n) if n < 0.0 => Some("negative-change"),
        Some(n) if n > 0.0 => Some("positive-change"),
        _ => None,
    }
}

/// Total order used for sorting: values first, empty cells last; mixed
/// kinds order by kind so a stray text cell cannot poison a numeric sort.
pub fn compare(a: &Cell, b: &Cell) -> Ordering {
    match (a, b) {
        (Cell::Empty, Cell::Empty) => Ordering::Equal,
        (Cell::Empty, _) => Ordering::Greater,
        (_, Cell::Empty) => Ordering::Less,
        (Cell::Date(x), Cell::Date(y)) => x.cmp(y),
        (Cell::Number(x), Cell::Number(y)) => x.total_cmp(y),
        (Cell::Text(x), Cell::Text(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(cell: &Cell) -> u8 {
    match cell {
        Cell::Date(_) => 0,
        Cell::Number(_) => 1,
        Cell::Text(_) => 2,
        Cell::Empty => 3,
    }
}
