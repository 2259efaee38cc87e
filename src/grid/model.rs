//! Sort/filter projection over a set of tail records.
//!
//! A [`GridModel`] is rebuilt from scratch on every render: rows in,
//! visible row order out. There is no retained widget state, so
//! re-rendering the same rows into the same container is idempotent and
//! an empty row set is a valid clear.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::columns::{self, Cell};
use crate::net::types::TailRecord;

/// Sort direction for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort state of a grid: which column, which way. Clicking a header
/// cycles ascending, descending, unsorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState(pub Option<(usize, SortDirection)>);

impl SortState {
    pub fn cycle(self, column: usize) -> Self {
        Self(match self.0 {
            Some((col, SortDirection::Ascending)) if col == column => {
                Some((column, SortDirection::Descending))
            }
            Some((col, SortDirection::Descending)) if col == column => None,
            _ => Some((column, SortDirection::Ascending)),
        })
    }

    pub fn direction_for(self, column: usize) -> Option<SortDirection> {
        self.0.and_then(|(col, dir)| (col == column).then_some(dir))
    }
}

/// A per-column filter. Numeric columns take a range, the date column a
/// date range, text columns a case-insensitive contains match.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnFilter {
    NumberRange { min: Option<f64>, max: Option<f64> },
    DateRange { from: Option<NaiveDate>, to: Option<NaiveDate> },
    Contains(String),
}

impl ColumnFilter {
    /// Whether the filter imposes any constraint at all.
    pub fn is_active(&self) -> bool {
        match self {
            Self::NumberRange { min, max } => min.is_some() || max.is_some(),
            Self::DateRange { from, to } => from.is_some() || to.is_some(),
            Self::Contains(needle) => !needle.is_empty(),
        }
    }

    fn matches(&self, cell: &Cell) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Self::NumberRange { min, max } => cell.as_number().is_some_and(|n| {
                min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi)
            }),
            Self::DateRange { from, to } => cell.as_date().is_some_and(|d| {
                from.is_none_or(|lo| d >= lo) && to.is_none_or(|hi| d <= hi)
            }),
            Self::Contains(needle) => cell
                .display()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Stateless projection of rows through filters and sort.
#[derive(Clone, Debug, Default)]
pub struct GridModel {
    rows: Vec<TailRecord>,
    sort: SortState,
    filters: BTreeMap<usize, ColumnFilter>,
}

impl GridModel {
    pub fn new(rows: Vec<TailRecord>) -> Self {
        Self { rows, ..Self::default() }
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_filters(mut self, filters: BTreeMap<usize, ColumnFilter>) -> Self {
        self.filters = filters;
        self
    }

    /// Rows to display, in order: filters apply first, then a stable sort.
    pub fn visible_rows(&self) -> Vec<TailRecord> {
        let mut visible: Vec<&TailRecord> = self
            .rows
            .iter()
            .filter(|record| {
                self.filters
                    .iter()
                    .all(|(&col, filter)| filter.matches(&columns::cell(record, col)))
            })
            .collect();

        if let Some((col, dir)) = self.sort.0 {
            visible.sort_by(|a, b| {
                let ca = columns::cell(a, col);
                let cb = columns::cell(b, col);
                // Empty cells pin to the bottom in either direction.
                match (ca == Cell::Empty, cb == Cell::Empty) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => {
                        let ord = columns::compare(&ca, &cb);
                        match dir {
                            SortDirection::Ascending => ord,
                            SortDirection::Descending => ord.reverse(),
                        }
                    }
                }
            });
        }

        visible.into_iter().cloned().collect()
    }
}
