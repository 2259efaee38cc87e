use super::*;
use crate::net::types::CellScalar;

fn row(date: &str, name: &str, macro_current: f64) -> TailRecord {
    TailRecord {
        date: Some(date.to_owned()),
        pnl_vector_name: Some(name.to_owned()),
        macro_current: Some(CellScalar::Number(macro_current)),
        ..TailRecord::default()
    }
}

fn rows() -> Vec<TailRecord> {
    vec![
        row("2024-01-02", "pnl_vector_1", 50.0),
        row("2024-01-03", "pnl_vector_2", -150.2),
        row("2024-01-04", "pnl_vector_3", 1200.0),
    ]
}

// =============================================================
// Projection basics
// =============================================================

#[test]
fn unfiltered_unsorted_preserves_rows_and_order() {
    let model = GridModel::new(rows());
    let visible = model.visible_rows();
    // Rendered row count equals the input count.
    assert_eq!(visible.len(), rows().len());
    assert_eq!(visible, rows());
}

#[test]
fn empty_rows_is_a_valid_clear() {
    let model = GridModel::new(Vec::new());
    assert!(model.visible_rows().is_empty());
}

#[test]
fn projection_is_idempotent() {
    let model = GridModel::new(rows()).with_sort(SortState::default().cycle(2));
    assert_eq!(model.visible_rows(), model.visible_rows());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_cycle_ascending_descending_none() {
    let s0 = SortState::default();
    let s1 = s0.cycle(2);
    assert_eq!(s1.direction_for(2), Some(SortDirection::Ascending));
    let s2 = s1.cycle(2);
    assert_eq!(s2.direction_for(2), Some(SortDirection::Descending));
    let s3 = s2.cycle(2);
    assert_eq!(s3.direction_for(2), None);
    // Switching column resets to ascending.
    assert_eq!(s1.cycle(3).direction_for(3), Some(SortDirection::Ascending));
}

#[test]
fn numeric_sort_ascending() {
    let model = GridModel::new(rows()).with_sort(SortState(Some((2, SortDirection::Ascending))));
    let names: Vec<_> = model
        .visible_rows()
        .into_iter()
        .map(|r| r.pnl_vector_name.unwrap_or_default())
        .collect();
    assert_eq!(names, ["pnl_vector_2", "pnl_vector_1", "pnl_vector_3"]);
}

#[test]
fn numeric_sort_descending_puts_missing_last() {
    let mut input = rows();
    input.push(TailRecord {
        pnl_vector_name: Some("pnl_vector_4".to_owned()),
        ..TailRecord::default()
    });
    let model = GridModel::new(input).with_sort(SortState(Some((2, SortDirection::Descending))));
    let names: Vec<_> = model
        .visible_rows()
        .into_iter()
        .map(|r| r.pnl_vector_name.unwrap_or_default())
        .collect();
    // Empty cells stay last even when descending.
    assert_eq!(names, ["pnl_vector_3", "pnl_vector_1", "pnl_vector_2", "pnl_vector_4"]);
}

#[test]
fn date_sort_ascending() {
    let model = GridModel::new(rows()).with_sort(SortState(Some((0, SortDirection::Ascending))));
    let dates: Vec<_> = model
        .visible_rows()
        .into_iter()
        .map(|r| r.date.unwrap_or_default())
        .collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-03", "2024-01-04"]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn number_range_filter() {
    let mut filters = BTreeMap::new();
    filters.insert(2, ColumnFilter::NumberRange { min: Some(0.0), max: Some(100.0) });
    let model = GridModel::new(rows()).with_filters(filters);
    let visible = model.visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].pnl_vector_name.as_deref(), Some("pnl_vector_1"));
}

#[test]
fn number_filter_excludes_rows_without_a_number() {
    let mut input = rows();
    input.push(TailRecord::default());
    let mut filters = BTreeMap::new();
    filters.insert(2, ColumnFilter::NumberRange { min: Some(-1000.0), max: None });
    let model = GridModel::new(input).with_filters(filters);
    assert_eq!(model.visible_rows().len(), 3);
}

#[test]
fn date_range_filter() {
    let mut filters = BTreeMap::new();
    filters.insert(
        0,
        ColumnFilter::DateRange {
            from: chrono::NaiveDate::from_ymd_opt(2024, 1, 3),
            to: None,
        },
    );
    let model = GridModel::new(rows()).with_filters(filters);
    assert_eq!(model.visible_rows().len(), 2);
}

#[test]
fn contains_filter_is_case_insensitive() {
    let mut filters = BTreeMap::new();
    filters.insert(1, ColumnFilter::Contains("VECTOR_2".to_owned()));
    let model = GridModel::new(rows()).with_filters(filters);
    let visible = model.visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].pnl_vector_name.as_deref(), Some("pnl_vector_2"));
}

#[test]
fn inactive_filter_matches_everything() {
    let mut filters = BTreeMap::new();
    filters.insert(2, ColumnFilter::NumberRange { min: None, max: None });
    filters.insert(1, ColumnFilter::Contains(String::new()));
    let model = GridModel::new(rows()).with_filters(filters);
    assert_eq!(model.visible_rows().len(), 3);
}

#[test]
fn filters_apply_before_sort() {
    let mut filters = BTreeMap::new();
    filters.insert(2, ColumnFilter::NumberRange { min: Some(-1000.0), max: Some(100.0) });
    let model = GridModel::new(rows())
        .with_filters(filters)
        .with_sort(SortState(Some((2, SortDirection::Descending))));
    let names: Vec<_> = model
        .visible_rows()
        .into_iter()
        .map(|r| r.pnl_vector_name.unwrap_or_default())
        .collect();
    assert_eq!(names, ["pnl_vector_1", "pnl_vector_2"]);
}
