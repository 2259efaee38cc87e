//! Tabular tail view with sortable headers and per-column floating
//! filters.
//!
//! The grid is a pure projection: row data comes in as a signal, sort and
//! filter state live in local signals, and every render rebuilds the
//! visible rows through [`GridModel`]. Passing an empty row vec clears
//! the grid; re-rendering the same rows is idempotent.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::grid::columns::{self, ColumnKind, COLUMNS};
use crate::grid::model::{ColumnFilter, GridModel, SortDirection, SortState};
use crate::net::types::TailRecord;

/// One tail grid bound to a named container.
#[component]
pub fn TailsGrid(
    container_id: &'static str,
    title: &'static str,
    #[prop(into)] rows: Signal<Vec<TailRecord>>,
) -> impl IntoView {
    let sort = RwSignal::new(SortState::default());
    let filters = RwSignal::new(BTreeMap::<usize, ColumnFilter>::new());

    let header_cells = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let header = spec.header;
            let indicator = move || match sort.get().direction_for(i) {
                Some(SortDirection::Ascending) => " \u{25b2}",
                Some(SortDirection::Descending) => " \u{25bc}",
                None => "",
            };
            view! {
                <th class="tails-grid__header">
                    <button
                        class="tails-grid__sort"
                        on:click=move |_| sort.update(|s| *s = s.cycle(i))
                    >
                        {header}
                        {indicator}
                    </button>
                </th>
            }
        })
        .collect::<Vec<_>>();

    let filter_cells = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, spec)| match spec.kind {
            ColumnKind::Text => view! {
                <th class="tails-grid__filter">
                    <input
                        type="text"
                        placeholder="contains"
                        on:input=move |ev| set_contains(filters, i, &event_target_value(&ev))
                    />
                </th>
            }
            .into_any(),
            ColumnKind::Date => view! {
                <th class="tails-grid__filter">
                    <input
                        type="date"
                        on:change=move |ev| set_date_bound(filters, i, Bound::Lower, &event_target_value(&ev))
                    />
                    <input
                        type="date"
                        on:change=move |ev| set_date_bound(filters, i, Bound::Upper, &event_target_value(&ev))
                    />
                </th>
            }
            .into_any(),
            ColumnKind::Value | ColumnKind::Change => view! {
                <th class="tails-grid__filter">
                    <input
                        type="number"
                        placeholder="min"
                        on:input=move |ev| set_number_bound(filters, i, Bound::Lower, &event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="max"
                        on:input=move |ev| set_number_bound(filters, i, Bound::Upper, &event_target_value(&ev))
                    />
                </th>
            }
            .into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="tails-grid" id=container_id>
            <h3 class="tails-grid__title">{title}</h3>
            <table class="tails-grid__table">
                <thead>
                    <tr>{header_cells}</tr>
                    <tr>{filter_cells}</tr>
                </thead>
                <tbody>
                    {move || {
                        let model = GridModel::new(rows.get())
                            .with_sort(sort.get())
                            .with_filters(filters.get());
                        model
                            .visible_rows()
                            .into_iter()
                            .map(render_row)
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(record: TailRecord) -> impl IntoView {
    let cells = (0..COLUMNS.len())
        .map(|i| {
            let cell = columns::cell(&record, i);
            let class = if COLUMNS[i].kind == ColumnKind::Change {
                columns::sign_class(&cell)
            } else {
                None
            };
            view! { <td class=class>{cell.display()}</td> }
        })
        .collect::<Vec<_>>();
    view! { <tr class="tails-grid__row">{cells}</tr> }
}

/// Which end of a range filter an input edits.
#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

fn set_contains(filters: RwSignal<BTreeMap<usize, ColumnFilter>>, column: usize, raw: &str) {
    let needle = raw.trim().to_owned();
    filters.update(|map| {
        if needle.is_empty() {
            map.remove(&column);
        } else {
            map.insert(column, ColumnFilter::Contains(needle));
        }
    });
}

fn set_number_bound(
    filters: RwSignal<BTreeMap<usize, ColumnFilter>>,
    column: usize,
    bound: Bound,
    raw: &str,
) {
    let parsed = raw.trim().parse::<f64>().ok();
    filters.update(|map| {
        let entry = map
            .entry(column)
            .or_insert(ColumnFilter::NumberRange { min: None, max: None });
        if let ColumnFilter::NumberRange { min, max } = entry {
            match bound {
                Bound::Lower => *min = parsed,
                Bound::Upper => *max = parsed,
            }
        }
        prune_inactive(map, column);
    });
}

fn set_date_bound(
    filters: RwSignal<BTreeMap<usize, ColumnFilter>>,
    column: usize,
    bound: Bound,
    raw: &str,
) {
    let parsed = chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
    filters.update(|map| {
        let entry = map
            .entry(column)
            .or_insert(ColumnFilter::DateRange { from: None, to: None });
        if let ColumnFilter::DateRange { from, to } = entry {
            match bound {
                Bound::Lower => *from = parsed,
                Bound::Upper => *to = parsed,
            }
        }
        prune_inactive(map, column);
    });
}

fn prune_inactive(map: &mut BTreeMap<usize, ColumnFilter>, column: usize) {
    if map.get(&column).is_some_and(|f| !f.is_active()) {
        map.remove(&column);
    }
}
