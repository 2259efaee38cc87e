//! Tail-grid logic: the fixed column schema and the sort/filter
//! projection. Pure data in, row order out — the `TailsGrid` component
//! only renders what [`model::GridModel`] projects.

pub mod columns;
pub mod model;
