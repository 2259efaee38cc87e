//! Network boundary: response types shared with the backend and the
//! REST helpers that fetch them.

pub mod api;
pub mod types;
