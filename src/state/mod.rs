//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The dashboard's visible state is explicit data, split by domain
//! (`metrics`, `flash`, `tails`, ...) and provided as `RwSignal` contexts.
//! Rendering is a pure projection of these values; event handlers are the
//! only place they change.

pub mod flash;
pub mod metrics;
pub mod submission;
pub mod tails;
pub mod trend;
pub mod ui;
