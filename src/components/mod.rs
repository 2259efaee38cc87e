//! Presentational components for the dashboard page.

pub mod debug_panel;
pub mod flash_messages;
pub mod metric_card;
pub mod tails_grid;
pub mod trend_plot;
