use crate::net::types::TrendPlot;

/// The current chart payload, if any. `None` clears the chart container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendState {
    pub plot: Option<TrendPlot>,
}
