//! DVaR trend chart container, fed by the Bokeh embed bridge.

use leptos::prelude::*;

use crate::state::trend::TrendState;
use crate::util::bokeh;

/// Fixed element id the backend's plot payload targets.
pub const TREND_PLOT_CONTAINER: &str = "dvar_trends_plot_div";

/// Chart container. Whenever the trend state changes, the container is
/// cleared and the new payload (if any) embedded, so a re-fetch fully
/// replaces the prior chart instance.
#[component]
pub fn TrendPlot() -> impl IntoView {
    let trend = expect_context::<RwSignal<TrendState>>();

    Effect::new(move || {
        let state = trend.get();
        bokeh::clear_container(TREND_PLOT_CONTAINER);
        if let Some(plot) = state.plot {
            bokeh::embed_item(&plot, TREND_PLOT_CONTAINER);
        }
    });

    view! {
        <div class="trend-plot">
            <h3 class="trend-plot__title">"Macro DVaR Trend"</h3>
            <div id="dvar_trends_plot_div" class="trend-plot__container"></div>
        </div>
    }
}
