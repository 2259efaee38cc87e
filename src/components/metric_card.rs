//! Key-metric card showing one risk variant's lowest value.

use leptos::prelude::*;

use crate::state::metrics::MetricDisplay;

/// Card with a title, a large value label, and a detail line underneath.
#[component]
pub fn MetricCard(
    title: &'static str,
    value_id: &'static str,
    details_id: &'static str,
    #[prop(into)] display: Signal<MetricDisplay>,
) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-card__title">{title}</span>
            <span class="metric-card__value" id=value_id>
                {move || display.get().value_text()}
            </span>
            <span class="metric-card__details" id=details_id>
                {move || display.get().detail_text()}
            </span>
        </div>
    }
}
