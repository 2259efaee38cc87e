//! Dashboard page: the submission controller and its layout.
//!
//! The "Process Data" action resets all visible state, issues the
//! processing request, and on success triggers the two read fetches
//! (tails grids, trend plot) concurrently. A generation token guards
//! against overlapping submissions: a completion that has been
//! superseded by a newer click never touches the UI.

// The async completion path only exists in the browser build.
#![cfg_attr(not(feature = "hydrate"), allow(dead_code))]

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::debug_panel::DebugPanel;
use crate::components::flash_messages::FlashMessages;
use crate::components::metric_card::MetricCard;
use crate::components::tails_grid::TailsGrid;
use crate::components::trend_plot::TrendPlot;
use crate::net::types::{ApiError, ProcessResponse, TailsResponse, TrendPlotResponse, GENERIC_ERROR};
use crate::state::flash::{FlashLevel, FlashState};
use crate::state::metrics::MetricsState;
use crate::state::submission::{SubmissionState, SubmissionToken};
use crate::state::tails::TailsState;
use crate::state::trend::TrendState;
use crate::state::ui::UiState;

/// Every signal the submission flow touches, bundled so the async
/// completions can carry them out of the component tree.
#[derive(Clone, Copy)]
struct DashboardSignals {
    flash: RwSignal<FlashState>,
    metrics: RwSignal<MetricsState>,
    submission: RwSignal<SubmissionState>,
    tails: RwSignal<TailsState>,
    trend: RwSignal<TrendState>,
    ui: RwSignal<UiState>,
}

impl DashboardSignals {
    fn from_context() -> Self {
        Self {
            flash: expect_context(),
            metrics: expect_context(),
            submission: expect_context(),
            tails: expect_context(),
            trend: expect_context(),
            ui: expect_context(),
        }
    }
}

/// Risk tails dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dash = DashboardSignals::from_context();
    let metrics = dash.metrics;
    let tails = dash.tails;

    let on_process = move |_| {
        let token = begin_submission(dash);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::process_data().await;
            settle_submission(dash, token, result);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Risk Tails Dashboard"</h1>
                <div class="dashboard-page__actions">
                    <button id="processDataBtn" class="btn btn--primary" on:click=on_process>
                        "Process Data"
                    </button>
                    <UploadForm dash=dash/>
                </div>
            </header>

            <FlashMessages/>

            <div class="dashboard-page__metrics">
                <MetricCard
                    title="Lowest DVaR"
                    value_id="lowestDVarValue"
                    details_id="lowestDVarDetails"
                    display=Signal::derive(move || metrics.get().dvar)
                />
                <MetricCard
                    title="Lowest SVaR"
                    value_id="lowestSVarValue"
                    details_id="lowestSVarDetails"
                    display=Signal::derive(move || metrics.get().svar)
                />
            </div>

            <div class="dashboard-page__grids">
                <TailsGrid
                    container_id="topPositiveTailsGrid"
                    title="Top Positive Tails"
                    rows=Signal::derive(move || tails.get().positive)
                />
                <TailsGrid
                    container_id="topNegativeTailsGrid"
                    title="Top Negative Tails"
                    rows=Signal::derive(move || tails.get().negative)
                />
            </div>

            <TrendPlot/>
            <DebugPanel/>
        </div>
    }
}

/// Upload form posting one Excel workbook to `/process_excel`. Shares the
/// reset/settle flow with the fixed-path processing button.
#[component]
fn UploadForm(dash: DashboardSignals) -> impl IntoView {
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                dash.flash
                    .update(|f| f.set(FlashLevel::Warning, "Choose a workbook to upload first."));
                return;
            };
            let token = begin_submission(dash);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::process_excel(&file).await;
                settle_submission(dash, token, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file_input, dash);
        }
    };

    view! {
        <span class="upload-form">
            <input
                id="excelFileInput"
                class="upload-form__file"
                type="file"
                accept=".xlsx,.xls"
                node_ref=file_input
            />
            <button class="btn" on:click=on_upload>
                "Upload & Process"
            </button>
        </span>
    }
}

/// Reset all visible output and take a fresh submission token.
fn begin_submission(dash: DashboardSignals) -> SubmissionToken {
    dash.flash.update(FlashState::clear);
    dash.ui.update(|u| u.debug_output.clear());
    dash.metrics.set(MetricsState::processing());
    dash.tails.set(TailsState::default());
    dash.trend.set(TrendState::default());
    dash.submission
        .try_update(SubmissionState::begin)
        .unwrap_or_default()
}

/// Apply a processing completion, unless a newer submission superseded it.
fn settle_submission(
    dash: DashboardSignals,
    token: SubmissionToken,
    result: Result<ProcessResponse, ApiError>,
) {
    if !dash.submission.get_untracked().is_current(token) {
        #[cfg(feature = "hydrate")]
        log::debug!("dropping superseded processing result");
        return;
    }

    match result {
        Ok(resp) if resp.success => {
            capture_debug(dash, &resp);
            dash.flash
                .update(|f| f.set(FlashLevel::Success, "Data processed successfully!"));
            dash.metrics
                .set(MetricsState::from_key_metrics(resp.key_metrics.as_ref()));
            refresh_tails(dash, token);
            refresh_trend_plot(dash, token);
        }
        Ok(resp) => {
            capture_debug(dash, &resp);
            let msg = resp.error.as_deref().unwrap_or(GENERIC_ERROR);
            dash.flash
                .update(|f| f.set(FlashLevel::Error, format!("Error processing data: {msg}")));
            dash.metrics.set(MetricsState::errored());
        }
        Err(err) => {
            dash.flash
                .update(|f| f.set(FlashLevel::Error, format!("Error: {}", err.user_message(GENERIC_ERROR))));
            dash.metrics.set(MetricsState::errored());
        }
    }
}

fn capture_debug(dash: DashboardSignals, resp: &ProcessResponse) {
    let dump = serde_json::to_string_pretty(resp).unwrap_or_default();
    dash.ui.update(|u| u.debug_output = dump);
}

/// Fetch the tail grids for the submission holding `token`. Idempotent;
/// each accepted completion replaces the whole tails state.
fn refresh_tails(dash: DashboardSignals, token: SubmissionToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_top_bottom_tails().await;
        settle_tails(dash, token, result);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (dash, token);
}

/// Apply a tails completion, unless a newer submission superseded it.
fn settle_tails(
    dash: DashboardSignals,
    token: SubmissionToken,
    result: Result<TailsResponse, ApiError>,
) {
    if !dash.submission.get_untracked().is_current(token) {
        #[cfg(feature = "hydrate")]
        log::debug!("dropping superseded tails result");
        return;
    }

    match result {
        Ok(resp) => match TailsState::from_response(resp) {
            Some(state) => dash.tails.set(state),
            None => dash
                .flash
                .update(|f| f.set(FlashLevel::Warning, "No data for top/bottom tails.")),
        },
        Err(err) => dash.flash.update(|f| {
            f.set(
                FlashLevel::Error,
                format!("Error: {}", err.user_message("Failed to fetch top/bottom tails.")),
            );
        }),
    }
}

/// Fetch the trend plot payload for the submission holding `token`.
fn refresh_trend_plot(dash: DashboardSignals, token: SubmissionToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_dvar_trends_plot().await;
        settle_trend(dash, token, result);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (dash, token);
}

/// Apply a trend-plot completion after boundary validation, unless a
/// newer submission superseded it.
fn settle_trend(
    dash: DashboardSignals,
    token: SubmissionToken,
    result: Result<TrendPlotResponse, ApiError>,
) {
    if !dash.submission.get_untracked().is_current(token) {
        #[cfg(feature = "hydrate")]
        log::debug!("dropping superseded trend plot result");
        return;
    }

    match result {
        Ok(resp) => match resp.validated() {
            Some(plot) => dash.trend.set(TrendState { plot: Some(plot) }),
            None => dash
                .flash
                .update(|f| f.set(FlashLevel::Warning, "No data for DVaR trends plot.")),
        },
        Err(err) => dash.flash.update(|f| {
            f.set(
                FlashLevel::Error,
                format!("Error: {}", err.user_message("Failed to fetch DVaR trends plot.")),
            );
        }),
    }
}
