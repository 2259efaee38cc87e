use super::*;
use crate::net::types::{CellScalar, KeyMetric, KeyMetrics, TailRecord};
use crate::state::flash::Flash;
use crate::state::metrics::MetricDisplay;

fn signals() -> DashboardSignals {
    DashboardSignals {
        flash: RwSignal::new(FlashState::default()),
        metrics: RwSignal::new(MetricsState::default()),
        submission: RwSignal::new(SubmissionState::default()),
        tails: RwSignal::new(TailsState::default()),
        trend: RwSignal::new(TrendState::default()),
        ui: RwSignal::new(UiState::default()),
    }
}

fn tails_response() -> TailsResponse {
    TailsResponse {
        positive_tails: Some(vec![TailRecord {
            date: Some("2024-01-02".to_owned()),
            pnl_vector_name: Some("pnl_vector_1".to_owned()),
            macro_current: Some(CellScalar::Number(42.0)),
            ..TailRecord::default()
        }]),
        negative_tails: Some(vec![]),
    }
}

fn success_response() -> ProcessResponse {
    ProcessResponse {
        success: true,
        key_metrics: Some(KeyMetrics {
            lowest_dvar: Some(KeyMetric {
                value: Some(CellScalar::Number(-12.5)),
                date: Some("2024-01-02".to_owned()),
                pnl_vector: Some("Vec1".to_owned()),
            }),
            lowest_svar: None,
        }),
        ..ProcessResponse::default()
    }
}

fn current_flash(dash: DashboardSignals) -> Option<Flash> {
    dash.flash.get_untracked().current
}

// =============================================================
// Supersession: processing completion
// =============================================================

#[test]
fn superseded_processing_completion_is_dropped() {
    let dash = signals();
    let first = begin_submission(dash);
    let second = begin_submission(dash);

    settle_submission(dash, first, Ok(success_response()));

    // The stale completion left everything in the second submission's
    // reset state.
    assert_eq!(dash.metrics.get_untracked(), MetricsState::processing());
    assert!(current_flash(dash).is_none());
    assert!(dash.submission.get_untracked().is_current(second));
}

#[test]
fn current_processing_completion_applies() {
    let dash = signals();
    let token = begin_submission(dash);

    settle_submission(dash, token, Ok(success_response()));

    assert_eq!(dash.metrics.get_untracked().dvar.value_text(), "-12.5");
    assert_eq!(dash.metrics.get_untracked().svar, MetricDisplay::NoData);
    let flash = current_flash(dash).expect("banner");
    assert_eq!(flash.level, FlashLevel::Success);
}

// =============================================================
// Supersession: fetch completions
// =============================================================

#[test]
fn superseded_tails_completion_is_dropped() {
    let dash = signals();
    let first = begin_submission(dash);
    let _second = begin_submission(dash);

    settle_tails(dash, first, Ok(tails_response()));

    assert_eq!(dash.tails.get_untracked(), TailsState::default());
    assert!(current_flash(dash).is_none());
}

#[test]
fn current_tails_completion_applies() {
    let dash = signals();
    let token = begin_submission(dash);

    settle_tails(dash, token, Ok(tails_response()));

    assert_eq!(dash.tails.get_untracked().positive.len(), 1);
    assert!(dash.tails.get_untracked().negative.is_empty());
}

#[test]
fn superseded_tails_error_raises_no_flash() {
    let dash = signals();
    let first = begin_submission(dash);
    let _second = begin_submission(dash);

    settle_tails(dash, first, Err(ApiError::Transport("connection reset".to_owned())));

    assert!(current_flash(dash).is_none());
}

#[test]
fn superseded_trend_completion_is_dropped() {
    let dash = signals();
    let first = begin_submission(dash);
    let _second = begin_submission(dash);

    let resp: TrendPlotResponse = serde_json::from_value(serde_json::json!({
        "root_id": "p1001",
        "doc": {"roots": []}
    }))
    .expect("decode");
    settle_trend(dash, first, Ok(resp));

    assert_eq!(dash.trend.get_untracked(), TrendState::default());
    assert!(current_flash(dash).is_none());
}

#[test]
fn current_trend_completion_applies_and_warns_on_missing_doc() {
    let dash = signals();
    let token = begin_submission(dash);

    settle_trend(dash, token, Ok(TrendPlotResponse::default()));

    assert!(dash.trend.get_untracked().plot.is_none());
    let flash = current_flash(dash).expect("banner");
    assert_eq!(flash.level, FlashLevel::Warning);
}

// =============================================================
// Reset on submission
// =============================================================

#[test]
fn begin_submission_resets_visible_state() {
    let dash = signals();
    dash.tails.set(TailsState::from_response(tails_response()).expect("tails"));
    dash.flash
        .update(|f| f.set(FlashLevel::Success, "Data processed successfully!"));
    dash.ui.update(|u| u.debug_output = "{}".to_owned());

    let _ = begin_submission(dash);

    assert_eq!(dash.tails.get_untracked(), TailsState::default());
    assert!(current_flash(dash).is_none());
    assert!(dash.ui.get_untracked().debug_output.is_empty());
    assert_eq!(dash.metrics.get_untracked(), MetricsState::processing());
}
