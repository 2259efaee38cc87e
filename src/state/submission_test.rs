use super::*;

#[test]
fn first_submission_is_current() {
    let mut state = SubmissionState::default();
    let token = state.begin();
    assert!(state.is_current(token));
}

#[test]
fn new_submission_supersedes_prior_token() {
    let mut state = SubmissionState::default();
    let first = state.begin();
    let second = state.begin();
    assert!(!state.is_current(first));
    assert!(state.is_current(second));
}

#[test]
fn default_token_is_never_current() {
    let mut state = SubmissionState::default();
    let _ = state.begin();
    assert!(!state.is_current(SubmissionToken::default()));
}
