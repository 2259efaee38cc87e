#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// Generation counter guarding overlapping processing requests.
///
/// A double-click on "Process Data" issues a second request while the
/// first is still in flight. Each submission takes a token; a completion
/// callback whose token is no longer current has been superseded and must
/// not touch the UI. Requests themselves are never cancelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    generation: u64,
}

/// Token identifying one submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionToken(u64);

impl SubmissionState {
    /// Start a new submission, superseding any in-flight one.
    pub fn begin(&mut self) -> SubmissionToken {
        self.generation += 1;
        SubmissionToken(self.generation)
    }

    /// Whether a completion holding `token` is still the latest submission.
    pub fn is_current(&self, token: SubmissionToken) -> bool {
        token.0 == self.generation
    }
}
