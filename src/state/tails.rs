#[cfg(test)]
#[path = "tails_test.rs"]
mod tails_test;

use crate::net::types::{TailRecord, TailsResponse};

/// Row data for the two tail grids. Each fetch replaces the whole value;
/// the default (both empty) is the cleared state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TailsState {
    pub positive: Vec<TailRecord>,
    pub negative: Vec<TailRecord>,
}

impl TailsState {
    /// Accept a response only when both sequences are present; anything
    /// else is a "no data" outcome for the caller to report.
    pub fn from_response(response: TailsResponse) -> Option<Self> {
        match (response.positive_tails, response.negative_tails) {
            (Some(positive), Some(negative)) => Some(Self { positive, negative }),
            _ => None,
        }
    }
}
