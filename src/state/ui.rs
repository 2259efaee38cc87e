#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Debug-panel state: checkbox visibility plus the captured raw response
/// shown inside the panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub debug_visible: bool,
    pub debug_output: String,
}
