#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// Severity of the flash banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
    Error,
}

/// One banner message.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

/// The flash message area. At most one banner is visible; each action
/// replaces it wholesale, so the last completion wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashState {
    pub current: Option<Flash>,
}

impl FlashState {
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn set(&mut self, level: FlashLevel, text: impl Into<String>) {
        self.current = Some(Flash { level, text: text.into() });
    }
}
