//! Small shared helpers: display formatting and the Bokeh embed bridge.

pub mod bokeh;
pub mod format;
