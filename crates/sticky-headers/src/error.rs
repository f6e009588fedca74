use sticky_core::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecorationError {
    /// Headers only make sense along a single scroll axis.
    #[error("header decorations need a linear layout, got {kind}")]
    UnsupportedLayout { kind: &'static str },
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
