use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout engine rejected the view tree: {0}")]
    Engine(String),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(e: taffy::TaffyError) -> Self {
        LayoutError::Engine(e.to_string())
    }
}
