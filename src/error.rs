use thiserror::Error;

pub type OverlayResult<T> = Result<T, OverlayError>;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid label template: {0}")]
    InvalidTemplate(String),

    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error("invalid marker style: {0}")]
    InvalidStyle(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("persistence failed: {0}")]
    Persistence(String),
}
