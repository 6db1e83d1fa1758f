use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("rendering backend failure: {0}")]
    Backend(String),
}
