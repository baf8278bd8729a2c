use thiserror::Error;

pub type PartitionResult<T> = Result<T, PartitionError>;

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("invalid device pixel ratio: {ratio}")]
    InvalidPixelRatio { ratio: f64 },

    #[error("invalid container dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("plugin with id `{0}` is already registered")]
    DuplicatePlugin(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
