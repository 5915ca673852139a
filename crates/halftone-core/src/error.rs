use thiserror::Error;

#[derive(Error, Debug)]
pub enum HalftoneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid luma threshold {0}: must be between 0.0 and 1.0")]
    InvalidThreshold(f64),

    #[error("Invalid output scale {0}: must be at least 1 and keep the scaled canvas within u32")]
    InvalidScale(u32),

    #[error("Drawing sink error: {0}")]
    SinkState(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, HalftoneError>;
