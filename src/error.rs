use thiserror::Error;

pub type WheelResult<T> = Result<T, WheelError>;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid wheel geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid level {value}: must be in [1, 10]")]
    InvalidLevel { value: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
