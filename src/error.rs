use thiserror::Error;

pub type DrawResult<T> = Result<T, DrawError>;

/// Failure of a single drawing surface call.
///
/// Validation runs before any pixel is written, so on `InvalidArgument`
/// and `OutOfBounds` the canvas is left exactly as it was.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("point ({x}, {y}) is outside of the {width}x{height} canvas")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// The canvas was updated but the sink could not take the pixels.
    #[error(transparent)]
    Sink(#[from] anyhow::Error),
}

impl DrawError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
