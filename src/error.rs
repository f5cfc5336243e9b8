use core::fmt;

#[cfg(feature = "render")]
use alloc::string::String;

#[cfg(feature = "render")]
use crate::structures::dims::Dimensions;

/// Error type for grid construction and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was zero.
    InvalidArgument { name: &'static str, value: usize },
    /// The cell count of a grid does not fit the target integer type.
    TooLarge { height: usize, width: usize },
    /// A layer's shape does not match the canvas it is drawn on.
    #[cfg(feature = "render")]
    ShapeMismatch { expected: Dimensions, got: Dimensions },
    /// The rendering backend failed to encode or write its output.
    #[cfg(feature = "render")]
    Render(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidArgument { name, value } => {
                write!(f, "invalid argument: {} must be positive, got {}", name, value)
            }
            GridError::TooLarge { height, width } => {
                write!(f, "grid too large: {}x{} cells overflow", height, width)
            }
            #[cfg(feature = "render")]
            GridError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {}, got {}", expected, got)
            }
            #[cfg(feature = "render")]
            GridError::Render(msg) => write!(f, "render failed: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
