//! Validated grid dimensions.

use core::fmt;

use crate::error::GridError;

/// Height and width of a grid, both at least 1.
///
/// Row `i` of a grid holds the base `a = height - i`, column `j` holds the
/// modulus `q = j + 1`.
///
/// # Example
///
/// ```
/// use fermat_grid::Dimensions;
///
/// let dims = Dimensions::new(1080, 1080).unwrap();
/// assert_eq!(dims.cells(), 1080 * 1080);
///
/// assert!(Dimensions::new(0, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DimensionsRepr"))]
pub struct Dimensions {
    height: usize,
    width: usize,
}

impl Dimensions {
    /// Create dimensions, rejecting a zero height or width.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidArgument` naming the offending dimension,
    /// or `GridError::TooLarge` when the cell count overflows `usize`.
    pub const fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 {
            return Err(GridError::InvalidArgument {
                name: "height",
                value: height,
            });
        }
        if width == 0 {
            return Err(GridError::InvalidArgument {
                name: "width",
                value: width,
            });
        }
        if height.checked_mul(width).is_none() {
            return Err(GridError::TooLarge { height, width });
        }
        Ok(Self { height, width })
    }

    /// Number of rows (the largest base `a`).
    pub const fn height(self) -> usize {
        self.height
    }

    /// Number of columns (the largest modulus `q`).
    pub const fn width(self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub const fn cells(self) -> usize {
        self.height * self.width
    }

    /// Split a row-major index into `(row, col)`.
    #[inline]
    pub const fn split(self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DimensionsRepr {
    height: usize,
    width: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<DimensionsRepr> for Dimensions {
    type Error = GridError;

    fn try_from(repr: DimensionsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.height, repr.width)
    }
}
