use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    InvalidDimension { width: u32, height: u32 },
    TooLarge { width: u32, height: u32, max_cells: u64 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "grid must be at least 1x1 cells, got {}x{}",
                    width, height
                )
            }
            Self::TooLarge {
                width,
                height,
                max_cells,
            } => {
                write!(
                    f,
                    "grid of {}x{} cells exceeds the limit of {} cells",
                    width, height, max_cells
                )
            }
        }
    }
}

impl Error for GridSizeError {}

/// Upper bound on `width * height`, so every buffer of one render fits in
/// memory.
pub const MAX_CELLS: u64 = 1 << 24;

/// Dimensions of the output grid in cells.
///
/// A single row or column is allowed: the coordinate mapping treats that
/// axis as having a zero step instead of dividing by `dimension - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width < 1 || height < 1 {
            return Err(GridSizeError::InvalidDimension { width, height });
        }

        if width as u64 * height as u64 > MAX_CELLS {
            return Err(GridSizeError::TooLarge {
                width,
                height,
                max_cells: MAX_CELLS,
            });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Every cell in row-major order: top row first, left to right.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
