use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonFiniteBound { start: Complex, end: Complex },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound { start, end } => {
                write!(
                    f,
                    "region bounds must be finite: re {}..{}, im {}..{}",
                    start.real, end.real, start.imag, end.imag
                )
            }
        }
    }
}

impl Error for RegionError {}

/// The rectangle of the complex plane sampled by the grid.
///
/// `start` maps to the top-left cell and `end` to the bottom-right cell.
/// The bounds are not required to be ordered; a reversed axis simply
/// produces a mirrored picture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    start: Complex,
    end: Complex,
}

impl Region {
    pub fn new(start: Complex, end: Complex) -> Result<Self, RegionError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RegionError::NonFiniteBound { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> Complex {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Complex {
        self.end
    }
}
