use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CellToComplexCoordsError {
    CellOutsideGrid { point: Point, grid_size: GridSize },
}

impl fmt::Display for CellToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutsideGrid { point, grid_size } => {
                write!(
                    f,
                    "cell (x: {}, y: {}) is outside the {}x{} grid",
                    point.x,
                    point.y,
                    grid_size.width(),
                    grid_size.height()
                )
            }
        }
    }
}

impl Error for CellToComplexCoordsError {}

/// Distance in the plane between two neighbouring cells along one axis.
///
/// An axis with a single cell has nothing to interpolate between, so its
/// step is zero and that cell sits on `start`.
#[must_use]
pub fn axis_step(start: f64, end: f64, cells: u32) -> f64 {
    if cells <= 1 {
        return 0.0;
    }

    (end - start) / (cells - 1) as f64
}

/// Precomputed mapping from grid cells to points of a region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellMapping {
    grid_size: GridSize,
    origin: Complex,
    re_step: f64,
    im_step: f64,
}

impl CellMapping {
    #[must_use]
    pub fn new(grid_size: GridSize, region: Region) -> Self {
        let origin = region.start();
        let end = region.end();

        Self {
            grid_size,
            origin,
            re_step: axis_step(origin.real, end.real, grid_size.width()),
            im_step: axis_step(origin.imag, end.imag, grid_size.height()),
        }
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    #[must_use]
    pub fn re_step(&self) -> f64 {
        self.re_step
    }

    #[must_use]
    pub fn im_step(&self) -> f64 {
        self.im_step
    }

    pub fn map(&self, point: Point) -> Result<Complex, CellToComplexCoordsError> {
        if !self.grid_size.contains_point(point) {
            return Err(CellToComplexCoordsError::CellOutsideGrid {
                point,
                grid_size: self.grid_size,
            });
        }

        Ok(Complex {
            real: self.origin.real + point.x as f64 * self.re_step,
            imag: self.origin.imag + point.y as f64 * self.im_step,
        })
    }
}

pub fn cell_to_complex_coords(
    point: Point,
    grid_size: GridSize,
    region: Region,
) -> Result<Complex, CellToComplexCoordsError> {
    CellMapping::new(grid_size, region).map(point)
}
