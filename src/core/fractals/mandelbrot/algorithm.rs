use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::util::cell_to_complex_coords::{CellMapping, CellToComplexCoordsError};

/// |z|² above this means |z| > 2, after which the orbit always diverges.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z <- z² + c`, starting from `z = 0`, until `|z|`
/// exceeds 2 or `max_iterations` is reached.
///
/// The escape test runs before every step, so the result is always in
/// `0..=max_iterations`, and equals `max_iterations` exactly when the
/// point did not escape. A cap of zero performs no steps and returns zero.
#[must_use]
pub fn escape_iterations(c_re: f64, c_im: f64, max_iterations: u32) -> u32 {
    let c = Complex::new(c_re, c_im);
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

/// Escape-time counts for the cells of one grid. The cap is taken as given;
/// [`RenderConfig::validate`] is where a zero cap is refused.
///
/// [`RenderConfig::validate`]: crate::core::fractals::mandelbrot::render_config::RenderConfig::validate
#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    mapping: CellMapping,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = CellToComplexCoordsError;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.mapping.map(cell)?;

        Ok(escape_iterations(c.real, c.imag, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(mapping: CellMapping, max_iterations: u32) -> Self {
        Self { mapping, max_iterations }
    }
}
