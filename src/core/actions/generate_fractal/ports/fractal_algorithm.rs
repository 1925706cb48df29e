use crate::core::data::point::Point;
use std::error::Error;

/// Per-cell computation driven by the `generate_fractal*` functions.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure>;
}
