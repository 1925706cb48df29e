use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Evaluates every cell on rayon's work-stealing pool.
///
/// Results come back in the same row-major order as [`generate_fractal`],
/// so the two are interchangeable.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_rayon<Alg>(
    grid_size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let cells: Vec<Point> = grid_size.cells().collect();

    cells
        .into_par_iter()
        .map(|cell| algorithm.compute(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
            Ok(cell.x as u64 * 1000 + cell.y as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let grid_size = GridSize::new(11, 9).unwrap();

        let sequential_results = generate_fractal(grid_size, &algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(grid_size, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {};
        let grid_size = GridSize::new(4, 5).unwrap();

        let result = generate_fractal_rayon(grid_size, &algorithm);

        assert!(result.is_err());
    }

    #[test]
    fn test_rayon_with_single_cell() {
        let algorithm = StubSuccessAlgorithm {};
        let grid_size = GridSize::new(1, 1).unwrap();

        let rayon_results = generate_fractal_rayon(grid_size, &algorithm).unwrap();

        assert_eq!(rayon_results, vec![0]);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = StubSuccessAlgorithm {};
        let grid_size = GridSize::new(101, 101).unwrap();

        let sequential_results = generate_fractal(grid_size, &algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(grid_size, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }
}
