use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;

/// Evaluates every cell in row-major order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid_size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    grid_size
        .cells()
        .map(|cell| algorithm.compute(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubCoordsAlgorithm {}

    impl FractalAlgorithm for StubCoordsAlgorithm {
        type Success = (u32, u32);
        type Failure = StubError;

        fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
            Ok((cell.x, cell.y))
        }
    }

    struct StubFailOnCellAlgorithm {
        failing: Point,
    }

    impl FractalAlgorithm for StubFailOnCellAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
            if cell == self.failing {
                return Err(StubError {});
            }
            Ok(0)
        }
    }

    #[test]
    fn test_generate_fractal_visits_rows_top_to_bottom() {
        let grid_size = GridSize::new(2, 3).unwrap();

        let result = generate_fractal(grid_size, &StubCoordsAlgorithm {}).unwrap();

        assert_eq!(result, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_generate_fractal_covers_whole_grid() {
        let grid_size = GridSize::new(80, 24).unwrap();

        let result = generate_fractal(grid_size, &StubCoordsAlgorithm {}).unwrap();

        assert_eq!(result.len(), 80 * 24);
        assert_eq!(result.last(), Some(&(79, 23)));
    }

    #[test]
    fn test_generate_fractal_propagates_algorithm_failure() {
        let grid_size = GridSize::new(4, 4).unwrap();
        let algorithm = StubFailOnCellAlgorithm {
            failing: Point { x: 2, y: 3 },
        };

        let result = generate_fractal(grid_size, &algorithm);

        assert_eq!(result, Err(StubError {}));
    }
}
