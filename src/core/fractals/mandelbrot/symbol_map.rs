use crate::core::actions::generate_text_grid::ports::symbol_map::SymbolMap;
use crate::core::gradients::gradient::{map_to_symbol, Gradient};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SymbolMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for SymbolMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for SymbolMapError {}

/// Escape-time counts to gradient symbols for a fixed iteration cap.
#[derive(Debug, Clone)]
pub struct MandelbrotSymbolMap {
    gradient: Gradient,
    max_iterations: u32,
}

impl SymbolMap for MandelbrotSymbolMap {
    type T = u32;
    type Failure = SymbolMapError;

    fn map(&self, iterations: u32) -> Result<char, SymbolMapError> {
        if iterations > self.max_iterations {
            return Err(SymbolMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        Ok(map_to_symbol(iterations, self.max_iterations, &self.gradient))
    }
}

impl MandelbrotSymbolMap {
    #[must_use]
    pub fn new(gradient: Gradient, max_iterations: u32) -> Self {
        Self {
            gradient,
            max_iterations,
        }
    }

    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gradients::{factory::gradient_factory, kinds::GradientKinds};

    fn classic_map(max_iterations: u32) -> MandelbrotSymbolMap {
        MandelbrotSymbolMap::new(gradient_factory(GradientKinds::Classic), max_iterations)
    }

    #[test]
    fn test_map_returns_densest_symbol_at_max_iterations() {
        assert_eq!(classic_map(100).map(100), Ok('@'));
    }

    #[test]
    fn test_map_returns_blank_at_zero_iterations() {
        assert_eq!(classic_map(100).map(0), Ok(' '));
    }

    #[test]
    fn test_map_midpoint() {
        assert_eq!(classic_map(100).map(50), Ok('='));
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let result = classic_map(100).map(101);

        assert_eq!(
            result,
            Err(SymbolMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }

    #[test]
    fn test_map_uses_selected_gradient() {
        let mapper = MandelbrotSymbolMap::new(gradient_factory(GradientKinds::Blocks), 10);

        assert_eq!(mapper.map(10), Ok('█'));
        assert_eq!(mapper.map(0), Ok(' '));
        assert_eq!(mapper.gradient().len(), 5);
    }
}
