use crate::core::actions::generate_text_grid::generate_text_grid::GenerateTextGridError;
use crate::core::fractals::mandelbrot::render_config::ConfigError;
use crate::core::fractals::mandelbrot::symbol_map::SymbolMapError;
use crate::core::util::cell_to_complex_coords::CellToComplexCoordsError;
use std::error::Error;
use std::fmt;

/// Everything that can stop a render. Configuration problems are reported
/// before any cell is evaluated.
///
/// `Display` only names the stage that failed; the detail is in `source()`.
#[derive(Debug)]
pub enum RenderError {
    Config(ConfigError),
    CellToComplexCoords(CellToComplexCoordsError),
    GenerateTextGrid(GenerateTextGridError<SymbolMapError>),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(_) => write!(f, "invalid render configuration"),
            Self::CellToComplexCoords(_) => write!(f, "coordinate mapping failed"),
            Self::GenerateTextGrid(_) => write!(f, "could not assemble output"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::CellToComplexCoords(err) => Some(err),
            Self::GenerateTextGrid(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<CellToComplexCoordsError> for RenderError {
    fn from(err: CellToComplexCoordsError) -> Self {
        Self::CellToComplexCoords(err)
    }
}

impl From<GenerateTextGridError<SymbolMapError>> for RenderError {
    fn from(err: GenerateTextGridError<SymbolMapError>) -> Self {
        Self::GenerateTextGrid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSizeError;

    fn error_chain(err: &dyn Error) -> Vec<String> {
        let mut messages = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }
        messages
    }

    #[test]
    fn test_chain_states_each_message_once() {
        let err = RenderError::from(ConfigError::GridSize(GridSizeError::InvalidDimension {
            width: 0,
            height: 24,
        }));

        assert_eq!(
            error_chain(&err),
            vec![
                "invalid render configuration",
                "invalid dimensions",
                "grid must be at least 1x1 cells, got 0x24",
            ]
        );
    }

    #[test]
    fn test_zero_cap_chain_ends_at_config_error() {
        let err = RenderError::from(ConfigError::ZeroMaxIterations);

        assert_eq!(
            error_chain(&err),
            vec![
                "invalid render configuration",
                "maximum iterations must be greater than zero",
            ]
        );
    }
}
