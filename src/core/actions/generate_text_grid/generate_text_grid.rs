use crate::core::actions::generate_text_grid::ports::symbol_map::SymbolMap;
use crate::core::data::grid_size::GridSize;
use crate::core::data::text_grid::{TextGrid, TextGridError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GenerateTextGridError<E> {
    SymbolMap(E),
    TextGrid(TextGridError),
}

impl<E> fmt::Display for GenerateTextGridError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolMap(_) => write!(f, "symbol map error"),
            Self::TextGrid(_) => write!(f, "text grid error"),
        }
    }
}

impl<E: Error + 'static> Error for GenerateTextGridError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SymbolMap(err) => Some(err),
            Self::TextGrid(err) => Some(err),
        }
    }
}

impl<E> From<TextGridError> for GenerateTextGridError<E> {
    fn from(err: TextGridError) -> Self {
        Self::TextGrid(err)
    }
}

/// Maps row-major cell values to symbols and lays them out as rows.
pub fn generate_text_grid<T, SMap: SymbolMap<T = T>>(
    input: Vec<T>,
    mapper: &SMap,
    grid_size: GridSize,
) -> Result<TextGrid, GenerateTextGridError<SMap::Failure>> {
    let symbols = input
        .into_iter()
        .map(|value| mapper.map(value))
        .collect::<Result<Vec<char>, _>>()
        .map_err(GenerateTextGridError::SymbolMap)?;

    Ok(TextGrid::from_symbols(grid_size, symbols)?)
}
