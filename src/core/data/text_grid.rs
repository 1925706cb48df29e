use crate::core::data::grid_size::GridSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextGridError {
    BoundsMismatch {
        grid_size: u64,
        symbol_count: usize,
    },
}

impl fmt::Display for TextGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                symbol_count,
            } => {
                write!(
                    f,
                    "grid size {} does not match symbol count {}",
                    grid_size, symbol_count
                )
            }
        }
    }
}

impl Error for TextGridError {}

/// Rendered rows of symbols, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    grid_size: GridSize,
    rows: Vec<String>,
}

impl TextGrid {
    /// Splits a row-major symbol sequence into `height` rows of `width`
    /// symbols each.
    pub fn from_symbols(grid_size: GridSize, symbols: Vec<char>) -> Result<Self, TextGridError> {
        if grid_size.size() != symbols.len() as u64 {
            return Err(TextGridError::BoundsMismatch {
                grid_size: grid_size.size(),
                symbol_count: symbols.len(),
            });
        }

        let rows = symbols
            .chunks(grid_size.width() as usize)
            .map(|row| row.iter().collect())
            .collect();

        Ok(Self { grid_size, rows })
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Rows joined with `\n`, without a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
