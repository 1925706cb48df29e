use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GradientError {
    EmptyGradient,
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGradient => {
                write!(f, "gradient must contain at least one symbol")
            }
        }
    }
}

impl Error for GradientError {}

/// Ordered symbols from least to most intense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    symbols: Vec<char>,
}

impl Gradient {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, GradientError> {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.is_empty() {
            return Err(GradientError::EmptyGradient);
        }

        Ok(Self { symbols })
    }

    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn first(&self) -> char {
        self.symbols[0]
    }

    #[must_use]
    pub fn last(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

/// Picks the symbol for an escape-time count.
///
/// A count at (or above) the cap means the point never escaped and gets the
/// most intense symbol. Anything else is scaled linearly onto the gradient
/// and truncated, so a count of zero always lands on the first symbol.
/// A cap of zero can only come with a count of zero and so also yields the
/// last symbol.
#[must_use]
pub fn map_to_symbol(iteration_count: u32, max_iterations: u32, gradient: &Gradient) -> char {
    if iteration_count >= max_iterations {
        return gradient.last();
    }

    let scale = (gradient.len() - 1) as f64;
    let index = (iteration_count as f64 / max_iterations as f64 * scale) as usize;

    gradient.symbols[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Gradient {
        Gradient::new(" .:-=+*#%@".chars()).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_gradient() {
        assert_eq!(Gradient::new("".chars()), Err(GradientError::EmptyGradient));
    }

    #[test]
    fn test_first_and_last() {
        let gradient = classic();

        assert_eq!(gradient.len(), 10);
        assert_eq!(gradient.first(), ' ');
        assert_eq!(gradient.last(), '@');
    }

    #[test]
    fn test_max_iterations_maps_to_last_symbol() {
        let gradient = classic();

        for max_iterations in [1, 2, 10, 100, 1000] {
            assert_eq!(map_to_symbol(max_iterations, max_iterations, &gradient), '@');
        }
    }

    #[test]
    fn test_zero_iterations_maps_to_first_symbol() {
        let gradient = classic();

        for max_iterations in [1, 2, 10, 100, 1000] {
            assert_eq!(map_to_symbol(0, max_iterations, &gradient), ' ');
        }
    }

    #[test]
    fn test_scaling_truncates() {
        let gradient = classic();

        // 50 / 100 * 9 = 4.5
        assert_eq!(map_to_symbol(50, 100, &gradient), '=');
        // 99 / 100 * 9 = 8.91
        assert_eq!(map_to_symbol(99, 100, &gradient), '%');
        // 10 / 100 * 9 = 0.9
        assert_eq!(map_to_symbol(10, 100, &gradient), ' ');
        // 12 / 100 * 9 = 1.08
        assert_eq!(map_to_symbol(12, 100, &gradient), '.');
    }

    #[test]
    fn test_scaling_is_monotonic() {
        let gradient = classic();
        let index_of = |c: char| gradient.symbols().iter().position(|&s| s == c).unwrap();

        let indices: Vec<usize> = (0..=100)
            .map(|n| index_of(map_to_symbol(n, 100, &gradient)))
            .collect();

        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_cap_maps_to_last_symbol() {
        assert_eq!(map_to_symbol(0, 0, &classic()), '@');
    }

    #[test]
    fn test_single_symbol_gradient() {
        let gradient = Gradient::new(['#']).unwrap();

        assert_eq!(map_to_symbol(0, 10, &gradient), '#');
        assert_eq!(map_to_symbol(5, 10, &gradient), '#');
        assert_eq!(map_to_symbol(10, 10, &gradient), '#');
    }
}
