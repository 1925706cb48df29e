use std::error::Error;

/// Turns one computed cell value into the symbol drawn for it.
pub trait SymbolMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<char, Self::Failure>;
}
