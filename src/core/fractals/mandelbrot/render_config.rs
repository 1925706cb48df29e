use crate::core::data::complex::Complex;
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::region::{Region, RegionError};
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 80;
pub const DEFAULT_HEIGHT: u32 = 24;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_RE_START: f64 = -2.0;
pub const DEFAULT_RE_END: f64 = 1.0;
pub const DEFAULT_IM_START: f64 = -1.0;
pub const DEFAULT_IM_END: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    GridSize(GridSizeError),
    ZeroMaxIterations,
    Region(RegionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSize(_) => write!(f, "invalid dimensions"),
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::Region(_) => write!(f, "invalid region"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::GridSize(err) => Some(err),
            Self::ZeroMaxIterations => None,
            Self::Region(err) => Some(err),
        }
    }
}

impl From<GridSizeError> for ConfigError {
    fn from(err: GridSizeError) -> Self {
        Self::GridSize(err)
    }
}

impl From<RegionError> for ConfigError {
    fn from(err: RegionError) -> Self {
        Self::Region(err)
    }
}

/// Everything one render needs: grid dimensions, the iteration cap and the
/// sampled region of the complex plane.
///
/// The plane bounds may be given in either order. `re_start`/`im_start`
/// always land on the left column and top row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub re_start: f64,
    pub re_end: f64,
    pub im_start: f64,
    pub im_end: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            re_start: DEFAULT_RE_START,
            re_end: DEFAULT_RE_END,
            im_start: DEFAULT_IM_START,
            im_end: DEFAULT_IM_END,
        }
    }
}

/// A [`RenderConfig`] that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    pub grid_size: GridSize,
    pub region: Region,
    pub max_iterations: u32,
}

impl RenderConfig {
    /// Checks dimensions, iteration cap and bounds, in that order.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let grid_size = GridSize::new(self.width, self.height)?;

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        let region = Region::new(
            Complex::new(self.re_start, self.im_start),
            Complex::new(self.re_end, self.im_end),
        )?;

        Ok(ValidatedConfig {
            grid_size,
            region,
            max_iterations: self.max_iterations,
        })
    }
}
