mod controllers;
mod core;
mod presenters;

pub use controllers::cli::cli_controller::CliController;
pub use controllers::ports::text_presenter::TextPresenterPort;
pub use presenters::text::writer::WriterPresenter;

pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_text_grid::generate_text_grid::{
    generate_text_grid, GenerateTextGridError,
};
pub use crate::core::actions::generate_text_grid::ports::symbol_map::SymbolMap;
pub use crate::core::actions::render::errors::RenderError;
pub use crate::core::actions::render::render::{render, render_grid, RenderStrategy};

pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_size::{GridSize, GridSizeError, MAX_CELLS};
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::data::text_grid::{TextGrid, TextGridError};

pub use crate::core::fractals::mandelbrot::algorithm::{
    escape_iterations, MandelbrotAlgorithm, ESCAPE_RADIUS_SQUARED,
};
pub use crate::core::fractals::mandelbrot::render_config::{
    ConfigError, RenderConfig, ValidatedConfig, DEFAULT_HEIGHT, DEFAULT_IM_END, DEFAULT_IM_START,
    DEFAULT_MAX_ITERATIONS, DEFAULT_RE_END, DEFAULT_RE_START, DEFAULT_WIDTH,
};
pub use crate::core::fractals::mandelbrot::symbol_map::{MandelbrotSymbolMap, SymbolMapError};

pub use crate::core::gradients::factory::gradient_factory;
pub use crate::core::gradients::gradient::{map_to_symbol, Gradient, GradientError};
pub use crate::core::gradients::kinds::GradientKinds;

pub use crate::core::util::cell_to_complex_coords::{
    axis_step, cell_to_complex_coords, CellMapping, CellToComplexCoordsError,
};
