use log::{debug, trace};

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_text_grid::generate_text_grid::generate_text_grid;
use crate::core::actions::render::errors::RenderError;
use crate::core::data::text_grid::TextGrid;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;
use crate::core::fractals::mandelbrot::symbol_map::MandelbrotSymbolMap;
use crate::core::gradients::factory::gradient_factory;
use crate::core::gradients::gradient::Gradient;
use crate::core::gradients::kinds::GradientKinds;
use crate::core::util::cell_to_complex_coords::CellMapping;

/// How the cells of a render are scheduled. Both produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    #[default]
    Sequential,
    Parallel,
}

/// Renders `config` with the classic gradient, one string per row.
pub fn render(config: RenderConfig) -> Result<Vec<String>, RenderError> {
    let gradient = gradient_factory(GradientKinds::default());

    Ok(render_grid(config, &gradient, RenderStrategy::default())?.into_rows())
}

pub fn render_grid(
    config: RenderConfig,
    gradient: &Gradient,
    strategy: RenderStrategy,
) -> Result<TextGrid, RenderError> {
    let validated = config.validate()?;
    let mapping = CellMapping::new(validated.grid_size, validated.region);

    debug!(
        "Rendering {}x{} cells, re_step {}, im_step {}, max iterations {}",
        validated.grid_size.width(),
        validated.grid_size.height(),
        mapping.re_step(),
        mapping.im_step(),
        validated.max_iterations
    );

    let algorithm = MandelbrotAlgorithm::new(mapping, validated.max_iterations);
    let iterations = match strategy {
        RenderStrategy::Sequential => generate_fractal(validated.grid_size, &algorithm)?,
        RenderStrategy::Parallel => generate_fractal_rayon(validated.grid_size, &algorithm)?,
    };

    trace!(
        "{} of {} cells did not escape",
        iterations.iter().filter(|&&n| n == validated.max_iterations).count(),
        iterations.len()
    );

    let symbol_map = MandelbrotSymbolMap::new(gradient.clone(), validated.max_iterations);

    Ok(generate_text_grid(iterations, &symbol_map, validated.grid_size)?)
}
