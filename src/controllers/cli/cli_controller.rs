use std::time::Instant;

use log::info;

use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::render::{render_grid, RenderStrategy};
use crate::core::data::text_grid::TextGrid;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;
use crate::core::gradients::gradient::Gradient;

/// Renders one grid and hands it to a presenter.
pub struct CliController<P: TextPresenterPort> {
    presenter: P,
    grid: Option<TextGrid>,
}

impl<P: TextPresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            grid: None,
        }
    }

    pub fn generate(
        &mut self,
        config: RenderConfig,
        gradient: &Gradient,
        strategy: RenderStrategy,
    ) -> Result<(), RenderError> {
        info!("Rendering Mandelbrot set...");
        info!("Grid size: {}x{}", config.width, config.height);
        info!("Max iterations: {}", config.max_iterations);
        info!(
            "Region: re {}..{}, im {}..{}",
            config.re_start, config.re_end, config.im_start, config.im_end
        );
        info!("Strategy: {:?}", strategy);

        let start = Instant::now();
        self.grid = Some(render_grid(config, gradient, strategy)?);

        info!("Duration:   {:?}", start.elapsed());

        Ok(())
    }

    /// Presents the last generated grid; does nothing before `generate`.
    pub fn present(&mut self) -> std::io::Result<()> {
        if let Some(grid) = &self.grid {
            self.presenter.present(grid)?
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Option<&TextGrid> {
        self.grid.as_ref()
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
