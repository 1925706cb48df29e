pub mod generate_fractal;
pub mod generate_text_grid;
pub mod render;
