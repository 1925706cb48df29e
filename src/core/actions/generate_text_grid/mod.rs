pub mod generate_text_grid;
pub mod ports;
