pub mod complex;
pub mod grid_size;
pub mod point;
pub mod region;
pub mod text_grid;
