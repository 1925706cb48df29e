pub mod algorithm;
pub mod render_config;
pub mod symbol_map;
