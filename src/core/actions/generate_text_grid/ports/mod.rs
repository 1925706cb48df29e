pub mod symbol_map;
