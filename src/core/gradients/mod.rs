pub mod factory;
pub mod gradient;
pub mod kinds;
