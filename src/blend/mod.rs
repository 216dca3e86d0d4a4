pub mod mode;
pub mod non_separable;
pub mod registry;
pub mod separable;
