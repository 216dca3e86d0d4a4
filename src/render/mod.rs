pub mod composite;
pub mod gallery;
