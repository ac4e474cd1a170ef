pub mod catalog;

pub use catalog::{solar_system, Catalog};
