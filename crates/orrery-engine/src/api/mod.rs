pub mod engine;
pub mod output;
pub mod types;
