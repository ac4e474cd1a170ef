pub mod error;
pub mod rng;

pub use error::ConfigError;
pub use rng::Rng;
