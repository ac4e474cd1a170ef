pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::engine::{Orrery, OrreryConfig};
pub use api::output::{BodyInstance, FrameBuffer, RingInstance, StarInstance, StreakInstance};
pub use api::types::ShowerEvent;
pub use assets::catalog::{solar_system, Catalog};
pub use components::body::{CelestialBody, RingDesc};
pub use components::starfield::{StarField, StarFieldConfig};
pub use components::streak::{MeteorStreak, StreakSample};
pub use core::error::ConfigError;
pub use core::rng::Rng;
pub use systems::scheduler::{SchedulerConfig, SchedulerPhase, SchedulerState, ShowerScheduler};
pub use systems::shower::{MeteorShower, ShowerConfig};
