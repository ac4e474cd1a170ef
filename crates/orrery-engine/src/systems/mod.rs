//! Per-frame computation: shower lifecycle, scheduler state machine,
//! star twinkle evaluation. All pure or deterministic given (time, state).

pub mod scheduler;
pub mod shower;
pub mod twinkle;

pub use scheduler::{SchedulerConfig, SchedulerPhase, SchedulerState, ShowerScheduler};
pub use shower::{MeteorShower, ShowerConfig};
