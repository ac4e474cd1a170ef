//! Shower scheduler — an explicit two-phase state machine.
//!
//! The countdown is plain state ticked with the frame delta, so the FSM can
//! be driven by a timer, a game loop, or a test harness alike. Tearing the
//! engine down simply stops ticking; no completion events are emitted for a
//! cancelled countdown.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::rng::Rng;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Shortest idle wait before an auto-triggered shower, in seconds.
    pub min_interval: f32,
    /// Extra uniform-random wait on top of `min_interval`.
    pub spread: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        // Observed product behavior: next shower 16-37s after the last.
        Self {
            min_interval: 16.0,
            spread: 21.0,
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interval < 0.0 {
            return Err(ConfigError::NegativeInterval {
                value: self.min_interval,
            });
        }
        if self.spread < 0.0 {
            return Err(ConfigError::NegativeInterval { value: self.spread });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerPhase {
    /// No shower running; counting down to the next auto-trigger.
    Idle,
    /// A shower is running; the countdown is suspended.
    Active,
}

/// Serializable snapshot of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerState {
    pub phase: SchedulerPhase,
    /// Seconds left in the idle countdown (0 while active).
    pub remaining: f32,
}

pub struct ShowerScheduler {
    config: SchedulerConfig,
    state: SchedulerState,
}

impl ShowerScheduler {
    pub fn new(config: SchedulerConfig, rng: &mut Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let remaining = Self::draw_interval(&config, rng);
        Ok(Self {
            config,
            state: SchedulerState {
                phase: SchedulerPhase::Idle,
                remaining,
            },
        })
    }

    /// Rebuild a scheduler from a previously captured snapshot.
    pub fn from_state(config: SchedulerConfig, state: SchedulerState) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, state })
    }

    fn draw_interval(config: &SchedulerConfig, rng: &mut Rng) -> f32 {
        config.min_interval + rng.next_f32() * config.spread
    }

    /// Advance the idle countdown by `dt` seconds. Returns true exactly on
    /// the tick the countdown elapses: the caller should start a shower.
    /// No-op while active.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.state.phase == SchedulerPhase::Active {
            return false;
        }
        self.state.remaining -= dt;
        if self.state.remaining <= 0.0 {
            self.state.phase = SchedulerPhase::Active;
            self.state.remaining = 0.0;
            return true;
        }
        false
    }

    /// Enter the active phase unconditionally (manual trigger path).
    pub fn arm_active(&mut self) {
        self.state.phase = SchedulerPhase::Active;
        self.state.remaining = 0.0;
    }

    /// Re-arm the idle countdown after a shower completes, with a freshly
    /// randomized interval.
    pub fn notify_ended(&mut self, rng: &mut Rng) {
        self.state.phase = SchedulerPhase::Idle;
        self.state.remaining = Self::draw_interval(&self.config, rng);
        log::debug!("next auto shower in {:.1}s", self.state.remaining);
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.state.phase
    }

    pub fn remaining(&self) -> f32 {
        self.state.remaining
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(seed: u64) -> (ShowerScheduler, Rng) {
        let mut rng = Rng::new(seed);
        let s = ShowerScheduler::new(SchedulerConfig::default(), &mut rng).unwrap();
        (s, rng)
    }

    #[test]
    fn initial_countdown_in_range() {
        for seed in 1..50 {
            let (s, _) = scheduler(seed);
            assert_eq!(s.phase(), SchedulerPhase::Idle);
            assert!(
                (16.0..37.0).contains(&s.remaining()),
                "remaining = {}",
                s.remaining()
            );
        }
    }

    #[test]
    fn countdown_fires_exactly_once() {
        let (mut s, _) = scheduler(42);
        let mut fired = 0;
        for _ in 0..4000 {
            if s.tick(0.016) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(s.phase(), SchedulerPhase::Active);
    }

    #[test]
    fn ticking_while_active_is_a_no_op() {
        let (mut s, _) = scheduler(42);
        s.arm_active();
        for _ in 0..100 {
            assert!(!s.tick(1.0));
        }
        assert_eq!(s.phase(), SchedulerPhase::Active);
    }

    #[test]
    fn rearms_with_fresh_interval() {
        let (mut s, mut rng) = scheduler(42);
        s.arm_active();
        s.notify_ended(&mut rng);
        assert_eq!(s.phase(), SchedulerPhase::Idle);
        assert!((16.0..37.0).contains(&s.remaining()));
    }

    #[test]
    fn full_cycle_idle_active_idle() {
        let (mut s, mut rng) = scheduler(7);
        let before = s.remaining();
        assert!(s.tick(before + 0.001));
        assert_eq!(s.phase(), SchedulerPhase::Active);
        s.notify_ended(&mut rng);
        assert_eq!(s.phase(), SchedulerPhase::Idle);
        assert!(s.remaining() > 0.0);
    }

    #[test]
    fn state_round_trips_through_serde() {
        let (s, _) = scheduler(13);
        let json = serde_json::to_string(&s.state()).unwrap();
        let restored: SchedulerState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, s.state());

        let rebuilt = ShowerScheduler::from_state(SchedulerConfig::default(), restored).unwrap();
        assert_eq!(rebuilt.phase(), s.phase());
        assert_eq!(rebuilt.remaining(), s.remaining());
    }

    #[test]
    fn rejects_negative_intervals() {
        let mut rng = Rng::new(1);
        let bad = SchedulerConfig {
            min_interval: -1.0,
            spread: 21.0,
        };
        assert!(matches!(
            ShowerScheduler::new(bad, &mut rng),
            Err(ConfigError::NegativeInterval { .. })
        ));
    }
}
