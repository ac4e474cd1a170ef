//! Engine facade — owns all simulation state and runs one ordered pass per
//! frame.
//!
//! The host render loop supplies a monotonic elapsed-time scalar once per
//! frame; the engine never owns a clock or a timer. Dropping the engine
//! cancels any pending scheduler countdown implicitly and never emits
//! completion events.

use glam::Vec3;

use crate::api::output::{BodyInstance, FrameBuffer, RingInstance, StarInstance, StreakInstance};
use crate::api::types::ShowerEvent;
use crate::assets::catalog;
use crate::components::body::CelestialBody;
use crate::components::starfield::{StarField, StarFieldConfig};
use crate::core::error::ConfigError;
use crate::core::rng::Rng;
use crate::systems::scheduler::{SchedulerConfig, SchedulerPhase, SchedulerState, ShowerScheduler};
use crate::systems::shower::{MeteorShower, ShowerConfig};
use crate::systems::twinkle;

/// Configuration for the whole engine, validated up front so nothing
/// malformed ever reaches the per-frame path.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    pub bodies: Vec<CelestialBody>,
    pub star_field: StarFieldConfig,
    pub scheduler: SchedulerConfig,
    /// Parameters for manually triggered showers; auto-triggered showers
    /// randomize count and duration on top of these.
    pub shower_defaults: ShowerConfig,
    /// RNG seed shared by star generation, shower generation, and
    /// scheduler intervals. Same seed, same session.
    pub seed: u64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            bodies: catalog::solar_system(),
            star_field: StarFieldConfig::default(),
            scheduler: SchedulerConfig::default(),
            shower_defaults: ShowerConfig::default(),
            seed: 42,
        }
    }
}

/// The simulation. One `advance` call per frame computes, in fixed order:
/// body positions, ring ornaments (which copy body positions from the same
/// frame), the scheduler countdown, the shower lifecycle and streak
/// samples, and the star twinkle attributes.
pub struct Orrery {
    bodies: Vec<CelestialBody>,
    star_field: StarField,
    scheduler: ShowerScheduler,
    shower_defaults: ShowerConfig,
    shower: Option<MeteorShower>,
    frame: FrameBuffer,
    events: Vec<ShowerEvent>,
    rng: Rng,
    last_time: Option<f64>,
}

impl Orrery {
    pub fn new(config: OrreryConfig) -> Result<Self, ConfigError> {
        for body in &config.bodies {
            body.validate()?;
        }
        config.shower_defaults.validate()?;
        let mut rng = Rng::new(config.seed);
        let star_field = StarField::generate(&config.star_field, &mut rng)?;
        let scheduler = ShowerScheduler::new(config.scheduler, &mut rng)?;
        let frame = FrameBuffer::new(config.bodies.len(), star_field.len());
        log::info!(
            "orrery initialized: {} bodies, {} stars, first auto shower in {:.1}s",
            config.bodies.len(),
            star_field.len(),
            scheduler.remaining()
        );
        Ok(Self {
            bodies: config.bodies,
            star_field,
            scheduler,
            shower_defaults: config.shower_defaults,
            shower: None,
            frame,
            events: Vec::new(),
            rng,
            last_time: None,
        })
    }

    /// Run one simulation pass at `elapsed` seconds of host clock time.
    ///
    /// `elapsed` is expected to be monotonic; a backwards step is treated
    /// as dt = 0 rather than a panic.
    pub fn advance(&mut self, elapsed: f64) {
        let dt = match self.last_time {
            Some(prev) => (elapsed - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(elapsed);

        // 1. Bodies first, then rings: ring positions depend on body
        //    positions computed this frame.
        self.frame.bodies.clear();
        for body in &self.bodies {
            let p = body.position(elapsed);
            self.frame.bodies.push(BodyInstance {
                x: p.x as f32,
                y: p.y as f32,
                z: p.z as f32,
                radius: body.radius,
                r: body.color.0,
                g: body.color.1,
                b: body.color.2,
                has_ring: if body.ring.is_some() { 1.0 } else { 0.0 },
            });
        }
        self.frame.rings.clear();
        for (i, body) in self.bodies.iter().enumerate() {
            if let Some(ring) = body.ring {
                let owner = self.frame.bodies[i];
                self.frame
                    .rings
                    .push(RingInstance::new(owner.x, owner.y, owner.z, ring.inner, ring.outer));
            }
        }

        // 2. Scheduler countdown; fires at most once, then stays active
        //    until the shower completes.
        if self.scheduler.tick(dt) {
            let config = ShowerConfig::randomized(&self.shower_defaults, &mut self.rng);
            self.spawn_shower(config, false);
        }

        // 3. Shower lifecycle and streak sampling.
        self.frame.streaks.clear();
        let mut ended = false;
        if let Some(shower) = &mut self.shower {
            ended = shower.update(elapsed);
            if !ended {
                let local_t = shower.local_time(elapsed);
                for streak in shower.streaks() {
                    let sample = streak.sample(local_t);
                    self.frame.streaks.push(StreakInstance::new(
                        sample.position,
                        sample.opacity,
                        sample.visible,
                        streak.width,
                        streak.length,
                    ));
                }
            }
        }
        if ended {
            self.shower = None;
            self.scheduler.notify_ended(&mut self.rng);
            self.events.push(ShowerEvent::Ended);
        }

        // 4. Star twinkle attributes, written in place (no allocation).
        let t = elapsed as f32;
        for (instance, &seed) in self.frame.stars.iter_mut().zip(self.star_field.seeds()) {
            *instance = StarInstance::new(twinkle::brightness(seed, t), twinkle::point_size(seed, t));
        }
    }

    /// Manual "start shower now" entry point, callable at any time from the
    /// UI layer. Restarts unconditionally: an in-flight shower is
    /// superseded (cancelled, no completion event).
    pub fn trigger_shower(&mut self) {
        if self.shower.is_some() {
            log::debug!("manual trigger superseding in-flight shower");
        }
        self.scheduler.arm_active();
        let config = self.shower_defaults.clone();
        self.spawn_shower(config, true);
    }

    fn spawn_shower(&mut self, config: ShowerConfig, manual: bool) {
        match MeteorShower::generate(&config, &mut self.rng) {
            Ok(shower) => {
                self.events.push(ShowerEvent::Started {
                    count: shower.streaks().len() as u32,
                    duration: shower.duration(),
                    manual,
                });
                self.shower = Some(shower);
            }
            // Unreachable for configs validated at construction.
            Err(e) => log::error!("shower config rejected: {e}"),
        }
    }

    /// Whether a shower is currently running.
    pub fn shower_active(&self) -> bool {
        self.shower.is_some()
    }

    /// Drain the lifecycle events accumulated since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, ShowerEvent> {
        self.events.drain(..)
    }

    /// The per-frame render output.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Static star positions, generated once per session.
    pub fn star_positions(&self) -> &[Vec3] {
        self.star_field.positions()
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn scheduler_phase(&self) -> SchedulerPhase {
        self.scheduler.phase()
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Orrery {
        Orrery::new(OrreryConfig::default()).unwrap()
    }

    #[test]
    fn bodies_orbit_at_configured_radius() {
        let mut orrery = engine();
        orrery.advance(12.5);
        for (instance, body) in orrery.frame().bodies.iter().zip(orrery.bodies()) {
            let r = (instance.x * instance.x + instance.y * instance.y + instance.z * instance.z)
                .sqrt();
            assert!(
                (r as f64 - body.orbit_radius).abs() < 1e-3,
                "{}: r = {r}",
                body.name
            );
            assert_eq!(instance.y, 0.0);
        }
    }

    #[test]
    fn ring_copies_owner_position_same_frame() {
        let mut orrery = engine();
        orrery.advance(777.0);
        let frame = orrery.frame();
        assert_eq!(frame.rings.len(), 1); // Saturn
        let saturn_idx = orrery
            .bodies()
            .iter()
            .position(|b| b.ring.is_some())
            .unwrap();
        let owner = frame.bodies[saturn_idx];
        let ring = frame.rings[0];
        assert_eq!((ring.x, ring.y, ring.z), (owner.x, owner.y, owner.z));
    }

    #[test]
    fn star_attributes_fill_without_reallocating() {
        let mut orrery = engine();
        orrery.advance(0.0);
        let count = orrery.frame().stars.len();
        assert_eq!(count, 800);
        let ptr = orrery.frame().stars.as_ptr();
        for i in 1..100 {
            orrery.advance(i as f64 * 0.016);
        }
        assert_eq!(orrery.frame().stars.len(), count);
        assert_eq!(orrery.frame().stars.as_ptr(), ptr);
        assert_eq!(orrery.star_positions().len(), count);
    }

    #[test]
    fn auto_shower_fires_after_countdown() {
        let mut orrery = engine();
        let countdown = orrery.scheduler_state().remaining as f64;
        orrery.advance(0.0);
        assert!(!orrery.shower_active());
        orrery.advance(countdown + 0.1);
        assert!(orrery.shower_active());
        assert_eq!(orrery.scheduler_phase(), SchedulerPhase::Active);
        let events: Vec<_> = orrery.drain_events().collect();
        assert!(matches!(
            events[..],
            [ShowerEvent::Started { manual: false, .. }]
        ));
    }

    #[test]
    fn manual_shower_end_to_end() {
        let mut orrery = Orrery::new(OrreryConfig {
            shower_defaults: ShowerConfig {
                count: 12,
                duration: 3.0,
                radius: 100.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap();

        orrery.advance(1.0);
        orrery.trigger_shower();
        orrery.advance(1.0); // latch start at t=1
        assert!(orrery.shower_active());
        assert!(orrery.frame().streaks.iter().all(|s| s.visible == 0.0));

        orrery.advance(2.5); // t = start + 1.5
        assert!(orrery
            .frame()
            .streaks
            .iter()
            .any(|s| s.visible == 1.0 && s.opacity > 0.0));

        orrery.advance(4.01); // t = start + 3.01
        assert!(!orrery.shower_active());
        assert_eq!(orrery.frame().streaks.len(), 0);
        let ended = orrery
            .drain_events()
            .filter(|e| *e == ShowerEvent::Ended)
            .count();
        assert_eq!(ended, 1);

        // Repeated observations after inactivity: no second Ended.
        orrery.advance(5.0);
        orrery.advance(6.0);
        assert_eq!(orrery.drain_events().count(), 0);
    }

    #[test]
    fn completion_rearms_scheduler_in_range() {
        let mut orrery = engine();
        orrery.advance(0.0);
        orrery.trigger_shower();
        orrery.advance(0.001);
        orrery.advance(10.0); // well past the default 3s duration
        assert!(!orrery.shower_active());
        assert_eq!(orrery.scheduler_phase(), SchedulerPhase::Idle);
        let remaining = orrery.scheduler_state().remaining;
        assert!(
            (16.0..37.0).contains(&remaining),
            "remaining = {remaining}"
        );
    }

    #[test]
    fn manual_restart_supersedes_without_completion() {
        let mut orrery = engine();
        orrery.advance(0.0);
        orrery.trigger_shower();
        orrery.advance(0.5);
        assert!(orrery.shower_active());

        // Restart mid-flight: the first shower is cancelled, not completed.
        orrery.trigger_shower();
        orrery.advance(1.0);
        assert!(orrery.shower_active());
        let events: Vec<_> = orrery.drain_events().collect();
        let started = events
            .iter()
            .filter(|e| matches!(e, ShowerEvent::Started { manual: true, .. }))
            .count();
        let ended = events.iter().filter(|e| **e == ShowerEvent::Ended).count();
        assert_eq!(started, 2);
        assert_eq!(ended, 0);
    }

    #[test]
    fn backwards_clock_does_not_panic() {
        let mut orrery = engine();
        orrery.advance(10.0);
        orrery.advance(5.0);
        orrery.advance(11.0);
        assert_eq!(orrery.frame().bodies.len(), orrery.bodies().len());
    }

    #[test]
    fn rejects_invalid_body_config() {
        let mut config = OrreryConfig::default();
        config.bodies[0].orbit_radius = -1.0;
        assert!(matches!(
            Orrery::new(config),
            Err(ConfigError::NonPositiveOrbit { .. })
        ));
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = engine();
        let mut b = engine();
        for i in 0..50 {
            a.advance(i as f64 * 0.1);
            b.advance(i as f64 * 0.1);
        }
        assert_eq!(a.scheduler_state(), b.scheduler_state());
        assert_eq!(a.star_positions(), b.star_positions());
        let fa = a.frame();
        let fb = b.frame();
        assert_eq!(fa.stars.len(), fb.stars.len());
        for (x, y) in fa.stars.iter().zip(fb.stars.iter()) {
            assert_eq!(x.brightness, y.brightness);
        }
    }
}
