//! Impact debris particles
//!
//! Purely visual: collisions spawn a burst, each particle falls under
//! its own gravity and fades out over a fixed lifetime. The system
//! advances every step in every mode so debris keeps falling over the
//! game-over screen instead of freezing with the rest of the scene.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One piece of debris
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Steps of life remaining; culled at zero
    pub life: u32,
}

impl Particle {
    /// Remaining-life fraction in [0, 1], the renderer's alpha
    pub fn opacity(&self, tuning: &Tuning) -> f32 {
        if tuning.particle_life == 0 {
            0.0
        } else {
            self.life as f32 / tuning.particle_life as f32
        }
    }
}

/// Owns and advances all live particles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Spawn `count` particles at `origin` with randomized spray velocity
    pub fn burst(&mut self, rng: &mut Pcg32, origin: Vec2, count: usize, tuning: &Tuning) {
        for _ in 0..count {
            let vel = Vec2::new(
                rng.random_range(-tuning.particle_spread..=tuning.particle_spread),
                rng.random_range(tuning.particle_lift_min..=tuning.particle_lift_max),
            );
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: tuning.particle_life,
            });
        }
    }

    /// One step: integrate position, apply particle gravity, cull the dead
    pub fn update(&mut self, tuning: &Tuning) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += tuning.particle_gravity;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
