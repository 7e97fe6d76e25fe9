//! The particle field: exclusive ownership, spawning, and culling
//!
//! Particles are created at the vessel inlet and removed once squished or
//! carried out of the viewport. Removal order among particles is
//! unspecified.

use rand::Rng;

use super::particle::Particle;
use super::wall::Wall;
use crate::consts::CANVAS_W;

/// Per-tick removal summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalStats {
    pub squished: usize,
    pub exited: usize,
}

/// Owns every live particle in the vessel
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Append `n` freshly randomized particles at the inlet
    pub fn spawn(&mut self, n: usize, rng: &mut impl Rng) {
        for _ in 0..n {
            self.particles.push(Particle::spawn(rng));
        }
    }

    /// Update every particle against current-frame wall geometry, then cull
    /// squished particles and particles outside the visible x-range
    pub fn tick(&mut self, upper: &Wall, lower: &Wall) -> RemovalStats {
        for particle in &mut self.particles {
            particle.update(upper, lower);
        }

        let mut stats = RemovalStats::default();
        self.particles.retain(|p| {
            if p.squished {
                stats.squished += 1;
                false
            } else if p.position.x < 0.0 || p.position.x > CANVAS_W {
                stats.exited += 1;
                false
            } else {
                true
            }
        });
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn particle_at(x: f32, squished: bool) -> Particle {
        Particle {
            position: Vec2::new(x, 400.0),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            squished,
        }
    }

    fn rest_walls() -> (Wall, Wall) {
        (Wall::upper(), Wall::lower())
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::new();
        field.spawn(50, &mut rng);
        assert_eq!(field.len(), 50);

        for p in field.particles() {
            assert_eq!(p.position.x, 0.0);
            assert!(p.position.y >= 335.0 && p.position.y < 465.0);
            assert!(p.velocity.x >= 0.5 && p.velocity.x < 1.0);
            assert!(p.velocity.y >= -0.5 && p.velocity.y < 1.0);
            assert!(p.acceleration.x >= 0.005 && p.acceleration.x < 0.01);
            assert!(p.acceleration.y >= -0.005 && p.acceleration.y < 0.005);
            assert!(!p.squished);
        }
    }

    #[test]
    fn test_tick_removes_out_of_view_particles() {
        let (upper, lower) = rest_walls();
        let mut field = ParticleField::new();
        field.particles.push(particle_at(801.0, false));
        field.particles.push(particle_at(-1.0, false));
        field.particles.push(particle_at(400.0, false));

        let stats = field.tick(&upper, &lower);

        assert_eq!(stats.exited, 2);
        assert_eq!(stats.squished, 0);
        assert_eq!(field.len(), 1);
        assert_eq!(field.particles()[0].position.x, 400.0);
    }

    #[test]
    fn test_tick_removes_squished_regardless_of_position() {
        let (upper, lower) = rest_walls();
        let mut field = ParticleField::new();
        field.particles.push(particle_at(400.0, true));

        let stats = field.tick(&upper, &lower);

        assert_eq!(stats.squished, 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_inlet_particles_survive_the_tick() {
        // x = 0 is inside the viewport; only x < 0 exits
        let (upper, lower) = rest_walls();
        let mut field = ParticleField::new();
        field.particles.push(particle_at(0.0, false));

        let stats = field.tick(&upper, &lower);

        assert_eq!(stats, RemovalStats::default());
        assert_eq!(field.len(), 1);
    }
}
