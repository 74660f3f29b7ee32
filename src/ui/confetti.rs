//! Ephemeral confetti bursts.
//!
//! A burst synchronously creates a batch of particle records with
//! randomized trajectories; the whole batch is discarded once its
//! lifetime elapses. Bursts are fire-and-forget: the registry lives on
//! the app and is pruned on every tick, so particles are cleaned up on
//! schedule even when the screen that fired them has been left.
//! Bursts never interact with each other.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

/// One piece of confetti.
///
/// Geometry is resolution-independent: horizontal position is a
/// percentage of the surface width, vertical positions are rows. The
/// trajectory (fall distance, spin) is fixed at spawn; rendering
/// interpolates along it by burst progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub color: Color,
    pub column_pct: f32,
    pub start_row: f32,
    /// Rows fallen over the full lifetime.
    pub fall: f32,
    /// Initial orientation in degrees.
    pub rotation: f32,
    /// Degrees turned over the full lifetime (either direction).
    pub spin: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Burst {
    spawned: Instant,
    lifetime: Duration,
    particles: Vec<Particle>,
}

/// A particle resolved to a surface position for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedParticle {
    pub column: u16,
    pub row: u16,
    pub color: Color,
    pub glyph: &'static str,
    /// Set in the last third of the particle's life; drawn dimmed as
    /// the terminal stand-in for fading out.
    pub fading: bool,
}

const GLYPHS: [&str; 4] = ["▪", "▫", "▰", "▴"];

/// Registry of live bursts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfettiField {
    bursts: Vec<Burst>,
}

impl ConfettiField {
    /// Fire a burst of `count` particles drawn from `palette`.
    ///
    /// Colors cycle through the palette; everything else is sampled
    /// from the ranges the card's visual language uses (upper band
    /// spawn, downward fall, a turn or two of spin).
    pub fn burst(
        &mut self,
        count: usize,
        lifetime: Duration,
        palette: &[Color],
        now: Instant,
        rng: &mut impl Rng,
    ) {
        if count == 0 || palette.is_empty() {
            return;
        }
        let particles = (0..count)
            .map(|i| Particle {
                color: palette[i % palette.len()],
                column_pct: rng.random_range(8.0..92.0),
                start_row: rng.random_range(0.0..4.0),
                fall: rng.random_range(8.0..18.0),
                rotation: rng.random_range(0.0..360.0),
                spin: rng.random_range(-720.0..720.0),
            })
            .collect();
        self.bursts.push(Burst {
            spawned: now,
            lifetime,
            particles,
        });
    }

    /// Drop every burst whose lifetime has elapsed. Idempotent.
    pub fn prune(&mut self, now: Instant) {
        self.bursts
            .retain(|burst| now.duration_since(burst.spawned) < burst.lifetime);
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    /// Particles currently alive across all bursts.
    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(|b| b.particles.len()).sum()
    }

    /// Resolve every live particle to a position on a surface of
    /// `width` x `height` cells at time `now`. Particles that have
    /// fallen off the surface are skipped.
    pub fn rendered(&self, now: Instant, width: u16, height: u16) -> Vec<RenderedParticle> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for burst in &self.bursts {
            let elapsed = now.duration_since(burst.spawned);
            if elapsed >= burst.lifetime {
                continue;
            }
            let progress = elapsed.as_secs_f32() / burst.lifetime.as_secs_f32();
            // Ease-out: fast initial scatter settling into drift.
            let eased = 1.0 - (1.0 - progress) * (1.0 - progress);
            for particle in &burst.particles {
                let row = particle.start_row + particle.fall * eased;
                if row >= f32::from(height) {
                    continue;
                }
                let column = (particle.column_pct / 100.0 * f32::from(width.saturating_sub(1)))
                    .round() as u16;
                let angle = particle.rotation + particle.spin * progress;
                let glyph =
                    GLYPHS[(angle.rem_euclid(360.0) / 90.0) as usize % GLYPHS.len()];
                out.push(RenderedParticle {
                    column: column.min(width - 1),
                    row: row as u16,
                    color: particle.color,
                    glyph,
                    fading: progress > 0.66,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LIFETIME: Duration = Duration::from_millis(1400);
    const PALETTE: [Color; 3] = [
        Color::Rgb(0xff, 0x7a, 0xa2),
        Color::Rgb(0xff, 0xe6, 0x80),
        Color::Rgb(0x7d, 0xd3, 0xfc),
    ];

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn burst_creates_exactly_count_particles() {
        let mut field = ConfettiField::default();
        field.burst(36, LIFETIME, &PALETTE, Instant::now(), &mut rng());
        assert_eq!(field.particle_count(), 36);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let mut field = ConfettiField::default();
        field.burst(7, LIFETIME, &PALETTE, Instant::now(), &mut rng());
        let rendered = field.rendered(Instant::now(), 80, 24);
        assert_eq!(rendered[0].color, PALETTE[0]);
        assert_eq!(rendered[3].color, PALETTE[0]);
        assert_eq!(rendered[4].color, PALETTE[1]);
    }

    #[test]
    fn zero_count_burst_is_noop() {
        let mut field = ConfettiField::default();
        field.burst(0, LIFETIME, &PALETTE, Instant::now(), &mut rng());
        assert!(field.is_empty());
    }

    #[test]
    fn prune_removes_expired_burst_entirely() {
        let now = Instant::now();
        let mut field = ConfettiField::default();
        field.burst(20, LIFETIME, &PALETTE, now, &mut rng());
        field.prune(now + LIFETIME);
        assert_eq!(field.particle_count(), 0);
        assert!(field.is_empty());
    }

    #[test]
    fn prune_is_idempotent() {
        let now = Instant::now();
        let mut field = ConfettiField::default();
        field.burst(5, LIFETIME, &PALETTE, now, &mut rng());
        field.prune(now + LIFETIME);
        field.prune(now + LIFETIME * 2);
        assert!(field.is_empty());
    }

    #[test]
    fn concurrent_bursts_expire_independently() {
        let now = Instant::now();
        let later = now + Duration::from_millis(600);
        let mut field = ConfettiField::default();
        field.burst(10, LIFETIME, &PALETTE, now, &mut rng());
        field.burst(16, LIFETIME, &PALETTE, later, &mut rng());
        // First burst over, second still live.
        field.prune(now + LIFETIME);
        assert_eq!(field.particle_count(), 16);
        // Both over.
        field.prune(later + LIFETIME);
        assert!(field.is_empty());
    }

    #[test]
    fn rendered_skips_expired_bursts_even_before_prune() {
        let now = Instant::now();
        let mut field = ConfettiField::default();
        field.burst(12, LIFETIME, &PALETTE, now, &mut rng());
        assert!(field.rendered(now + LIFETIME, 80, 24).is_empty());
    }

    #[test]
    fn rendered_positions_stay_on_surface() {
        let now = Instant::now();
        let mut field = ConfettiField::default();
        field.burst(40, LIFETIME, &PALETTE, now, &mut rng());
        for offset in [0u64, 300, 700, 1100] {
            let at = now + Duration::from_millis(offset);
            for particle in field.rendered(at, 60, 18) {
                assert!(particle.column < 60);
                assert!(particle.row < 18);
            }
        }
    }

    #[test]
    fn rendered_on_empty_surface_is_empty() {
        let now = Instant::now();
        let mut field = ConfettiField::default();
        field.burst(12, LIFETIME, &PALETTE, now, &mut rng());
        assert!(field.rendered(now, 0, 0).is_empty());
    }

    #[test]
    fn particles_fall_downward_over_time() {
        let now = Instant::now();
        let mut field = ConfettiField::default();
        field.burst(1, LIFETIME, &PALETTE, now, &mut rng());
        let early = field.rendered(now + Duration::from_millis(100), 80, 40);
        let late = field.rendered(now + Duration::from_millis(1200), 80, 40);
        if let (Some(a), Some(b)) = (early.first(), late.first()) {
            assert!(b.row >= a.row);
            assert!(b.fading);
            assert!(!a.fading);
        }
    }
}
