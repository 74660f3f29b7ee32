use std::time::{Duration, Instant};

use keepsake::ui::confetti::ConfettiField;
use keepsake::ui::theme::{CONFETTI_PALETTE, SURPRISE_PALETTE};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LIFETIME: Duration = Duration::from_millis(1400);

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn burst_spawns_exactly_count_particles() {
    let mut field = ConfettiField::default();
    field.burst(26, LIFETIME, &SURPRISE_PALETTE, Instant::now(), &mut rng());
    assert_eq!(field.particle_count(), 26);
}

#[test]
fn zero_particles_survive_the_lifetime() {
    let t0 = Instant::now();
    let mut field = ConfettiField::default();
    field.burst(36, LIFETIME, &CONFETTI_PALETTE, t0, &mut rng());
    assert_eq!(field.particle_count(), 36);

    field.prune(t0 + LIFETIME);
    assert_eq!(field.particle_count(), 0);
}

#[test]
fn pruning_repeatedly_is_idempotent() {
    let t0 = Instant::now();
    let mut field = ConfettiField::default();
    field.burst(10, LIFETIME, &CONFETTI_PALETTE, t0, &mut rng());
    field.prune(t0 + LIFETIME);
    field.prune(t0 + LIFETIME);
    field.prune(t0 + LIFETIME * 3);
    assert!(field.is_empty());
}

#[test]
fn repeated_bursts_are_independent() {
    let t0 = Instant::now();
    let mut field = ConfettiField::default();
    field.burst(36, Duration::from_millis(1900), &CONFETTI_PALETTE, t0, &mut rng());
    field.burst(
        26,
        Duration::from_millis(1500),
        &SURPRISE_PALETTE,
        t0 + Duration::from_millis(1000),
        &mut rng(),
    );
    assert_eq!(field.particle_count(), 62);

    // The first burst dies at t=1900; the second lives until t=2500.
    field.prune(t0 + Duration::from_millis(1900));
    assert_eq!(field.particle_count(), 26);
    field.prune(t0 + Duration::from_millis(2500));
    assert!(field.is_empty());
}

#[test]
fn pruning_mid_life_keeps_the_burst() {
    let t0 = Instant::now();
    let mut field = ConfettiField::default();
    field.burst(18, LIFETIME, &CONFETTI_PALETTE, t0, &mut rng());
    field.prune(t0 + Duration::from_millis(700));
    assert_eq!(field.particle_count(), 18);
}

#[test]
fn rendered_particles_fit_the_surface_at_every_age() {
    let t0 = Instant::now();
    let mut field = ConfettiField::default();
    field.burst(50, LIFETIME, &CONFETTI_PALETTE, t0, &mut rng());
    for ms in (0..1400).step_by(100) {
        for particle in field.rendered(t0 + Duration::from_millis(ms), 120, 30) {
            assert!(particle.column < 120);
            assert!(particle.row < 30);
        }
    }
}
