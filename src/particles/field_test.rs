#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn dot(x: f64, y: f64) -> Particle {
    Particle { x, y, r: 1.5, vx: 0.0, vy: 0.0, alpha: 0.1 }
}

fn field_of(particles: Vec<Particle>) -> ParticleField {
    ParticleField { particles, viewport: Viewport::new(800.0, 600.0) }
}

// --- particle_count ---

#[test]
fn count_scales_with_width() {
    assert_eq!(particle_count(1000.0), 45);
}

#[test]
fn count_has_a_floor() {
    assert_eq!(particle_count(200.0), 38);
    assert_eq!(particle_count(0.0), 38);
    assert_eq!(particle_count(-50.0), 38);
}

#[test]
fn count_has_a_ceiling() {
    assert_eq!(particle_count(2000.0), 70);
    assert_eq!(particle_count(10_000.0), 70);
}

#[test]
fn count_floors_fractional_division() {
    // 1099 / 22 = 49.95
    assert_eq!(particle_count(1099.0), 49);
}

// --- link_alpha ---

#[test]
fn coincident_particles_link_at_full_alpha() {
    assert!(approx_eq(link_alpha(0.0).unwrap(), 0.08));
}

#[test]
fn halfway_links_at_half_alpha() {
    assert!(approx_eq(link_alpha(62.5).unwrap(), 0.04));
}

#[test]
fn at_or_beyond_threshold_no_link() {
    assert_eq!(link_alpha(125.0), None);
    assert_eq!(link_alpha(300.0), None);
}

#[test]
fn just_inside_threshold_is_nearly_transparent() {
    let alpha = link_alpha(124.999).unwrap();
    assert!(alpha > 0.0 && alpha < 1e-5);
}

// --- capped_dpr / backing_size ---

#[test]
fn dpr_is_capped_at_two() {
    assert_eq!(capped_dpr(1.0), 1.0);
    assert_eq!(capped_dpr(1.5), 1.5);
    assert_eq!(capped_dpr(3.0), 2.0);
}

#[test]
fn missing_dpr_counts_as_one() {
    assert_eq!(capped_dpr(0.0), 1.0);
    assert_eq!(capped_dpr(f64::NAN), 1.0);
}

#[test]
fn backing_size_scales_and_floors() {
    assert_eq!(backing_size(Viewport::new(1280.0, 720.0), 2.0), (2560, 1440));
    assert_eq!(backing_size(Viewport::new(333.0, 101.0), 1.5), (499, 151));
}

// --- Particle::advance ---

#[test]
fn advance_moves_by_velocity() {
    let mut p = Particle { vx: 0.2, vy: -0.1, ..dot(50.0, 50.0) };
    p.advance(800.0, 600.0);
    assert!(approx_eq(p.x, 50.2));
    assert!(approx_eq(p.y, 49.9));
}

#[test]
fn drifting_past_left_margin_wraps_to_right() {
    let mut p = Particle { vx: -0.2, ..dot(-10.0, 50.0) };
    p.advance(800.0, 600.0);
    assert_eq!(p.x, 810.0);
}

#[test]
fn drifting_past_right_margin_wraps_to_left() {
    let mut p = Particle { vx: 0.2, ..dot(810.0, 50.0) };
    p.advance(800.0, 600.0);
    assert_eq!(p.x, -10.0);
}

#[test]
fn drifting_past_top_and_bottom_wraps() {
    let mut up = Particle { vy: -0.18, ..dot(50.0, -10.0) };
    up.advance(800.0, 600.0);
    assert_eq!(up.y, 610.0);

    let mut down = Particle { vy: 0.18, ..dot(50.0, 610.0) };
    down.advance(800.0, 600.0);
    assert_eq!(down.y, -10.0);
}

#[test]
fn inside_margin_does_not_wrap() {
    let mut p = Particle { vx: -0.1, ..dot(-9.0, 50.0) };
    p.advance(800.0, 600.0);
    assert!(approx_eq(p.x, -9.1));
}

// --- ParticleField ---

#[test]
fn spawn_respects_count_and_ranges() {
    let mut rng = SmallRng::seed_from_u64(7);
    let viewport = Viewport::new(1000.0, 700.0);
    let field = ParticleField::spawn(viewport, &mut rng);

    assert_eq!(field.particles.len(), 45);
    for p in &field.particles {
        assert!((0.0..=1000.0).contains(&p.x));
        assert!((0.0..=700.0).contains(&p.y));
        assert!((RADIUS_RANGE.0..=RADIUS_RANGE.1).contains(&p.r));
        assert!((VX_RANGE.0..=VX_RANGE.1).contains(&p.vx));
        assert!((VY_RANGE.0..=VY_RANGE.1).contains(&p.vy));
        assert!((ALPHA_RANGE.0..=ALPHA_RANGE.1).contains(&p.alpha));
    }
}

#[test]
fn spawn_on_empty_viewport_does_not_panic() {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = ParticleField::spawn(Viewport::default(), &mut rng);
    assert_eq!(field.particles.len(), 38);
    assert!(field.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
}

#[test]
fn resize_keeps_particles() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut field = ParticleField::spawn(Viewport::new(1500.0, 900.0), &mut rng);
    let before = field.particles.clone();

    field.resize(Viewport::new(400.0, 300.0));
    assert_eq!(field.particles, before);
    assert_eq!(field.viewport, Viewport::new(400.0, 300.0));
}

#[test]
fn particles_outside_shrunk_viewport_wrap_back() {
    let mut field = field_of(vec![Particle { vx: 0.1, ..dot(1400.0, 50.0) }]);
    field.resize(Viewport::new(400.0, 300.0));
    field.step();
    assert_eq!(field.particles[0].x, -10.0);
}

#[test]
fn step_advances_every_particle() {
    let mut field = field_of(vec![
        Particle { vx: 0.1, ..dot(10.0, 10.0) },
        Particle { vy: 0.1, ..dot(20.0, 20.0) },
    ]);
    field.step();
    assert!(approx_eq(field.particles[0].x, 10.1));
    assert!(approx_eq(field.particles[1].y, 20.1));
}

#[test]
fn links_cover_each_close_pair_once() {
    let field = field_of(vec![dot(0.0, 0.0), dot(30.0, 40.0), dot(500.0, 500.0)]);
    let links = field.links().collect::<Vec<_>>();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].from, Point::new(0.0, 0.0));
    assert_eq!(links[0].to, Point::new(30.0, 40.0));
    // distance 50
    assert!(approx_eq(links[0].alpha, (1.0 - 50.0 / 125.0) * 0.08));
}

#[test]
fn links_for_dense_cluster_cover_all_pairs() {
    let field = field_of(vec![dot(0.0, 0.0), dot(1.0, 0.0), dot(0.0, 1.0), dot(1.0, 1.0)]);
    assert_eq!(field.links().count(), 6);
}

#[test]
fn links_for_empty_or_single_field_are_empty() {
    assert_eq!(field_of(vec![]).links().count(), 0);
    assert_eq!(field_of(vec![dot(5.0, 5.0)]).links().count(), 0);
}
