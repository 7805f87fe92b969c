// Host-side tests for grid construction and per-particle physics.

use field_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build(width: f32, height: f32, spacing: f32) -> ParticleField {
    let cfg = FieldConfig::default().with_grid_spacing(spacing);
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::empty();
    field.regrid(Viewport::new(width, height), &cfg, &mut rng);
    field
}

#[test]
fn particle_count_matches_grid_formula() {
    let cases = [
        (0.0, 0.0, 50.0),
        (100.0, 100.0, 50.0),
        (1920.0, 1080.0, 50.0),
        (333.0, 77.0, 50.0),
        (1280.0, 720.0, 37.5),
        (49.9, 50.1, 50.0),
    ];
    for (w, h, s) in cases {
        let field = build(w, h, s);
        let expected = ((w + s) / s).ceil() as usize * ((h + s) / s).ceil() as usize;
        assert_eq!(field.len(), expected, "viewport {w}x{h} spacing {s}");
        assert_eq!(field.len(), grid_steps(w, s) * grid_steps(h, s));
    }
}

#[test]
fn anchors_cover_viewport_plus_overflow() {
    let (w, h, s) = (1366.0, 768.0, 50.0);
    let field = build(w, h, s);
    for p in field.particles() {
        let a = p.anchor();
        assert!(a.x >= 0.0 && a.x < w + s, "x out of range: {a}");
        assert!(a.y >= 0.0 && a.y < h + s, "y out of range: {a}");
        assert_eq!(p.pos, a);
        assert_eq!(p.radius, PARTICLE_RADIUS);
    }
    let max_x = field.particles().iter().map(|p| p.anchor().x).fold(0.0, f32::max);
    let max_y = field.particles().iter().map(|p| p.anchor().y).fold(0.0, f32::max);
    assert!(max_x >= w, "grid must reach past the right edge");
    assert!(max_y >= h, "grid must reach past the bottom edge");
}

#[test]
fn grid_is_row_major() {
    let field = build(200.0, 100.0, 50.0);
    let ps = field.particles();
    assert_eq!(ps[0].anchor(), Vec2::new(0.0, 0.0));
    assert_eq!(ps[1].anchor(), Vec2::new(50.0, 0.0));
    let cols = grid_steps(200.0, 50.0);
    assert_eq!(ps[cols].anchor(), Vec2::new(0.0, 50.0));
}

#[test]
fn densities_stay_in_range() {
    let field = build(1920.0, 1080.0, 50.0);
    for p in field.particles() {
        assert!(p.density() >= DENSITY_MIN && p.density() < DENSITY_MAX);
    }
}

#[test]
fn regrid_bumps_generation() {
    let cfg = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::empty();
    assert_eq!(field.generation(), 0);
    field.regrid(Viewport::new(300.0, 200.0), &cfg, &mut rng);
    field.regrid(Viewport::new(300.0, 200.0), &cfg, &mut rng);
    assert_eq!(field.generation(), 2);
    assert_eq!(field.spacing(), GRID_SPACING);
}

#[test]
fn viewport_sanitises_extents() {
    let v = Viewport::new(-10.0, f32::NAN);
    assert_eq!(v.width, 0.0);
    assert_eq!(v.height, 0.0);
    assert_eq!(Viewport::new(800.0, 600.0).center(), Vec2::new(400.0, 300.0));
}

#[test]
fn close_pointer_pushes_particle_away() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let anchor = Vec2::new(400.0, 300.0);
        let density = rng.gen_range(DENSITY_MIN..DENSITY_MAX);
        let mut p = Particle::new(anchor, PARTICLE_RADIUS, density);
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let dist = rng.gen_range(0.5..MOUSE_RADIUS - 0.5);
        let pointer = anchor + Vec2::from_angle(angle) * dist;

        let before = p.pos;
        p.update(Some(pointer), MOUSE_RADIUS, RELAX_DIVISOR);
        let moved = p.pos - before;

        assert!(moved.length() > 0.0, "no displacement at d={dist}");
        assert!(
            moved.dot(before - pointer) > 0.0,
            "displacement {moved} points toward the pointer"
        );
    }
}

#[test]
fn push_magnitude_scales_with_proximity_and_density() {
    let anchor = Vec2::new(100.0, 100.0);
    let pointer = Vec2::new(70.0, 100.0); // 30px to the left
    let mut p = Particle::new(anchor, PARTICLE_RADIUS, 10.0);
    p.update(Some(pointer), MOUSE_RADIUS, RELAX_DIVISOR);
    let expected = (MOUSE_RADIUS - 30.0) / MOUSE_RADIUS * 10.0;
    assert!((p.pos.x - (100.0 + expected)).abs() < 1e-4);
    assert_eq!(p.pos.y, 100.0);

    let mut near = Particle::new(anchor, PARTICLE_RADIUS, 10.0);
    let mut far = Particle::new(anchor, PARTICLE_RADIUS, 10.0);
    near.update(Some(Vec2::new(90.0, 100.0)), MOUSE_RADIUS, RELAX_DIVISOR);
    far.update(Some(Vec2::new(10.0, 100.0)), MOUSE_RADIUS, RELAX_DIVISOR);
    assert!(near.offset().length() > far.offset().length());
}

#[test]
fn coincident_pointer_stays_finite() {
    let anchor = Vec2::new(250.0, 250.0);
    let mut p = Particle::new(anchor, PARTICLE_RADIUS, 12.0);
    p.update(Some(anchor), MOUSE_RADIUS, RELAX_DIVISOR);
    assert!(p.pos.is_finite());
    // Full force straight up.
    assert_eq!(p.pos, Vec2::new(250.0, 238.0));
}

#[test]
fn relaxation_is_monotonic_and_lands_on_anchor() {
    for pointer in [None, Some(Vec2::new(10_000.0, 10_000.0))] {
        let anchor = Vec2::new(50.0, 50.0);
        let mut p = Particle::new(anchor, PARTICLE_RADIUS, 5.0);
        p.pos = anchor + Vec2::new(40.0, -30.0);

        let mut prev = p.offset().length();
        let mut frames = 0;
        while p.pos != anchor {
            p.update(pointer, MOUSE_RADIUS, RELAX_DIVISOR);
            let cur = p.offset().length();
            assert!(cur < prev, "offset grew from {prev} to {cur}");
            prev = cur;
            frames += 1;
            assert!(frames < 500, "relaxation did not terminate");
        }
        assert_eq!(p.offset(), Vec2::ZERO);
    }
}

#[test]
fn pointer_at_exact_radius_does_not_repel() {
    let anchor = Vec2::new(0.0, 0.0);
    let mut p = Particle::new(anchor, PARTICLE_RADIUS, 30.0);
    p.update(Some(Vec2::new(MOUSE_RADIUS, 0.0)), MOUSE_RADIUS, RELAX_DIVISOR);
    assert_eq!(p.pos, anchor);
}

#[test]
fn spacing_below_particle_radius_is_rejected_before_allocating() {
    let cfg = FieldConfig::default().with_grid_spacing(0.001);
    let result = Simulation::new(cfg, Viewport::new(1920.0, 1080.0), Theme::Default, 1);
    assert!(matches!(
        result,
        Err(ConfigError::SpacingBelowRadius { .. })
    ));
}

#[test]
fn huge_viewport_is_capped_at_max_particles() {
    let field = build(1.0e9, 1.0e9, GRID_SPACING);
    assert!(field.len() <= MAX_PARTICLES, "got {}", field.len());
    assert!(!field.is_empty());

    let field = build(20_000.0, 20_000.0, PARTICLE_RADIUS);
    assert!(field.len() <= MAX_PARTICLES);
    let cols = grid_steps(20_000.0, PARTICLE_RADIUS);
    assert_eq!(field.len() % cols, 0, "only whole rows are dropped");
}

#[test]
fn capped_grid_leaves_ordinary_grids_alone() {
    assert_eq!(capped_grid(40, 23), (40, 23));
    assert_eq!(capped_grid(0, 5), (0, 5));
    assert_eq!(capped_grid(MAX_PARTICLES * 3, 7), (MAX_PARTICLES, 1));
    let (c, r) = capped_grid(10_001, 10_001);
    assert_eq!(c, 10_001);
    assert!(c * r <= MAX_PARTICLES);
}
