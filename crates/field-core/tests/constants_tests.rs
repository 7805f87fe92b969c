// Host-side tests for the tuning constants and their geometric relationships.

use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(GRID_SPACING > 0.0);
    assert!(PARTICLE_RADIUS > 0.0);
    assert!(DENSITY_MIN >= 1.0 && DENSITY_MAX > DENSITY_MIN);
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    assert!(CONNECTION_ALPHA > 0.0 && CONNECTION_ALPHA <= 1.0);
    assert!(TRAIL_ALPHA > 0.0 && TRAIL_ALPHA <= 1.0);
    assert!(RELAX_DIVISOR > 1.0);
    assert!(TRAIL_LEN > 0);
    assert!(GRID_SPACING >= PARTICLE_RADIUS);
    assert!(grid_steps(7680.0, GRID_SPACING) * grid_steps(4320.0, GRID_SPACING) < MAX_PARTICLES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn resting_grid_links_neighbours_but_not_diagonals() {
    let spacing_sq = GRID_SPACING * GRID_SPACING;
    assert!(spacing_sq < CONNECTION_DISTANCE_SQ);
    assert!(2.0 * spacing_sq > CONNECTION_DISTANCE_SQ);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_reaches_beyond_one_cell() {
    assert!(MOUSE_RADIUS > GRID_SPACING);
    assert!(CURSOR_RADIUS > TRAIL_DOT_RADIUS);
    assert!(RELAX_SNAP_EPSILON < PARTICLE_RADIUS);
}
