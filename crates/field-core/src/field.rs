//! Grid of anchored particles and their per-frame physics.

use crate::config::FieldConfig;
use crate::constants::{MAX_PARTICLES, RELAX_SNAP_EPSILON};
use glam::Vec2;
use rand::Rng;

/// Size of the drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative or non-finite extents collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    anchor: Vec2,
    pub radius: f32,
    density: f32,
}

impl Particle {
    pub fn new(anchor: Vec2, radius: f32, density: f32) -> Self {
        Self {
            pos: anchor,
            anchor,
            radius,
            density,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.pos - self.anchor
    }

    /// Advance one frame: repel from `pointer` when inside `mouse_radius`,
    /// otherwise ease back toward the anchor.
    pub fn update(&mut self, pointer: Option<Vec2>, mouse_radius: f32, relax_divisor: f32) {
        if let Some(p) = pointer {
            let away = self.pos - p;
            let distance = away.length();
            if distance < mouse_radius {
                // Coincident with the pointer: no direction to push along.
                let dir = away.try_normalize().unwrap_or(Vec2::NEG_Y);
                let force = (mouse_radius - distance) / mouse_radius;
                self.pos += dir * force * self.density;
                return;
            }
        }
        self.relax(relax_divisor);
    }

    fn relax(&mut self, divisor: f32) {
        let offset = self.offset();
        if offset == Vec2::ZERO {
            return;
        }
        if offset.length_squared() < RELAX_SNAP_EPSILON * RELAX_SNAP_EPSILON {
            self.pos = self.anchor;
        } else {
            self.pos -= offset / divisor;
        }
    }
}

/// Number of grid lines along one axis: anchors at `i * spacing` for every
/// `i * spacing < extent + spacing`.
#[inline]
pub fn grid_steps(extent: f32, spacing: f32) -> usize {
    ((extent + spacing) / spacing).ceil() as usize
}

/// Clamp a `cols x rows` grid to at most [`MAX_PARTICLES`], dropping the
/// bottom rows first.
pub fn capped_grid(cols: usize, rows: usize) -> (usize, usize) {
    let cols = cols.min(MAX_PARTICLES);
    let max_rows = if cols == 0 { rows } else { MAX_PARTICLES / cols };
    if rows > max_rows {
        log::warn!(
            "[field] {cols}x{rows} grid exceeds {MAX_PARTICLES} particles; keeping {max_rows} rows"
        );
        (cols, max_rows)
    } else {
        (cols, rows)
    }
}

/// Particles laid out row-major over the viewport plus one overflow row and
/// column.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    spacing: f32,
    generation: u64,
}

impl ParticleField {
    pub fn empty() -> Self {
        Self {
            particles: Vec::new(),
            viewport: Viewport::default(),
            spacing: 0.0,
            generation: 0,
        }
    }

    /// Discard every particle and lay out a fresh grid for `viewport`.
    pub fn regrid(&mut self, viewport: Viewport, config: &FieldConfig, rng: &mut impl Rng) {
        let spacing = config.grid_spacing;
        let (cols, rows) = capped_grid(
            grid_steps(viewport.width, spacing),
            grid_steps(viewport.height, spacing),
        );
        self.particles = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            let y = row as f32 * spacing;
            for col in 0..cols {
                let x = col as f32 * spacing;
                let density = rng.gen_range(config.density_min..config.density_max);
                self.particles
                    .push(Particle::new(Vec2::new(x, y), config.particle_radius, density));
            }
        }
        self.viewport = viewport;
        self.spacing = spacing;
        self.generation += 1;
        log::debug!(
            "[field] regrid #{} {:.0}x{:.0} spacing={} -> {}x{} = {} particles",
            self.generation,
            viewport.width,
            viewport.height,
            spacing,
            cols,
            rows,
            self.particles.len()
        );
    }

    pub fn update(&mut self, pointer: Option<Vec2>, config: &FieldConfig) {
        for p in &mut self.particles {
            p.update(pointer, config.mouse_radius, config.relax_divisor);
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

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Incremented on every regrid; two fields with different generations
    /// share no particles.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
