//! Owned simulation state and the per-frame step.
//!
//! Everything the animation loop reads or writes lives in [`Simulation`]:
//! the particle grid, the pointer and its trail, the active palette and the
//! RNG used for particle densities. Host events (`resize`, `pointer_moved`,
//! `pointer_left`, `set_theme`) are plain method calls between frames, and
//! [`Simulation::step`] turns the current state into one [`Frame`] of draw
//! commands.

use crate::config::FieldConfig;
use crate::connect::{connections_brute, link_alpha, Link, SpatialIndex};
use crate::constants::*;
use crate::error::ConfigError;
use crate::field::{ParticleField, Viewport};
use crate::frame::{Frame, Glow, Shape};
use crate::pointer::{PointerState, Trail};
use crate::theme::{Palette, Theme};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Simulation {
    config: FieldConfig,
    theme: Theme,
    palette: Palette,
    viewport: Viewport,
    field: ParticleField,
    pointer: PointerState,
    trail: Trail,
    rng: StdRng,
    index: SpatialIndex,
    links: Vec<Link>,
}

impl Simulation {
    pub fn new(
        config: FieldConfig,
        viewport: Viewport,
        theme: Theme,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let trail = Trail::new(config.trail_len);
        let mut sim = Self {
            config,
            theme,
            palette: theme.palette(),
            viewport,
            field: ParticleField::empty(),
            pointer: PointerState::new(viewport.center()),
            trail,
            rng: StdRng::seed_from_u64(seed),
            index: SpatialIndex::new(),
            links: Vec::new(),
        };
        sim.reset();
        Ok(sim)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Links found by the most recent [`step`](Self::step).
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Switch palette and restart from a fresh grid with no pointer history.
    pub fn set_theme(&mut self, theme: Theme) {
        self.apply_theme(theme);
        self.reset();
    }

    fn apply_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            log::info!("[theme] {} -> {}", self.theme, theme);
        }
        self.theme = theme;
        self.palette = theme.palette();
    }

    /// Rebuild geometry and forget the pointer. The palette is untouched.
    pub fn reset(&mut self) {
        self.pointer = PointerState::new(self.viewport.center());
        self.trail.clear();
        self.links.clear();
        self.field.regrid(self.viewport, &self.config, &mut self.rng);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.field.regrid(self.viewport, &self.config, &mut self.rng);
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            log::trace!("[pointer] ignoring non-finite position {pos}");
            return;
        }
        self.pointer.raw = Some(pos);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.raw = None;
        self.trail.clear();
    }

    /// Advance one frame and write its draw commands into `frame`.
    pub fn step(&mut self, frame: &mut Frame) {
        frame.clear();

        self.field.update(self.pointer.raw, &self.config);
        let particle_fill = self.palette.particle;
        frame
            .background
            .extend(self.field.particles().iter().map(|p| Shape::Circle {
                center: p.pos,
                radius: p.radius,
                fill: particle_fill,
                glow: None,
            }));

        self.connect(frame);

        if let Some(smoothed) = self.pointer.advance(self.config.pointer_smoothing) {
            self.trail.push(smoothed);
            self.draw_cursor(smoothed, frame);
        }
    }

    fn connect(&mut self, frame: &mut Frame) {
        let threshold = self.config.connection_distance_sq;
        let particles = self.field.particles();
        if self.config.spatial_index {
            self.index.connections(particles, threshold, &mut self.links);
        } else {
            connections_brute(particles, threshold, &mut self.links);
        }
        let line = self.palette.line;
        frame.background.extend(self.links.iter().map(|l| Shape::Line {
            from: particles[l.a as usize].pos,
            to: particles[l.b as usize].pos,
            stroke: line.with_alpha(link_alpha(l.dist_sq, threshold, CONNECTION_ALPHA)),
            width: CONNECTION_LINE_WIDTH,
        }));
    }

    fn draw_cursor(&self, smoothed: Vec2, frame: &mut Frame) {
        let color = self.palette.cursor;
        let n = self.trail.len() as f32;
        frame
            .cursor
            .extend(self.trail.iter().enumerate().map(|(i, p)| {
                let recency = i as f32 / n;
                Shape::Circle {
                    center: p,
                    radius: TRAIL_DOT_RADIUS + i as f32 * TRAIL_DOT_RADIUS_STEP,
                    fill: color.with_alpha(recency * TRAIL_ALPHA),
                    glow: None,
                }
            }));
        frame.cursor.push(Shape::Circle {
            center: smoothed,
            radius: CURSOR_RADIUS,
            fill: color.opaque(),
            glow: Some(Glow {
                blur: CURSOR_GLOW_BLUR,
                color: color.opaque(),
            }),
        });
    }
}
