use crate::constants::*;
use crate::error::ConfigError;

/// Physics and layout parameters of a particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub grid_spacing: f32,
    pub particle_radius: f32,
    pub density_min: f32,
    pub density_max: f32,
    pub mouse_radius: f32,
    pub relax_divisor: f32,
    pub connection_distance_sq: f32,
    pub pointer_smoothing: f32,
    pub trail_len: usize,
    /// Use the bucketed connection pass instead of the all-pairs scan.
    pub spatial_index: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            particle_radius: PARTICLE_RADIUS,
            density_min: DENSITY_MIN,
            density_max: DENSITY_MAX,
            mouse_radius: MOUSE_RADIUS,
            relax_divisor: RELAX_DIVISOR,
            connection_distance_sq: CONNECTION_DISTANCE_SQ,
            pointer_smoothing: POINTER_SMOOTHING,
            trail_len: TRAIL_LEN,
            spatial_index: true,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl FieldConfig {
    pub fn with_grid_spacing(mut self, spacing: f32) -> Self {
        self.grid_spacing = spacing;
        self
    }

    pub fn with_spatial_index(mut self, enabled: bool) -> Self {
        self.spatial_index = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.grid_spacing) {
            return Err(ConfigError::GridSpacing(self.grid_spacing));
        }
        if !positive(self.particle_radius) {
            return Err(ConfigError::ParticleRadius(self.particle_radius));
        }
        if self.grid_spacing < self.particle_radius {
            return Err(ConfigError::SpacingBelowRadius {
                spacing: self.grid_spacing,
                radius: self.particle_radius,
            });
        }
        let (min, max) = (self.density_min, self.density_max);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min < max) {
            return Err(ConfigError::DensityRange { min, max });
        }
        if !positive(self.mouse_radius) {
            return Err(ConfigError::MouseRadius(self.mouse_radius));
        }
        if !(self.relax_divisor.is_finite() && self.relax_divisor >= 1.0) {
            return Err(ConfigError::RelaxDivisor(self.relax_divisor));
        }
        if !positive(self.connection_distance_sq) {
            return Err(ConfigError::ConnectionDistance(self.connection_distance_sq));
        }
        if !(self.pointer_smoothing > 0.0 && self.pointer_smoothing <= 1.0) {
            return Err(ConfigError::PointerSmoothing(self.pointer_smoothing));
        }
        if self.trail_len == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_spacing() {
        for s in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let cfg = FieldConfig::default().with_grid_spacing(s);
            assert!(matches!(cfg.validate(), Err(ConfigError::GridSpacing(_))));
        }
    }

    #[test]
    fn rejects_spacing_tighter_than_a_particle() {
        for s in [0.001, 1.0, PARTICLE_RADIUS - 0.5] {
            let cfg = FieldConfig::default().with_grid_spacing(s);
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::SpacingBelowRadius { .. })
            ));
        }
        let cfg = FieldConfig::default().with_grid_spacing(PARTICLE_RADIUS);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_density_range() {
        let cfg = FieldConfig {
            density_min: 10.0,
            density_max: 5.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DensityRange { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_smoothing() {
        for k in [0.0, 1.5, f32::NAN] {
            let cfg = FieldConfig {
                pointer_smoothing: k,
                ..FieldConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::PointerSmoothing(_))
            ));
        }
    }
}
