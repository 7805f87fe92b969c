use thiserror::Error;

/// Rejected [`FieldConfig`](crate::FieldConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid spacing must be a positive finite number, got {0}")]
    GridSpacing(f32),
    #[error("particle radius must be a positive finite number, got {0}")]
    ParticleRadius(f32),
    #[error("grid spacing {spacing} is smaller than the particle radius {radius}")]
    SpacingBelowRadius { spacing: f32, radius: f32 },
    #[error("density range must satisfy 0 <= min < max, got [{min}, {max})")]
    DensityRange { min: f32, max: f32 },
    #[error("mouse radius must be a positive finite number, got {0}")]
    MouseRadius(f32),
    #[error("relax divisor must be at least 1, got {0}")]
    RelaxDivisor(f32),
    #[error("connection distance must be a positive finite number, got {0}")]
    ConnectionDistance(f32),
    #[error("pointer smoothing must be in (0, 1], got {0}")]
    PointerSmoothing(f32),
    #[error("trail must hold at least one point")]
    EmptyTrail,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);
