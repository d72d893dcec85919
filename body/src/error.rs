use thiserror::Error;

/// Contract violations detected when a body or its configuration is built.
///
/// The per-tick path never produces these; everything a tick touches has been
/// validated up front.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    /// A position component was NaN or infinite.
    #[error("position must be finite, got ({x}, {y}, {z})")]
    NonFinitePosition { x: f32, y: f32, z: f32 },
    /// Width or height was not a positive, finite number.
    #[error("body extents must be positive and finite, got width {width} height {height}")]
    InvalidShape { width: f32, height: f32 },
    /// Eye height fell outside the body.
    #[error("eye height {eye_height} must lie within [0, {height}]")]
    InvalidEyeHeight { eye_height: f32, height: f32 },
    /// A movement setting was negative or not finite.
    #[error("movement setting `{name}` must be finite and non-negative, got {value}")]
    InvalidSetting { name: &'static str, value: f32 },
    /// The spawn area has no room to place a body.
    #[error("spawn area must have positive, finite extents, got {width} x {length}")]
    EmptySpawnArea { width: f32, length: f32 },
    /// Terrain height used for spawning was not finite.
    #[error("terrain height must be finite, got {0}")]
    NonFiniteTerrain(f32),
}
