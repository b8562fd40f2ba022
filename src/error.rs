use thiserror::Error;

/// Problems with a tour description handed to the viewer.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("malformed tour description: {0}")]
    Format(#[from] serde_json::Error),
    #[error("hotspot id `{id}` appears more than once in tour `{tour}`")]
    DuplicateHotspot { tour: String, id: String },
}

/// Rejected viewer configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("malformed viewer config: {0}")]
    Format(String),
    #[error("zoom range is inverted or non-positive: [{min}, {max}]")]
    ZoomRange { min: f32, max: f32 },
    #[error("pitch range must satisfy -90 <= min <= max <= 90, got [{min}, {max}]")]
    PitchRange { min: f32, max: f32 },
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("field of view must lie in (0, 180) degrees, got {0}")]
    Fov(f32),
}

/// Panorama or media asset that could not be turned into something drawable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssetError {
    #[error("could not decode `{url}`: {reason}")]
    Decode { url: String, reason: String },
    #[error("image {width}x{height} exceeds the texture limit of {limit}")]
    TooLarge { width: u32, height: u32, limit: u32 },
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Tour(#[from] TourError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
