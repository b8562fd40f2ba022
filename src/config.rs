use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Host-tunable viewer options. Angles are in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub drag_sensitivity: f32,
    pub zoom_speed: f32,
    pub initial_zoom: f32,
    pub fov: f32,
    pub device_orientation: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            min_pitch: DEFAULT_MIN_PITCH_DEG,
            max_pitch: DEFAULT_MAX_PITCH_DEG,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            initial_zoom: DEFAULT_ZOOM,
            fov: DEFAULT_FOV_DEG,
            device_orientation: false,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

impl ViewerConfig {
    /// Parse optional host JSON; `None` or blank input yields the defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, ConfigError> {
        let cfg = match json.map(str::trim) {
            Some(s) if !s.is_empty() => serde_json::from_str::<Self>(s)
                .map_err(|e| ConfigError::Format(e.to_string()))?,
            _ => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("minZoom", self.min_zoom)?;
        positive("maxZoom", self.max_zoom)?;
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        let pitch_ok = self.min_pitch.is_finite()
            && self.max_pitch.is_finite()
            && self.min_pitch >= -90.0
            && self.max_pitch <= 90.0
            && self.min_pitch <= self.max_pitch;
        if !pitch_ok {
            return Err(ConfigError::PitchRange {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        positive("dragSensitivity", self.drag_sensitivity)?;
        positive("zoomSpeed", self.zoom_speed)?;
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::Fov(self.fov));
        }
        positive("initialZoom", self.initial_zoom)?;
        Ok(())
    }

    /// Starting distance, pulled into the configured zoom range.
    #[inline]
    pub fn clamped_initial_zoom(&self) -> f32 {
        self.initial_zoom.clamp(self.min_zoom, self.max_zoom)
    }

    #[inline]
    pub fn min_pitch_rad(&self) -> f32 {
        self.min_pitch.to_radians()
    }

    #[inline]
    pub fn max_pitch_rad(&self) -> f32 {
        self.max_pitch.to_radians()
    }
}
