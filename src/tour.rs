//! Tour and hotspot descriptors.
//!
//! A [`Tour`] is handed to the viewer at mount time and never mutated. The JSON
//! shape matches the one the booking site already produces: camelCase keys,
//! hotspots tagged with `"type"` and carrying `content`, `audioUrl` or
//! `videoUrl` depending on that tag.

use crate::error::TourError;
use fnv::FnvHashSet;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Equirectangular panorama URL.
    pub image: String,
    pub duration: String,
    pub price: f64,
    pub rating: f32,
    pub category: String,
    pub region: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Sphere-local coordinates.
    pub position: [f32; 3],
    #[serde(flatten)]
    pub content: HotspotContent,
}

/// What a hotspot surfaces when selected. The payload is optional for every
/// kind; the overlay degrades to a neutral or disabled affordance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HotspotContent {
    Info {
        #[serde(default, rename = "content", skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    Audio {
        #[serde(default, rename = "audioUrl", skip_serializing_if = "Option::is_none")]
        src: Option<String>,
    },
    Video {
        #[serde(default, rename = "videoUrl", skip_serializing_if = "Option::is_none")]
        src: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotspotKind {
    Info,
    Audio,
    Video,
}

impl HotspotContent {
    pub fn kind(&self) -> HotspotKind {
        match self {
            HotspotContent::Info { .. } => HotspotKind::Info,
            HotspotContent::Audio { .. } => HotspotKind::Audio,
            HotspotContent::Video { .. } => HotspotKind::Video,
        }
    }
}

impl Hotspot {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    pub fn kind(&self) -> HotspotKind {
        self.content.kind()
    }
}

impl Tour {
    /// Parse and validate a tour from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, TourError> {
        let tour: Tour = serde_json::from_str(json)?;
        tour.validate()?;
        Ok(tour)
    }

    pub fn to_json(&self) -> Result<String, TourError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Hotspot ids must be unique within a tour.
    pub fn validate(&self) -> Result<(), TourError> {
        let mut seen = FnvHashSet::default();
        for h in &self.hotspots {
            if !seen.insert(h.id.as_str()) {
                return Err(TourError::DuplicateHotspot {
                    tour: self.id.clone(),
                    id: h.id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn hotspot_index(&self, id: &str) -> Option<usize> {
        self.hotspots.iter().position(|h| h.id == id)
    }

    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}

/// A row of the remote destinations table, as handed over by the catalog
/// screen when the user starts a tour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub country: String,
    pub region: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: f64,
    pub duration_minutes: f64,
    pub rating: f32,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub featured: bool,
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const DESTINATION_HIGHLIGHTS: [&str; 4] = [
    "Immersive 360° experience",
    "Interactive hotspots",
    "HD quality visuals",
    "Audio narration",
];

impl From<Destination> for Tour {
    fn from(d: Destination) -> Self {
        let image = d
            .image_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        let hotspots = vec![
            Hotspot {
                id: "h1".into(),
                title: "Main Viewpoint".into(),
                description: format!("The primary viewing area of {}", d.name),
                position: [0.0, 2.0, -5.0],
                content: HotspotContent::Info {
                    text: Some(format!("Welcome to {}. {}", d.name, d.description)),
                },
            },
            Hotspot {
                id: "h2".into(),
                title: "Historical Context".into(),
                description: "Learn about the history and significance".into(),
                position: [3.0, 1.0, 2.0],
                content: HotspotContent::Audio {
                    src: Some("/audio/narration.mp3".into()),
                },
            },
            Hotspot {
                id: "h3".into(),
                title: "Cultural Insights".into(),
                description: "Discover local culture and traditions".into(),
                position: [-2.0, 1.0, 3.0],
                content: HotspotContent::Video {
                    src: Some("/video/culture.mp4".into()),
                },
            },
        ];
        Tour {
            id: d.id,
            title: d.name,
            description: d.description,
            image,
            duration: format!("{} mins", d.duration_minutes.round() as i64),
            price: d.price,
            rating: d.rating,
            category: d.category,
            region: d.region,
            highlights: DESTINATION_HIGHLIGHTS.iter().map(|s| s.to_string()).collect(),
            hotspots,
            featured: d.featured,
        }
    }
}

impl Destination {
    pub fn from_json(json: &str) -> Result<Self, TourError> {
        Ok(serde_json::from_str(json)?)
    }
}
