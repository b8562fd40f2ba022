use crate::constants::NO_INFO_TEXT;
use crate::tour::{Hotspot, HotspotContent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn heading(self) -> &'static str {
        match self {
            MediaKind::Audio => "Audio Guide",
            MediaKind::Video => "Video Content",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            MediaKind::Audio => "Play Audio",
            MediaKind::Video => "Play Video",
        }
    }
}

/// Play button state for a media hotspot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance<'a> {
    Playable(&'a str),
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayBody<'a> {
    Text(&'a str),
    Media {
        kind: MediaKind,
        affordance: Affordance<'a>,
    },
}

/// Everything the hotspot panel displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayContent<'a> {
    pub hotspot_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub body: OverlayBody<'a>,
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn media(kind: MediaKind, src: &Option<String>) -> OverlayBody<'_> {
    let affordance = match non_blank(src) {
        Some(url) => Affordance::Playable(url),
        None => Affordance::Unavailable,
    };
    OverlayBody::Media { kind, affordance }
}

/// Panel content for a selected hotspot.
pub fn overlay_content(hotspot: &Hotspot) -> OverlayContent<'_> {
    let body = match &hotspot.content {
        HotspotContent::Info { text } => OverlayBody::Text(non_blank(text).unwrap_or(NO_INFO_TEXT)),
        HotspotContent::Audio { src } => media(MediaKind::Audio, src),
        HotspotContent::Video { src } => media(MediaKind::Video, src),
    };
    OverlayContent {
        hotspot_id: &hotspot.id,
        title: &hotspot.title,
        description: &hotspot.description,
        body,
    }
}
