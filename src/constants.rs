/// Viewer tuning constants.
///
/// Defaults for the configurable bounds live here too; `ViewerConfig`
/// overlays host-supplied values on top of them.

// Panorama sphere
pub const SPHERE_RADIUS: f32 = 500.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 60;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 40;

// Camera
pub const DEFAULT_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 1000.0; // must enclose the sphere at max zoom
pub const DEFAULT_ZOOM: f32 = 0.1; // eye distance from the sphere center

// Orbit / zoom bounds
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;
pub const DEFAULT_MAX_ZOOM: f32 = 10.0;
pub const DEFAULT_MIN_PITCH_DEG: f32 = -85.0;
pub const DEFAULT_MAX_PITCH_DEG: f32 = 85.0;
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.5;
pub const DEFAULT_ZOOM_SPEED: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.95; // distance multiplier per zoom-in notch

// Keyboard
pub const KEY_ORBIT_STEP_DEG: f32 = 5.0;

// Markers
pub const MARKER_RADIUS: f32 = 0.1;
pub const MARKER_SEGMENTS: u32 = 16;
pub const MARKER_SPIN_RATE: f32 = 0.5; // radians per second
pub const MARKER_OPACITY: f32 = 0.8;
pub const HOVER_SCALE: f32 = 1.2;
pub const GLOW_SCALE: f32 = 1.5;
pub const GLOW_SCALE_HOVERED: f32 = 2.0;
pub const GLOW_OPACITY: f32 = 0.2;
pub const GLOW_PULSE_AMPLITUDE: f32 = 0.08; // fraction of glow scale
pub const GLOW_PULSE_RATE: f32 = 2.0; // radians per second
pub const LABEL_OFFSET_Y: f32 = 0.2; // world units above the marker

// Palette
pub const MARKER_COLOR: [f32; 3] = [0.231, 0.510, 0.965]; // #3b82f6
pub const MARKER_HOVER_COLOR: [f32; 3] = [1.0, 0.420, 0.208]; // #ff6b35
pub const FALLBACK_PANORAMA_RGBA: [u8; 4] = [82, 88, 98, 255]; // neutral slate

// Picking
pub const MIN_PICK_RADIUS_PX: f32 = 8.0; // keeps distant markers clickable
pub const CLICK_SLOP_PX: f32 = 4.0; // farther than this is a drag, not a click

// Overlay copy
pub const NO_INFO_TEXT: &str = "No additional information available.";
pub const LOADING_TEXT: &str = "Loading VR Experience...";
pub const FALLBACK_TEXT: &str = "Panorama unavailable";
