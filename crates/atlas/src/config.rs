/// Radius of the rendered globe in world units. Markers are projected onto
/// a sphere of this radius.
pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_SECTORS: u32 = 32;
pub const GLOBE_STACKS: u32 = 32;

/// Equirectangular earth texture (2:1, 0° longitude at the horizontal centre),
/// relative to the binary crate's `assets/` directory.
pub const EARTH_TEXTURE_PATH: &str = "textures/earth.jpg";

pub const MARKER_RADIUS: f32 = 0.02;
pub const MARKER_SECTORS: u32 = 16;
pub const MARKER_STACKS: u32 = 16;

/// Uniform scale applied to a marker while the pointer is over it.
pub const MARKER_HOVER_SCALE: f32 = 1.5;

/// Offset (in the marker's local space) at which the hover label is anchored.
pub const MARKER_LABEL_OFFSET: f32 = 0.1;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_START_DISTANCE: f32 = 2.0;
pub const CAMERA_MIN_DISTANCE: f32 = 1.2;
pub const CAMERA_MAX_DISTANCE: f32 = 6.0;
