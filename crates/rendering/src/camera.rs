use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use atlas::config::{
    CAMERA_FOV_DEGREES, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_START_DISTANCE,
};

use crate::egui_input_guard::egui_wants_pointer;

const ZOOM_SPEED: f32 = 0.1;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // stop short of the poles
const ORBIT_SENSITIVITY: f32 = 0.005;
/// World units panned per pixel at distance 1.
const PAN_SENSITIVITY: f32 = 0.001;
/// How far the focus may drift from the globe centre.
const MAX_FOCUS_OFFSET: f32 = 1.0;

/// Orbital camera model: camera orbits a focus point near the globe centre.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped to +/- MAX_PITCH)
    pub pitch: f32,
    /// Distance from the focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Looking down -Z from (0, 0, CAMERA_START_DISTANCE)
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_START_DISTANCE,
        }
    }
}

#[derive(Resource, Default)]
pub struct CameraPanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial
/// press, it becomes an orbit drag.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once mouse has moved beyond threshold.
    pub is_dragging: bool,
}

const LEFT_DRAG_THRESHOLD: f32 = 4.0;

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(orbit_position(&orbit)).looking_at(orbit.focus, Vec3::Y),
    ));
    commands.insert_resource(orbit);
    commands.init_resource::<CameraPanDrag>();
}

/// Camera position for an orbit state; the camera always looks at `orbit.focus`.
pub fn orbit_position(orbit: &OrbitCamera) -> Vec3 {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    orbit.focus + Vec3::new(x, y, z)
}

impl OrbitCamera {
    /// Rotate by a screen-space drag delta in pixels.
    pub fn rotate_by(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move the focus in the view plane by a screen-space drag delta in pixels.
    /// Content follows the pointer, as with a map drag.
    pub fn pan_by(&mut self, delta: Vec2) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        let up = Vec3::new(-sin_pitch * sin_yaw, cos_pitch, -sin_pitch * cos_yaw);
        let scale = PAN_SENSITIVITY * self.distance;
        let focus = self.focus + (-delta.x * right + delta.y * up) * scale;
        self.focus = focus.clamp_length_max(MAX_FOCUS_OFFSET);
    }

    /// Zoom by scroll lines; positive values move closer.
    pub fn zoom_by(&mut self, lines: f32) {
        let factor = 1.0 - lines * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform =
        Transform::from_translation(orbit_position(&orbit)).looking_at(orbit.focus, Vec3::Y);
}

/// Left-mouse drag: orbit (with threshold so marker clicks are not eaten).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging {
                let dist = (pos - left_drag.start_pos).length();
                if dist > LEFT_DRAG_THRESHOLD {
                    left_drag.is_dragging = true;
                    left_drag.last_pos = pos;
                }
            }

            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                orbit.rotate_by(delta);
                left_drag.last_pos = pos;
            }
        }
    }
}

/// Right-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraPanDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            if delta != Vec2::ZERO {
                orbit.pan_by(delta);
            }
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom_by(dy);
    }
}
