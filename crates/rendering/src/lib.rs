use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod globe;
pub mod markers;

use atlas::continent::ContinentFilter;
use atlas::ViewStateSet;
use camera::LeftClickDrag;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .init_resource::<LeftClickDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    globe::spawn_globe,
                    markers::setup_marker_assets,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_left_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    markers::sync_markers
                        .run_if(resource_changed::<ContinentFilter>)
                        .after(ViewStateSet),
                    markers::apply_hover_visuals,
                )
                    .chain(),
            )
            .add_systems(Update, globe::apply_earth_texture);
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    // Directional light in front of the starting view, aimed at the globe centre
    commands.spawn((
        DirectionalLight {
            illuminance: 4000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
