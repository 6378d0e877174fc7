//! The earth sphere and its texture.
//!
//! The texture is requested once at startup. Until it has loaded (and for
//! good, if it fails to load) the globe is drawn with a flat ocean colour.

use bevy::asset::LoadState;
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use atlas::config::{EARTH_TEXTURE_PATH, GLOBE_RADIUS, GLOBE_SECTORS, GLOBE_STACKS};

/// Colour of the globe while untextured.
const UNTEXTURED_COLOR: Color = Color::srgb(0.16, 0.32, 0.55);

/// Rotation from the UV sphere's mesh frame (poles on Z, u = 0 at +X) into
/// globe space (poles on Y), so that texel (lat, lon) lands on
/// `project(lat, lon, GLOBE_RADIUS)`. Proper rotation: nothing is mirrored.
pub fn globe_orientation() -> Quat {
    Quat::from_mat3(&Mat3::from_cols(Vec3::NEG_X, Vec3::Z, Vec3::Y))
}

/// Marker component on the globe mesh entity.
#[derive(Component)]
pub struct Globe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Applied,
    Failed,
}

/// Handles for the earth texture and the globe material it is applied to.
#[derive(Resource)]
pub struct EarthTexture {
    pub image: Handle<Image>,
    pub material: Handle<StandardMaterial>,
    pub status: TextureStatus,
}

pub fn spawn_globe(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let image = asset_server.load_with_settings(
        EARTH_TEXTURE_PATH,
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        },
    );

    let material = materials.add(StandardMaterial {
        base_color: UNTEXTURED_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    });

    // The globe stays pickable so that it occludes markers on the far side.
    commands.spawn((
        Globe,
        Name::new("Globe"),
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(GLOBE_SECTORS, GLOBE_STACKS))),
        MeshMaterial3d(material.clone()),
        Transform::from_rotation(globe_orientation()),
    ));

    commands.insert_resource(EarthTexture {
        image,
        material,
        status: TextureStatus::Pending,
    });
}

/// System: once the earth texture finishes loading, attach it to the globe
/// material. A failed load is logged and leaves the globe untextured.
pub fn apply_earth_texture(
    asset_server: Res<AssetServer>,
    mut texture: ResMut<EarthTexture>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if texture.status != TextureStatus::Pending {
        return;
    }

    match asset_server.get_load_state(&texture.image) {
        Some(LoadState::Loaded) => {
            let Some(material) = materials.get_mut(&texture.material) else {
                return;
            };
            material.base_color = Color::WHITE;
            material.base_color_texture = Some(texture.image.clone());
            texture.status = TextureStatus::Applied;
            info!("Earth texture applied");
        }
        Some(LoadState::Failed(err)) => {
            warn!(
                "Earth texture '{}' failed to load, rendering untextured globe: {}",
                EARTH_TEXTURE_PATH, err
            );
            texture.status = TextureStatus::Failed;
        }
        _ => {}
    }
}
