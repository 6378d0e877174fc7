//! City markers: spawning, picking, and hover visuals.
//!
//! Marker entities exist only for cities that pass the current
//! [`ContinentFilter`]. Each carries its own [`MarkerHover`] state, so a
//! marker that stays visible across a filter change keeps its hover state.

use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use std::collections::HashSet;

use atlas::catalog::{city, CityId};
use atlas::config::{GLOBE_RADIUS, MARKER_RADIUS, MARKER_SECTORS, MARKER_STACKS};
use atlas::continent::ContinentFilter;
use atlas::filter::visible_city_ids;
use atlas::hover::{MarkerHover, PointerTransition};
use atlas::view_state::SelectCity;

const IDLE_COLOR: Color = Color::srgb(1.0, 0.647, 0.0); // orange
const HOVERED_COLOR: Color = Color::srgb(1.0, 0.412, 0.706); // hot pink

/// Links a marker entity to the catalog city it represents.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityMarker(pub CityId);

/// Shared mesh and materials for every marker.
#[derive(Resource)]
pub struct MarkerAssets {
    pub mesh: Handle<Mesh>,
    pub idle_material: Handle<StandardMaterial>,
    pub hovered_material: Handle<StandardMaterial>,
}

impl MarkerAssets {
    pub fn material_for(&self, hover: MarkerHover) -> Handle<StandardMaterial> {
        match hover {
            MarkerHover::Idle => self.idle_material.clone(),
            MarkerHover::Hovered => self.hovered_material.clone(),
        }
    }
}

pub fn setup_marker_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(MARKER_RADIUS).mesh().uv(MARKER_SECTORS, MARKER_STACKS));
    let idle_material = materials.add(StandardMaterial {
        base_color: IDLE_COLOR,
        unlit: true,
        ..default()
    });
    let hovered_material = materials.add(StandardMaterial {
        base_color: HOVERED_COLOR,
        unlit: true,
        ..default()
    });
    commands.insert_resource(MarkerAssets {
        mesh,
        idle_material,
        hovered_material,
    });
}

/// System: reconcile marker entities with the current continent filter.
///
/// Runs whenever [`ContinentFilter`] changes (including its first insertion).
pub fn sync_markers(
    mut commands: Commands,
    filter: Res<ContinentFilter>,
    assets: Res<MarkerAssets>,
    existing: Query<(Entity, &CityMarker)>,
) {
    let visible: HashSet<CityId> = visible_city_ids(*filter).into_iter().collect();

    let mut kept = HashSet::new();
    let mut despawned = 0usize;
    for (entity, marker) in &existing {
        if visible.contains(&marker.0) {
            kept.insert(marker.0);
        } else {
            commands.entity(entity).despawn_recursive();
            despawned += 1;
        }
    }

    let mut spawned = 0usize;
    for id in visible_city_ids(*filter) {
        if kept.contains(&id) {
            continue;
        }
        let Some(record) = city(id) else {
            continue;
        };
        commands
            .spawn((
                CityMarker(id),
                MarkerHover::Idle,
                Name::new(record.name),
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.idle_material.clone()),
                Transform::from_translation(record.coord.project(GLOBE_RADIUS)),
            ))
            .observe(on_marker_over)
            .observe(on_marker_out)
            .observe(on_marker_click);
        spawned += 1;
    }

    debug!(
        "Markers reconciled for filter {}: {} kept, {} spawned, {} despawned",
        *filter,
        kept.len(),
        spawned,
        despawned
    );
}

fn on_marker_over(trigger: Trigger<Pointer<Over>>, mut markers: Query<&mut MarkerHover>) {
    if let Ok(mut hover) = markers.get_mut(trigger.entity()) {
        hover.apply(PointerTransition::Enter);
    }
}

fn on_marker_out(trigger: Trigger<Pointer<Out>>, mut markers: Query<&mut MarkerHover>) {
    if let Ok(mut hover) = markers.get_mut(trigger.entity()) {
        hover.apply(PointerTransition::Leave);
    }
}

fn on_marker_click(
    trigger: Trigger<Pointer<Click>>,
    markers: Query<&CityMarker>,
    mut select: EventWriter<SelectCity>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    if let Ok(marker) = markers.get(trigger.entity()) {
        select.send(SelectCity(marker.0));
    }
}

/// System: scale and recolour markers whose hover state changed.
pub fn apply_hover_visuals(
    assets: Res<MarkerAssets>,
    mut markers: Query<
        (
            &MarkerHover,
            &mut Transform,
            &mut MeshMaterial3d<StandardMaterial>,
        ),
        Changed<MarkerHover>,
    >,
) {
    for (hover, mut transform, mut material) in &mut markers {
        transform.scale = Vec3::splat(hover.scale());
        material.0 = assets.material_for(*hover);
    }
}
