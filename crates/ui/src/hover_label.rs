//! Name labels floating next to hovered markers.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::catalog::city;
use atlas::config::MARKER_LABEL_OFFSET;
use atlas::hover::MarkerHover;
use rendering::markers::CityMarker;

use crate::theme::{LABEL_FILL, LABEL_TEXT};

/// World-space point the label is pinned to: a fixed offset above the
/// marker in its own (scaled) local space.
pub fn label_anchor(marker: &GlobalTransform) -> Vec3 {
    marker.transform_point(Vec3::Y * MARKER_LABEL_OFFSET)
}

pub fn hover_label_ui(
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    markers: Query<(&CityMarker, &MarkerHover, &GlobalTransform)>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();

    for (marker, hover, transform) in &markers {
        if !hover.is_hovered() {
            continue;
        }
        let Some(record) = city(marker.0) else {
            continue;
        };
        // Err when the anchor is behind the camera or outside the viewport.
        let Ok(screen) = camera.world_to_viewport(camera_transform, label_anchor(transform))
        else {
            continue;
        };

        egui::Area::new(egui::Id::new(("marker_label", marker.0 .0)))
            .fixed_pos(egui::pos2(screen.x, screen.y))
            .interactable(false)
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(LABEL_FILL)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(4))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(record.name).strong().color(LABEL_TEXT));
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_anchor_above_idle_marker() {
        let marker = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, 1.0));
        let anchor = label_anchor(&marker);
        assert!(anchor.abs_diff_eq(Vec3::new(0.0, 0.1, 1.0), 1e-6), "got {anchor:?}");
    }

    #[test]
    fn test_label_anchor_follows_hover_scale() {
        let marker = GlobalTransform::from(
            Transform::from_xyz(1.0, 0.0, 0.0).with_scale(Vec3::splat(MarkerHover::Hovered.scale())),
        );
        let anchor = label_anchor(&marker);
        assert!(anchor.abs_diff_eq(Vec3::new(1.0, 0.15, 0.0), 1e-6), "got {anchor:?}");
    }
}
