use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use atlas::ViewStateSet;

pub mod detail_panel;
pub mod hover_label;
pub mod sidebar;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_globe_theme)
            .add_systems(
                Update,
                // Panels claim screen space before the floating labels are placed.
                (
                    sidebar::sidebar_ui,
                    detail_panel::detail_panel_ui,
                    hover_label::hover_label_ui,
                )
                    .chain()
                    .before(ViewStateSet),
            );
    }
}
