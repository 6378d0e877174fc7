use bevy_egui::{egui, EguiContexts};

/// Background of the hover label bubble.
pub const LABEL_FILL: egui::Color32 = egui::Color32::WHITE;
/// Text colour inside the hover label bubble.
pub const LABEL_TEXT: egui::Color32 = egui::Color32::BLACK;

pub fn apply_globe_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark slate panels so the globe stays the brightest thing on screen
    let panel = egui::Color32::from_rgb(28, 32, 44);
    let inactive = egui::Color32::from_rgb(46, 52, 68);
    let hover = egui::Color32::from_rgb(66, 78, 104);
    let active = egui::Color32::from_rgb(255, 165, 0);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    // Selection highlight matches the idle marker colour
    style.visuals.selection.bg_fill = active.gamma_multiply(0.6);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let widget_rounding = egui::CornerRadius::same(4);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
