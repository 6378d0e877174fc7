//! Egui input guard: prevents UI interaction from driving the globe camera.
//!
//! When egui (sidebar, detail panel, selector popup) is handling pointer
//! input, camera systems should skip processing so that scrolling the
//! continent list or dragging inside a panel does not orbit the globe.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer — i.e. the cursor is over an
/// egui panel or egui is actively handling a drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
