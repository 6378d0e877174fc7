use bevy::prelude::*;

pub mod catalog;
pub mod config;
pub mod continent;
pub mod filter;
pub mod geo;
pub mod hover;
pub mod selection;
pub mod view_state;


use catalog::CITY_CATALOG;
use continent::ContinentFilter;
use selection::Selection;
use view_state::{CloseDetails, SelectCity, SetContinentFilter};

/// System set for the view-state event handlers. Rendering and UI systems
/// that read [`ContinentFilter`] or [`Selection`] run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewStateSet;

pub struct AtlasPlugin;

impl Plugin for AtlasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContinentFilter>()
            .init_resource::<Selection>()
            .add_event::<SetContinentFilter>()
            .add_event::<SelectCity>()
            .add_event::<CloseDetails>()
            .add_systems(Startup, log_catalog)
            .add_systems(
                Update,
                (
                    view_state::apply_filter_events,
                    view_state::apply_select_events,
                    view_state::apply_close_events,
                )
                    .chain()
                    .in_set(ViewStateSet),
            );
    }
}

fn log_catalog() {
    info!("City catalog loaded: {} cities", CITY_CATALOG.len());
}
