//! Events that mutate the top-level view state, and the systems that apply them.
//!
//! Child views never write [`ContinentFilter`] or [`Selection`] directly; they
//! send one of these events and the systems below apply them in order.

use bevy::prelude::*;

use crate::catalog::{city, CityId};
use crate::continent::ContinentFilter;
use crate::selection::Selection;

/// The user picked a new option in the continent selector.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetContinentFilter(pub ContinentFilter);

/// A marker was clicked.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectCity(pub CityId);

/// The detail panel's close control was pressed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloseDetails;

pub fn apply_filter_events(
    mut events: EventReader<SetContinentFilter>,
    mut filter: ResMut<ContinentFilter>,
) {
    for SetContinentFilter(next) in events.read() {
        if filter.set_if_neq(*next) {
            info!("Continent filter set to {}", next);
        }
    }
}

pub fn apply_select_events(mut events: EventReader<SelectCity>, mut selection: ResMut<Selection>) {
    for SelectCity(id) in events.read() {
        let Some(record) = city(*id) else {
            warn!("Ignoring selection of unknown city id {}", id.0);
            continue;
        };
        selection.select(*id);
        info!("Selected {}", record.name);
    }
}

pub fn apply_close_events(mut events: EventReader<CloseDetails>, mut selection: ResMut<Selection>) {
    for _ in events.read() {
        if *selection != Selection::Unselected {
            selection.close();
            info!("Detail panel closed");
        }
    }
}
