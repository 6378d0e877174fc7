//! View-level marker selection.

use bevy::prelude::*;

use crate::catalog::{city, CityId, CityRecord};

/// The single city whose details are shown in the detail panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(CityId),
}

impl Selection {
    /// Select `id`, replacing any current selection without passing through
    /// `Unselected`.
    pub fn select(&mut self, id: CityId) {
        *self = Selection::Selected(id);
    }

    /// Clear the selection. No-op when nothing is selected.
    pub fn close(&mut self) {
        *self = Selection::Unselected;
    }

    pub fn selected_id(&self) -> Option<CityId> {
        match *self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn selected_city(&self) -> Option<&'static CityRecord> {
        self.selected_id().and_then(city)
    }

    pub fn is_selected(&self, id: CityId) -> bool {
        self.selected_id() == Some(id)
    }
}
