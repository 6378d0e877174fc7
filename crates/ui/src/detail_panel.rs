//! Right-hand detail panel for the selected city.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::selection::Selection;
use atlas::view_state::CloseDetails;

const PLACEHOLDER: &str = "Select a marker to see details";

/// What the detail panel shows for a given selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailContent {
    Placeholder,
    City {
        name: &'static str,
        description: &'static str,
    },
}

impl DetailContent {
    pub fn for_selection(selection: &Selection) -> Self {
        match selection.selected_city() {
            Some(record) => DetailContent::City {
                name: record.name,
                description: record.description,
            },
            None => DetailContent::Placeholder,
        }
    }
}

pub fn detail_panel_ui(
    mut contexts: EguiContexts,
    selection: Res<Selection>,
    mut close: EventWriter<CloseDetails>,
) {
    let content = DetailContent::for_selection(&selection);

    egui::SidePanel::right("marker_info")
        .default_width(240.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(8.0);
            match content {
                DetailContent::City { name, description } => {
                    ui.heading(name);
                    ui.add_space(4.0);
                    ui.label(description);
                    ui.add_space(12.0);
                    if ui.button("Close").clicked() {
                        close.send(CloseDetails);
                    }
                }
                DetailContent::Placeholder => {
                    ui.heading(PLACEHOLDER);
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::catalog::CityId;

    #[test]
    fn test_placeholder_when_unselected() {
        assert_eq!(
            DetailContent::for_selection(&Selection::Unselected),
            DetailContent::Placeholder
        );
    }

    #[test]
    fn test_city_content_when_selected() {
        assert_eq!(
            DetailContent::for_selection(&Selection::Selected(CityId(8))),
            DetailContent::City {
                name: "Buenos Aires",
                description: "The Paris of South America!",
            }
        );
    }

    #[test]
    fn test_unknown_id_falls_back_to_placeholder() {
        assert_eq!(
            DetailContent::for_selection(&Selection::Selected(CityId(42))),
            DetailContent::Placeholder
        );
    }
}
