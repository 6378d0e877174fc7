//! Left sidebar: project blurb and the continent selector.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::catalog::CITY_COUNT;
use atlas::continent::ContinentFilter;
use atlas::filter::visible_city_ids;
use atlas::view_state::SetContinentFilter;

const TITLE: &str = "Interactive Globe Project";
const BLURB: &str = "This project visualizes significant global cities on an interactive \
    3D globe. Drag to rotate, scroll to zoom, and click a marker to learn more about a city.";

pub fn visible_count_label(filter: ContinentFilter) -> String {
    format!(
        "Showing {} of {} cities",
        visible_city_ids(filter).len(),
        CITY_COUNT
    )
}

pub fn sidebar_ui(
    mut contexts: EguiContexts,
    filter: Res<ContinentFilter>,
    mut set_filter: EventWriter<SetContinentFilter>,
) {
    let mut choice = *filter;

    egui::SidePanel::left("sidebar")
        .default_width(240.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(8.0);
            ui.heading(TITLE);
            ui.add_space(4.0);
            ui.label(BLURB);
            ui.add_space(12.0);

            ui.label("Filter by Continent:");
            egui::ComboBox::from_id_salt("continent")
                .selected_text(choice.label())
                .show_ui(ui, |ui| {
                    for option in ContinentFilter::OPTIONS {
                        ui.selectable_value(&mut choice, option, option.label());
                    }
                });

            ui.add_space(8.0);
            ui.weak(visible_count_label(choice));
        });

    if choice != *filter {
        set_filter.send(SetContinentFilter(choice));
    }
}
