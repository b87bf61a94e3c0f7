use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::category::classify;
use crate::state::{AppState, FIRST_SEASON, LAST_SEASON};

// ---------------------------------------------------------------------------
// Left side panel – legend, storm list, hover details
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Intensity");
    ui.separator();
    for (label, swatch) in color::legend_entries() {
        ui.horizontal(|ui: &mut Ui| {
            ui.colored_label(swatch, "■");
            ui.label(label);
        });
    }
    ui.separator();

    let Some(tracks) = &state.tracks else {
        ui.label("No track database loaded.");
        return;
    };

    ui.heading(format!("Storms ({})", tracks.len()));
    ui.separator();

    let mut clicked_storm = None;
    ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for (index, storm) in tracks.storms.iter().enumerate() {
                let peak = storm
                    .observations
                    .iter()
                    .map(|obs| obs.wind_knots)
                    .max()
                    .unwrap_or(0);
                let row = format!("{}  ({} fixes, peak {} kt)", storm.name, storm.observations.len(), peak);
                let is_selected = state.selected_storm == Some(index);
                if ui.selectable_label(is_selected, row).clicked() {
                    clicked_storm = Some(index);
                }
            }
        });

    // Hovered-segment details, resolved against the current model.
    if let Some((storm, segment)) = state.hovered.and_then(|hit| hit.resolve(tracks)) {
        ui.separator();
        ui.strong(&storm.name);
        ui.label(&segment.end.timestamp);
        ui.label(format!(
            "{} kt — {}",
            segment.wind_knots(),
            classify(segment.wind_knots())
        ));
        match segment.end.pressure_hpa {
            Some(pressure) => ui.label(format!("{pressure} hPa")),
            None => ui.label("pressure n/a"),
        };
    }

    if let Some(index) = clicked_storm {
        state.selected_storm = Some(index);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar: file menu, year slider, title, status.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let mut year = state.year;
        ui.add(egui::Slider::new(&mut year, FIRST_SEASON..=LAST_SEASON).text("Year"));
        // Every slider change re-parses the file for the new season.
        state.set_year(year);

        ui.separator();
        ui.strong(state.title());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open storm track database")
        .add_filter("HURDAT2 text", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        log::info!("opening {}", path.display());
        state.open(path);
    }
}
