use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};

use crate::color;
use crate::data::category::classify;
use crate::data::spatial;
use crate::state::AppState;

/// Pointer pick radius in screen pixels, converted to degrees through the
/// current plot scale on every frame.
const PICK_RADIUS_PX: f64 = 6.0;

// ---------------------------------------------------------------------------
// Track map (central panel)
// ---------------------------------------------------------------------------

/// Render the track map: one colored line per segment, a name label per
/// storm, hover highlight and click selection via the nearest-segment
/// query.
pub fn track_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(tracks) = &state.tracks else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a track database to view storms  (File → Open…)");
        });
        return;
    };

    let plot_width_px = f64::from(ui.available_width().max(1.0));

    let response = Plot::new("track_plot")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Hit-test before drawing so the highlight lands in the same
            // frame the pointer moved.
            let hovered = plot_ui.pointer_coordinate().and_then(|pointer| {
                let degrees_per_px = plot_ui.plot_bounds().width() / plot_width_px;
                let tolerance = degrees_per_px * PICK_RADIUS_PX;
                spatial::nearest_segment([pointer.x, pointer.y], tolerance, tracks)
            });

            for (storm_index, storm) in tracks.storms.iter().enumerate() {
                for (segment_index, segment) in storm.segments().enumerate() {
                    let is_hovered = hovered
                        .is_some_and(|h| h.storm == storm_index && h.segment == segment_index);
                    let color = if is_hovered {
                        color::HIGHLIGHT
                    } else {
                        color::category_color(classify(segment.wind_knots()))
                    };

                    let points = PlotPoints::from(vec![
                        [segment.start.longitude, segment.start.latitude],
                        [segment.end.longitude, segment.end.latitude],
                    ]);
                    plot_ui.line(Line::new(points).color(color).width(2.2));
                }

                // Label each track at its first fix, like the classic charts.
                if let Some(first) = storm.observations.first() {
                    plot_ui.text(Text::new(
                        PlotPoint::new(first.longitude, first.latitude),
                        storm.name.clone(),
                    ));
                }
            }

            hovered
        });

    state.hovered = response.inner;
    if response.response.clicked() {
        if let Some(hit) = state.hovered {
            state.select(hit);
        }
    }
}
