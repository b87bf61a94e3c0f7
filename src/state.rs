use std::path::PathBuf;

use crate::data::model::TrackSet;
use crate::data::parser;
use crate::data::spatial::SegmentHit;

/// Range of the year slider; HURDAT2 starts with the 1851 season.
pub const FIRST_SEASON: u16 = 1851;
pub const LAST_SEASON: u16 = 2024;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Path of the loaded track database (None until user opens a file).
    pub source_path: Option<PathBuf>,

    /// Season shown on the map; driven by the year slider.
    pub year: u16,

    /// Storms of the selected season (None until a file is loaded).
    pub tracks: Option<TrackSet>,

    /// Segment currently under the pointer, if within pick tolerance.
    pub hovered: Option<SegmentHit>,

    /// Storm picked with the last click, as an index into `tracks`.
    pub selected_storm: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source_path: None,
            year: FIRST_SEASON,
            tracks: None,
            hovered: None,
            selected_storm: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Open a new source file and parse the current season from it.
    pub fn open(&mut self, path: PathBuf) {
        self.source_path = Some(path);
        self.reload();
    }

    /// Change season and rebuild the track set from scratch.
    pub fn set_year(&mut self, year: u16) {
        if year == self.year {
            return;
        }
        self.year = year;
        self.reload();
    }

    /// Re-parse the source file for the current year.
    ///
    /// The old track set is replaced wholesale, and hover/selection are
    /// cleared with it so they can never point into a previous model.
    pub fn reload(&mut self) {
        self.hovered = None;
        self.selected_storm = None;

        let Some(path) = &self.source_path else {
            return;
        };

        match parser::load(path, self.year) {
            Ok(tracks) => {
                log::info!(
                    "season {}: {} storms, {} observations",
                    self.year,
                    tracks.len(),
                    tracks.observation_count()
                );
                self.status_message = None;
                self.tracks = Some(tracks);
            }
            Err(err) => {
                log::error!("{err}");
                self.status_message = Some(format!("Error: {err}"));
                self.tracks = None;
            }
        }
    }

    /// Select the storm owning a picked segment.
    pub fn select(&mut self, hit: SegmentHit) {
        if let Some(tracks) = &self.tracks {
            if let Some((storm, _)) = hit.resolve(tracks) {
                log::info!("Selected Storm: {}", storm.name);
            }
        }
        self.selected_storm = Some(hit.storm);
    }

    /// Title line for the top bar: the selected storm if any, otherwise
    /// the season heading.
    pub fn title(&self) -> String {
        let selected_name = self
            .selected_storm
            .zip(self.tracks.as_ref())
            .and_then(|(index, tracks)| tracks.storms.get(index))
            .map(|storm| storm.name.clone());

        match selected_name {
            Some(name) => format!("Selected Storm: {name}"),
            None => format!("Atlantic Hurricane Tracks - {}", self.year),
        }
    }
}
