use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::decoder;
use super::model::{Storm, TrackSet};

// ---------------------------------------------------------------------------
// Load failures
// ---------------------------------------------------------------------------

/// The one fatal failure mode: the source file itself cannot be read.
/// Everything below the file level is recovered line by line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read track data from {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a track database from disk and keep the storms of one season.
///
/// This is the core's only entry point that touches the filesystem.
pub fn load(path: &Path, year: u16) -> Result<TrackSet, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&text, year))
}

// ---------------------------------------------------------------------------
// Header line
// ---------------------------------------------------------------------------

struct Header<'a> {
    id: &'a str,
    name: &'a str,
    /// Number of data lines the header declares for this storm.
    count: usize,
    year: u16,
}

/// A header is a comma-containing line whose first field is an
/// 8-character storm id carrying a numeric year in characters 5–8 and
/// whose third field is a non-negative count. Data lines never qualify:
/// their third field is the record identifier, which is not a number.
fn parse_header(line: &str) -> Option<Header<'_>> {
    let mut fields = line.split(',').map(str::trim);
    let id = fields.next()?;
    let name = fields.next()?;
    let count = fields.next()?.parse::<usize>().ok()?;

    if id.len() != 8 {
        return None;
    }
    let year = id.get(4..8)?.parse::<u16>().ok()?;

    Some(Header {
        id,
        name,
        count,
        year,
    })
}

// ---------------------------------------------------------------------------
// Dataset scan
// ---------------------------------------------------------------------------

/// Single pass over the raw text, keeping the storms of `year`.
///
/// Storms of other seasons cost one header inspection plus a skip of
/// their declared line count; their data lines are never decoded. All
/// per-line problems are recovered locally, so this function is total
/// over arbitrary input text.
pub fn parse(text: &str, year: u16) -> TrackSet {
    let lines: Vec<&str> = text.lines().collect();
    let mut storms = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(header) = parse_header(lines[i]) else {
            // Stray line at top level: skip it rather than abort the scan.
            i += 1;
            continue;
        };
        i += 1;

        if header.year != year {
            i = i.saturating_add(header.count);
            continue;
        }

        // A lying header cannot declare more lines than remain.
        let mut observations = Vec::with_capacity(header.count.min(lines.len() - i));
        for seq in 0..header.count {
            let Some(line) = lines.get(i) else {
                log::warn!(
                    "{}: file ends {} data lines short of the declared {}",
                    header.id,
                    header.count - seq,
                    header.count
                );
                break;
            };
            i += 1;

            match decoder::decode_observation(line, seq as u32) {
                Ok(obs) => observations.push(obs),
                Err(err) => log::warn!("{}: dropping data line {seq}: {err}", header.id),
            }
        }

        if observations.is_empty() {
            log::debug!("{}: no usable observations, storm dropped", header.id);
            continue;
        }

        storms.push(Storm {
            id: header.id.to_string(),
            name: header.name.to_string(),
            year: header.year,
            observations,
        });
    }

    TrackSet::new(year, storms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::category::{classify, Category};

    const TWO_SEASONS: &str = "\
AL011851,            UNNAMED,      3,
18510625, 0000,  , HU, 28.0N, 94.8W,  80, -999,
18510625, 0600,  , HU, 28.0N, 95.4W,  80, -999,
18510625, 1200,  , HU, 28.1N, 96.0W,  70, -999,
AL011852,            UNNAMED,      3,
18520819, 0000,  , TS, 24.2N, 89.1W,  50, -999,
18520819, 0600,  , TS, 24.5N, 89.8W,  60, -999,
18520819, 1200,  , TS, 24.9Q, 90.2W,  60, -999,
AL021851,              DEMO,      2,
18510705, 0000,  , TS, 15.0N, 50.0W,  40, -999,
18510705, 0600,  , TS, 15.5N, 50.5W,  45, -999,
";

    #[test]
    fn seasons_never_cross_contaminate() {
        let y1851 = parse(TWO_SEASONS, 1851);
        assert_eq!(y1851.year, 1851);
        assert_eq!(y1851.len(), 2);
        assert!(y1851.storms.iter().all(|s| s.year == 1851));
        // File order is preserved.
        assert_eq!(y1851.storms[0].id, "AL011851");
        assert_eq!(y1851.storms[1].id, "AL021851");

        let y1852 = parse(TWO_SEASONS, 1852);
        assert_eq!(y1852.len(), 1);
        assert_eq!(y1852.storms[0].id, "AL011852");
        assert_eq!(y1852.storms[0].observations.len(), 2);
    }

    #[test]
    fn absent_season_is_an_empty_result() {
        let tracks = parse(TWO_SEASONS, 1900);
        assert!(tracks.is_empty());
    }

    /// Reference scan with no fast path: decode every storm's data lines
    /// regardless of season, then filter afterwards. The skip-ahead parse
    /// must agree with it on any target year.
    fn parse_without_skip(text: &str, year: u16) -> TrackSet {
        let lines: Vec<&str> = text.lines().collect();
        let mut storms = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let Some(header) = parse_header(lines[i]) else {
                i += 1;
                continue;
            };
            i += 1;

            let mut observations = Vec::new();
            for seq in 0..header.count {
                let Some(line) = lines.get(i) else { break };
                i += 1;
                if let Ok(obs) = decoder::decode_observation(line, seq as u32) {
                    observations.push(obs);
                }
            }

            if header.year == year && !observations.is_empty() {
                storms.push(Storm {
                    id: header.id.to_string(),
                    name: header.name.to_string(),
                    year: header.year,
                    observations,
                });
            }
        }

        TrackSet::new(year, storms)
    }

    #[test]
    fn skip_ahead_matches_decode_everything_reference() {
        for year in [1851, 1852, 1900] {
            let fast = parse(TWO_SEASONS, year);
            let reference = parse_without_skip(TWO_SEASONS, year);
            assert_eq!(fast.storms, reference.storms, "year = {year}");
        }
    }

    #[test]
    fn bad_observation_lines_are_dropped_individually() {
        let text = "\
AL011851,               ABC,      3,
18510625, 0000,  , TS, 28.0N, 94.8W,  80,
18510625, 0600,  , TS, 28.0X, 94.8W,  80,
18510625, 1200,  , TS, 28.4N, 95.2W, gusty,
";
        let tracks = parse(text, 1851);
        assert_eq!(tracks.len(), 1);
        let storm = &tracks.storms[0];
        assert_eq!(storm.observations.len(), 1);
        // The surviving fix keeps its ordinal within the declared block.
        assert_eq!(storm.observations[0].sequence_index, 0);
    }

    #[test]
    fn storm_with_no_usable_observations_is_discarded() {
        let text = "\
AL011851,               ABC,      2,
not, a, data, line
also not one
AL021851,               DEF,      1,
18510625, 0000,  , TS, 28.0N, 94.8W,  80,
";
        let tracks = parse(text, 1851);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks.storms[0].name, "DEF");
    }

    #[test]
    fn truncated_file_keeps_the_partial_storm() {
        let text = "\
AL011851,               ABC,      5,
18510625, 0000,  , TS, 28.0N, 94.8W,  80,
18510625, 0600,  , TS, 28.2N, 95.0W,  85,
";
        let tracks = parse(text, 1851);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks.storms[0].observations.len(), 2);
    }

    #[test]
    fn stray_lines_and_bad_headers_are_skipped() {
        let text = "\
just some preamble without structure
AL01X851,               BAD,      1,
18510625, 0000,  , TS, 28.0N, 94.8W,  80,
AL011851,               ABC,      1,
18510625, 0000,  , TS, 28.0N, 94.8W,  80,
";
        // The malformed header (non-numeric year) and its orphaned data
        // line fall through the top-level scan without derailing it.
        let tracks = parse(text, 1851);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks.storms[0].name, "ABC");
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = load(Path::new("/nonexistent/hurdat2.txt"), 1851).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    }

    #[test]
    fn minimal_two_line_dataset_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.txt");
        fs::write(&path, "AL011851,ABC,1,\n18510625, 0000, , TS, 28.0N, 94.8W, 80,\n").unwrap();

        let tracks = load(&path, 1851).unwrap();
        assert_eq!(tracks.len(), 1);

        let storm = &tracks.storms[0];
        assert_eq!(storm.name, "ABC");
        assert_eq!(storm.year, 1851);
        assert_eq!(storm.observations.len(), 1);

        let obs = &storm.observations[0];
        assert_eq!(obs.latitude, 28.0);
        assert_eq!(obs.longitude, -94.8);
        assert_eq!(obs.wind_knots, 80);
        assert_eq!(obs.pressure_hpa, None);
        assert_eq!(obs.timestamp, "18510625 0000");

        assert_eq!(classify(obs.wind_knots), Category::Two);
    }
}
