use super::model::{Segment, Storm, TrackSet};

// ---------------------------------------------------------------------------
// Query result
// ---------------------------------------------------------------------------

/// A pointer hit on one track segment: indices into the track set plus
/// the planar distance at which it was found.
///
/// Indices rather than references, so a hit cannot keep a replaced
/// [`TrackSet`] alive; resolve against the current set to read storm
/// name, timestamp, or pressure for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub storm: usize,
    pub segment: usize,
    pub distance: f64,
}

impl SegmentHit {
    /// Look the hit back up in a track set. `None` if the set no longer
    /// has a matching storm/segment.
    pub fn resolve<'a>(&self, tracks: &'a TrackSet) -> Option<(&'a Storm, Segment<'a>)> {
        let storm = tracks.storms.get(self.storm)?;
        let start = storm.observations.get(self.segment)?;
        let end = storm.observations.get(self.segment + 1)?;
        Some((storm, Segment { start, end }))
    }
}

// ---------------------------------------------------------------------------
// Nearest-segment scan
// ---------------------------------------------------------------------------

/// Find the track segment closest to `point` (`[lon, lat]`, degrees).
///
/// Distance is planar in degree space, the same space the tracks are
/// plotted in. Returns `None` when even the closest segment is farther
/// than `tolerance`. Exact ties resolve to the segment encountered first
/// in storm/observation order. Scans every segment on every call; per-year
/// sets are small enough that an index would buy nothing.
pub fn nearest_segment(point: [f64; 2], tolerance: f64, tracks: &TrackSet) -> Option<SegmentHit> {
    let mut best: Option<SegmentHit> = None;

    for (storm_index, storm) in tracks.storms.iter().enumerate() {
        for (segment_index, segment) in storm.segments().enumerate() {
            let distance = point_to_segment(point, segment);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(SegmentHit {
                    storm: storm_index,
                    segment: segment_index,
                    distance,
                });
            }
        }
    }

    best.filter(|hit| hit.distance <= tolerance)
}

/// Shortest planar distance from `point` to the segment, clamping the
/// projection onto the segment's line to the endpoints.
fn point_to_segment(point: [f64; 2], segment: Segment<'_>) -> f64 {
    let (ax, ay) = (segment.start.longitude, segment.start.latitude);
    let (bx, by) = (segment.end.longitude, segment.end.latitude);
    let (dx, dy) = (bx - ax, by - ay);

    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        // Two coincident fixes: the segment is a point.
        0.0
    } else {
        (((point[0] - ax) * dx + (point[1] - ay) * dy) / length_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((point[0] - cx).powi(2) + (point[1] - cy).powi(2)).sqrt()
}
