// ---------------------------------------------------------------------------
// Observation – one data line of the source file
// ---------------------------------------------------------------------------

/// A single storm fix: position, time, and intensity at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Ordinal of this fix within its storm's block of data lines.
    /// A dropped line leaves a gap rather than renumbering later fixes.
    pub sequence_index: u32,
    /// Date and time as written in the file, e.g. `"18510625 0000"`.
    /// Lexical order equals chronological order; never reparsed here.
    pub timestamp: String,
    /// Degrees north of the equator (negative in the southern hemisphere).
    pub latitude: f64,
    /// Degrees east of the prime meridian (negative west of it).
    pub longitude: f64,
    /// Maximum sustained wind in knots.
    pub wind_knots: i32,
    /// Central pressure in hPa; `None` when the file carried the -999
    /// sentinel or no usable pressure field.
    pub pressure_hpa: Option<i32>,
}

// ---------------------------------------------------------------------------
// Storm – header identity plus its observations
// ---------------------------------------------------------------------------

/// One storm of the selected season.
///
/// `observations` is non-empty and in file order (non-decreasing
/// timestamps); the parser never emits a storm without at least one
/// successfully decoded fix.
#[derive(Debug, Clone, PartialEq)]
pub struct Storm {
    /// Eight-character identifier: two-letter basin, two-digit ordinal,
    /// four-digit year (e.g. `"AL011851"`).
    pub id: String,
    pub name: String,
    /// Season year, as encoded in characters 5–8 of `id`.
    pub year: u16,
    pub observations: Vec<Observation>,
}

impl Storm {
    /// The track segments between consecutive observations, in order.
    /// A single-fix storm has no segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.observations.windows(2).map(|pair| Segment {
            start: &pair[0],
            end: &pair[1],
        })
    }

    pub fn segment_count(&self) -> usize {
        self.observations.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Segment – the line between two consecutive observations
// ---------------------------------------------------------------------------

/// One drawable/pickable piece of a track. Borrowed from a [`Storm`] on
/// demand; never stored and never outlives the track set it came from.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub start: &'a Observation,
    pub end: &'a Observation,
}

impl Segment<'_> {
    /// The wind that colors this segment: the later endpoint's.
    pub fn wind_knots(&self) -> i32 {
        self.end.wind_knots
    }
}

// ---------------------------------------------------------------------------
// TrackSet – the complete model for one selected year
// ---------------------------------------------------------------------------

/// Every storm of one season, in file order.
///
/// Rebuilt wholesale when the selected year changes; readers always see
/// either the old or the new complete set, never a partial one.
#[derive(Debug, Clone, Default)]
pub struct TrackSet {
    pub year: u16,
    pub storms: Vec<Storm>,
}

impl TrackSet {
    pub fn new(year: u16, storms: Vec<Storm>) -> Self {
        TrackSet { year, storms }
    }

    /// Number of storms.
    pub fn len(&self) -> usize {
        self.storms.len()
    }

    /// Whether the season has no storms (a valid result, not an error).
    pub fn is_empty(&self) -> bool {
        self.storms.is_empty()
    }

    pub fn observation_count(&self) -> usize {
        self.storms.iter().map(|s| s.observations.len()).sum()
    }
}
