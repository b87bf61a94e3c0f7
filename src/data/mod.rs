/// Data layer: core types, parsing, classification, and spatial queries.
///
/// Architecture:
/// ```text
///  hurdat2 .txt
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  scan headers, skip other seasons, group one year
///   └──────────┘
///        │ one data line at a time
///        ▼
///   ┌──────────┐
///   │ decoder   │  raw line → Observation
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TrackSet  │  Vec<Storm>, observations in file order
///   └──────────┘
///      │        │
///      ▼        ▼
///  category   spatial
///  wind → 7-class scale; pointer → nearest segment
/// ```
pub mod category;
pub mod decoder;
pub mod model;
pub mod parser;
pub mod spatial;
