use eframe::egui::Color32;

use crate::data::category::{self, Category};

// ---------------------------------------------------------------------------
// Category colors
// ---------------------------------------------------------------------------

/// Hovered segments are drawn in magenta regardless of intensity.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0xff, 0x00, 0xff);

/// Display color for an intensity category.
///
/// The classic named colors of the matplotlib track charts, darkblue
/// through mediumpurple.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::TropicalDepression => Color32::from_rgb(0x00, 0x00, 0x8b), // darkblue
        Category::TropicalStorm => Color32::from_rgb(0x00, 0xff, 0xff),      // aqua
        Category::One => Color32::from_rgb(0xff, 0xfa, 0xcd),                // lemonchiffon
        Category::Two => Color32::from_rgb(0xff, 0xde, 0xad),                // navajowhite
        Category::Three => Color32::from_rgb(0xff, 0x8c, 0x00),              // darkorange
        Category::Four => Color32::from_rgb(0xff, 0x45, 0x00),               // orangered
        Category::Five => Color32::from_rgb(0x93, 0x70, 0xdb),               // mediumpurple
    }
}

/// Legend entries (label → color) in ascending intensity order.
pub fn legend_entries() -> Vec<(&'static str, Color32)> {
    category::ALL
        .into_iter()
        .map(|c| (c.label(), category_color(c)))
        .collect()
}
