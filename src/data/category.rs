use std::fmt;

// ---------------------------------------------------------------------------
// Intensity category
// ---------------------------------------------------------------------------

/// Storm intensity class derived from sustained wind speed:
/// the five Saffir-Simpson hurricane categories plus the two
/// pre-hurricane classes below them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    TropicalDepression,
    TropicalStorm,
    One,
    Two,
    Three,
    Four,
    Five,
}

/// All categories in ascending intensity order (legend order).
pub const ALL: [Category; 7] = [
    Category::TropicalDepression,
    Category::TropicalStorm,
    Category::One,
    Category::Two,
    Category::Three,
    Category::Four,
    Category::Five,
];

/// Exclusive upper bounds in knots for every category below Category 5,
/// in ascending order. Anything at or above the last bound is Category 5.
const THRESHOLDS: [(i32, Category); 6] = [
    (30, Category::TropicalDepression),
    (70, Category::TropicalStorm),
    (80, Category::One),
    (95, Category::Two),
    (110, Category::Three),
    (135, Category::Four),
];

/// Classify a sustained wind speed in knots.
///
/// Total over all of `i32`: negative winds land in the lowest class.
/// 30 kt is already a Tropical Storm (the depression bound is exclusive).
pub fn classify(wind_knots: i32) -> Category {
    for (upper, category) in THRESHOLDS {
        if wind_knots < upper {
            return category;
        }
    }
    Category::Five
}

impl Category {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::TropicalDepression => "Tropical Depression",
            Category::TropicalStorm => "Tropical Storm",
            Category::One => "Category 1",
            Category::Two => "Category 2",
            Category::Three => "Category 3",
            Category::Four => "Category 4",
            Category::Five => "Category 5",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_over_negative_winds() {
        assert_eq!(classify(-10), Category::TropicalDepression);
        assert_eq!(classify(i32::MIN), Category::TropicalDepression);
    }

    #[test]
    fn depression_boundary_is_exclusive_at_30() {
        assert_eq!(classify(29), Category::TropicalDepression);
        assert_eq!(classify(30), Category::TropicalStorm);
    }

    #[test]
    fn advances_through_every_cut_point() {
        let ladder = [
            (0, Category::TropicalDepression),
            (29, Category::TropicalDepression),
            (30, Category::TropicalStorm),
            (69, Category::TropicalStorm),
            (70, Category::One),
            (79, Category::One),
            (80, Category::Two),
            (94, Category::Two),
            (95, Category::Three),
            (109, Category::Three),
            (110, Category::Four),
            (134, Category::Four),
            (135, Category::Five),
            (200, Category::Five),
        ];
        for (wind, expected) in ladder {
            assert_eq!(classify(wind), expected, "wind = {wind}");
        }
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = classify(i32::MIN);
        for wind in -5..200 {
            let current = classify(wind);
            assert!(current >= previous, "regressed at wind = {wind}");
            previous = current;
        }
        assert_eq!(previous, Category::Five);
    }

    #[test]
    fn legend_order_matches_classification_order() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
