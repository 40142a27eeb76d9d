//! Static true-strokes-gained table standing in for the DataGolf API.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{PlayerStats, StrokesGained};

// [total, off_the_tee, approach, around_the_green, putting]
fn windows(baseline: [f64; 5], recent: [f64; 5]) -> PlayerStats {
    let bundle = |values: [f64; 5]| StrokesGained {
        total: values[0],
        off_the_tee: values[1],
        approach: values[2],
        around_the_green: values[3],
        putting: values[4],
    };
    PlayerStats {
        baseline: bundle(baseline),
        recent: bundle(recent),
    }
}

pub(crate) static TOUR_PLAYER_DATA: Lazy<HashMap<&'static str, PlayerStats>> = Lazy::new(|| {
    HashMap::from([
        (
            "Scottie Scheffler",
            windows(
                [2.85, 0.95, 1.25, 0.35, 0.30],
                [3.10, 1.05, 1.35, 0.40, 0.30],
            ),
        ),
        (
            "Rory McIlroy",
            windows(
                [2.65, 1.10, 0.90, 0.25, 0.40],
                [2.40, 1.00, 0.80, 0.20, 0.40],
            ),
        ),
        (
            "Cameron Young",
            windows(
                [1.80, 0.80, 0.60, 0.10, 0.30],
                [1.95, 0.85, 0.65, 0.10, 0.35],
            ),
        ),
        (
            "Justin Rose",
            windows(
                [1.40, 0.30, 0.70, 0.20, 0.20],
                [1.50, 0.35, 0.75, 0.15, 0.25],
            ),
        ),
        (
            "Justin Thomas",
            windows(
                [1.90, 0.50, 1.00, 0.30, 0.10],
                [1.70, 0.45, 0.90, 0.25, 0.10],
            ),
        ),
        (
            "Tommy Fleetwood",
            windows(
                [1.85, 0.60, 0.75, 0.25, 0.25],
                [2.00, 0.65, 0.80, 0.25, 0.30],
            ),
        ),
        (
            "Bryson DeChambeau",
            windows(
                [2.00, 1.20, 0.40, 0.10, 0.30],
                [2.10, 1.30, 0.40, 0.05, 0.35],
            ),
        ),
        (
            "Matt Fitzpatrick",
            windows(
                [1.75, 0.40, 0.60, 0.30, 0.45],
                [1.80, 0.40, 0.65, 0.30, 0.45],
            ),
        ),
        (
            "Patrick Cantlay",
            windows(
                [2.10, 0.60, 0.80, 0.20, 0.50],
                [2.00, 0.55, 0.75, 0.20, 0.50],
            ),
        ),
        (
            "Ludvig Åberg",
            windows(
                [2.20, 1.00, 0.80, 0.10, 0.30],
                [2.30, 1.10, 0.85, 0.10, 0.25],
            ),
        ),
        (
            "Xander Schauffele",
            windows(
                [2.15, 0.70, 0.80, 0.25, 0.40],
                [2.20, 0.70, 0.80, 0.25, 0.45],
            ),
        ),
        (
            "Jon Rahm",
            windows(
                [2.50, 0.90, 0.95, 0.30, 0.35],
                [2.45, 0.85, 0.90, 0.30, 0.40],
            ),
        ),
        (
            "J.J. Spaun",
            windows(
                [0.80, 0.20, 0.40, 0.05, 0.15],
                [0.75, 0.15, 0.35, 0.05, 0.20],
            ),
        ),
        (
            "Sepp Straka",
            windows(
                [1.10, 0.30, 0.70, 0.00, 0.10],
                [1.20, 0.35, 0.75, 0.00, 0.10],
            ),
        ),
        (
            "Russell Henley",
            windows(
                [1.50, 0.10, 0.90, 0.20, 0.30],
                [1.40, 0.10, 0.80, 0.20, 0.30],
            ),
        ),
        (
            "Shane Lowry",
            windows(
                [1.45, 0.30, 0.65, 0.35, 0.15],
                [1.55, 0.35, 0.70, 0.35, 0.15],
            ),
        ),
        (
            "Ben Griffin",
            windows(
                [0.90, 0.25, 0.40, 0.10, 0.15],
                [1.00, 0.30, 0.45, 0.10, 0.15],
            ),
        ),
        (
            "Rasmus Højgaard",
            windows(
                [1.00, 0.50, 0.30, 0.05, 0.15],
                [1.10, 0.55, 0.30, 0.05, 0.20],
            ),
        ),
        (
            "Collin Morikawa",
            windows(
                [1.95, 0.30, 1.20, 0.15, 0.30],
                [1.85, 0.25, 1.10, 0.15, 0.35],
            ),
        ),
        (
            "Tyrrell Hatton",
            windows(
                [1.80, 0.50, 0.70, 0.20, 0.40],
                [1.90, 0.55, 0.70, 0.20, 0.45],
            ),
        ),
        (
            "Sam Burns",
            windows(
                [1.60, 0.40, 0.40, 0.10, 0.70],
                [1.50, 0.35, 0.35, 0.10, 0.70],
            ),
        ),
        (
            "Robert MacIntyre",
            windows(
                [1.20, 0.40, 0.50, 0.10, 0.20],
                [1.30, 0.45, 0.55, 0.10, 0.20],
            ),
        ),
        (
            "Harris English",
            windows(
                [1.00, 0.20, 0.30, 0.20, 0.30],
                [0.90, 0.15, 0.25, 0.20, 0.30],
            ),
        ),
        (
            "Viktor Hovland",
            windows(
                [2.25, 0.80, 1.00, -0.10, 0.55],
                [2.40, 0.85, 1.05, -0.05, 0.55],
            ),
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_all_twentyfour_players() {
        assert_eq!(TOUR_PLAYER_DATA.len(), 24);
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(TOUR_PLAYER_DATA.contains_key("Ludvig Åberg"));
        assert!(TOUR_PLAYER_DATA.contains_key("J.J. Spaun"));
        // No normalization: spacing and diacritics matter.
        assert!(!TOUR_PLAYER_DATA.contains_key("J. J. Spaun"));
        assert!(!TOUR_PLAYER_DATA.contains_key("Ludvig Aberg"));
    }

    #[test]
    fn negative_strokes_gained_survive() {
        let hovland = &TOUR_PLAYER_DATA["Viktor Hovland"];
        assert!(hovland.baseline.around_the_green < 0.0);
    }
}
