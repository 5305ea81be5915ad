//! Daily themes.

use std::fmt;

use serde::Serialize;

/// The theme of a single day. Themes rotate through the trip in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayTheme {
    #[serde(rename = "Arrival & City Exploration")]
    ArrivalAndCityExploration,
    #[serde(rename = "Cultural Immersion")]
    CulturalImmersion,
    #[serde(rename = "Nature & Adventure")]
    NatureAndAdventure,
    #[serde(rename = "Local Cuisine & Markets")]
    LocalCuisineAndMarkets,
    #[serde(rename = "Historical Landmarks")]
    HistoricalLandmarks,
    #[serde(rename = "Relaxation & Wellness")]
    RelaxationAndWellness,
    #[serde(rename = "Hidden Gems")]
    HiddenGems,
    #[serde(rename = "Shopping & Farewell")]
    ShoppingAndFarewell,
}

impl DayTheme {
    /// All themes in rotation order.
    pub const ROTATION: [DayTheme; 8] = [
        DayTheme::ArrivalAndCityExploration,
        DayTheme::CulturalImmersion,
        DayTheme::NatureAndAdventure,
        DayTheme::LocalCuisineAndMarkets,
        DayTheme::HistoricalLandmarks,
        DayTheme::RelaxationAndWellness,
        DayTheme::HiddenGems,
        DayTheme::ShoppingAndFarewell,
    ];

    /// Theme for a 1-based day number, wrapping after eight days.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::DayTheme;
    ///
    /// assert_eq!(DayTheme::for_day(1), DayTheme::ArrivalAndCityExploration);
    /// assert_eq!(DayTheme::for_day(9), DayTheme::ArrivalAndCityExploration);
    /// ```
    pub fn for_day(day: u32) -> Self {
        let index = (day.saturating_sub(1) % Self::ROTATION.len() as u32) as usize;
        Self::ROTATION[index]
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DayTheme::ArrivalAndCityExploration => "Arrival & City Exploration",
            DayTheme::CulturalImmersion => "Cultural Immersion",
            DayTheme::NatureAndAdventure => "Nature & Adventure",
            DayTheme::LocalCuisineAndMarkets => "Local Cuisine & Markets",
            DayTheme::HistoricalLandmarks => "Historical Landmarks",
            DayTheme::RelaxationAndWellness => "Relaxation & Wellness",
            DayTheme::HiddenGems => "Hidden Gems",
            DayTheme::ShoppingAndFarewell => "Shopping & Farewell",
        }
    }
}

impl fmt::Display for DayTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_with_arrival() {
        assert_eq!(DayTheme::for_day(1).label(), "Arrival & City Exploration");
        assert_eq!(DayTheme::for_day(2), DayTheme::CulturalImmersion);
        assert_eq!(DayTheme::for_day(8), DayTheme::ShoppingAndFarewell);
    }

    #[test]
    fn rotation_wraps_after_eight_days() {
        for day in 1..=14 {
            assert_eq!(DayTheme::for_day(day), DayTheme::for_day(day + 8));
        }
        assert_eq!(DayTheme::for_day(10), DayTheme::CulturalImmersion);
    }

    #[test]
    fn serializes_as_label() {
        for theme in DayTheme::ROTATION {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.label()));
        }
    }
}
