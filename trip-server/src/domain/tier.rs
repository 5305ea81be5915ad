//! Experience banding.
//!
//! The experience level is split into bands in three independent ways:
//!
//! - [`HotelTier`]: four bands, used for the hotel, activity descriptions
//!   and the overview wording.
//! - [`ActivityLoad`]: three coarser bands, used for how many activities
//!   fill a day.
//! - [`NameStyle`]: the prefix put in front of activity names.
//!
//! Each uses its own thresholds.

use serde::Serialize;

use super::request::ExperienceLevel;

/// Hotel band chosen for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelTier {
    Budget,
    Comfort,
    Premium,
    Luxury,
}

impl HotelTier {
    /// Band for an experience level.
    ///
    /// Each band starts at its slider stop: 0-24 budget, 25-49 comfort,
    /// 50-74 premium, 75-100 luxury.
    pub fn for_level(level: ExperienceLevel) -> Self {
        match level.get() {
            0..=24 => HotelTier::Budget,
            25..=49 => HotelTier::Comfort,
            50..=74 => HotelTier::Premium,
            _ => HotelTier::Luxury,
        }
    }

    /// Display name of the band.
    pub fn label(self) -> &'static str {
        match self {
            HotelTier::Budget => "Budget",
            HotelTier::Comfort => "Comfort",
            HotelTier::Premium => "Premium",
            HotelTier::Luxury => "Luxury",
        }
    }
}

/// How full each day's schedule is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityLoad {
    Light,
    Standard,
    Full,
}

impl ActivityLoad {
    /// Load for an experience level: below 25 light, below 75 standard,
    /// otherwise full.
    pub fn for_level(level: ExperienceLevel) -> Self {
        match level.get() {
            0..=24 => ActivityLoad::Light,
            25..=74 => ActivityLoad::Standard,
            _ => ActivityLoad::Full,
        }
    }

    /// Number of activities scheduled per day.
    pub fn activities_per_day(self) -> usize {
        match self {
            ActivityLoad::Light => 3,
            ActivityLoad::Standard => 4,
            ActivityLoad::Full => 5,
        }
    }
}

/// Prefix applied to activity names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    Plain,
    Premium,
    Private,
}

impl NameStyle {
    /// Style for an experience level: above 75 private, above 50 premium.
    pub fn for_level(level: ExperienceLevel) -> Self {
        match level.get() {
            76.. => NameStyle::Private,
            51.. => NameStyle::Premium,
            _ => NameStyle::Plain,
        }
    }

    /// The prefix, including its trailing space.
    pub fn prefix(self) -> &'static str {
        match self {
            NameStyle::Plain => "",
            NameStyle::Premium => "Premium ",
            NameStyle::Private => "Private ",
        }
    }

    /// Apply the prefix to an activity name.
    pub fn apply(self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u32) -> ExperienceLevel {
        ExperienceLevel::new(value).unwrap()
    }

    #[test]
    fn hotel_tier_bands() {
        assert_eq!(HotelTier::for_level(level(0)), HotelTier::Budget);
        assert_eq!(HotelTier::for_level(level(24)), HotelTier::Budget);
        assert_eq!(HotelTier::for_level(level(25)), HotelTier::Comfort);
        assert_eq!(HotelTier::for_level(level(49)), HotelTier::Comfort);
        assert_eq!(HotelTier::for_level(level(50)), HotelTier::Premium);
        assert_eq!(HotelTier::for_level(level(74)), HotelTier::Premium);
        assert_eq!(HotelTier::for_level(level(75)), HotelTier::Luxury);
        assert_eq!(HotelTier::for_level(level(100)), HotelTier::Luxury);
    }

    #[test]
    fn activity_load_is_coarser_than_hotel_tier() {
        assert_eq!(ActivityLoad::for_level(level(10)).activities_per_day(), 3);
        assert_eq!(ActivityLoad::for_level(level(25)).activities_per_day(), 4);
        assert_eq!(ActivityLoad::for_level(level(50)).activities_per_day(), 4);
        assert_eq!(ActivityLoad::for_level(level(74)).activities_per_day(), 4);
        assert_eq!(ActivityLoad::for_level(level(75)).activities_per_day(), 5);
        assert_eq!(ActivityLoad::for_level(level(100)).activities_per_day(), 5);
    }

    #[test]
    fn name_style_thresholds_are_exclusive() {
        assert_eq!(NameStyle::for_level(level(30)), NameStyle::Plain);
        assert_eq!(NameStyle::for_level(level(50)), NameStyle::Plain);
        assert_eq!(NameStyle::for_level(level(51)), NameStyle::Premium);
        assert_eq!(NameStyle::for_level(level(75)), NameStyle::Premium);
        assert_eq!(NameStyle::for_level(level(76)), NameStyle::Private);
    }

    #[test]
    fn higher_prefix_replaces_lower() {
        assert_eq!(NameStyle::Private.apply("Cooking Class"), "Private Cooking Class");
        assert_eq!(NameStyle::Premium.apply("Cooking Class"), "Premium Cooking Class");
        assert_eq!(NameStyle::Plain.apply("Cooking Class"), "Cooking Class");
    }
}
