//! Fixed text and prices the generator draws from.

use crate::domain::{DayTheme, HotelTier};

/// Hotel template for one tier. `{}` in the name is replaced with the destination.
#[derive(Debug, Clone, Copy)]
pub struct HotelTemplate {
    pub name: &'static str,
    pub base_price: u64,
    pub rating: f32,
    pub description: &'static str,
    pub amenities: &'static [&'static str],
}

impl HotelTemplate {
    /// Hotel name for a destination.
    pub fn name_for(&self, destination: &str) -> String {
        self.name.replace("{}", destination)
    }
}

/// Hotel template for a tier.
pub fn hotel_template(tier: HotelTier) -> HotelTemplate {
    match tier {
        HotelTier::Budget => HotelTemplate {
            name: "{} Budget Inn",
            base_price: 1500,
            rating: 3.5,
            description: "Clean, comfortable rooms with the essentials, close to public transport.",
            amenities: &["Free WiFi", "24-hour Front Desk", "Shared Lounge"],
        },
        HotelTier::Comfort => HotelTemplate {
            name: "{} Comfort Suites",
            base_price: 3500,
            rating: 4.0,
            description: "Modern rooms in a central neighbourhood with breakfast included.",
            amenities: &["Free WiFi", "Breakfast Included", "Fitness Center", "Room Service"],
        },
        HotelTier::Premium => HotelTemplate {
            name: "The Grand {} Hotel",
            base_price: 7500,
            rating: 4.5,
            description: "Elegant rooms with city views, a rooftop pool and an on-site spa.",
            amenities: &[
                "Free WiFi",
                "Breakfast Included",
                "Rooftop Pool",
                "Spa",
                "Concierge",
            ],
        },
        HotelTier::Luxury => HotelTemplate {
            name: "The Royal {} Palace",
            base_price: 15000,
            rating: 5.0,
            description: "Five-star suites with butler service, fine dining and private transfers.",
            amenities: &[
                "Butler Service",
                "Private Pool",
                "Fine Dining",
                "Luxury Spa",
                "Airport Transfers",
                "Club Lounge",
            ],
        },
    }
}

/// Generic activities used by themes without a dedicated list.
pub const GENERIC_ACTIVITIES: [&str; 4] = [
    "Guided City Tour",
    "Local Experience",
    "Scenic Viewpoint Visit",
    "Free Time to Explore",
];

/// Candidate activity names for a theme.
pub fn activity_candidates(theme: DayTheme) -> &'static [&'static str] {
    match theme {
        DayTheme::ArrivalAndCityExploration => &[
            "Airport Transfer & Check-in",
            "Old Town Walking Tour",
            "Sunset Viewpoint",
            "Welcome Dinner",
        ],
        DayTheme::CulturalImmersion => &[
            "Museum Visit",
            "Traditional Performance",
            "Artisan Workshop",
            "Heritage Temple Tour",
        ],
        DayTheme::NatureAndAdventure => &[
            "Hiking Trail",
            "Kayaking Excursion",
            "Wildlife Safari",
            "Zip-line Adventure",
        ],
        DayTheme::LocalCuisineAndMarkets => &[
            "Street Food Tour",
            "Morning Market Visit",
            "Cooking Class",
            "Food & Wine Tasting",
        ],
        DayTheme::HistoricalLandmarks
        | DayTheme::RelaxationAndWellness
        | DayTheme::HiddenGems
        | DayTheme::ShoppingAndFarewell => &GENERIC_ACTIVITIES,
    }
}

/// Description shared by every activity in a tier.
pub fn activity_description(tier: HotelTier) -> &'static str {
    match tier {
        HotelTier::Budget => "An affordable way to experience the highlights like a local.",
        HotelTier::Comfort => "A well-organised experience with a knowledgeable local guide.",
        HotelTier::Premium => "A curated small-group experience with premium access.",
        HotelTier::Luxury => "An exclusive private experience with VIP treatment throughout.",
    }
}

/// Phrase describing the trip style in the overview.
pub fn overview_style(tier: HotelTier) -> &'static str {
    match tier {
        HotelTier::Budget => "budget-friendly adventure",
        HotelTier::Comfort => "comfortable exploration",
        HotelTier::Premium => "premium journey",
        HotelTier::Luxury => "luxury expedition",
    }
}

/// Tips included in every plan.
pub const GENERAL_TIPS: [&str; 5] = [
    "Book popular attractions in advance to skip the queues.",
    "Carry a reusable water bottle and stay hydrated.",
    "Keep digital and paper copies of your travel documents.",
    "Learn a few basic phrases in the local language.",
    "Check the local weather forecast each morning and plan accordingly.",
];

/// Extra tips for premium trips and above.
pub const PREMIUM_TIPS: [&str; 2] = [
    "Ask your hotel concierge for restaurant reservations and insider recommendations.",
    "Consider travel insurance that covers high-value bookings.",
];

/// Extra tip for luxury trips.
pub const LUXURY_TIPS: [&str; 1] =
    ["Arrange private airport transfers ahead of time for a seamless arrival."];
