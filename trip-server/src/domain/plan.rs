//! Trip plan types.
//!
//! A [`TripPlan`] is built once by the generator and never changes. Cost
//! rollups are computed at construction time, so the totals always agree
//! with the activities and hotel they summarize.

use std::fmt;

use serde::{Serialize, Serializer};

use super::request::PartySize;
use super::theme::DayTheme;
use super::tier::HotelTier;

/// The hotel chosen for a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    pub name: String,
    pub tier: HotelTier,
    /// Star rating, e.g. 4.5
    pub rating: f32,
    /// Nightly price in whole currency units
    pub price_per_night: u64,
    pub description: String,
    pub amenities: Vec<String>,
}

/// How long an activity takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityDuration {
    #[serde(rename = "2 hours")]
    TwoHours,
    #[serde(rename = "3 hours")]
    ThreeHours,
    #[serde(rename = "Half day")]
    HalfDay,
    #[serde(rename = "Full day")]
    FullDay,
}

impl ActivityDuration {
    /// Every duration, in display order.
    pub const ALL: [ActivityDuration; 4] = [
        ActivityDuration::TwoHours,
        ActivityDuration::ThreeHours,
        ActivityDuration::HalfDay,
        ActivityDuration::FullDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityDuration::TwoHours => "2 hours",
            ActivityDuration::ThreeHours => "3 hours",
            ActivityDuration::HalfDay => "Half day",
            ActivityDuration::FullDay => "Full day",
        }
    }
}

impl fmt::Display for ActivityDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category shown next to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityCategory {
    Sightseeing,
    Culture,
    Adventure,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Relaxation,
    Shopping,
}

impl ActivityCategory {
    /// Categories in the order they are assigned to activity slots.
    pub const CYCLE: [ActivityCategory; 6] = [
        ActivityCategory::Sightseeing,
        ActivityCategory::Culture,
        ActivityCategory::Adventure,
        ActivityCategory::FoodAndDrink,
        ActivityCategory::Relaxation,
        ActivityCategory::Shopping,
    ];

    /// Category for a 0-based slot within a day.
    pub fn for_slot(slot: usize) -> Self {
        Self::CYCLE[slot % Self::CYCLE.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Sightseeing => "Sightseeing",
            ActivityCategory::Culture => "Culture",
            ActivityCategory::Adventure => "Adventure",
            ActivityCategory::FoodAndDrink => "Food & Drink",
            ActivityCategory::Relaxation => "Relaxation",
            ActivityCategory::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub name: String,
    pub duration: ActivityDuration,
    /// Cost in whole currency units
    pub cost: u64,
    pub description: String,
    pub category: ActivityCategory,
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    day: u32,
    theme: DayTheme,
    activities: Vec<Activity>,
    estimated_cost: u64,
}

impl DayPlan {
    /// Create a day. The estimated cost is the sum of the activity costs.
    pub fn new(day: u32, theme: DayTheme, activities: Vec<Activity>) -> Self {
        let estimated_cost = activities.iter().map(|a| a.cost).sum();
        Self {
            day,
            theme,
            activities,
            estimated_cost,
        }
    }

    /// 1-based day number.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn theme(&self) -> DayTheme {
        self.theme
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn estimated_cost(&self) -> u64 {
        self.estimated_cost
    }
}

/// A complete generated trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    destination: String,
    total_days: u32,
    total_cost: u64,
    cost_per_person: u64,
    #[serde(rename = "hotels", serialize_with = "single_item_list")]
    hotel: Hotel,
    days: Vec<DayPlan>,
    overview: String,
    tips: Vec<String>,
}

impl TripPlan {
    /// Assemble a plan and compute its cost rollups.
    ///
    /// The total cost is every day's estimated cost plus one hotel night per
    /// day. The per-person cost is the total divided by the party size,
    /// rounded to the nearest whole unit (halves round up).
    pub fn new(
        destination: impl Into<String>,
        hotel: Hotel,
        days: Vec<DayPlan>,
        party_size: PartySize,
        overview: String,
        tips: Vec<String>,
    ) -> Self {
        let total_days = days.len() as u32;
        let activities_cost: u64 = days.iter().map(DayPlan::estimated_cost).sum();
        let total_cost = activities_cost + hotel.price_per_night * u64::from(total_days);
        let cost_per_person = rounded_div(total_cost, u64::from(party_size.get()));

        Self {
            destination: destination.into(),
            total_days,
            total_cost,
            cost_per_person,
            hotel,
            days,
            overview,
            tips,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn cost_per_person(&self) -> u64 {
        self.cost_per_person
    }

    /// The chosen hotel.
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// The chosen hotels. Always exactly one.
    pub fn hotels(&self) -> &[Hotel] {
        std::slice::from_ref(&self.hotel)
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Total cost of all hotel nights.
    pub fn accommodation_cost(&self) -> u64 {
        self.hotel.price_per_night * u64::from(self.total_days)
    }

    /// Total cost of all activities.
    pub fn activities_cost(&self) -> u64 {
        self.total_cost - self.accommodation_cost()
    }
}

/// Divide and round to the nearest integer, halves up.
fn rounded_div(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

fn single_item_list<S: Serializer>(hotel: &Hotel, serializer: S) -> Result<S::Ok, S::Error> {
    std::slice::from_ref(hotel).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(cost: u64) -> Activity {
        Activity {
            name: "Walking Tour".into(),
            duration: ActivityDuration::TwoHours,
            cost,
            description: "A walk.".into(),
            category: ActivityCategory::Sightseeing,
        }
    }

    fn hotel(price: u64) -> Hotel {
        Hotel {
            name: "Test Inn".into(),
            tier: HotelTier::Budget,
            rating: 3.5,
            price_per_night: price,
            description: "Beds.".into(),
            amenities: vec!["Free WiFi".into()],
        }
    }

    #[test]
    fn day_cost_is_sum_of_activities() {
        let day = DayPlan::new(
            1,
            DayTheme::ArrivalAndCityExploration,
            vec![activity(500), activity(1200), activity(3499)],
        );
        assert_eq!(day.estimated_cost(), 5199);
        assert_eq!(day.day(), 1);
        assert_eq!(day.activities().len(), 3);
    }

    #[test]
    fn empty_day_costs_nothing() {
        let day = DayPlan::new(2, DayTheme::CulturalImmersion, vec![]);
        assert_eq!(day.estimated_cost(), 0);
    }

    #[test]
    fn plan_totals() {
        let days = vec![
            DayPlan::new(1, DayTheme::for_day(1), vec![activity(1000)]),
            DayPlan::new(2, DayTheme::for_day(2), vec![activity(2000)]),
            DayPlan::new(3, DayTheme::for_day(3), vec![activity(3001)]),
        ];
        let plan = TripPlan::new(
            "Paris",
            hotel(1500),
            days,
            PartySize::new(2).unwrap(),
            "Overview".into(),
            vec![],
        );

        assert_eq!(plan.total_days(), 3);
        assert_eq!(plan.accommodation_cost(), 4500);
        assert_eq!(plan.activities_cost(), 6001);
        assert_eq!(plan.total_cost(), 10501);
        // 5250.5 rounds up
        assert_eq!(plan.cost_per_person(), 5251);
        assert_eq!(plan.hotels().len(), 1);
    }

    #[test]
    fn rounded_div_rounds_to_nearest() {
        assert_eq!(rounded_div(10, 3), 3);
        assert_eq!(rounded_div(11, 3), 4);
        assert_eq!(rounded_div(5, 2), 3);
        assert_eq!(rounded_div(7, 1), 7);
    }

    #[test]
    fn serializes_hotels_as_list() {
        let plan = TripPlan::new(
            "Rome",
            hotel(2000),
            vec![DayPlan::new(1, DayTheme::for_day(1), vec![activity(100)])],
            PartySize::new(1).unwrap(),
            "Overview".into(),
            vec!["Tip".into()],
        );
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["hotels"].as_array().unwrap().len(), 1);
        assert_eq!(json["hotels"][0]["price_per_night"], 2000);
        assert_eq!(json["days"][0]["theme"], "Arrival & City Exploration");
        assert_eq!(json["days"][0]["activities"][0]["duration"], "2 hours");
        assert_eq!(json["days"][0]["estimated_cost"], 100);
        assert_eq!(json["total_cost"], 2100);
    }
}
