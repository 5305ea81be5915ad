//! Itinerary synthesis.
//!
//! Turns a [`TripRequest`] into a [`TripPlan`]: trip length from the budget,
//! one hotel from the experience tier, a themed schedule for each day, and
//! the cost rollups. Activity durations and costs are drawn from the
//! caller's random source, so a seeded RNG gives reproducible plans.

use rand::Rng;
use tracing::debug;

use crate::domain::{
    Activity, ActivityCategory, ActivityDuration, ActivityLoad, DayPlan, DayTheme, Hotel,
    HotelTier, NameStyle, TripPlan, TripRequest,
};

use super::catalog;
use super::config::PlannerConfig;

/// Lowest activity cost before the experience multiplier.
const ACTIVITY_BASE_COST: f64 = 500.0;

/// Width of the random band added on top of the base cost.
const ACTIVITY_COST_SPREAD: f64 = 3000.0;

/// Generate a plan with the default configuration.
pub fn generate<R>(request: &TripRequest, rng: &mut R) -> TripPlan
where
    R: Rng + ?Sized,
{
    Planner::new(&PlannerConfig::default()).plan(request, rng)
}

/// Itinerary planner.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner with the given configuration.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Build a complete plan for a request.
    pub fn plan<R>(&self, request: &TripRequest, rng: &mut R) -> TripPlan
    where
        R: Rng + ?Sized,
    {
        let level = request.experience();
        let tier = HotelTier::for_level(level);
        let total_days = self.config.trip_days(request.budget());

        let hotel = self.choose_hotel(request);
        let days: Vec<DayPlan> = (1..=total_days)
            .map(|day| self.plan_day(day, request, &mut *rng))
            .collect();

        let overview = format!(
            "Your {total_days}-day {} in {} balances must-see highlights with time to soak up the local atmosphere.",
            catalog::overview_style(tier),
            request.destination(),
        );

        let tips = self.tips(request);

        let plan = TripPlan::new(
            request.destination(),
            hotel,
            days,
            request.party_size(),
            overview,
            tips,
        );

        debug!(
            destination = plan.destination(),
            days = plan.total_days(),
            tier = tier.label(),
            total_cost = plan.total_cost(),
            "generated trip plan"
        );

        plan
    }

    /// Pick the single hotel for the trip.
    fn choose_hotel(&self, request: &TripRequest) -> Hotel {
        let level = request.experience();
        let tier = HotelTier::for_level(level);
        let template = catalog::hotel_template(tier);

        Hotel {
            name: template.name_for(request.destination()),
            tier,
            rating: template.rating,
            price_per_night: (template.base_price as f64 * level.multiplier()).round() as u64,
            description: template.description.to_string(),
            amenities: template.amenities.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build the schedule for one day.
    fn plan_day<R>(&self, day: u32, request: &TripRequest, rng: &mut R) -> DayPlan
    where
        R: Rng + ?Sized,
    {
        let level = request.experience();
        let theme = DayTheme::for_day(day);
        let slots = ActivityLoad::for_level(level).activities_per_day();
        let candidates = catalog::activity_candidates(theme);
        let style = NameStyle::for_level(level);
        let description = catalog::activity_description(HotelTier::for_level(level));

        let activities = (0..slots)
            .map(|slot| {
                let duration =
                    ActivityDuration::ALL[rng.gen_range(0..ActivityDuration::ALL.len())];
                let jitter: f64 = rng.gen_range(0.0..1.0);
                let cost = ((ACTIVITY_BASE_COST + jitter * ACTIVITY_COST_SPREAD)
                    * level.multiplier())
                .round() as u64;

                Activity {
                    name: style.apply(candidates[slot % candidates.len()]),
                    duration,
                    cost,
                    description: description.to_string(),
                    category: ActivityCategory::for_slot(slot),
                }
            })
            .collect();

        DayPlan::new(day, theme, activities)
    }

    /// Tips accumulate with the experience level; higher levels never drop
    /// the general advice.
    fn tips(&self, request: &TripRequest) -> Vec<String> {
        let level = request.experience().get();

        let mut tips: Vec<String> =
            catalog::GENERAL_TIPS.iter().map(|t| t.to_string()).collect();
        if level > 50 {
            tips.extend(catalog::PREMIUM_TIPS.iter().map(|t| t.to_string()));
        }
        if level > 75 {
            tips.extend(catalog::LUXURY_TIPS.iter().map(|t| t.to_string()));
        }
        tips
    }
}
