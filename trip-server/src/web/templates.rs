//! Askama templates for the web frontend.

use askama::Template;
use chrono::NaiveDate;

use crate::domain::{DayPlan, ExperienceLevel, Hotel, TripPlan};

use super::form::{BUDGET_RANGE, BUDGET_STEP, PARTY_SIZE_RANGE};
use super::format::{format_currency, format_date};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the trip form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Earliest selectable travel date (`YYYY-MM-DD`)
    pub min_date: String,
    pub min_party: u32,
    pub max_party: u32,
    pub min_budget: u64,
    pub max_budget: u64,
    pub budget_step: u64,
    pub tiers: Vec<TierStopView>,
}

impl IndexTemplate {
    /// Form page for a given current date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            min_date: today.format("%Y-%m-%d").to_string(),
            min_party: *PARTY_SIZE_RANGE.start(),
            max_party: *PARTY_SIZE_RANGE.end(),
            min_budget: *BUDGET_RANGE.start(),
            max_budget: *BUDGET_RANGE.end(),
            budget_step: BUDGET_STEP,
            tiers: ExperienceLevel::STOPS
                .iter()
                .map(|(level, label)| TierStopView {
                    level: *level,
                    label,
                })
                .collect(),
        }
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// API key settings page.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    /// Masked generative-text API key, if stored
    pub gemini_api_key: Option<String>,
    /// Masked web-search API key, if stored
    pub serper_api_key: Option<String>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Trip results fragment.
#[derive(Template)]
#[template(path = "trip_results.html")]
pub struct TripResultsTemplate {
    pub trip: TripView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One experience slider stop.
#[derive(Debug, Clone)]
pub struct TierStopView {
    pub level: u8,
    pub label: &'static str,
}

/// Trip plan view model with display strings.
#[derive(Debug, Clone)]
pub struct TripView {
    pub destination: String,
    pub travel_date: Option<String>,
    pub travelers: u32,
    pub total_days: u32,
    pub total_cost: String,
    pub cost_per_person: String,
    pub accommodation_cost: String,
    pub activities_cost: String,
    pub hotel: HotelView,
    pub days: Vec<DayView>,
    pub overview: String,
    pub tips: Vec<String>,
}

impl TripView {
    /// Create from a generated plan and the request details it was made for.
    pub fn from_plan(plan: &TripPlan, travel_date: Option<NaiveDate>, travelers: u32) -> Self {
        Self {
            destination: plan.destination().to_string(),
            travel_date: travel_date.map(format_date),
            travelers,
            total_days: plan.total_days(),
            total_cost: format_currency(plan.total_cost()),
            cost_per_person: format_currency(plan.cost_per_person()),
            accommodation_cost: format_currency(plan.accommodation_cost()),
            activities_cost: format_currency(plan.activities_cost()),
            hotel: HotelView::from_hotel(plan.hotel()),
            days: plan.days().iter().map(DayView::from_day).collect(),
            overview: plan.overview().to_string(),
            tips: plan.tips().to_vec(),
        }
    }

    /// "1 traveler" or "3 travelers".
    pub fn travelers_label(&self) -> String {
        if self.travelers == 1 {
            "1 traveler".to_string()
        } else {
            format!("{} travelers", self.travelers)
        }
    }
}

/// Hotel view model.
#[derive(Debug, Clone)]
pub struct HotelView {
    pub name: String,
    pub tier: &'static str,
    pub rating: String,
    pub price_per_night: String,
    pub description: String,
    pub amenities: Vec<String>,
}

impl HotelView {
    /// Create from a domain Hotel.
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            tier: hotel.tier.label(),
            rating: format!("{:.1}", hotel.rating),
            price_per_night: format_currency(hotel.price_per_night),
            description: hotel.description.clone(),
            amenities: hotel.amenities.clone(),
        }
    }
}

/// Day view model.
#[derive(Debug, Clone)]
pub struct DayView {
    pub day: u32,
    pub theme: &'static str,
    pub estimated_cost: String,
    pub activities: Vec<ActivityView>,
}

impl DayView {
    /// Create from a domain DayPlan.
    pub fn from_day(day: &DayPlan) -> Self {
        Self {
            day: day.day(),
            theme: day.theme().label(),
            estimated_cost: format_currency(day.estimated_cost()),
            activities: day
                .activities()
                .iter()
                .map(|a| ActivityView {
                    name: a.name.clone(),
                    duration: a.duration.label(),
                    cost: format_currency(a.cost),
                    description: a.description.clone(),
                    category: a.category.label(),
                })
                .collect(),
        }
    }
}

/// Activity view model.
#[derive(Debug, Clone)]
pub struct ActivityView {
    pub name: String,
    pub duration: &'static str,
    pub cost: String,
    pub description: String,
    pub category: &'static str,
}
