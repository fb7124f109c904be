use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub specialty_id: u32,
    pub image: Option<String>,
    pub rating: f32,
    pub experience: String,
    pub price: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialty {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// One selectable day in the booking horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateOption {
    pub id: String,
    /// Weekday abbreviation, e.g. "Mon".
    pub day: String,
    /// Day of month.
    pub date: u32,
    /// Month abbreviation, e.g. "Jun".
    pub month: String,
    pub available: bool,
    pub calendar_date: NaiveDate,
}

impl DateOption {
    /// "Mon, 3 Jun"
    pub fn label(&self) -> String {
        format!("{}, {} {}", self.day, self.date, self.month)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(id: &str, time: &str, available: bool) -> Self {
        Self {
            id: id.to_string(),
            time: time.to_string(),
            available,
        }
    }
}

/// Where the per-day availability flag of generated date options comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AvailabilityPolicy {
    AllAvailable,
    /// Same seed and same calendar day always give the same flag.
    Seeded { seed: u64, unavailable_ratio: f64 },
    /// Day offsets (0 = today) that are closed.
    Unavailable(BTreeSet<u32>),
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        AvailabilityPolicy::AllAvailable
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoctorSearchFilters {
    pub query: String,
    pub specialty_id: Option<u32>,
    pub available_only: bool,
}

impl DoctorSearchFilters {
    pub fn query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Self::default()
        }
    }

    pub fn with_specialty(mut self, specialty_id: u32) -> Self {
        self.specialty_id = Some(specialty_id);
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn toggle_available_only(&mut self) {
        self.available_only = !self.available_only;
    }
}

/// What the doctor list renders: either matches or the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum DoctorListing {
    Results(Vec<Doctor>),
    NoDoctorsFound,
}

impl DoctorListing {
    pub fn from_matches(doctors: Vec<Doctor>) -> Self {
        if doctors.is_empty() {
            DoctorListing::NoDoctorsFound
        } else {
            DoctorListing::Results(doctors)
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        match self {
            DoctorListing::Results(doctors) => doctors,
            DoctorListing::NoDoctorsFound => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DoctorListing::NoDoctorsFound)
    }

    pub fn empty_state_message(&self) -> Option<&'static str> {
        match self {
            DoctorListing::Results(_) => None,
            DoctorListing::NoDoctorsFound => Some("No doctors found"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub doctor_id: String,
    pub patient_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub doctor_response: Option<String>,
    pub is_recommended: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewFilter {
    #[default]
    All,
    Positive,
    Neutral,
    Negative,
}

impl ReviewFilter {
    pub fn matches(&self, rating: u8) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Positive => rating >= 4,
            ReviewFilter::Neutral => rating == 3,
            ReviewFilter::Negative => rating <= 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    pub total: usize,
    pub average: f32,
    /// Index 0 holds one-star reviews, index 4 five-star reviews.
    pub distribution: [usize; 5],
}

impl ReviewSummary {
    pub fn count_for(&self, stars: u8) -> usize {
        match stars {
            1..=5 => self.distribution[(stars - 1) as usize],
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Specialty {0} not found")]
    SpecialtyNotFound(u32),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound | DoctorError::SpecialtyNotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::CatalogUnavailable(msg) => AppError::Internal(msg),
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_option() -> DateOption {
        DateOption {
            id: "0".to_string(),
            day: "Mon".to_string(),
            date: 3,
            month: "Jun".to_string(),
            available: true,
            calendar_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        }
    }

    #[test]
    fn date_option_label() {
        assert_eq!(date_option().label(), "Mon, 3 Jun");
    }

    #[test]
    fn review_filter_buckets() {
        assert!(ReviewFilter::Positive.matches(4));
        assert!(ReviewFilter::Positive.matches(5));
        assert!(!ReviewFilter::Positive.matches(3));
        assert!(ReviewFilter::Neutral.matches(3));
        assert!(ReviewFilter::Negative.matches(2));
        assert!(ReviewFilter::Negative.matches(1));
        assert!(!ReviewFilter::Negative.matches(3));
        assert!(ReviewFilter::All.matches(1));
    }

    #[test]
    fn empty_listing_has_message() {
        let listing = DoctorListing::from_matches(vec![]);
        assert!(listing.is_empty());
        assert_eq!(listing.empty_state_message(), Some("No doctors found"));
        assert!(listing.doctors().is_empty());
    }

    #[test]
    fn filters_toggle_availability() {
        let mut filters = DoctorSearchFilters::query("cardio");
        assert!(!filters.available_only);
        filters.toggle_available_only();
        assert!(filters.available_only);
    }
}
