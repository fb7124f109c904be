// libs/doctor-cell/src/services/catalog.rs
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

use shared_config::AppConfig;

use crate::models::{AvailabilityPolicy, DateOption, Doctor, DoctorError, Review, Specialty, TimeSlot};
use crate::services::availability::{generate_date_options, standard_time_slots};

/// Read-only reference data behind the doctor and booking screens.
///
/// The bundled implementation serves in-memory fixtures; a networked one would
/// return the same record shapes.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn doctors(&self) -> Result<Vec<Doctor>, DoctorError>;

    async fn specialties(&self) -> Result<Vec<Specialty>, DoctorError>;

    async fn time_slots(&self, date: NaiveDate) -> Result<Vec<TimeSlot>, DoctorError>;

    /// Date options for `horizon_days` days starting at `today`, availability included.
    async fn date_options(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Result<Vec<DateOption>, DoctorError>;

    async fn reviews_for_doctor(&self, doctor_id: &str) -> Result<Vec<Review>, DoctorError>;
}

pub struct MockCatalog {
    doctors: Vec<Doctor>,
    specialties: Vec<Specialty>,
    time_slots: Vec<TimeSlot>,
    reviews: Vec<Review>,
    availability: AvailabilityPolicy,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self {
            doctors: seed_doctors(),
            specialties: seed_specialties(),
            time_slots: standard_time_slots(),
            reviews: seed_reviews(),
            availability: AvailabilityPolicy::AllAvailable,
        }
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let availability = match config.availability_seed {
            Some(seed) => AvailabilityPolicy::Seeded {
                seed,
                unavailable_ratio: config.unavailable_date_ratio,
            },
            None => AvailabilityPolicy::AllAvailable,
        };

        Self::new().with_availability(availability)
    }

    pub fn with_doctors(mut self, doctors: Vec<Doctor>) -> Self {
        self.doctors = doctors;
        self
    }

    pub fn with_time_slots(mut self, time_slots: Vec<TimeSlot>) -> Self {
        self.time_slots = time_slots;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_availability(mut self, availability: AvailabilityPolicy) -> Self {
        self.availability = availability;
        self
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        Ok(self.doctors.clone())
    }

    async fn specialties(&self) -> Result<Vec<Specialty>, DoctorError> {
        Ok(self.specialties.clone())
    }

    async fn time_slots(&self, _date: NaiveDate) -> Result<Vec<TimeSlot>, DoctorError> {
        Ok(self.time_slots.clone())
    }

    #[instrument(skip(self))]
    async fn date_options(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Result<Vec<DateOption>, DoctorError> {
        Ok(generate_date_options(today, horizon_days, &self.availability))
    }

    async fn reviews_for_doctor(&self, doctor_id: &str) -> Result<Vec<Review>, DoctorError> {
        debug!("Fetching reviews for doctor {}", doctor_id);
        Ok(self
            .reviews
            .iter()
            .filter(|review| review.doctor_id == doctor_id)
            .cloned()
            .collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    specialty: &str,
    specialty_id: u32,
    rating: f32,
    experience: &str,
    price: &str,
    available: bool,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        specialty_id,
        image: None,
        rating,
        experience: experience.to_string(),
        price: price.to_string(),
        available,
    }
}

pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        doctor("1", "Dr. Sarah Johnson", "Cardiologist", 1, 4.9, "8 years", "$100", true),
        doctor("2", "Dr. Mark Wilson", "Pediatrician", 2, 4.7, "12 years", "$90", true),
        doctor("3", "Dr. Lisa Chen", "Dermatologist", 3, 4.8, "10 years", "$120", false),
        doctor("4", "Dr. James Lee", "Orthopedic", 5, 4.5, "15 years", "$150", true),
        doctor("5", "Dr. Emily Wilson", "Neurologist", 4, 4.6, "7 years", "$130", true),
        doctor("6", "Dr. Michael Rodriguez", "Ophthalmologist", 7, 4.3, "9 years", "$110", true),
        doctor("7", "Dr. Jennifer Kim", "Gynecologist", 6, 4.9, "14 years", "$140", true),
        doctor("8", "Dr. Robert Chen", "Psychiatrist", 11, 4.7, "11 years", "$160", false),
    ]
}

pub fn seed_specialties() -> Vec<Specialty> {
    [
        (1, "Cardiology", "Heart and cardiovascular system"),
        (2, "Pediatrics", "Children's health and development"),
        (3, "Dermatology", "Skin, hair, and nail conditions"),
        (4, "Neurology", "Brain and nervous system"),
        (5, "Orthopedics", "Bones, joints, and muscles"),
        (6, "Gynecology", "Women's reproductive health"),
        (7, "Ophthalmology", "Eye and vision care"),
        (8, "Urology", "Urinary tract and male reproductive system"),
        (9, "Gastroenterology", "Digestive system and disorders"),
        (10, "Endocrinology", "Hormones and metabolic diseases"),
        (11, "Psychiatry", "Mental health and emotional well-being"),
        (12, "Oncology", "Cancer diagnosis and treatment"),
        (13, "Radiology", "Imaging and diagnostic procedures"),
        (14, "Dentistry", "Oral health and dental care"),
        (15, "Allergy & Immunology", "Allergies and immune system disorders"),
        (16, "Physical Therapy", "Rehabilitation and mobility improvement"),
        (17, "Nutrition", "Diet and nutritional health"),
        (18, "ENT", "Ear, nose, and throat disorders"),
    ]
    .into_iter()
    .map(|(id, name, description)| Specialty {
        id,
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn review(
    id: &str,
    patient: &str,
    rating: u8,
    comment: &str,
    date: &str,
    response: Option<&str>,
) -> Review {
    Review {
        id: id.to_string(),
        doctor_id: "1".to_string(),
        patient_name: patient.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
        doctor_response: response.map(str::to_string),
        is_recommended: true,
    }
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        review(
            "1",
            "John Smith",
            5,
            "Took the time to explain everything clearly.",
            "10 June 2023",
            Some("Thank you for your kind words, John!"),
        ),
        review(
            "2",
            "Emma Williams",
            4,
            "Thorough consultation, though the wait time was a bit long.",
            "5 June 2023",
            None,
        ),
        review(
            "3",
            "Robert Davis",
            5,
            "Always attentive and up-to-date with the latest treatments.",
            "28 May 2023",
            Some("I appreciate your continued trust, Robert."),
        ),
        review(
            "4",
            "Sarah Martinez",
            3,
            "The office can be difficult to reach for appointment changes.",
            "15 May 2023",
            Some("Thank you for your feedback, Sarah."),
        ),
        review(
            "5",
            "Michael Brown",
            5,
            "The virtual consultation was convenient and effective.",
            "10 May 2023",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_serves_fixtures() {
        let catalog = MockCatalog::new();

        let doctors = catalog.doctors().await.unwrap();
        assert_eq!(doctors.len(), 8);
        assert!(!doctors[2].available);

        assert_eq!(catalog.specialties().await.unwrap().len(), 18);
        assert_eq!(catalog.reviews_for_doctor("1").await.unwrap().len(), 5);
        assert!(catalog.reviews_for_doctor("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn from_config_uses_seed() {
        let config = AppConfig {
            availability_seed: Some(99),
            unavailable_date_ratio: 1.0,
            ..AppConfig::default()
        };
        let catalog = MockCatalog::from_config(&config);
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let dates = catalog.date_options(today, 7).await.unwrap();
        assert_eq!(dates.len(), 7);
        assert!(dates.iter().all(|date| !date.available));
    }

    #[tokio::test]
    async fn non_finite_configured_ratio_does_not_panic() {
        let config = AppConfig {
            availability_seed: Some(1),
            unavailable_date_ratio: f64::NAN,
            ..AppConfig::default()
        };
        let catalog = MockCatalog::from_config(&config);
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let dates = catalog.date_options(today, 7).await.unwrap();
        assert_eq!(dates.len(), 7);
        assert!(dates.iter().all(|date| date.available));
    }
}
