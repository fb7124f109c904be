use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use shared_models::navigation::{NavigationHost, Route};

use crate::models::{
    Doctor, DoctorError, DoctorListing, DoctorSearchFilters, Review, ReviewFilter, ReviewSummary,
    Specialty,
};
use crate::services::catalog::CatalogProvider;
use crate::services::reviews::{filter_reviews, summarize_reviews};
use crate::services::search::filter_doctors;

pub struct DoctorService {
    catalog: Arc<dyn CatalogProvider>,
}

impl DoctorService {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogProvider> {
        &self.catalog
    }

    /// Search the doctor catalog
    #[instrument(skip(self))]
    pub async fn list_doctors(
        &self,
        filters: &DoctorSearchFilters,
    ) -> Result<DoctorListing, DoctorError> {
        let doctors = self.catalog.doctors().await?;
        let listing = DoctorListing::from_matches(filter_doctors(&doctors, filters));

        if listing.is_empty() {
            info!("No doctors matched {:?}", filters);
        }

        Ok(listing)
    }

    /// Get doctor by ID
    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor profile: {}", doctor_id);

        self.catalog
            .doctors()
            .await?
            .into_iter()
            .find(|doctor| doctor.id == doctor_id)
            .ok_or_else(|| {
                warn!("Doctor {} not in catalog", doctor_id);
                DoctorError::NotFound
            })
    }

    pub async fn specialties(&self) -> Result<Vec<Specialty>, DoctorError> {
        self.catalog.specialties().await
    }

    pub async fn get_specialty(&self, specialty_id: u32) -> Result<Specialty, DoctorError> {
        self.catalog
            .specialties()
            .await?
            .into_iter()
            .find(|specialty| specialty.id == specialty_id)
            .ok_or(DoctorError::SpecialtyNotFound(specialty_id))
    }

    /// Opens the doctor list narrowed to one specialty.
    pub async fn open_specialty(
        &self,
        specialty_id: u32,
        nav: &mut impl NavigationHost,
    ) -> Result<Specialty, DoctorError> {
        let specialty = self.get_specialty(specialty_id).await?;
        nav.push(Route::Doctors {
            specialty: Some(specialty.id),
        });
        Ok(specialty)
    }

    pub async fn open_doctor_details(
        &self,
        doctor_id: &str,
        nav: &mut impl NavigationHost,
    ) -> Result<Doctor, DoctorError> {
        let doctor = self.get_doctor(doctor_id).await?;
        nav.push(Route::DoctorDetails {
            id: doctor.id.clone(),
        });
        Ok(doctor)
    }

    /// Reviews for one doctor narrowed by `filter`, with the summary over all of them.
    pub async fn reviews(
        &self,
        doctor_id: &str,
        filter: ReviewFilter,
    ) -> Result<(Vec<Review>, ReviewSummary), DoctorError> {
        let reviews = self.catalog.reviews_for_doctor(doctor_id).await?;
        let summary = summarize_reviews(&reviews);
        Ok((filter_reviews(&reviews, filter), summary))
    }
}
