// libs/doctor-cell/src/services/search.rs
use tracing::debug;

use crate::models::{Doctor, DoctorSearchFilters};

/// Case-insensitive substring match over name and specialty. An empty query matches everything.
pub fn matches_query(doctor: &Doctor, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }

    doctor.name.to_lowercase().contains(&query)
        || doctor.specialty.to_lowercase().contains(&query)
}

pub fn matches_filters(doctor: &Doctor, filters: &DoctorSearchFilters) -> bool {
    matches_query(doctor, &filters.query)
        && filters
            .specialty_id
            .map_or(true, |specialty_id| doctor.specialty_id == specialty_id)
        && (!filters.available_only || doctor.available)
}

/// Filtered subset in catalog order.
pub fn filter_doctors(catalog: &[Doctor], filters: &DoctorSearchFilters) -> Vec<Doctor> {
    let matches: Vec<Doctor> = catalog
        .iter()
        .filter(|doctor| matches_filters(doctor, filters))
        .cloned()
        .collect();

    debug!(
        "Doctor search {:?} matched {} of {} doctors",
        filters,
        matches.len(),
        catalog.len()
    );

    matches
}
