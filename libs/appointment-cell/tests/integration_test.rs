// libs/appointment-cell/tests/integration_test.rs

use std::collections::BTreeSet;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;

use appointment_cell::models::{
    AppointmentError, AppointmentType, BookingStep, RejectionReason, RescheduleStep,
    TransitionOutcome,
};
use appointment_cell::services::{load_booking_catalog, AppointmentBook, BookingFlow, RescheduleFlow};
use doctor_cell::models::{
    AvailabilityPolicy, DateOption, Doctor, DoctorError, Review, Specialty, TimeSlot,
};
use doctor_cell::services::{CatalogProvider, MockCatalog};
use shared_models::navigation::{NavigationStack, Route};
use shared_utils::init_test_tracing;
use shared_utils::test_utils::{fixed_today, TestConfig};

async fn catalog_with_closed_days(days: &[u32]) -> appointment_cell::models::BookingCatalog {
    let closed: BTreeSet<u32> = days.iter().copied().collect();
    let catalog = MockCatalog::new().with_availability(AvailabilityPolicy::Unavailable(closed));
    load_booking_catalog(&catalog, fixed_today(), &TestConfig::default().to_app_config())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_unavailable_date_leaves_selection_empty() {
    let catalog = catalog_with_closed_days(&[1]).await;
    let mut flow = BookingFlow::new();
    flow.select_doctor(catalog.doctor("1").unwrap());

    let closed = catalog.date("1").unwrap();
    assert!(!closed.available);
    assert_eq!(
        flow.select_date(closed),
        TransitionOutcome::Ignored(RejectionReason::DateUnavailable)
    );
    assert!(flow.selection().date.is_none());
}

#[tokio::test]
async fn test_single_selection_keeps_last_choice() {
    let catalog = catalog_with_closed_days(&[]).await;
    let mut flow = BookingFlow::new();
    flow.select_doctor(catalog.doctor("2").unwrap());

    flow.select_time(catalog.time_slot("1").unwrap());
    flow.select_time(catalog.time_slot("6").unwrap());

    assert_eq!(flow.selection().time.as_ref().unwrap().id, "6");
}

#[tokio::test]
async fn test_advance_requires_date_and_time() {
    let catalog = catalog_with_closed_days(&[]).await;
    let mut flow = BookingFlow::new();
    flow.select_doctor(catalog.doctor("1").unwrap());

    flow.select_time(catalog.time_slot("1").unwrap());
    assert_eq!(
        flow.advance(),
        TransitionOutcome::Ignored(RejectionReason::IncompleteSelection)
    );
    assert_eq!(flow.step(), BookingStep::SelectDateTimeType);

    flow.select_date(catalog.date("0").unwrap());
    assert!(flow.advance().is_applied());
    assert_eq!(flow.step(), BookingStep::ConfirmAndPay);
}

#[tokio::test]
async fn test_unavailable_doctor_is_a_no_op() {
    let catalog = catalog_with_closed_days(&[]).await;
    let mut flow = BookingFlow::new();

    let doctor = catalog.doctor("3").unwrap();
    assert!(!doctor.available);
    assert_eq!(
        flow.select_doctor(doctor),
        TransitionOutcome::Ignored(RejectionReason::DoctorUnavailable)
    );
    assert!(flow.selection().doctor.is_none());
    assert_eq!(flow.step().number(), 1);
}

#[tokio::test]
async fn test_booking_end_to_end() {
    init_test_tracing();
    let catalog = catalog_with_closed_days(&[]).await;
    let mut nav = NavigationStack::new(Route::Home);
    AppointmentBook::default().open_booking(&mut nav);

    let mut flow = BookingFlow::new();
    flow.select_doctor(catalog.doctor("1").unwrap());
    flow.select_date(catalog.date("2").unwrap());
    flow.select_time(catalog.time_slot("6").unwrap());
    flow.select_type(AppointmentType::Chat);
    flow.advance();

    let record = flow.confirm(&mut nav).unwrap();
    assert_eq!(record.doctor_name, "Dr. Sarah Johnson");
    assert_eq!(record.date_label, "Wed, 5 Jun");
    assert_eq!(record.time, "02:00 PM");
    assert_eq!(record.appointment_type.label(), "Chat Consultation");
    assert_eq!(record.price, "$100");
    assert_eq!(nav.current(), Some(&Route::Appointments));
}

#[tokio::test]
async fn test_reschedule_end_to_end() {
    init_test_tracing();
    let catalog = catalog_with_closed_days(&[]).await;
    let book = AppointmentBook::default();
    let mut nav = NavigationStack::new(Route::Appointments);
    book.open_reschedule("1", &mut nav).unwrap();

    let mut flow = RescheduleFlow::load(&book, "1").unwrap();
    let new_date = catalog.date("2").unwrap();
    assert!(flow.select_date(new_date).is_applied());
    assert!(flow.select_time(catalog.time_slot("6").unwrap()).is_applied());
    assert_eq!(flow.step(), RescheduleStep::ConfirmReschedule);

    let record = flow.confirm(&mut nav).unwrap();
    assert_eq!(record.from, "Today, 10:30 AM");
    assert_eq!(record.to, format!("{}, 02:00 PM", new_date.label()));
    assert_eq!(nav.current(), Some(&Route::Appointments));
    assert!(flow.is_closed());
}

#[tokio::test]
async fn test_reschedule_unknown_appointment() {
    let result = RescheduleFlow::load(&AppointmentBook::default(), "missing");
    assert_matches!(result, Err(AppointmentError::NotFound(id)) if id == "missing");
}

#[tokio::test]
async fn test_booking_catalog_uses_configured_horizon() {
    let config = TestConfig {
        booking_horizon_days: 3,
        ..TestConfig::default()
    }
    .to_app_config();

    let catalog = load_booking_catalog(&MockCatalog::new(), fixed_today(), &config)
        .await
        .unwrap();
    assert_eq!(catalog.dates.len(), 3);
    assert_eq!(catalog.doctors.len(), 8);
}

struct OfflineCatalog;

#[async_trait]
impl CatalogProvider for OfflineCatalog {
    async fn doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        Err(DoctorError::CatalogUnavailable("offline".to_string()))
    }

    async fn specialties(&self) -> Result<Vec<Specialty>, DoctorError> {
        Ok(Vec::new())
    }

    async fn time_slots(&self, _date: NaiveDate) -> Result<Vec<TimeSlot>, DoctorError> {
        Ok(Vec::new())
    }

    async fn date_options(
        &self,
        _today: NaiveDate,
        _horizon_days: u32,
    ) -> Result<Vec<DateOption>, DoctorError> {
        Ok(Vec::new())
    }

    async fn reviews_for_doctor(&self, _doctor_id: &str) -> Result<Vec<Review>, DoctorError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_catalog_failure_propagates() {
    let result = load_booking_catalog(
        &OfflineCatalog,
        fixed_today(),
        &TestConfig::default().to_app_config(),
    )
    .await;

    assert_matches!(
        result,
        Err(AppointmentError::Catalog(DoctorError::CatalogUnavailable(_)))
    );
}
