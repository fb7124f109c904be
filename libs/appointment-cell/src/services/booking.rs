// libs/appointment-cell/src/services/booking.rs
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use doctor_cell::models::{DateOption, Doctor, TimeSlot};
use doctor_cell::services::CatalogProvider;
use shared_config::AppConfig;
use shared_models::navigation::{NavigationHost, Route};

use crate::models::{
    AppointmentError, AppointmentType, BackOutcome, BookingCatalog, BookingRecord,
    BookingSelection, BookingStep, RejectionReason, TransitionOutcome,
};
use crate::services::validation::{check_date, check_date_time_complete, check_doctor, check_time};

/// Fetch the candidates shown by the booking and reschedule wizards.
#[instrument(skip(catalog, config))]
pub async fn load_booking_catalog(
    catalog: &dyn CatalogProvider,
    today: NaiveDate,
    config: &AppConfig,
) -> Result<BookingCatalog, AppointmentError> {
    let doctors = catalog.doctors().await?;
    let dates = catalog
        .date_options(today, config.booking_horizon_days)
        .await?;
    let time_slots = catalog.time_slots(today).await?;

    debug!(
        "Booking catalog loaded: {} doctors, {} dates, {} slots",
        doctors.len(),
        dates.len(),
        time_slots.len()
    );

    Ok(BookingCatalog {
        doctors,
        dates,
        time_slots,
    })
}

/// Three-step booking wizard: doctor, then date/time/type, then confirmation.
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    selection: BookingSelection,
    closed: bool,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn step(&self) -> BookingStep {
        self.selection.step
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn expect_step(&self, step: BookingStep) -> Result<(), RejectionReason> {
        if self.closed {
            return Err(RejectionReason::FlowClosed);
        }
        if self.selection.step != step {
            return Err(RejectionReason::WrongStep);
        }
        Ok(())
    }

    /// Picks the doctor and moves on to the date/time step.
    pub fn select_doctor(&mut self, doctor: &Doctor) -> TransitionOutcome {
        let result = self
            .expect_step(BookingStep::SelectDoctor)
            .and_then(|_| check_doctor(doctor))
            .map(|_| {
                self.selection.doctor = Some(doctor.clone());
                self.selection.step = BookingStep::SelectDateTimeType;
                debug!("Doctor {} selected", doctor.id);
            });
        result.into()
    }

    pub fn select_date(&mut self, date: &DateOption) -> TransitionOutcome {
        let result = self
            .expect_step(BookingStep::SelectDateTimeType)
            .and_then(|_| check_date(date))
            .map(|_| self.selection.date = Some(date.clone()));
        result.into()
    }

    pub fn select_time(&mut self, slot: &TimeSlot) -> TransitionOutcome {
        let result = self
            .expect_step(BookingStep::SelectDateTimeType)
            .and_then(|_| check_time(slot))
            .map(|_| self.selection.time = Some(slot.clone()));
        result.into()
    }

    pub fn select_type(&mut self, appointment_type: AppointmentType) -> TransitionOutcome {
        let result = self
            .expect_step(BookingStep::SelectDateTimeType)
            .map(|_| self.selection.appointment_type = appointment_type);
        result.into()
    }

    /// Date/time step to confirmation. Needs both a date and a time.
    pub fn advance(&mut self) -> TransitionOutcome {
        let result = self
            .expect_step(BookingStep::SelectDateTimeType)
            .and_then(|_| check_date_time_complete(&self.selection))
            .map(|_| self.selection.step = BookingStep::ConfirmAndPay);
        result.into()
    }

    /// One step back, or out of the wizard from the first step.
    pub fn back(&mut self, nav: &mut impl NavigationHost) -> BackOutcome {
        if self.closed {
            return BackOutcome::ExitedFlow;
        }

        match self.selection.step.previous() {
            Some(previous) => {
                self.selection.step = previous;
                BackOutcome::SteppedBack(previous.number())
            }
            None => {
                self.closed = true;
                nav.back();
                BackOutcome::ExitedFlow
            }
        }
    }

    /// Submits the booking and shows the appointments list.
    pub fn confirm(
        &mut self,
        nav: &mut impl NavigationHost,
    ) -> Result<BookingRecord, RejectionReason> {
        self.expect_step(BookingStep::ConfirmAndPay)?;

        let (doctor, date, time) = match (
            &self.selection.doctor,
            &self.selection.date,
            &self.selection.time,
        ) {
            (Some(doctor), Some(date), Some(time)) => (doctor, date, time),
            _ => {
                warn!("Confirmation reached without a complete selection");
                return Err(RejectionReason::IncompleteSelection);
            }
        };

        let record = BookingRecord {
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            date_label: date.label(),
            time: time.time.clone(),
            appointment_type: self.selection.appointment_type,
            price: doctor.price.clone(),
        };

        info!(
            "Appointment booked with {} on {} at {}",
            record.doctor_name, record.date_label, record.time
        );

        self.closed = true;
        nav.push(Route::Appointments);
        Ok(record)
    }
}
