// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use doctor_cell::models::{DateOption, Doctor, DoctorError, TimeSlot};
use shared_models::error::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    #[default]
    Video,
    Chat,
}

impl AppointmentType {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Video => "Video Consultation",
            AppointmentType::Chat => "Chat Consultation",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Video => write!(f, "video"),
            AppointmentType::Chat => write!(f, "chat"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Canceled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentDoctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

/// An entry of the appointments list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub doctor: AppointmentDoctor,
    pub patient_name: String,
    /// Display date, e.g. "Today" or "12 Jun 2023".
    pub date: String,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
}

// ==============================================================================
// FLOW STATE
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BookingStep {
    #[default]
    SelectDoctor,
    SelectDateTimeType,
    ConfirmAndPay,
}

impl BookingStep {
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::SelectDoctor => 1,
            BookingStep::SelectDateTimeType => 2,
            BookingStep::ConfirmAndPay => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::SelectDoctor => "Select Doctor",
            BookingStep::SelectDateTimeType => "Select Date & Time",
            BookingStep::ConfirmAndPay => "Confirm Booking",
        }
    }

    pub fn previous(&self) -> Option<BookingStep> {
        match self {
            BookingStep::SelectDoctor => None,
            BookingStep::SelectDateTimeType => Some(BookingStep::SelectDoctor),
            BookingStep::ConfirmAndPay => Some(BookingStep::SelectDateTimeType),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RescheduleStep {
    #[default]
    SelectNewDateTime,
    ConfirmReschedule,
}

impl RescheduleStep {
    pub fn number(&self) -> u8 {
        match self {
            RescheduleStep::SelectNewDateTime => 1,
            RescheduleStep::ConfirmReschedule => 2,
        }
    }
}

/// Everything the booking wizard has chosen so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingSelection {
    pub step: BookingStep,
    pub doctor: Option<Doctor>,
    pub date: Option<DateOption>,
    pub time: Option<TimeSlot>,
    pub appointment_type: AppointmentType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RescheduleSelection {
    pub step: RescheduleStep,
    pub date: Option<DateOption>,
    pub time: Option<TimeSlot>,
}

/// Read access shared by both wizards' date/time steps.
pub trait DateTimeSelection {
    fn selected_date(&self) -> Option<&DateOption>;
    fn selected_time(&self) -> Option<&TimeSlot>;
}

impl DateTimeSelection for BookingSelection {
    fn selected_date(&self) -> Option<&DateOption> {
        self.date.as_ref()
    }

    fn selected_time(&self) -> Option<&TimeSlot> {
        self.time.as_ref()
    }
}

impl DateTimeSelection for RescheduleSelection {
    fn selected_date(&self) -> Option<&DateOption> {
        self.date.as_ref()
    }

    fn selected_time(&self) -> Option<&TimeSlot> {
        self.time.as_ref()
    }
}

/// Result of a wizard transition. `Ignored` leaves the flow untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    Ignored(RejectionReason),
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied)
    }
}

impl From<Result<(), RejectionReason>> for TransitionOutcome {
    fn from(result: Result<(), RejectionReason>) -> Self {
        match result {
            Ok(()) => TransitionOutcome::Applied,
            Err(reason) => TransitionOutcome::Ignored(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("Action not available on this step")]
    WrongStep,

    #[error("Doctor is not available")]
    DoctorUnavailable,

    #[error("Date is not available")]
    DateUnavailable,

    #[error("Time slot is not available")]
    TimeUnavailable,

    #[error("Select both a date and a time")]
    IncompleteSelection,

    #[error("Flow already finished")]
    FlowClosed,
}

/// What `back` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    SteppedBack(u8),
    ExitedFlow,
}

// ==============================================================================
// SUBMISSIONS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date_label: String,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRecord {
    pub appointment_id: String,
    pub from: String,
    pub to: String,
}

/// Candidates for the booking wizard, fetched once when the screen opens.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingCatalog {
    pub doctors: Vec<Doctor>,
    pub dates: Vec<DateOption>,
    pub time_slots: Vec<TimeSlot>,
}

impl BookingCatalog {
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    pub fn date(&self, id: &str) -> Option<&DateOption> {
        self.dates.iter().find(|date| date.id == id)
    }

    pub fn time_slot(&self, id: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.id == id)
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment {0} not found")]
    NotFound(String),

    #[error("Appointment {0} is {1} and cannot be rescheduled")]
    NotReschedulable(String, AppointmentStatus),

    #[error("Catalog error: {0}")]
    Catalog(#[from] DoctorError),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(id) => AppError::NotFound(format!("Appointment {} not found", id)),
            err @ AppointmentError::NotReschedulable(..) => AppError::ValidationError(err.to_string()),
            AppointmentError::Catalog(e) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_type_defaults_to_video() {
        assert_eq!(AppointmentType::default(), AppointmentType::Video);
        assert_eq!(AppointmentType::Chat.label(), "Chat Consultation");
        assert_eq!(serde_json::to_string(&AppointmentType::Chat).unwrap(), "\"chat\"");
    }

    #[test]
    fn booking_steps_are_numbered() {
        assert_eq!(BookingStep::default().number(), 1);
        assert_eq!(BookingStep::ConfirmAndPay.number(), 3);
        assert_eq!(BookingStep::SelectDoctor.previous(), None);
        assert_eq!(
            BookingStep::ConfirmAndPay.previous(),
            Some(BookingStep::SelectDateTimeType)
        );
    }

    #[test]
    fn fresh_selection_is_empty() {
        let selection = BookingSelection::default();
        assert_eq!(selection.step, BookingStep::SelectDoctor);
        assert!(selection.doctor.is_none());
        assert!(selection.selected_date().is_none());
        assert!(selection.selected_time().is_none());
        assert_eq!(selection.appointment_type, AppointmentType::Video);
    }

    #[test]
    fn outcome_from_result() {
        assert!(TransitionOutcome::from(Ok(())).is_applied());
        assert_eq!(
            TransitionOutcome::from(Err(RejectionReason::WrongStep)),
            TransitionOutcome::Ignored(RejectionReason::WrongStep)
        );
    }
}
