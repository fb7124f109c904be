// libs/appointment-cell/src/services/validation.rs
use tracing::debug;

use doctor_cell::models::{DateOption, Doctor, TimeSlot};

use crate::models::{DateTimeSelection, RejectionReason};

/// Both the date and the time must be chosen before leaving a date/time step.
pub fn can_advance_from_date_time(selection: &impl DateTimeSelection) -> bool {
    selection.selected_date().is_some() && selection.selected_time().is_some()
}

pub fn check_date_time_complete(selection: &impl DateTimeSelection) -> Result<(), RejectionReason> {
    if can_advance_from_date_time(selection) {
        Ok(())
    } else {
        debug!("Date/time selection incomplete");
        Err(RejectionReason::IncompleteSelection)
    }
}

pub fn check_doctor(doctor: &Doctor) -> Result<(), RejectionReason> {
    if doctor.available {
        Ok(())
    } else {
        debug!("Rejected unavailable doctor {}", doctor.id);
        Err(RejectionReason::DoctorUnavailable)
    }
}

pub fn check_date(date: &DateOption) -> Result<(), RejectionReason> {
    if date.available {
        Ok(())
    } else {
        debug!("Rejected unavailable date {}", date.id);
        Err(RejectionReason::DateUnavailable)
    }
}

pub fn check_time(slot: &TimeSlot) -> Result<(), RejectionReason> {
    if slot.available {
        Ok(())
    } else {
        debug!("Rejected unavailable time slot {}", slot.id);
        Err(RejectionReason::TimeUnavailable)
    }
}
