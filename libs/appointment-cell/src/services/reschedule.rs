// libs/appointment-cell/src/services/reschedule.rs
use tracing::{debug, info, warn};

use doctor_cell::models::{DateOption, TimeSlot};
use shared_models::navigation::{NavigationHost, Route};

use crate::models::{
    Appointment, AppointmentError, BackOutcome, RejectionReason, RescheduleRecord,
    RescheduleSelection, RescheduleStep, TransitionOutcome,
};
use crate::services::appointments::AppointmentBook;
use crate::services::validation::{
    can_advance_from_date_time, check_date, check_date_time_complete, check_time,
};

/// Two-step wizard moving an existing appointment to a new date and time.
///
/// Choosing the second of date and time brings up the confirmation step directly,
/// the way the summary card appears once both are picked. The pickers stay live on
/// that step, so a new choice replaces the old one. `back` returns to the picker
/// with the selections kept.
#[derive(Debug, Clone)]
pub struct RescheduleFlow {
    appointment: Appointment,
    selection: RescheduleSelection,
    closed: bool,
}

impl RescheduleFlow {
    pub fn new(appointment: Appointment) -> Self {
        Self {
            appointment,
            selection: RescheduleSelection::default(),
            closed: false,
        }
    }

    pub fn load(book: &AppointmentBook, id: &str) -> Result<Self, AppointmentError> {
        let appointment = book.get_reschedulable(id)?.clone();
        debug!("Reschedule flow opened for appointment {}", id);
        Ok(Self::new(appointment))
    }

    pub fn appointment(&self) -> &Appointment {
        &self.appointment
    }

    pub fn selection(&self) -> &RescheduleSelection {
        &self.selection
    }

    pub fn step(&self) -> RescheduleStep {
        self.selection.step
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// e.g. "Today, 10:30 AM"
    pub fn original_slot(&self) -> String {
        format!("{}, {}", self.appointment.date, self.appointment.time)
    }

    /// Label of the chosen date, e.g. "Wed, 5 Jun".
    pub fn formatted_new_date(&self) -> Option<String> {
        self.selection.date.as_ref().map(DateOption::label)
    }

    fn expect_open(&self) -> Result<(), RejectionReason> {
        if self.closed {
            Err(RejectionReason::FlowClosed)
        } else {
            Ok(())
        }
    }

    fn expect_picking(&self) -> Result<(), RejectionReason> {
        if self.closed {
            Err(RejectionReason::FlowClosed)
        } else if self.selection.step != RescheduleStep::SelectNewDateTime {
            Err(RejectionReason::WrongStep)
        } else {
            Ok(())
        }
    }

    fn enter_confirmation_when_complete(&mut self) {
        if can_advance_from_date_time(&self.selection) {
            self.selection.step = RescheduleStep::ConfirmReschedule;
        }
    }

    pub fn select_date(&mut self, date: &DateOption) -> TransitionOutcome {
        let result = self
            .expect_open()
            .and_then(|_| check_date(date))
            .map(|_| {
                self.selection.date = Some(date.clone());
                self.enter_confirmation_when_complete();
            });
        result.into()
    }

    pub fn select_time(&mut self, slot: &TimeSlot) -> TransitionOutcome {
        let result = self
            .expect_open()
            .and_then(|_| check_time(slot))
            .map(|_| {
                self.selection.time = Some(slot.clone());
                self.enter_confirmation_when_complete();
            });
        result.into()
    }

    pub fn advance(&mut self) -> TransitionOutcome {
        let result = self
            .expect_picking()
            .and_then(|_| check_date_time_complete(&self.selection))
            .map(|_| self.selection.step = RescheduleStep::ConfirmReschedule);
        result.into()
    }

    pub fn back(&mut self, nav: &mut impl NavigationHost) -> BackOutcome {
        if self.closed {
            return BackOutcome::ExitedFlow;
        }

        match self.selection.step {
            RescheduleStep::ConfirmReschedule => {
                self.selection.step = RescheduleStep::SelectNewDateTime;
                BackOutcome::SteppedBack(RescheduleStep::SelectNewDateTime.number())
            }
            RescheduleStep::SelectNewDateTime => {
                self.closed = true;
                nav.back();
                BackOutcome::ExitedFlow
            }
        }
    }

    /// Submits the new slot and returns to the appointments list.
    pub fn confirm(
        &mut self,
        nav: &mut impl NavigationHost,
    ) -> Result<RescheduleRecord, RejectionReason> {
        if self.closed {
            return Err(RejectionReason::FlowClosed);
        }
        if self.selection.step != RescheduleStep::ConfirmReschedule {
            return Err(RejectionReason::WrongStep);
        }

        let (date, time) = match (&self.selection.date, &self.selection.time) {
            (Some(date), Some(time)) => (date, time),
            _ => {
                warn!("Reschedule confirmation reached without a complete selection");
                return Err(RejectionReason::IncompleteSelection);
            }
        };

        let record = RescheduleRecord {
            appointment_id: self.appointment.id.clone(),
            from: self.original_slot(),
            to: format!("{}, {}", date.label(), time.time),
        };

        info!(
            "Appointment {} rescheduled from {} to {}",
            record.appointment_id, record.from, record.to
        );

        self.closed = true;
        nav.push(Route::Appointments);
        Ok(record)
    }
}
