// libs/appointment-cell/src/services/appointments.rs
use tracing::{debug, warn};

use shared_models::navigation::{NavigationHost, Route};

use crate::models::{Appointment, AppointmentDoctor, AppointmentError, AppointmentStatus, AppointmentType};

/// The patient's appointment list, grouped into tabs by status.
#[derive(Debug, Clone)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl Default for AppointmentBook {
    fn default() -> Self {
        Self::new(seed_appointments())
    }
}

impl AppointmentBook {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appointments in one tab, list order preserved.
    pub fn by_status(&self, status: AppointmentStatus) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.status == status)
            .collect()
    }

    /// `None` means no status filter (the "all" chip on the schedule screen).
    pub fn filter(&self, status: Option<AppointmentStatus>) -> Vec<&Appointment> {
        match status {
            Some(status) => self.by_status(status),
            None => self.appointments.iter().collect(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&Appointment, AppointmentError> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == id)
            .ok_or_else(|| {
                warn!("Appointment {} not found", id);
                AppointmentError::NotFound(id.to_string())
            })
    }

    /// Only upcoming appointments can be moved.
    pub fn get_reschedulable(&self, id: &str) -> Result<&Appointment, AppointmentError> {
        let appointment = self.get(id)?;
        if appointment.status != AppointmentStatus::Upcoming {
            warn!("Appointment {} is {}, refusing reschedule", id, appointment.status);
            return Err(AppointmentError::NotReschedulable(
                id.to_string(),
                appointment.status,
            ));
        }
        Ok(appointment)
    }

    /// Opens the reschedule wizard for an upcoming appointment.
    pub fn open_reschedule(
        &self,
        id: &str,
        nav: &mut impl NavigationHost,
    ) -> Result<(), AppointmentError> {
        let appointment = self.get_reschedulable(id)?;
        debug!("Opening reschedule for appointment {}", appointment.id);
        nav.push(Route::RescheduleAppointment {
            id: appointment.id.clone(),
        });
        Ok(())
    }

    pub fn open_booking(&self, nav: &mut impl NavigationHost) {
        nav.push(Route::BookAppointment);
    }
}

fn appointment(
    id: &str,
    doctor: (&str, &str, &str),
    date: &str,
    time: &str,
    appointment_type: AppointmentType,
    status: AppointmentStatus,
) -> Appointment {
    let (doctor_id, name, specialty) = doctor;
    Appointment {
        id: id.to_string(),
        doctor: AppointmentDoctor {
            id: doctor_id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        },
        patient_name: "John Smith".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        appointment_type,
        status,
    }
}

pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        appointment(
            "1",
            ("1", "Dr. Sarah Johnson", "Cardiologist"),
            "Today",
            "10:30 AM",
            AppointmentType::Video,
            AppointmentStatus::Upcoming,
        ),
        appointment(
            "2",
            ("2", "Dr. Mark Wilson", "Pediatrician"),
            "Tomorrow",
            "2:00 PM",
            AppointmentType::Chat,
            AppointmentStatus::Upcoming,
        ),
        appointment(
            "3",
            ("3", "Dr. Lisa Chen", "Dermatologist"),
            "12 Jun 2023",
            "11:00 AM",
            AppointmentType::Video,
            AppointmentStatus::Completed,
        ),
        appointment(
            "4",
            ("4", "Dr. James Lee", "Orthopedic"),
            "5 Jun 2023",
            "9:30 AM",
            AppointmentType::Chat,
            AppointmentStatus::Canceled,
        ),
    ]
}
