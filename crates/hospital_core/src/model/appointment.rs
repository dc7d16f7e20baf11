//! Appointment record and its summary projection.
//!
//! # Invariants
//! - `patient_id` and `doctor_id` resolved to registered entities when the
//!   appointment was created; only the registry constructs appointments.
//! - `scheduled_at` carries minute precision in local naive time.

use crate::model::doctor::Doctor;
use crate::model::patient::Patient;
use crate::model::{AppointmentId, DoctorId, PatientId};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Display format for appointment date-times in summary lines.
pub const APPOINTMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One scheduled appointment between a patient and a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    scheduled_at: NaiveDateTime,
}

impl Appointment {
    pub(crate) fn new(
        id: impl Into<AppointmentId>,
        patient_id: impl Into<PatientId>,
        doctor_id: impl Into<DoctorId>,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            scheduled_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn doctor_id(&self) -> &str {
        &self.doctor_id
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }
}

/// Appointment joined with the patient and doctor it references.
///
/// Appointments only store identifiers, so rendering a detail line needs the
/// resolved participants alongside.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentDetails<'a> {
    pub appointment: &'a Appointment,
    pub patient: &'a Patient,
    pub doctor: &'a Doctor,
}

impl Display for AppointmentDetails<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Appointment ID: {}, Patient: {}, Doctor: {}, Date: {}",
            self.appointment.id,
            self.patient.name,
            self.doctor.name,
            self.appointment.scheduled_at.format(APPOINTMENT_TIME_FORMAT)
        )
    }
}
