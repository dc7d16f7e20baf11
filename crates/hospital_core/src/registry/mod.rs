//! In-memory hospital registry.
//!
//! # Responsibility
//! - Own the canonical patient, doctor and appointment mappings.
//! - Record every successful mutation in an append-only action log.
//! - Render the plain-text summary shown by the presentation layer.
//!
//! # Invariants
//! - Each identifier space is independent; uniqueness holds within one kind.
//! - An appointment is only created when its patient and doctor resolve.
//! - Failed operations leave every mapping and the log unchanged.
//! - Mapping iteration follows insertion order.

pub mod history;

use crate::clock::{Clock, SystemClock};
use crate::model::appointment::{Appointment, AppointmentDetails};
use crate::model::doctor::Doctor;
use crate::model::patient::Patient;
use crate::model::{AppointmentId, DoctorId, PatientId};
use chrono::{NaiveDateTime, Timelike};
use history::ActionLog;
use indexmap::IndexMap;
use log::{debug, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Reason a registry mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicatePatient(PatientId),
    DuplicateDoctor(DoctorId),
    DuplicateAppointment(AppointmentId),
    UnknownPatient(PatientId),
    UnknownDoctor(DoctorId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePatient(id) => write!(f, "patient id already registered: {id}"),
            Self::DuplicateDoctor(id) => write!(f, "doctor id already registered: {id}"),
            Self::DuplicateAppointment(id) => {
                write!(f, "appointment id already registered: {id}")
            }
            Self::UnknownPatient(id) => write!(f, "patient not found: {id}"),
            Self::UnknownDoctor(id) => write!(f, "doctor not found: {id}"),
        }
    }
}

impl Error for RegistryError {}

impl RegistryError {
    fn reason(&self) -> &'static str {
        match self {
            Self::DuplicatePatient(_)
            | Self::DuplicateDoctor(_)
            | Self::DuplicateAppointment(_) => "duplicate_id",
            Self::UnknownPatient(_) => "unknown_patient",
            Self::UnknownDoctor(_) => "unknown_doctor",
        }
    }
}

/// Registry facade over all hospital entities.
///
/// Constructed explicitly and passed to callers; there is no shared global
/// instance. Every public mutation has a boolean form and a `try_` form
/// that reports why it was refused.
#[derive(Debug)]
pub struct Hospital<C: Clock = SystemClock> {
    name: String,
    clock: C,
    patients: IndexMap<PatientId, Patient>,
    doctors: IndexMap<DoctorId, Doctor>,
    appointments: IndexMap<AppointmentId, Appointment>,
    patient_appointments: HashMap<PatientId, Vec<AppointmentId>>,
    doctor_appointments: HashMap<DoctorId, Vec<AppointmentId>>,
    log: ActionLog,
}

impl Hospital<SystemClock> {
    /// Creates an empty registry stamped by the host clock.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, SystemClock)
    }
}

impl<C: Clock> Hospital<C> {
    /// Creates an empty registry using `clock` for log timestamps.
    pub fn with_clock(name: impl Into<String>, clock: C) -> Self {
        Self {
            name: name.into(),
            clock,
            patients: IndexMap::new(),
            doctors: IndexMap::new(),
            appointments: IndexMap::new(),
            patient_appointments: HashMap::new(),
            doctor_appointments: HashMap::new(),
            log: ActionLog::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Registers a patient; returns `false` when `id` is already taken.
    pub fn add_patient(
        &mut self,
        id: impl Into<PatientId>,
        name: impl Into<String>,
        age: i64,
        medical_history: impl Into<String>,
    ) -> bool {
        self.try_add_patient(id, name, age, medical_history).is_ok()
    }

    /// Registers a patient.
    ///
    /// # Errors
    /// - `DuplicatePatient` when `id` is already registered. The existing
    ///   record is kept untouched.
    pub fn try_add_patient(
        &mut self,
        id: impl Into<PatientId>,
        name: impl Into<String>,
        age: i64,
        medical_history: impl Into<String>,
    ) -> RegistryResult<()> {
        let id = id.into();
        if self.patients.contains_key(&id) {
            return Err(reject("patient_add", RegistryError::DuplicatePatient(id)));
        }

        let patient = Patient::new(id.clone(), name, age, medical_history);
        let message = format!("Added patient: {} (ID: {})", patient.name, patient.id);
        self.patients.insert(id, patient);
        self.record(message);
        info!(
            "event=patient_add module=registry status=ok patients={}",
            self.patients.len()
        );
        Ok(())
    }

    /// Registers a doctor; returns `false` when `id` is already taken.
    pub fn add_doctor(
        &mut self,
        id: impl Into<DoctorId>,
        name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> bool {
        self.try_add_doctor(id, name, specialty).is_ok()
    }

    /// Registers a doctor.
    ///
    /// # Errors
    /// - `DuplicateDoctor` when `id` is already registered.
    pub fn try_add_doctor(
        &mut self,
        id: impl Into<DoctorId>,
        name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> RegistryResult<()> {
        let id = id.into();
        if self.doctors.contains_key(&id) {
            return Err(reject("doctor_add", RegistryError::DuplicateDoctor(id)));
        }

        let doctor = Doctor::new(id.clone(), name, specialty);
        let message = format!("Added doctor: {} (ID: {})", doctor.name, doctor.id);
        self.doctors.insert(id, doctor);
        self.record(message);
        info!(
            "event=doctor_add module=registry status=ok doctors={}",
            self.doctors.len()
        );
        Ok(())
    }

    /// Schedules an appointment; returns `false` when a participant is
    /// missing or `id` is already taken.
    pub fn schedule_appointment(
        &mut self,
        id: impl Into<AppointmentId>,
        patient_id: &str,
        doctor_id: &str,
        scheduled_at: NaiveDateTime,
    ) -> bool {
        self.try_schedule_appointment(id, patient_id, doctor_id, scheduled_at)
            .is_ok()
    }

    /// Schedules an appointment and links it to both participants.
    ///
    /// Seconds and sub-seconds of `scheduled_at` are dropped. No future-time
    /// or overlap checks are applied here.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `UnknownPatient` when `patient_id` does not resolve.
    /// - `UnknownDoctor` when `doctor_id` does not resolve.
    /// - `DuplicateAppointment` when `id` is already registered.
    pub fn try_schedule_appointment(
        &mut self,
        id: impl Into<AppointmentId>,
        patient_id: &str,
        doctor_id: &str,
        scheduled_at: NaiveDateTime,
    ) -> RegistryResult<()> {
        let id = id.into();
        let Some(patient) = self.patients.get(patient_id) else {
            return Err(reject(
                "appointment_schedule",
                RegistryError::UnknownPatient(patient_id.to_string()),
            ));
        };
        let Some(doctor) = self.doctors.get(doctor_id) else {
            return Err(reject(
                "appointment_schedule",
                RegistryError::UnknownDoctor(doctor_id.to_string()),
            ));
        };
        if self.appointments.contains_key(&id) {
            return Err(reject(
                "appointment_schedule",
                RegistryError::DuplicateAppointment(id),
            ));
        }

        let message = format!(
            "Scheduled appointment {} for {} with {}",
            id, patient.name, doctor.name
        );
        let appointment = Appointment::new(
            id.clone(),
            patient_id,
            doctor_id,
            truncate_to_minute(scheduled_at),
        );
        self.appointments.insert(id.clone(), appointment);
        self.patient_appointments
            .entry(patient_id.to_string())
            .or_default()
            .push(id.clone());
        self.doctor_appointments
            .entry(doctor_id.to_string())
            .or_default()
            .push(id);
        self.record(message);
        info!(
            "event=appointment_schedule module=registry status=ok appointments={}",
            self.appointments.len()
        );
        Ok(())
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.get(id)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// Appointments booked for one patient, in scheduling order.
    pub fn appointments_for_patient(&self, patient_id: &str) -> Vec<&Appointment> {
        self.resolve_appointments(self.patient_appointments.get(patient_id))
    }

    /// Appointments booked with one doctor, in scheduling order.
    pub fn appointments_for_doctor(&self, doctor_id: &str) -> Vec<&Appointment> {
        self.resolve_appointments(self.doctor_appointments.get(doctor_id))
    }

    /// Joins an appointment with its participants for display.
    pub fn appointment_details<'a>(
        &'a self,
        appointment: &'a Appointment,
    ) -> Option<AppointmentDetails<'a>> {
        Some(AppointmentDetails {
            appointment,
            patient: self.patients.get(appointment.patient_id())?,
            doctor: self.doctors.get(appointment.doctor_id())?,
        })
    }

    /// Renders the registry name followed by every patient, doctor and
    /// appointment detail line, each group in insertion order.
    pub fn get_summary(&self) -> String {
        let mut lines = vec![format!("Hospital: {}", self.name)];

        lines.push("\nPatients:".to_string());
        lines.extend(self.patients.values().map(ToString::to_string));

        lines.push("\nDoctors:".to_string());
        lines.extend(self.doctors.values().map(ToString::to_string));

        lines.push("\nAppointments:".to_string());
        lines.extend(
            self.appointments
                .values()
                .filter_map(|appointment| self.appointment_details(appointment))
                .map(|details| details.to_string()),
        );

        lines.join("\n")
    }

    /// Returns the rendered action log, oldest first.
    ///
    /// A fresh registry yields exactly one placeholder entry.
    pub fn get_history(&self) -> Vec<String> {
        self.log.render()
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    fn record(&mut self, message: String) {
        let now = self.clock.now();
        self.log.append(now, message);
    }

    fn resolve_appointments(&self, ids: Option<&Vec<AppointmentId>>) -> Vec<&Appointment> {
        ids.map(|ids| {
            ids.iter()
                .filter_map(|id| self.appointments.get(id))
                .collect()
        })
        .unwrap_or_default()
    }
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|at| at.with_nanosecond(0))
        .unwrap_or(at)
}

fn reject(operation: &str, err: RegistryError) -> RegistryError {
    debug!(
        "event={} module=registry status=rejected reason={}",
        operation,
        err.reason()
    );
    err
}
