//! Front-desk form use-cases.
//!
//! # Responsibility
//! - Turn raw form field text into typed registry calls.
//! - Reject malformed input and past appointment times before the registry
//!   is touched.
//! - Map every outcome to the message shown to the user.
//!
//! # Invariants
//! - A parse or past-time failure never mutates the registry.
//! - Success and error messages are stable UI strings.

use crate::clock::{Clock, SystemClock};
use crate::registry::{Hospital, RegistryError};
use chrono::NaiveDateTime;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Input format of the joined date and time fields.
pub const FORM_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const PATIENT_ADDED: &str = "Patient added successfully";
pub const DOCTOR_ADDED: &str = "Doctor added successfully";
pub const APPOINTMENT_SCHEDULED: &str = "Appointment scheduled successfully";
pub const NO_HISTORY_AVAILABLE: &str = "No history available";

pub type FrontDeskResult<T> = Result<T, FrontDeskError>;

/// Form-level failure; `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontDeskError {
    /// Age field is not an integer.
    InvalidAge,
    /// Date or time field does not match `YYYY-MM-DD` + `HH:MM`.
    InvalidDateTime,
    /// Parsed appointment time lies before the current time.
    PastDateTime,
    DuplicatePatient,
    DuplicateDoctor,
    /// Unknown participant or reused appointment id.
    Rejected(RegistryError),
}

impl Display for FrontDeskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAge => write!(f, "Invalid age"),
            Self::InvalidDateTime => write!(f, "Invalid date/time format"),
            Self::PastDateTime => write!(f, "Cannot schedule appointment in the past"),
            Self::DuplicatePatient => write!(f, "Patient ID already exists"),
            Self::DuplicateDoctor => write!(f, "Doctor ID already exists"),
            Self::Rejected(_) => write!(f, "Invalid IDs or appointment ID exists"),
        }
    }
}

impl Error for FrontDeskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegistryError> for FrontDeskError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::DuplicatePatient(_) => Self::DuplicatePatient,
            RegistryError::DuplicateDoctor(_) => Self::DuplicateDoctor,
            other => Self::Rejected(other),
        }
    }
}

/// Form use-case facade over one registry.
#[derive(Debug)]
pub struct FrontDesk<C: Clock = SystemClock> {
    hospital: Hospital<C>,
}

impl<C: Clock> FrontDesk<C> {
    /// Creates a service that drives the provided registry.
    pub fn new(hospital: Hospital<C>) -> Self {
        Self { hospital }
    }

    pub fn hospital(&self) -> &Hospital<C> {
        &self.hospital
    }

    /// Handles the add-patient form.
    pub fn add_patient(
        &mut self,
        patient_id: &str,
        name: &str,
        age_text: &str,
        medical_history: &str,
    ) -> FrontDeskResult<&'static str> {
        let age = parse_age(age_text)?;
        self.hospital
            .try_add_patient(patient_id, name, age, medical_history)?;
        Ok(PATIENT_ADDED)
    }

    /// Handles the add-doctor form.
    pub fn add_doctor(
        &mut self,
        doctor_id: &str,
        name: &str,
        specialty: &str,
    ) -> FrontDeskResult<&'static str> {
        self.hospital.try_add_doctor(doctor_id, name, specialty)?;
        Ok(DOCTOR_ADDED)
    }

    /// Handles the schedule-appointment form.
    ///
    /// # Contract
    /// - `date_text` is `YYYY-MM-DD`, `time_text` is `HH:MM`.
    /// - Times strictly before the clock's current time are refused.
    pub fn schedule_appointment(
        &mut self,
        appointment_id: &str,
        patient_id: &str,
        doctor_id: &str,
        date_text: &str,
        time_text: &str,
    ) -> FrontDeskResult<&'static str> {
        let scheduled_at = parse_appointment_time(date_text, time_text)?;
        if scheduled_at < self.hospital.clock().now() {
            warn!("event=appointment_form module=front_desk status=rejected reason=past_time");
            return Err(FrontDeskError::PastDateTime);
        }
        self.hospital
            .try_schedule_appointment(appointment_id, patient_id, doctor_id, scheduled_at)?;
        Ok(APPOINTMENT_SCHEDULED)
    }

    pub fn summary(&self) -> String {
        self.hospital.get_summary()
    }

    pub fn history(&self) -> Vec<String> {
        self.hospital.get_history()
    }

    /// History joined into one newline-separated block.
    pub fn history_text(&self) -> String {
        let text = self.history().join("\n");
        if text.is_empty() {
            NO_HISTORY_AVAILABLE.to_string()
        } else {
            text
        }
    }
}

/// Parses the age field as a signed integer, ignoring surrounding spaces.
pub fn parse_age(age_text: &str) -> FrontDeskResult<i64> {
    age_text.trim().parse::<i64>().map_err(|_| {
        warn!("event=patient_form module=front_desk status=rejected reason=invalid_age");
        FrontDeskError::InvalidAge
    })
}

/// Parses the date and time fields joined by one space.
///
/// The year must be exactly four digits; month, day, hour and minute take
/// one or two digits. No sign or surrounding whitespace is accepted.
pub fn parse_appointment_time(date_text: &str, time_text: &str) -> FrontDeskResult<NaiveDateTime> {
    if !has_form_shape(date_text, '-', &[4..=4, 1..=2, 1..=2])
        || !has_form_shape(time_text, ':', &[1..=2, 1..=2])
    {
        return Err(invalid_date_time());
    }
    let joined = format!("{date_text} {time_text}");
    NaiveDateTime::parse_from_str(&joined, FORM_DATE_TIME_FORMAT).map_err(|_| invalid_date_time())
}

fn has_form_shape(text: &str, separator: char, widths: &[RangeInclusive<usize>]) -> bool {
    let parts: Vec<&str> = text.split(separator).collect();
    parts.len() == widths.len()
        && parts.iter().zip(widths).all(|(part, width)| {
            width.contains(&part.len()) && part.bytes().all(|byte| byte.is_ascii_digit())
        })
}

fn invalid_date_time() -> FrontDeskError {
    warn!("event=appointment_form module=front_desk status=rejected reason=invalid_date_time");
    FrontDeskError::InvalidDateTime
}
