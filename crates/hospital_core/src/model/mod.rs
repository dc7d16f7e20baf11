//! Entity records held by the hospital registry.
//!
//! # Responsibility
//! - Define patient, doctor and appointment records.
//! - Provide the detail-line rendering each entity exposes in the summary.
//!
//! # Invariants
//! - Identifiers are caller-supplied and unique only within their own kind.
//! - Entities never hold references to each other; relations are resolved
//!   by the registry through identifier lookups.

pub mod appointment;
pub mod doctor;
pub mod patient;

/// Caller-supplied patient identifier.
pub type PatientId = String;

/// Caller-supplied doctor identifier.
pub type DoctorId = String;

/// Caller-supplied appointment identifier.
pub type AppointmentId = String;
