//! Core domain logic for the hospital front desk.
//! This crate owns the registry and every business invariant the UI relies on.

pub mod clock;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::appointment::{Appointment, AppointmentDetails};
pub use model::doctor::Doctor;
pub use model::patient::Patient;
pub use model::{AppointmentId, DoctorId, PatientId};
pub use registry::history::{ActionEntry, ActionLog};
pub use registry::{Hospital, RegistryError, RegistryResult};
pub use service::front_desk::{FrontDesk, FrontDeskError, FrontDeskResult};

/// Registry name used by the desktop front end.
pub const DEFAULT_HOSPITAL_NAME: &str = "City Health Center";

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
