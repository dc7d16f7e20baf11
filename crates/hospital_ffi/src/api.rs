//! FFI use-case API for the desktop front-desk forms.
//!
//! # Responsibility
//! - Expose form-level functions to Dart via FRB.
//! - Translate use-case outcomes into dialog-ready responses.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A session is created explicitly by the UI; there is no global registry.

use hospital_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FrontDesk, FrontDeskResult, Hospital, DEFAULT_HOSPITAL_NAME,
};
use log::info;

const SUCCESS_TITLE: &str = "Success";
const ERROR_TITLE: &str = "Error";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Dialog payload returned by every form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    /// Whether the form action took effect.
    pub ok: bool,
    /// Dialog title (`Success` or `Error`).
    pub title: String,
    /// Dialog body shown to the user.
    pub message: String,
}

impl From<FrontDeskResult<&'static str>> for FormResponse {
    fn from(value: FrontDeskResult<&'static str>) -> Self {
        match value {
            Ok(message) => Self {
                ok: true,
                title: SUCCESS_TITLE.to_string(),
                message: message.to_string(),
            },
            Err(err) => Self {
                ok: false,
                title: ERROR_TITLE.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// One front-desk session owning its registry.
#[flutter_rust_bridge::frb(opaque)]
pub struct HospitalSession {
    desk: FrontDesk,
}

impl HospitalSession {
    /// Opens a session over an empty registry called `name`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new(name: String) -> Self {
        info!("event=session_open module=ffi status=ok");
        Self {
            desk: FrontDesk::new(Hospital::new(name)),
        }
    }

    /// Opens a session named after the default hospital.
    #[flutter_rust_bridge::frb(sync)]
    pub fn default_hospital() -> Self {
        Self::new(DEFAULT_HOSPITAL_NAME.to_string())
    }

    /// Add-patient form submission. `age` is the raw field text.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_patient(
        &mut self,
        patient_id: String,
        name: String,
        age: String,
        medical_history: String,
    ) -> FormResponse {
        self.desk
            .add_patient(&patient_id, &name, &age, &medical_history)
            .into()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_doctor(
        &mut self,
        doctor_id: String,
        name: String,
        specialty: String,
    ) -> FormResponse {
        self.desk.add_doctor(&doctor_id, &name, &specialty).into()
    }

    /// Schedule form submission; `date` is `YYYY-MM-DD`, `time` is `HH:MM`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn schedule_appointment(
        &mut self,
        appointment_id: String,
        patient_id: String,
        doctor_id: String,
        date: String,
        time: String,
    ) -> FormResponse {
        self.desk
            .schedule_appointment(&appointment_id, &patient_id, &doctor_id, &date, &time)
            .into()
    }

    /// Text for the summary view.
    #[flutter_rust_bridge::frb(sync)]
    pub fn summary(&self) -> String {
        self.desk.summary()
    }

    /// Text for the action-history dialog.
    #[flutter_rust_bridge::frb(sync)]
    pub fn history_text(&self) -> String {
        self.desk.history_text()
    }
}
