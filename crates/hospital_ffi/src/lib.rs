//! Flutter-facing bridge over `hospital_core`.

pub mod api;
