//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into form-level use-case APIs.
//! - Keep UI/FFI layers decoupled from parsing and registry details.

pub mod front_desk;
