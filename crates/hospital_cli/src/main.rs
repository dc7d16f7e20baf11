//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `hospital_core` linkage without the desktop UI.
//! - Run the reference front-desk scenario and print what the UI would show.
//!
//! Set `HOSPITAL_LOG_DIR` to an absolute path to also write diagnostic logs.

use chrono::{Duration, Local};
use hospital_core::{default_log_level, init_logging, FrontDesk, Hospital, DEFAULT_HOSPITAL_NAME};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "HOSPITAL_LOG_DIR";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn main() -> ExitCode {
    println!("hospital_core ping={}", hospital_core::ping());
    println!("hospital_core version={}", hospital_core::core_version());

    if let Some(log_dir) = std::env::var(LOG_DIR_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
    {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut desk = FrontDesk::new(Hospital::new(DEFAULT_HOSPITAL_NAME));
    let tomorrow = Local::now().naive_local() + Duration::days(1);
    let date = tomorrow.format(DATE_FORMAT).to_string();
    let time = tomorrow.format(TIME_FORMAT).to_string();

    let steps = [
        desk.add_patient("P1", "Alice", "30", "none"),
        desk.add_doctor("D1", "Bob", "Cardiology"),
        desk.schedule_appointment("A1", "P1", "D1", &date, &time),
    ];

    let mut failed = false;
    for outcome in steps {
        match outcome {
            Ok(message) => println!("ok: {message}"),
            Err(err) => {
                failed = true;
                eprintln!("error: {err}");
            }
        }
    }

    println!();
    println!("{}", desk.summary());
    println!();
    println!("{}", desk.history_text());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
