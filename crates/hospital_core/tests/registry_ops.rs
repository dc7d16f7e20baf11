use chrono::{Duration, NaiveDate, NaiveDateTime};
use hospital_core::{FixedClock, Hospital, RegistryError, SystemClock};

fn instant(day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 6, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

fn fixed_hospital() -> Hospital<FixedClock> {
    Hospital::with_clock("City Health Center", FixedClock(instant(1, 9, 15, 42)))
}

#[test]
fn duplicate_patient_is_refused_and_first_record_kept() {
    let mut hospital = fixed_hospital();

    assert!(hospital.add_patient("P1", "Alice", 30, "none"));
    assert!(!hospital.add_patient("P1", "Mallory", 55, "asthma"));

    assert_eq!(hospital.patient_count(), 1);
    let patient = hospital.patient("P1").unwrap();
    assert_eq!(patient.name, "Alice");
    assert_eq!(patient.age, 30);
    assert_eq!(patient.medical_history, "none");
}

#[test]
fn duplicate_doctor_is_refused() {
    let mut hospital = fixed_hospital();

    assert!(hospital.add_doctor("D1", "Bob", "Cardiology"));
    let err = hospital
        .try_add_doctor("D1", "Eve", "Neurology")
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateDoctor("D1".to_string()));
    assert_eq!(hospital.doctor("D1").unwrap().specialty, "Cardiology");
}

#[test]
fn age_and_history_are_accepted_verbatim() {
    let mut hospital = fixed_hospital();

    assert!(hospital.add_patient("P1", "", -4, ""));
    let patient = hospital.patient("P1").unwrap();
    assert_eq!(patient.age, -4);
    assert!(patient.medical_history.is_empty());
}

#[test]
fn unknown_participants_never_create_appointments() {
    let mut hospital = fixed_hospital();
    hospital.add_patient("P1", "Alice", 30, "none");
    hospital.add_doctor("D1", "Bob", "Cardiology");
    let when = instant(2, 10, 0, 0);

    assert!(!hospital.schedule_appointment("A1", "P2", "D1", when));
    assert!(!hospital.schedule_appointment("A1", "P1", "D2", when));
    assert!(!hospital.schedule_appointment("A1", "P2", "D2", when));

    assert_eq!(hospital.appointment_count(), 0);
    assert!(hospital.appointment("A1").is_none());
    assert!(hospital.appointments_for_patient("P1").is_empty());
    assert!(hospital.appointments_for_doctor("D1").is_empty());
}

#[test]
fn scheduling_links_appointment_to_both_participants() {
    let mut hospital = fixed_hospital();
    hospital.add_patient("P1", "Alice", 30, "none");
    hospital.add_patient("P2", "Carol", 41, "diabetes");
    hospital.add_doctor("D1", "Bob", "Cardiology");

    assert!(hospital.schedule_appointment("A1", "P1", "D1", instant(2, 10, 0, 0)));
    assert_eq!(hospital.appointments_for_patient("P1").len(), 1);
    assert_eq!(hospital.appointments_for_doctor("D1").len(), 1);

    assert!(hospital.schedule_appointment("A2", "P2", "D1", instant(2, 11, 0, 0)));
    assert_eq!(hospital.appointments_for_patient("P1").len(), 1);
    assert_eq!(hospital.appointments_for_patient("P2").len(), 1);

    let doctor_ids: Vec<&str> = hospital
        .appointments_for_doctor("D1")
        .into_iter()
        .map(|appointment| appointment.id())
        .collect();
    assert_eq!(doctor_ids, vec!["A1", "A2"]);

    let appointment = hospital.appointment("A2").unwrap();
    assert_eq!(appointment.patient_id(), "P2");
    assert_eq!(appointment.doctor_id(), "D1");
    assert_eq!(appointment.scheduled_at(), instant(2, 11, 0, 0));
}

#[test]
fn overlapping_and_past_times_are_not_checked_by_the_registry() {
    let mut hospital = fixed_hospital();
    hospital.add_patient("P1", "Alice", 30, "none");
    hospital.add_doctor("D1", "Bob", "Cardiology");
    let past = instant(1, 9, 15, 42) - Duration::days(30);

    assert!(hospital.schedule_appointment("A1", "P1", "D1", past));
    assert!(hospital.schedule_appointment("A2", "P1", "D1", past));
    assert_eq!(hospital.appointments_for_patient("P1").len(), 2);
}

#[test]
fn fresh_history_has_single_placeholder() {
    let hospital = Hospital::new("City Health Center");
    assert_eq!(hospital.get_history(), vec!["No actions performed".to_string()]);
    assert!(hospital.log().is_empty());
}

#[test]
fn history_records_successful_mutations_in_call_order() {
    let mut hospital = fixed_hospital();
    hospital.add_patient("P1", "Alice", 30, "none");
    hospital.add_patient("P1", "Alice", 30, "none");
    hospital.add_doctor("D1", "Bob", "Cardiology");
    hospital.schedule_appointment("A1", "P9", "D1", instant(2, 10, 0, 0));
    hospital.schedule_appointment("A1", "P1", "D1", instant(2, 10, 0, 0));

    assert_eq!(
        hospital.get_history(),
        vec![
            "[2030-06-01 09:15:42] Added patient: Alice (ID: P1)".to_string(),
            "[2030-06-01 09:15:42] Added doctor: Bob (ID: D1)".to_string(),
            "[2030-06-01 09:15:42] Scheduled appointment A1 for Alice with Bob".to_string(),
        ]
    );
}

#[test]
fn system_clock_history_entries_are_timestamp_prefixed() {
    let mut hospital: Hospital<SystemClock> = Hospital::new("City Health Center");
    hospital.add_patient("P1", "Alice", 30, "none");
    hospital.add_doctor("D1", "Bob", "Cardiology");

    let history = hospital.get_history();
    assert_eq!(history.len(), 2);
    for entry in &history {
        // "[YYYY-MM-DD HH:MM:SS] "
        assert_eq!(entry.as_bytes()[0], b'[');
        assert_eq!(&entry[20..22], "] ");
        assert!(NaiveDateTime::parse_from_str(&entry[1..20], "%Y-%m-%d %H:%M:%S").is_ok());
    }
    assert!(history[0].ends_with("Added patient: Alice (ID: P1)"));
}

#[test]
fn empty_summary_lists_only_headers() {
    let hospital = fixed_hospital();
    assert_eq!(
        hospital.get_summary(),
        "Hospital: City Health Center\n\nPatients:\n\nDoctors:\n\nAppointments:"
    );
}

#[test]
fn summary_is_idempotent_and_leaves_history_alone() {
    let mut hospital = fixed_hospital();
    hospital.add_patient("P1", "Alice", 30, "none");

    let first = hospital.get_summary();
    let second = hospital.get_summary();
    assert_eq!(first, second);
    assert_eq!(hospital.log().len(), 1);
}

#[test]
fn summary_keeps_insertion_order_per_group() {
    let mut hospital = fixed_hospital();
    hospital.add_patient("P2", "Zed", 70, "gout");
    hospital.add_patient("P1", "Amy", 20, "none");
    hospital.add_doctor("D9", "Yan", "Oncology");
    hospital.add_doctor("D1", "Ada", "Pediatrics");

    let summary = hospital.get_summary();
    let zed = summary.find("Patient: Zed").unwrap();
    let amy = summary.find("Patient: Amy").unwrap();
    let yan = summary.find("Doctor: Yan").unwrap();
    let ada = summary.find("Doctor: Ada").unwrap();
    assert!(zed < amy);
    assert!(amy < yan);
    assert!(yan < ada);
}

#[test]
fn reference_scenario_renders_all_three_entities() {
    let mut hospital = Hospital::new("City Health Center");
    let future = chrono::Local::now().naive_local() + Duration::days(1);

    assert!(hospital.add_patient("P1", "Alice", 30, "none"));
    assert!(hospital.add_doctor("D1", "Bob", "Cardiology"));
    assert!(hospital.schedule_appointment("A1", "P1", "D1", future));

    let summary = hospital.get_summary();
    assert!(summary.contains("Patient: Alice, ID: P1, Age: 30, History: none"));
    assert!(summary.contains("Doctor: Bob, ID: D1, Specialty: Cardiology"));
    let expected = format!(
        "Appointment ID: A1, Patient: Alice, Doctor: Bob, Date: {}",
        future.format("%Y-%m-%d %H:%M")
    );
    assert!(summary.ends_with(&expected), "{summary}");
    assert_eq!(hospital.get_history().len(), 3);
}
