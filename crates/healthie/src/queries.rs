//! GraphQL query documents for the practice-management API.
//!
//! Field selections here must stay in lockstep with the wire models in
//! [`crate::records`].

/// All active patients with basic info.
pub const LIST_PATIENTS: &str = r#"
query listPatients {
  users(active_status: "active") {
    id
    first_name
    last_name
    email
    phone_number
    dob
    gender
    height
    weight
    active
    created_at
    last_activity
  }
}
"#;

/// Patient demographics plus the raw quick-notes export.
pub const PATIENT_OVERVIEW: &str = r#"
query patientOverview($userId: ID!) {
  user(id: $userId) {
    id
    first_name
    last_name
    email
    phone_number
    dob
    gender
    quick_notes
  }
}
"#;

/// Just the quick-notes export for one patient.
pub const PATIENT_QUICK_NOTES: &str = r#"
query patientQuickNotes($userId: ID!) {
  user(id: $userId) {
    id
    first_name
    last_name
    email
    quick_notes
  }
}
"#;

/// A patient's appointment history with providers and types.
pub const PATIENT_APPOINTMENTS: &str = r#"
query patientAppointments($userId: ID!) {
  user(id: $userId) {
    id
    first_name
    last_name
    appointments {
      id
      date
      confirmed
      provider {
        id
        first_name
        last_name
      }
      attendees {
        id
      }
      appointment_type {
        name
        length
      }
    }
  }
}
"#;
