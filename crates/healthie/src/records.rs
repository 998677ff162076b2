//! Wire models for practice-management API responses.
//!
//! These structs mirror the GraphQL field selections in [`crate::queries`].
//! The API is loosely typed on its side, so almost every field is optional
//! and defaults are tolerated; a record with gaps is still a usable record.
//!
//! Notes:
//! - `quick_notes` is carried as the raw export string; parsing it belongs
//!   to the `quicknotes` crate.
//! - Dates and timestamps are kept as the strings the API returned, with
//!   helpers for the timestamps that are known to be RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the active-patient listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    /// Opaque identifier assigned by the upstream API.
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Date of birth as the API formats it (YYYY-MM-DD).
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_activity: Option<String>,
}

impl PatientSummary {
    /// Display name assembled from whichever name parts are present.
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(first) = self.first_name.as_deref() {
            parts.push(first);
        }
        if let Some(last) = self.last_name.as_deref() {
            parts.push(last);
        }
        parts.join(" ")
    }
}

/// Patient demographics plus the raw quick-notes export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientOverview {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Raw questionnaire export. Absent when the patient has no intake data.
    #[serde(default)]
    pub quick_notes: Option<String>,
}

/// A booked appointment with its provider and type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub appointment_type: Option<AppointmentType>,
}

impl Appointment {
    /// Appointment start as a UTC timestamp, when the API sent RFC 3339.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        let date = self.date.as_deref()?;
        DateTime::parse_from_rfc3339(date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether anyone actually attended.
    pub fn attended(&self) -> bool {
        !self.attendees.is_empty()
    }
}

/// The clinician an appointment is booked with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Marker record for appointment attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
}

/// Appointment category and booked length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentType {
    #[serde(default)]
    pub name: Option<String>,
    /// Length in minutes.
    #[serde(default)]
    pub length: Option<i64>,
}

/// A patient row with their appointment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAppointments {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}
