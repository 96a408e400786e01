//! Signup domain models for shuttle pickup registrations.
//!
//! Signups live in a day-scoped table: the "collection" a signup belongs to
//! is the server's current UTC date at the time the request is handled, never
//! a client-supplied date.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel group value meaning "explicitly removed from a group".
///
/// Distinct from an absent group, which means the signup was never assigned.
pub const GROUP_NONE: &str = "None";

/// Builds the signup document id from its composite parts.
///
/// A student may sign up once per pickup location per day.
pub fn signup_doc_id(student_id: &str, location: &str) -> String {
    format!("{}-{}", student_id, location)
}

/// Returns the day key for "today" derived from the server clock (UTC).
pub fn current_day() -> NaiveDate {
    Utc::now().date_naive()
}

/// A student's registration for a shuttle pickup at a location/time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub location: String,
    pub time: String,
    /// Bus id this signup is grouped into, [`GROUP_NONE`] after ungrouping,
    /// or `None` if never assigned.
    pub group: Option<String>,
}

/// Request payload for creating a signup.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSignupRequest {
    /// Student id; combined with `location` to form the document id.
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub location: String,
    pub time: String,
}

/// Request payload for editing a signup. Only location and time are mutable.
#[derive(Debug, Clone, Deserialize)]
pub struct EditSignupRequest {
    pub location: String,
    pub time: String,
}

/// Signup as returned by the list endpoint.
///
/// The group field is intentionally omitted from this view.
#[derive(Debug, Clone, Serialize)]
pub struct SignupSummary {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub location: String,
    pub time: String,
}
