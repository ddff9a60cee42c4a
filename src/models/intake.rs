//! Request payloads for the repository's constructor operations.
//!
//! The intake form layer validates field-level input (email shape, required
//! fields) before building these; the repository only enforces structural
//! invariants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContactChannel, Severity};

/// Organization fields captured during customer intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationDetails {
    pub name: String,
    pub sector: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub employee_bracket: String,
}

/// Primary-contact fields captured during customer intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub preferred_channel: ContactChannel,
}

/// Full structured intake payload for `create_organization`.
///
/// A non-empty `budget` string additionally opens a pipeline opportunity in
/// stage `lead`; the repository owns parsing the currency-formatted text
/// into a numeric value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationIntake {
    pub organization: OrganizationDetails,
    pub contact: ContactDetails,
    /// Compliance frameworks selected on the form, e.g. "CMMC 2.0".
    #[serde(default)]
    pub compliance: Vec<String>,
    /// Services of interest, e.g. "Gap Assessment".
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub timeline: String,
    /// Currency-formatted budget text, e.g. "$100,000". Empty = no budget.
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub notes: String,
}

/// Request to open a new assessment for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssessment {
    pub customer_id: Uuid,
    pub assessment_type: String,
    pub consultant: String,
    pub target_date: NaiveDate,
}

/// A finding as submitted by the assessment workflow, before an id is
/// assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFinding {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub control_ref: Option<String>,
}
