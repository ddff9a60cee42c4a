//! Entity records for the six persisted collections.
//!
//! Opportunities, engagements, and assessments carry a denormalized
//! `organization_name` (and, for opportunities, `sector`) snapshot taken at
//! creation time and never resynced. Display and search depend on that
//! snapshot staying stable even if the source organization changes later.
//! An `organization_id` of `None` is a legitimate state, not a broken
//! reference: rows seeded without an exact name match stay unattached.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of security domains rated during an assessment.
pub const SECURITY_DOMAINS: &[&str] = &[
    "Access Control",
    "Asset Management",
    "Data Protection",
    "Governance & Policy",
    "Incident Response",
    "Network Security",
    "Security Awareness",
    "Vulnerability Management",
];

// ============================================================================
// Organization & Contact
// ============================================================================

/// A customer organization. Root entity; other records point back at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub sector: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub website: String,
    /// Employee-count bracket, e.g. "51-200".
    pub employee_bracket: String,
    pub created_at: DateTime<Utc>,
}

/// Preferred channel for reaching a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Email,
    Phone,
    Teams,
}

/// A person at a customer organization.
///
/// Created 1:1 alongside the organization during intake, but multiple
/// contacts per organization are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub preferred_channel: ContactChannel,
}

// ============================================================================
// Opportunity
// ============================================================================

/// Pipeline stage for an opportunity. Variant order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    Lead,
    Assessment,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl OpportunityStage {
    /// All stages in pipeline order.
    pub const ALL: [OpportunityStage; 6] = [
        Self::Lead,
        Self::Assessment,
        Self::Proposal,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    /// True once the opportunity has left the open pipeline.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }
}

impl std::fmt::Display for OpportunityStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lead => write!(f, "lead"),
            Self::Assessment => write!(f, "assessment"),
            Self::Proposal => write!(f, "proposal"),
            Self::Negotiation => write!(f, "negotiation"),
            Self::ClosedWon => write!(f, "closed_won"),
            Self::ClosedLost => write!(f, "closed_lost"),
        }
    }
}

/// A sales opportunity moving through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    /// `None` when seeded/created without an organization match.
    pub organization_id: Option<Uuid>,
    /// Snapshot at creation time, never resynced.
    pub organization_name: String,
    /// Snapshot at creation time, never resynced.
    pub sector: String,
    pub stage: OpportunityStage,
    pub value: Decimal,
    pub description: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every stage mutation; never precedes `created_at`.
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Engagement
// ============================================================================

/// Delivery health of an engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementStatus {
    OnTrack,
    AtRisk,
    Blocked,
    Completed,
}

impl std::fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on_track"),
            Self::AtRisk => write!(f, "at_risk"),
            Self::Blocked => write!(f, "blocked"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// An active service engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    pub id: Uuid,
    pub organization_id: Option<Uuid>,
    /// Snapshot at creation time, never resynced.
    pub organization_name: String,
    pub engagement_type: String,
    /// Consultant display name; free text, not a team-member reference.
    pub consultant: String,
    pub status: EngagementStatus,
    /// Hours burned so far. No enforced relationship with `hours_budget`;
    /// over-budget is representable and drives alerting.
    pub hours_used: f64,
    pub hours_budget: f64,
    pub revenue: Decimal,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Engagement {
    /// True when burned hours exceed the budgeted hours.
    pub fn over_budget(&self) -> bool {
        self.hours_used > self.hours_budget
    }
}

// ============================================================================
// Assessment & Finding
// ============================================================================

/// Assessment lifecycle status, derived from progress writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Finding severity on the standard four-level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A single finding recorded against an assessment. Append-only: there is
/// no update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: Uuid,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Optional NIST control reference, e.g. "AC-2".
    pub control_ref: Option<String>,
}

/// A security assessment for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub organization_id: Option<Uuid>,
    /// Snapshot at creation time; "Unknown" when the customer id matched
    /// no organization.
    pub organization_name: String,
    pub assessment_type: String,
    pub consultant: String,
    /// Integer percentage, clamped to 0..=100 on every write.
    pub progress: u8,
    pub status: AssessmentStatus,
    /// Maturity rating per security domain: 0 = unrated, 1-5 = rated.
    pub domain_ratings: BTreeMap<String, u8>,
    pub findings: Vec<Finding>,
    pub target_date: NaiveDate,
    pub started_at: DateTime<Utc>,
    /// Set the first time progress reaches 100 and never cleared by a later
    /// decrease.
    pub completed_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Team member
// ============================================================================

/// Availability of a delivery team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    Out,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Busy => write!(f, "busy"),
            Self::Out => write!(f, "out"),
        }
    }
}

/// A delivery team member. Read-only in the current contract: no caller
/// mutates the roster, so no write API exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub specializations: Vec<String>,
    /// Current utilization percentage, 0-100.
    pub utilization: u8,
    pub active_engagements: u32,
    pub status: Availability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_matches_pipeline() {
        assert!(OpportunityStage::Lead < OpportunityStage::Proposal);
        assert!(OpportunityStage::Negotiation < OpportunityStage::ClosedWon);
        assert_eq!(OpportunityStage::ALL.len(), 6);
    }

    #[test]
    fn test_stage_display_wire_names() {
        assert_eq!(OpportunityStage::ClosedWon.to_string(), "closed_won");
        assert_eq!(AssessmentStatus::InProgress.to_string(), "in_progress");
        assert_eq!(EngagementStatus::AtRisk.to_string(), "at_risk");
    }

    #[test]
    fn test_stage_serde_snake_case() {
        let json = serde_json::to_string(&OpportunityStage::ClosedLost).unwrap();
        assert_eq!(json, "\"closed_lost\"");
        let back: OpportunityStage = serde_json::from_str("\"lead\"").unwrap();
        assert_eq!(back, OpportunityStage::Lead);
    }

    #[test]
    fn test_over_budget() {
        let eng = Engagement {
            id: Uuid::new_v4(),
            organization_id: None,
            organization_name: "Acme".into(),
            engagement_type: "vCISO".into(),
            consultant: "Dana Reyes".into(),
            status: EngagementStatus::OnTrack,
            hours_used: 90.0,
            hours_budget: 80.0,
            revenue: Decimal::new(25_000, 0),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            created_at: Utc::now(),
        };
        assert!(eng.over_budget());
    }

    #[test]
    fn test_security_domains_fixed_set() {
        assert_eq!(SECURITY_DOMAINS.len(), 8);
        let mut sorted = SECURITY_DOMAINS.to_vec();
        sorted.dedup();
        assert_eq!(sorted.len(), 8, "domain names must be unique");
    }
}
