//! Typed error model for the CRM core.
//!
//! The taxonomy is deliberately small:
//!
//! - `NotFound` — a mutation that requires an existing record (stage change,
//!   rating/progress update, finding append) was given an id that matches
//!   nothing. Read paths never produce this; absence on a read is `None` or
//!   an empty collection.
//! - `PersistenceUnavailable` — the key-value substrate refused a write.
//!   Read-path storage failures degrade to empty data instead.
//! - `EmptyDocumentName` — a saved document was submitted with a blank name.
//!
//! Field-level input validation (email shape, required form fields) is the
//! form layer's responsibility and has no variant here.

use serde::{Deserialize, Serialize};

/// Entity kinds carried by `CrmError::NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    Contact,
    Opportunity,
    Engagement,
    Assessment,
    TeamMember,
    Document,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organization => write!(f, "organization"),
            Self::Contact => write!(f, "contact"),
            Self::Opportunity => write!(f, "opportunity"),
            Self::Engagement => write!(f, "engagement"),
            Self::Assessment => write!(f, "assessment"),
            Self::TeamMember => write!(f, "team member"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// Top-level error type for repository and document-store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CrmError {
    /// A required-match mutation was given an id with no matching record.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// The key-value substrate could not complete a write.
    #[error("persistence unavailable: {reason}")]
    PersistenceUnavailable { reason: String },

    /// A saved document must carry a non-empty display name.
    #[error("document name must not be empty")]
    EmptyDocumentName,
}

impl CrmError {
    /// Convenience constructor for `NotFound`.
    pub fn not_found(entity: EntityKind, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CrmError::not_found(EntityKind::Opportunity, "does-not-exist");
        let msg = err.to_string();
        assert!(msg.contains("opportunity not found"));
        assert!(msg.contains("does-not-exist"));
    }

    #[test]
    fn test_all_variants_constructible() {
        let variants = vec![
            CrmError::not_found(EntityKind::Assessment, "x"),
            CrmError::PersistenceUnavailable {
                reason: "quota exceeded".into(),
            },
            CrmError::EmptyDocumentName,
        ];
        for v in &variants {
            assert!(!v.to_string().is_empty());
        }
    }
}
