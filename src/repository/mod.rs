//! Seed-on-first-use persistence and typed CRUD/query access to the six
//! entity collections.
//!
//! A [`Repository`] is explicitly constructed over a storage backend and a
//! namespace; nothing seeds as an import-time side effect. Callers (tests
//! included) build isolated instances over independent namespaces.
//!
//! Every write is a synchronous read-modify-write of the owning collection,
//! last writer wins. Read operations are total: they never fail, returning
//! empty collections or `None` where data is missing or unreadable. The
//! only throwing reads-then-writes are the required-match mutations, which
//! raise [`CrmError::NotFound`] before touching storage.

mod seed;

pub use seed::SEED_VERSION;

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CrmError, EntityKind};
use crate::models::{
    Assessment, AssessmentStatus, Contact, Engagement, Finding, NewAssessment, NewFinding,
    Opportunity, OpportunityStage, Organization, OrganizationIntake, TeamMember, SECURITY_DOMAINS,
};
use crate::storage::{KeyValueStore, Namespace};

// Collection keys within the namespace.
const ORGANIZATIONS: &str = "organizations";
const CONTACTS: &str = "contacts";
const OPPORTUNITIES: &str = "opportunities";
const ENGAGEMENTS: &str = "engagements";
const ASSESSMENTS: &str = "assessments";
const TEAM_MEMBERS: &str = "team_members";
const SEED_MARKER: &str = "meta/seed_version";

/// Result of [`Repository::search_all`]: the three searchable collections.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub organizations: Vec<Organization>,
    pub assessments: Vec<Assessment>,
    pub engagements: Vec<Engagement>,
}

/// Typed repository over a namespaced key-value store.
#[derive(Debug)]
pub struct Repository<S> {
    ns: Namespace<S>,
}

impl<S: KeyValueStore> Repository<S> {
    /// Build a repository over `store`, scoping all keys under `namespace`.
    ///
    /// No seeding happens here; call [`ensure_seeded`](Self::ensure_seeded)
    /// once before first use.
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            ns: Namespace::new(store, namespace),
        }
    }

    // ========================================================================
    // Seeding lifecycle
    // ========================================================================

    /// Seed all six collections on first use of this namespace.
    ///
    /// Versioned and idempotent: once the stored marker matches
    /// [`SEED_VERSION`], subsequent calls are no-ops until the marker is
    /// cleared or the version changes.
    pub fn ensure_seeded(&self) -> Result<(), CrmError> {
        if self.ns.read::<u32>(SEED_MARKER) == Some(SEED_VERSION) {
            debug!("namespace already seeded at v{SEED_VERSION}");
            return Ok(());
        }
        self.seed()
    }

    /// Clear every key in the namespace and re-seed with fresh identifiers.
    ///
    /// Old external references become stale by design: the wipe is total,
    /// so there is nothing left for them to dangle against.
    pub fn reset_all_data(&self) -> Result<(), CrmError> {
        self.ns.clear_all()?;
        info!("namespace cleared, re-seeding");
        self.seed()
    }

    fn seed(&self) -> Result<(), CrmError> {
        let data = seed::build();
        self.ns.write(ORGANIZATIONS, &data.organizations)?;
        self.ns.write(CONTACTS, &data.contacts)?;
        self.ns.write(OPPORTUNITIES, &data.opportunities)?;
        self.ns.write(ENGAGEMENTS, &data.engagements)?;
        self.ns.write(ASSESSMENTS, &data.assessments)?;
        self.ns.write(TEAM_MEMBERS, &data.team_members)?;
        self.ns.write(SEED_MARKER, &SEED_VERSION)?;
        info!(
            organizations = data.organizations.len(),
            opportunities = data.opportunities.len(),
            "seeded namespace at v{SEED_VERSION}"
        );
        Ok(())
    }

    // ========================================================================
    // Reads (total: never fail)
    // ========================================================================

    pub fn organizations(&self) -> Vec<Organization> {
        self.ns.read(ORGANIZATIONS).unwrap_or_default()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.ns.read(CONTACTS).unwrap_or_default()
    }

    pub fn opportunities(&self) -> Vec<Opportunity> {
        self.ns.read(OPPORTUNITIES).unwrap_or_default()
    }

    pub fn engagements(&self) -> Vec<Engagement> {
        self.ns.read(ENGAGEMENTS).unwrap_or_default()
    }

    pub fn assessments(&self) -> Vec<Assessment> {
        self.ns.read(ASSESSMENTS).unwrap_or_default()
    }

    pub fn team_members(&self) -> Vec<TeamMember> {
        self.ns.read(TEAM_MEMBERS).unwrap_or_default()
    }

    pub fn organization(&self, id: Uuid) -> Option<Organization> {
        self.organizations().into_iter().find(|o| o.id == id)
    }

    pub fn contact(&self, id: Uuid) -> Option<Contact> {
        self.contacts().into_iter().find(|c| c.id == id)
    }

    pub fn opportunity(&self, id: Uuid) -> Option<Opportunity> {
        self.opportunities().into_iter().find(|o| o.id == id)
    }

    pub fn engagement(&self, id: Uuid) -> Option<Engagement> {
        self.engagements().into_iter().find(|e| e.id == id)
    }

    pub fn assessment(&self, id: Uuid) -> Option<Assessment> {
        self.assessments().into_iter().find(|a| a.id == id)
    }

    pub fn team_member(&self, id: Uuid) -> Option<TeamMember> {
        self.team_members().into_iter().find(|m| m.id == id)
    }

    /// Contacts belonging to one organization; empty when none match.
    pub fn contacts_for(&self, organization_id: Uuid) -> Vec<Contact> {
        self.contacts()
            .into_iter()
            .filter(|c| c.organization_id == organization_id)
            .collect()
    }

    /// Opportunities attached to one organization; empty when none match.
    pub fn opportunities_for(&self, organization_id: Uuid) -> Vec<Opportunity> {
        self.opportunities()
            .into_iter()
            .filter(|o| o.organization_id == Some(organization_id))
            .collect()
    }

    /// Engagements attached to one organization; empty when none match.
    pub fn engagements_for(&self, organization_id: Uuid) -> Vec<Engagement> {
        self.engagements()
            .into_iter()
            .filter(|e| e.organization_id == Some(organization_id))
            .collect()
    }

    /// Case-insensitive substring search across organizations, assessments,
    /// and engagements.
    ///
    /// A blank or whitespace-only query yields three empty collections, not
    /// "everything". Matching is substring-contains, not token or fuzzy.
    pub fn search_all(&self, query: &str) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }
        let hit = |hay: &str| hay.to_lowercase().contains(&needle);

        SearchResults {
            organizations: self
                .organizations()
                .into_iter()
                .filter(|o| {
                    hit(&o.name)
                        || hit(&o.sector)
                        || hit(&format!("{}, {} {}", o.city, o.state, o.zip))
                })
                .collect(),
            assessments: self
                .assessments()
                .into_iter()
                .filter(|a| {
                    hit(&a.organization_name) || hit(&a.assessment_type) || hit(&a.consultant)
                })
                .collect(),
            engagements: self
                .engagements()
                .into_iter()
                .filter(|e| {
                    hit(&e.organization_name) || hit(&e.engagement_type) || hit(&e.consultant)
                })
                .collect(),
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Create an organization (plus its primary contact, plus a stage-`lead`
    /// opportunity when the intake carries a non-empty budget) from a
    /// structured intake payload. Returns the created organization.
    pub fn create_organization(
        &self,
        intake: OrganizationIntake,
    ) -> Result<Organization, CrmError> {
        let now = Utc::now();
        let org = Organization {
            id: Uuid::new_v4(),
            name: intake.organization.name,
            sector: intake.organization.sector,
            address: intake.organization.address,
            city: intake.organization.city,
            state: intake.organization.state,
            zip: intake.organization.zip,
            website: intake.organization.website,
            employee_bracket: intake.organization.employee_bracket,
            created_at: now,
        };
        let contact = Contact {
            id: Uuid::new_v4(),
            organization_id: org.id,
            name: intake.contact.name,
            title: intake.contact.title,
            email: intake.contact.email,
            phone: intake.contact.phone,
            preferred_channel: intake.contact.preferred_channel,
        };

        let mut organizations = self.organizations();
        organizations.push(org.clone());
        self.ns.write(ORGANIZATIONS, &organizations)?;

        let mut contacts = self.contacts();
        contacts.push(contact);
        self.ns.write(CONTACTS, &contacts)?;

        if !intake.budget.trim().is_empty() {
            let opportunity = Opportunity {
                id: Uuid::new_v4(),
                organization_id: Some(org.id),
                organization_name: org.name.clone(),
                sector: org.sector.clone(),
                stage: OpportunityStage::Lead,
                value: parse_budget(&intake.budget),
                description: if intake.services.is_empty() {
                    intake.notes.clone()
                } else {
                    format!("Services of interest: {}", intake.services.join(", "))
                },
                source: "Customer intake".to_string(),
                created_at: now,
                updated_at: now,
            };
            let mut opportunities = self.opportunities();
            opportunities.push(opportunity);
            self.ns.write(OPPORTUNITIES, &opportunities)?;
        }

        info!(organization = %org.name, "created organization from intake");
        Ok(org)
    }

    /// Move an opportunity to a new pipeline stage, refreshing `updated_at`.
    ///
    /// Unlike the exploratory reads, this fails with [`CrmError::NotFound`]
    /// when the id matches nothing: a user-initiated stage change has no
    /// sensible default target. Nothing is persisted on failure.
    pub fn update_opportunity_stage(
        &self,
        id: Uuid,
        stage: OpportunityStage,
    ) -> Result<Opportunity, CrmError> {
        let mut opportunities = self.opportunities();
        let slot = opportunities
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CrmError::not_found(EntityKind::Opportunity, id))?;

        slot.stage = stage;
        slot.updated_at = Utc::now();
        let updated = slot.clone();
        self.ns.write(OPPORTUNITIES, &opportunities)?;

        debug!(opportunity = %id, stage = %stage, "opportunity stage updated");
        Ok(updated)
    }

    /// Open a new assessment for a customer.
    ///
    /// The organization name is denormalized at creation; an unknown
    /// customer id resolves to "Unknown" rather than failing. All security
    /// domains start unrated, progress at 0, status `pending`.
    pub fn create_assessment(&self, req: NewAssessment) -> Result<Assessment, CrmError> {
        let organization = self.organization(req.customer_id);
        let assessment = Assessment {
            id: Uuid::new_v4(),
            organization_id: organization.as_ref().map(|o| o.id),
            organization_name: organization
                .map(|o| o.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            assessment_type: req.assessment_type,
            consultant: req.consultant,
            progress: 0,
            status: AssessmentStatus::Pending,
            domain_ratings: SECURITY_DOMAINS
                .iter()
                .map(|d| (d.to_string(), 0))
                .collect(),
            findings: Vec::new(),
            target_date: req.target_date,
            started_at: Utc::now(),
            completed_at: None,
        };

        let mut assessments = self.assessments();
        assessments.push(assessment.clone());
        self.ns.write(ASSESSMENTS, &assessments)?;

        info!(assessment = %assessment.id, organization = %assessment.organization_name,
              "assessment created");
        Ok(assessment)
    }

    /// Merge domain-rating edits into an assessment.
    ///
    /// Unspecified domains keep their prior values; ratings clamp to the
    /// 0..=5 maturity scale. Status is forced to `in_progress` even when
    /// the assessment was previously completed, leaving `progress` and
    /// `completed_at` untouched.
    pub fn update_assessment_ratings(
        &self,
        id: Uuid,
        ratings: &BTreeMap<String, u8>,
    ) -> Result<Assessment, CrmError> {
        self.mutate_assessment(id, |assessment| {
            for (domain, rating) in ratings {
                assessment
                    .domain_ratings
                    .insert(domain.clone(), (*rating).min(5));
            }
            assessment.status = AssessmentStatus::InProgress;
        })
    }

    /// Set assessment progress, clamped to 0..=100.
    ///
    /// Status becomes `completed` iff the clamped value reaches 100, else
    /// `in_progress`. Every write landing in the completed state re-stamps
    /// `completed_at`; a later decrease never clears it.
    pub fn update_assessment_progress(&self, id: Uuid, raw: i32) -> Result<Assessment, CrmError> {
        let clamped = raw.clamp(0, 100) as u8;
        self.mutate_assessment(id, |assessment| {
            assessment.progress = clamped;
            if clamped >= 100 {
                assessment.status = AssessmentStatus::Completed;
                assessment.completed_at = Some(Utc::now());
            } else {
                assessment.status = AssessmentStatus::InProgress;
            }
        })
    }

    /// Append a finding to an assessment, assigning it a fresh id.
    pub fn add_assessment_finding(
        &self,
        id: Uuid,
        finding: NewFinding,
    ) -> Result<Assessment, CrmError> {
        self.mutate_assessment(id, |assessment| {
            assessment.findings.push(Finding {
                id: Uuid::new_v4(),
                severity: finding.severity,
                title: finding.title,
                description: finding.description,
                control_ref: finding.control_ref,
            });
        })
    }

    /// Required-match read-modify-write over one assessment. Raises
    /// `NotFound` before any storage mutation when the id is unknown.
    fn mutate_assessment(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Assessment),
    ) -> Result<Assessment, CrmError> {
        let mut assessments = self.assessments();
        let slot = assessments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CrmError::not_found(EntityKind::Assessment, id))?;

        apply(slot);
        let updated = slot.clone();
        self.ns.write(ASSESSMENTS, &assessments)?;
        Ok(updated)
    }
}

/// Parse a currency-formatted budget string into a numeric value.
///
/// Currency symbols, thousands separators, and whitespace are stripped;
/// whatever digits and decimal point remain are parsed. Input with no
/// parseable number yields zero.
fn parse_budget(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(Decimal::ZERO)
}
