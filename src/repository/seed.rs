//! Seed data for first use of a storage namespace.
//!
//! Identifiers are generated fresh on every build, so re-seeding after a
//! reset yields a disjoint id set. Cross-references from opportunities,
//! engagements, and assessments to organizations are derived by exact
//! case-sensitive name match against the freshly built organization set;
//! rows that match nothing keep an empty reference, which downstream code
//! treats as "unknown organization" rather than an error.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    Assessment, AssessmentStatus, Availability, Contact, ContactChannel, Engagement,
    EngagementStatus, Finding, Opportunity, OpportunityStage, Organization, Severity, TeamMember,
    SECURITY_DOMAINS,
};

/// Bumping this forces a one-time re-seed on next `ensure_seeded`.
pub const SEED_VERSION: u32 = 1;

/// Everything written to a fresh namespace.
pub(crate) struct SeedData {
    pub organizations: Vec<Organization>,
    pub contacts: Vec<Contact>,
    pub opportunities: Vec<Opportunity>,
    pub engagements: Vec<Engagement>,
    pub assessments: Vec<Assessment>,
    pub team_members: Vec<TeamMember>,
}

/// Build a complete seed set with fresh identifiers.
pub(crate) fn build() -> SeedData {
    let organizations = organizations();
    let contacts = contacts(&organizations);
    let opportunities = opportunities(&organizations);
    let engagements = engagements(&organizations);
    let assessments = assessments(&organizations);
    SeedData {
        organizations,
        contacts,
        opportunities,
        engagements,
        assessments,
        team_members: team_members(),
    }
}

/// Exact case-sensitive name match; `None` when the name is unknown.
fn org_id_by_name(orgs: &[Organization], name: &str) -> Option<Uuid> {
    orgs.iter().find(|o| o.name == name).map(|o| o.id)
}

fn unrated_domains() -> BTreeMap<String, u8> {
    SECURITY_DOMAINS
        .iter()
        .map(|d| (d.to_string(), 0))
        .collect()
}

fn organizations() -> Vec<Organization> {
    let rows = [
        (
            "Meridian Aerospace Systems",
            "Defense",
            "4120 Research Park Blvd",
            "Huntsville",
            "AL",
            "35806",
            "meridianaero.com",
            "201-500",
        ),
        (
            "Blue Harbor Health Network",
            "Healthcare",
            "88 Islington St",
            "Portsmouth",
            "NH",
            "03801",
            "blueharborhealth.org",
            "501-1000",
        ),
        (
            "Cascade Summit Bank",
            "Financial Services",
            "1201 Pacific Ave",
            "Tacoma",
            "WA",
            "98402",
            "cascadesummit.bank",
            "51-200",
        ),
        (
            "Ironvale Manufacturing",
            "Manufacturing",
            "2750 Needmore Rd",
            "Dayton",
            "OH",
            "45414",
            "ironvale.com",
            "201-500",
        ),
        (
            "Clearwater Municipal Utilities",
            "Energy & Utilities",
            "600 Cleveland St",
            "Clearwater",
            "FL",
            "33755",
            "clearwaterutilities.gov",
            "51-200",
        ),
    ];
    rows.iter()
        .map(
            |(name, sector, address, city, state, zip, website, bracket)| Organization {
                id: Uuid::new_v4(),
                name: name.to_string(),
                sector: sector.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                zip: zip.to_string(),
                website: website.to_string(),
                employee_bracket: bracket.to_string(),
                created_at: Utc::now() - Duration::days(120),
            },
        )
        .collect()
}

fn contacts(orgs: &[Organization]) -> Vec<Contact> {
    let rows = [
        (
            "Meridian Aerospace Systems",
            "Laura Chen",
            "CISO",
            "lchen@meridianaero.com",
            "256-555-0142",
            ContactChannel::Email,
        ),
        (
            "Blue Harbor Health Network",
            "Marcus Webb",
            "IT Director",
            "mwebb@blueharborhealth.org",
            "603-555-0188",
            ContactChannel::Phone,
        ),
        (
            "Cascade Summit Bank",
            "Priya Nair",
            "VP Risk & Compliance",
            "pnair@cascadesummit.bank",
            "253-555-0109",
            ContactChannel::Email,
        ),
        (
            "Ironvale Manufacturing",
            "Tom Kowalski",
            "Plant IT Manager",
            "tkowalski@ironvale.com",
            "937-555-0171",
            ContactChannel::Teams,
        ),
        (
            "Clearwater Municipal Utilities",
            "Angela Fuentes",
            "Operations Director",
            "afuentes@clearwaterutilities.gov",
            "727-555-0134",
            ContactChannel::Phone,
        ),
    ];
    rows.iter()
        .filter_map(|(org_name, name, title, email, phone, channel)| {
            // contacts belong to exactly one organization, so skip (never
            // happens with well-formed seed rows) rather than dangle
            let organization_id = org_id_by_name(orgs, org_name)?;
            Some(Contact {
                id: Uuid::new_v4(),
                organization_id,
                name: name.to_string(),
                title: title.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                preferred_channel: *channel,
            })
        })
        .collect()
}

fn opportunities(orgs: &[Organization]) -> Vec<Opportunity> {
    let rows: [(&str, &str, OpportunityStage, i64, &str, &str); 6] = [
        (
            "Meridian Aerospace Systems",
            "Defense",
            OpportunityStage::Assessment,
            185_000,
            "CMMC 2.0 Level 2 readiness across two CUI enclaves",
            "Referral",
        ),
        (
            "Blue Harbor Health Network",
            "Healthcare",
            OpportunityStage::Proposal,
            240_000,
            "HIPAA security risk analysis and 24x7 monitoring",
            "Conference",
        ),
        (
            "Cascade Summit Bank",
            "Financial Services",
            OpportunityStage::Negotiation,
            150_000,
            "GLBA program uplift with quarterly penetration testing",
            "Existing customer",
        ),
        (
            "Ironvale Manufacturing",
            "Manufacturing",
            OpportunityStage::Lead,
            95_000,
            "OT network segmentation assessment",
            "Webinar",
        ),
        (
            "Clearwater Municipal Utilities",
            "Energy & Utilities",
            OpportunityStage::ClosedWon,
            120_000,
            "Incident response retainer and tabletop program",
            "RFP",
        ),
        // Deliberately unmatched: prospect captured before intake completed.
        (
            "Northstar Logistics Group",
            "Transportation",
            OpportunityStage::Lead,
            60_000,
            "Security program gap assessment",
            "Cold outreach",
        ),
    ];
    rows.iter()
        .map(|(org_name, sector, stage, value, description, source)| {
            let created_at = Utc::now() - Duration::days(45);
            Opportunity {
                id: Uuid::new_v4(),
                organization_id: org_id_by_name(orgs, org_name),
                organization_name: org_name.to_string(),
                sector: sector.to_string(),
                stage: *stage,
                value: Decimal::new(*value, 0),
                description: description.to_string(),
                source: source.to_string(),
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}

fn engagements(orgs: &[Organization]) -> Vec<Engagement> {
    let rows: [(&str, &str, &str, EngagementStatus, f64, f64, i64, NaiveDate); 4] = [
        (
            "Clearwater Municipal Utilities",
            "Incident Response Retainer",
            "Dana Reyes",
            EngagementStatus::OnTrack,
            32.0,
            120.0,
            120_000,
            date(2026, 12, 31),
        ),
        (
            "Cascade Summit Bank",
            "Penetration Test",
            "Michael Torres",
            EngagementStatus::AtRisk,
            74.5,
            80.0,
            45_000,
            date(2026, 9, 30),
        ),
        (
            "Blue Harbor Health Network",
            "vCISO",
            "Sarah Okafor",
            EngagementStatus::Blocked,
            96.0,
            90.0,
            85_000,
            date(2026, 10, 15),
        ),
        (
            "Meridian Aerospace Systems",
            "CMMC Remediation",
            "Dana Reyes",
            EngagementStatus::Completed,
            200.0,
            200.0,
            160_000,
            date(2026, 6, 30),
        ),
    ];
    rows.iter()
        .map(
            |(org_name, kind, consultant, status, used, budget, revenue, due)| Engagement {
                id: Uuid::new_v4(),
                organization_id: org_id_by_name(orgs, org_name),
                organization_name: org_name.to_string(),
                engagement_type: kind.to_string(),
                consultant: consultant.to_string(),
                status: *status,
                hours_used: *used,
                hours_budget: *budget,
                revenue: Decimal::new(*revenue, 0),
                due_date: *due,
                created_at: Utc::now() - Duration::days(60),
            },
        )
        .collect()
}

fn assessments(orgs: &[Organization]) -> Vec<Assessment> {
    let started = Utc::now() - Duration::days(30);

    let pending = Assessment {
        id: Uuid::new_v4(),
        organization_id: org_id_by_name(orgs, "Ironvale Manufacturing"),
        organization_name: "Ironvale Manufacturing".to_string(),
        assessment_type: "OT Security Assessment".to_string(),
        consultant: "Michael Torres".to_string(),
        progress: 0,
        status: AssessmentStatus::Pending,
        domain_ratings: unrated_domains(),
        findings: Vec::new(),
        target_date: date(2026, 11, 30),
        started_at: started,
        completed_at: None,
    };

    let mut in_progress = Assessment {
        id: Uuid::new_v4(),
        organization_id: org_id_by_name(orgs, "Meridian Aerospace Systems"),
        organization_name: "Meridian Aerospace Systems".to_string(),
        assessment_type: "CMMC 2.0 Gap Analysis".to_string(),
        consultant: "Dana Reyes".to_string(),
        progress: 55,
        status: AssessmentStatus::InProgress,
        domain_ratings: unrated_domains(),
        findings: vec![Finding {
            id: Uuid::new_v4(),
            severity: Severity::High,
            title: "Shared administrator accounts on CUI file server".to_string(),
            description: "Three engineers share a local admin credential; \
                          no individual accountability for privileged actions."
                .to_string(),
            control_ref: Some("AC-2".to_string()),
        }],
        target_date: date(2026, 10, 31),
        started_at: started,
        completed_at: None,
    };
    for (domain, rating) in [
        ("Access Control", 2),
        ("Incident Response", 3),
        ("Network Security", 3),
        ("Security Awareness", 1),
    ] {
        in_progress.domain_ratings.insert(domain.to_string(), rating);
    }

    let mut completed = Assessment {
        id: Uuid::new_v4(),
        organization_id: org_id_by_name(orgs, "Blue Harbor Health Network"),
        organization_name: "Blue Harbor Health Network".to_string(),
        assessment_type: "HIPAA Security Risk Analysis".to_string(),
        consultant: "Sarah Okafor".to_string(),
        progress: 100,
        status: AssessmentStatus::Completed,
        domain_ratings: unrated_domains(),
        findings: vec![
            Finding {
                id: Uuid::new_v4(),
                severity: Severity::Critical,
                title: "Unencrypted PHI on legacy imaging workstations".to_string(),
                description: "Twelve radiology workstations store PHI on \
                              unencrypted local disks."
                    .to_string(),
                control_ref: Some("SC-28".to_string()),
            },
            Finding {
                id: Uuid::new_v4(),
                severity: Severity::Medium,
                title: "Stale third-party VPN accounts".to_string(),
                description: "Four vendor VPN accounts remained active after \
                              contract end."
                    .to_string(),
                control_ref: Some("AC-2(3)".to_string()),
            },
        ],
        target_date: date(2026, 7, 31),
        started_at: started - Duration::days(60),
        completed_at: Some(started - Duration::days(5)),
    };
    for (domain, rating) in [
        ("Access Control", 3),
        ("Asset Management", 2),
        ("Data Protection", 2),
        ("Governance & Policy", 4),
        ("Incident Response", 3),
        ("Network Security", 3),
        ("Security Awareness", 2),
        ("Vulnerability Management", 3),
    ] {
        completed.domain_ratings.insert(domain.to_string(), rating);
    }

    vec![pending, in_progress, completed]
}

fn team_members() -> Vec<TeamMember> {
    let rows: [(&str, &str, &[&str], u8, u32, Availability); 5] = [
        (
            "Dana Reyes",
            "Principal Consultant",
            &["CMMC", "Incident Response"],
            85,
            2,
            Availability::Busy,
        ),
        (
            "Michael Torres",
            "Senior Penetration Tester",
            &["Penetration Testing", "OT Security"],
            90,
            2,
            Availability::Busy,
        ),
        (
            "Sarah Okafor",
            "vCISO",
            &["HIPAA", "Governance", "Risk Management"],
            75,
            1,
            Availability::Available,
        ),
        (
            "James Park",
            "Security Analyst",
            &["SOC Operations", "Threat Hunting"],
            60,
            1,
            Availability::Available,
        ),
        (
            "Elena Vasquez",
            "GRC Consultant",
            &["SOC 2", "ISO 27001"],
            0,
            0,
            Availability::Out,
        ),
    ];
    rows.iter()
        .map(
            |(name, role, specializations, utilization, active, status)| TeamMember {
                id: Uuid::new_v4(),
                name: name.to_string(),
                role: role.to_string(),
                specializations: specializations.iter().map(|s| s.to_string()).collect(),
                utilization: *utilization,
                active_engagements: *active,
                status: *status,
            },
        )
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_references_resolve_by_exact_name() {
        let data = build();
        let matched = data
            .opportunities
            .iter()
            .filter(|o| o.organization_id.is_some())
            .count();
        // one row is deliberately unmatched
        assert_eq!(matched, data.opportunities.len() - 1);

        for contact in &data.contacts {
            assert!(data
                .organizations
                .iter()
                .any(|o| o.id == contact.organization_id));
        }
    }

    #[test]
    fn test_fresh_ids_per_build() {
        let a = build();
        let b = build();
        for org in &a.organizations {
            assert!(b.organizations.iter().all(|o| o.id != org.id));
        }
    }

    #[test]
    fn test_assessments_cover_all_domains() {
        let data = build();
        for assessment in &data.assessments {
            assert_eq!(assessment.domain_ratings.len(), SECURITY_DOMAINS.len());
            assert!(assessment.domain_ratings.values().all(|r| *r <= 5));
        }
    }
}
