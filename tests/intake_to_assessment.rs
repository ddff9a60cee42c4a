//! End-to-end walkthrough: customer intake through assessment completion,
//! plus a filled-document lifecycle, over a single in-memory store.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use mssp_crm::models::{
    AssessmentStatus, ContactChannel, ContactDetails, NewAssessment, NewFinding,
    OpportunityStage, OrganizationDetails, OrganizationIntake, Severity,
};
use mssp_crm::repository::Repository;
use mssp_crm::storage::MemoryStore;
use mssp_crm::templates::{
    document_progress, DocumentStore, FieldValue, SectionStatus, TemplateRegistry, ValueMap,
};
use mssp_crm::templates::{section_progress, suggested_name};

fn init_tracing() {
    // Ignore the error when a second test in the binary already installed one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn acme_intake() -> OrganizationIntake {
    OrganizationIntake {
        organization: OrganizationDetails {
            name: "Acme Defense".into(),
            sector: "Defense".into(),
            address: "1 Liberty Way".into(),
            city: "Arlington".into(),
            state: "VA".into(),
            zip: "22202".into(),
            website: "acmedefense.com".into(),
            employee_bracket: "51-200".into(),
        },
        contact: ContactDetails {
            name: "Jane Doe".into(),
            title: "CISO".into(),
            email: "jane@acmedefense.com".into(),
            phone: "703-555-0101".into(),
            preferred_channel: ContactChannel::Email,
        },
        compliance: vec!["CMMC 2.0".into()],
        services: vec!["Gap Assessment".into(), "Penetration Test".into()],
        timeline: "Q1".into(),
        budget: "$250,000".into(),
        notes: "Referred by Meridian Aerospace.".into(),
    }
}

#[test]
fn intake_through_assessment_completion() -> Result<()> {
    init_tracing();
    let repo = Repository::new(MemoryStore::new(), "crm");
    repo.ensure_seeded()?;

    // Intake creates the organization, its primary contact, and a lead
    // opportunity priced from the budget text.
    let org = repo.create_organization(acme_intake())?;
    assert_eq!(org.sector, "Defense");
    assert_eq!(repo.contacts_for(org.id).len(), 1);

    let opps = repo.opportunities_for(org.id);
    assert_eq!(opps.len(), 1);
    assert_eq!(opps[0].stage, OpportunityStage::Lead);
    assert_eq!(opps[0].value, Decimal::new(250_000, 0));

    // The new customer shows up in search immediately.
    let results = repo.search_all("acme");
    assert_eq!(results.organizations.len(), 1);

    // Pipeline moves to assessment; an assessment is opened.
    repo.update_opportunity_stage(opps[0].id, OpportunityStage::Assessment)?;
    let assessment = repo.create_assessment(NewAssessment {
        customer_id: org.id,
        assessment_type: "CMMC 2.0 Gap Analysis".into(),
        consultant: "Michael Torres".into(),
        target_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
    })?;
    assert_eq!(assessment.organization_name, "Acme Defense");
    assert_eq!(assessment.status, AssessmentStatus::Pending);
    assert_eq!(assessment.progress, 0);

    // Fieldwork: ratings and a finding land, progress advances.
    let mut ratings = BTreeMap::new();
    ratings.insert("Access Control".to_string(), 2u8);
    ratings.insert("Incident Response".to_string(), 1u8);
    repo.update_assessment_ratings(assessment.id, &ratings)?;

    repo.add_assessment_finding(
        assessment.id,
        NewFinding {
            severity: Severity::Critical,
            title: "No MFA on VPN".into(),
            description: "Remote access accepts password-only authentication.".into(),
            control_ref: Some("IA-2".into()),
        },
    )?;

    let mid = repo.update_assessment_progress(assessment.id, 45)?;
    assert_eq!(mid.status, AssessmentStatus::InProgress);
    assert!(mid.completed_at.is_none());

    // Completion stamps the timestamp.
    let done = repo.update_assessment_progress(assessment.id, 100)?;
    assert_eq!(done.status, AssessmentStatus::Completed);
    assert_eq!(done.progress, 100);
    assert!(done.completed_at.is_some());
    assert_eq!(done.findings.len(), 1);
    assert_eq!(done.domain_ratings["Access Control"], 2);

    Ok(())
}

#[test]
fn filled_document_lifecycle() -> Result<()> {
    init_tracing();
    let registry = TemplateRegistry::new();
    let template = registry
        .get("cmmc-gap-assessment")
        .expect("built-in template");

    // An untouched document: zero percent, first section empty.
    let mut values = ValueMap::new();
    let p = document_progress(template, &values);
    assert_eq!(p.percent, 0);
    assert_eq!(p.completed_sections, 0);
    assert_eq!(
        section_progress(&template.sections[0], &values),
        SectionStatus::Empty
    );

    // Fill the engagement section completely.
    values.insert("client".into(), FieldValue::Text("Acme Defense".into()));
    values.insert("assessor".into(), FieldValue::Text("Michael Torres".into()));
    values.insert("assessment_date".into(), FieldValue::Text("2026-02-10".into()));
    values.insert("target_level".into(), FieldValue::Text("Level 2".into()));
    assert_eq!(
        section_progress(&template.sections[0], &values),
        SectionStatus::Complete
    );

    let partial = document_progress(template, &values);
    assert!(partial.percent > 0 && partial.percent < 100);
    assert_eq!(partial.completed_sections, 1);

    // Save under an explicit name, revise, delete.
    let docs = DocumentStore::new(MemoryStore::new(), "crm");
    assert!(docs.save("   ", &template.id, values.clone()).is_err());

    let name = suggested_name(template);
    let saved = docs.save(&name, &template.id, values.clone())?;
    assert!(saved.name.starts_with("CMMC 2.0 Gap Assessment - "));

    values.insert(
        "cui_flows".into(),
        FieldValue::Text("Contracts inbox to SharePoint enclave.".into()),
    );
    let revised = docs.update_values(saved.id, values)?;
    assert!(revised.updated_at >= saved.updated_at);

    docs.delete(saved.id)?;
    assert!(docs.get(saved.id).is_none());
    Ok(())
}
