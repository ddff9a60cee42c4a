//! Template registry - built-in document templates.
//!
//! Roughly twenty hand-authored structures covering the assessment,
//! proposal, operations, and report work of a managed security services
//! practice. The engine treats every structure as opaque configuration;
//! nothing outside this file knows any template id.

use std::collections::HashMap;

use super::schema::{FieldType, TemplateField, TemplateSection, TemplateStructure};

/// Standard five-level maturity scale used by rating fields.
const MATURITY_SCALE: &[&str] = &[
    "1 - Initial",
    "2 - Developing",
    "3 - Defined",
    "4 - Managed",
    "5 - Optimized",
];

const SEVERITY_LEVELS: &[&str] = &["Critical", "High", "Medium", "Low"];

pub struct TemplateRegistry {
    templates: HashMap<String, TemplateStructure>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            templates: HashMap::new(),
        };
        registry.register_builtins();
        registry
    }

    pub fn get(&self, id: &str) -> Option<&TemplateStructure> {
        self.templates.get(id)
    }

    /// Look up by display name (templates are selected by name in the UI).
    pub fn get_by_name(&self, name: &str) -> Option<&TemplateStructure> {
        self.templates.values().find(|t| t.name == name)
    }

    /// All templates, sorted by name for stable presentation.
    pub fn list(&self) -> Vec<&TemplateStructure> {
        let mut all: Vec<&TemplateStructure> = self.templates.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn list_by_category(&self, category: &str) -> Vec<&TemplateStructure> {
        let mut matching: Vec<&TemplateStructure> = self
            .templates
            .values()
            .filter(|t| t.category == category)
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        matching
    }

    fn register(&mut self, template: TemplateStructure) {
        self.templates.insert(template.id.clone(), template);
    }

    fn register_builtins(&mut self) {
        // Assessments
        self.register(cmmc_gap_assessment());
        self.register(nist_csf_assessment());
        self.register(hipaa_risk_analysis());
        self.register(soc2_readiness());
        self.register(iso27001_gap());
        self.register(pci_saq_prep());
        self.register(vendor_risk_questionnaire());

        // Proposals
        self.register(statement_of_work());
        self.register(security_proposal());

        // Operations
        self.register(pentest_rules_of_engagement());
        self.register(incident_response_plan());
        self.register(tabletop_exercise());
        self.register(engagement_kickoff());
        self.register(risk_register_entry());
        self.register(business_continuity_plan());
        self.register(security_awareness_plan());
        self.register(offboarding_checklist());

        // Reports
        self.register(pentest_report());
        self.register(vulnerability_assessment_report());
        self.register(executive_summary_report());
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Field constructors
// ============================================================================

fn text(id: &str, label: &str) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Text,
        ..Default::default()
    }
}

fn textarea(id: &str, label: &str) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Textarea,
        ..Default::default()
    }
}

fn date(id: &str, label: &str) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Date,
        half_width: true,
        ..Default::default()
    }
}

fn number(id: &str, label: &str) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Number,
        half_width: true,
        ..Default::default()
    }
}

fn select(id: &str, label: &str, options: &[&str]) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Select,
        options: options.iter().map(|o| o.to_string()).collect(),
        half_width: true,
        ..Default::default()
    }
}

fn rating(id: &str, label: &str, options: &[&str]) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Rating,
        options: options.iter().map(|o| o.to_string()).collect(),
        ..Default::default()
    }
}

fn checklist(id: &str, label: &str, options: &[&str]) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: label.into(),
        field_type: FieldType::Checklist,
        options: options.iter().map(|o| o.to_string()).collect(),
        ..Default::default()
    }
}

fn heading(id: &str, display_text: &str) -> TemplateField {
    TemplateField {
        id: id.into(),
        label: display_text.into(),
        field_type: FieldType::Heading,
        ..Default::default()
    }
}

fn required(field: TemplateField) -> TemplateField {
    TemplateField {
        required: true,
        ..field
    }
}

fn section(id: &str, title: &str, fields: Vec<TemplateField>) -> TemplateSection {
    TemplateSection {
        id: id.into(),
        title: title.into(),
        description: None,
        fields,
    }
}

fn section_with_description(
    id: &str,
    title: &str,
    description: &str,
    fields: Vec<TemplateField>,
) -> TemplateSection {
    TemplateSection {
        id: id.into(),
        title: title.into(),
        description: Some(description.into()),
        fields,
    }
}

// ============================================================================
// Assessment templates
// ============================================================================

fn cmmc_gap_assessment() -> TemplateStructure {
    TemplateStructure {
        id: "cmmc-gap-assessment".into(),
        name: "CMMC 2.0 Gap Assessment".into(),
        description: "Gap analysis against CMMC 2.0 Level 2 practices for a CUI environment"
            .into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "engagement",
                "Engagement Details",
                vec![
                    required(text("client", "Client organization")),
                    required(text("assessor", "Lead assessor")),
                    date("assessment_date", "Assessment date"),
                    select("target_level", "Target level", &["Level 1", "Level 2"]),
                ],
            ),
            section_with_description(
                "scope",
                "CUI Scope",
                "Boundaries of the environment handling Controlled Unclassified Information",
                vec![
                    required(textarea("cui_flows", "CUI data flows")),
                    textarea("enclaves", "In-scope enclaves and networks"),
                    number("user_count", "Users in scope"),
                    checklist(
                        "asset_classes",
                        "Asset classes present",
                        &[
                            "CUI Assets",
                            "Security Protection Assets",
                            "Contractor Risk Managed Assets",
                            "Specialized Assets",
                            "Out-of-Scope Assets",
                        ],
                    ),
                ],
            ),
            section(
                "domains",
                "Domain Maturity",
                vec![
                    rating("access_control", "Access Control (AC)", MATURITY_SCALE),
                    rating("incident_response", "Incident Response (IR)", MATURITY_SCALE),
                    rating("risk_management", "Risk Assessment (RA)", MATURITY_SCALE),
                    rating(
                        "system_protection",
                        "System & Communications Protection (SC)",
                        MATURITY_SCALE,
                    ),
                    rating("audit", "Audit & Accountability (AU)", MATURITY_SCALE),
                ],
            ),
            section(
                "remediation",
                "Remediation Planning",
                vec![
                    heading(
                        "remediation_note",
                        "Capture the highest-impact gaps first; POA&M entries follow from here.",
                    ),
                    required(textarea("key_gaps", "Key gaps identified")),
                    textarea("poam_items", "POA&M candidate items"),
                    date("target_remediation", "Target remediation date"),
                ],
            ),
        ],
    }
}

fn nist_csf_assessment() -> TemplateStructure {
    TemplateStructure {
        id: "nist-csf-assessment".into(),
        name: "NIST CSF Assessment".into(),
        description: "Current-state profile against the NIST Cybersecurity Framework functions"
            .into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "profile",
                "Profile",
                vec![
                    required(text("client", "Client organization")),
                    required(text("assessor", "Lead assessor")),
                    date("assessment_date", "Assessment date"),
                    select(
                        "tier_target",
                        "Target implementation tier",
                        &["Tier 1", "Tier 2", "Tier 3", "Tier 4"],
                    ),
                ],
            ),
            section(
                "functions",
                "Function Maturity",
                vec![
                    rating("govern", "Govern", MATURITY_SCALE),
                    rating("identify", "Identify", MATURITY_SCALE),
                    rating("protect", "Protect", MATURITY_SCALE),
                    rating("detect", "Detect", MATURITY_SCALE),
                    rating("respond", "Respond", MATURITY_SCALE),
                    rating("recover", "Recover", MATURITY_SCALE),
                ],
            ),
            section(
                "observations",
                "Observations",
                vec![
                    required(textarea("strengths", "Notable strengths")),
                    required(textarea("gaps", "Priority gaps")),
                    textarea("roadmap", "Recommended roadmap"),
                ],
            ),
        ],
    }
}

fn hipaa_risk_analysis() -> TemplateStructure {
    TemplateStructure {
        id: "hipaa-risk-analysis".into(),
        name: "HIPAA Security Risk Analysis".into(),
        description: "Risk analysis of ePHI handling per the HIPAA Security Rule".into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "entity",
                "Covered Entity",
                vec![
                    required(text("client", "Covered entity / business associate")),
                    required(text("assessor", "Lead assessor")),
                    date("analysis_date", "Analysis date"),
                    select(
                        "entity_type",
                        "Entity type",
                        &["Covered Entity", "Business Associate", "Hybrid"],
                    ),
                ],
            ),
            section(
                "ephi",
                "ePHI Inventory",
                vec![
                    required(textarea("systems", "Systems storing or transmitting ePHI")),
                    textarea("data_flows", "ePHI data flows"),
                    number("record_count", "Approximate patient records"),
                ],
            ),
            section(
                "safeguards",
                "Safeguard Review",
                vec![
                    rating("administrative", "Administrative safeguards", MATURITY_SCALE),
                    rating("physical", "Physical safeguards", MATURITY_SCALE),
                    rating("technical", "Technical safeguards", MATURITY_SCALE),
                    checklist(
                        "controls_verified",
                        "Controls verified",
                        &[
                            "Encryption at rest",
                            "Encryption in transit",
                            "Access reviews",
                            "Audit logging",
                            "Contingency plan",
                            "BAA inventory",
                        ],
                    ),
                ],
            ),
            section(
                "risks",
                "Risk Determination",
                vec![
                    required(textarea("threats", "Threats and vulnerabilities identified")),
                    select("overall_risk", "Overall risk level", SEVERITY_LEVELS),
                    textarea("recommendations", "Recommendations"),
                ],
            ),
        ],
    }
}

fn soc2_readiness() -> TemplateStructure {
    TemplateStructure {
        id: "soc2-readiness".into(),
        name: "SOC 2 Readiness Review".into(),
        description: "Readiness review ahead of a SOC 2 Type II examination".into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "engagement",
                "Engagement",
                vec![
                    required(text("client", "Client organization")),
                    required(text("assessor", "Lead reviewer")),
                    date("review_date", "Review date"),
                    checklist(
                        "tsc_in_scope",
                        "Trust services criteria in scope",
                        &[
                            "Security",
                            "Availability",
                            "Processing Integrity",
                            "Confidentiality",
                            "Privacy",
                        ],
                    ),
                ],
            ),
            section(
                "controls",
                "Control Environment",
                vec![
                    rating("governance", "Governance & risk", MATURITY_SCALE),
                    rating("change_management", "Change management", MATURITY_SCALE),
                    rating("logical_access", "Logical access", MATURITY_SCALE),
                    rating("monitoring", "Monitoring & alerting", MATURITY_SCALE),
                ],
            ),
            section(
                "readiness",
                "Readiness",
                vec![
                    required(textarea("control_gaps", "Control gaps")),
                    textarea("evidence_gaps", "Evidence-collection gaps"),
                    date("audit_window", "Proposed audit window start"),
                ],
            ),
        ],
    }
}

fn iso27001_gap() -> TemplateStructure {
    TemplateStructure {
        id: "iso27001-gap".into(),
        name: "ISO 27001 Gap Analysis".into(),
        description: "Gap analysis against ISO/IEC 27001 Annex A controls".into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "context",
                "ISMS Context",
                vec![
                    required(text("client", "Client organization")),
                    required(text("assessor", "Lead assessor")),
                    date("analysis_date", "Analysis date"),
                    textarea("isms_scope", "ISMS scope statement"),
                ],
            ),
            section(
                "themes",
                "Annex A Themes",
                vec![
                    rating("organizational", "Organizational controls", MATURITY_SCALE),
                    rating("people", "People controls", MATURITY_SCALE),
                    rating("physical", "Physical controls", MATURITY_SCALE),
                    rating("technological", "Technological controls", MATURITY_SCALE),
                ],
            ),
            section(
                "findings",
                "Findings",
                vec![
                    required(textarea("nonconformities", "Potential nonconformities")),
                    textarea("soa_gaps", "Statement of Applicability gaps"),
                    date("certification_target", "Certification target date"),
                ],
            ),
        ],
    }
}

fn pci_saq_prep() -> TemplateStructure {
    TemplateStructure {
        id: "pci-saq-prep".into(),
        name: "PCI DSS SAQ Preparation".into(),
        description: "Scoping and preparation for a PCI DSS self-assessment questionnaire".into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "scoping",
                "Scoping",
                vec![
                    required(text("client", "Merchant / service provider")),
                    select(
                        "saq_type",
                        "SAQ type",
                        &["SAQ A", "SAQ A-EP", "SAQ B", "SAQ C", "SAQ D"],
                    ),
                    number("annual_transactions", "Annual card transactions"),
                    required(textarea("cde_description", "Cardholder data environment")),
                ],
            ),
            section(
                "segmentation",
                "Segmentation & Controls",
                vec![
                    select(
                        "segmentation_state",
                        "Network segmentation",
                        &["Fully segmented", "Partially segmented", "Flat network"],
                    ),
                    checklist(
                        "controls_in_place",
                        "Controls in place",
                        &[
                            "Quarterly ASV scans",
                            "Annual penetration test",
                            "Key management procedures",
                            "Logging & monitoring",
                            "Vendor management",
                        ],
                    ),
                    textarea("compensating_controls", "Compensating controls"),
                ],
            ),
            section(
                "plan",
                "Completion Plan",
                vec![
                    required(textarea("open_items", "Open items blocking attestation")),
                    date("attestation_target", "Attestation target date"),
                ],
            ),
        ],
    }
}

fn vendor_risk_questionnaire() -> TemplateStructure {
    TemplateStructure {
        id: "vendor-risk-questionnaire".into(),
        name: "Vendor Risk Questionnaire".into(),
        description: "Third-party security review for a prospective or existing vendor".into(),
        category: "assessment".into(),
        sections: vec![
            section(
                "vendor",
                "Vendor Profile",
                vec![
                    required(text("vendor_name", "Vendor name")),
                    required(text("service_description", "Service provided")),
                    select(
                        "data_classification",
                        "Highest data classification shared",
                        &["Public", "Internal", "Confidential", "Regulated"],
                    ),
                    select("criticality", "Business criticality", SEVERITY_LEVELS),
                ],
            ),
            section(
                "posture",
                "Security Posture",
                vec![
                    checklist(
                        "attestations",
                        "Attestations held",
                        &[
                            "SOC 2 Type II",
                            "ISO 27001",
                            "PCI DSS",
                            "HITRUST",
                            "FedRAMP",
                            "None",
                        ],
                    ),
                    rating("posture_rating", "Overall posture", MATURITY_SCALE),
                    textarea("incident_history", "Breach / incident history"),
                ],
            ),
            section(
                "decision",
                "Risk Decision",
                vec![
                    select(
                        "decision",
                        "Decision",
                        &["Approve", "Approve with conditions", "Reject"],
                    ),
                    textarea("conditions", "Conditions / required remediations"),
                    date("review_date", "Next review date"),
                ],
            ),
        ],
    }
}

// ============================================================================
// Proposal templates
// ============================================================================

fn statement_of_work() -> TemplateStructure {
    TemplateStructure {
        id: "statement-of-work".into(),
        name: "Statement of Work".into(),
        description: "SOW for a fixed-scope security engagement".into(),
        category: "proposal".into(),
        sections: vec![
            section(
                "parties",
                "Parties & Term",
                vec![
                    required(text("client", "Client organization")),
                    required(text("engagement_name", "Engagement name")),
                    date("start_date", "Start date"),
                    date("end_date", "End date"),
                ],
            ),
            section(
                "scope",
                "Scope of Services",
                vec![
                    required(textarea("objectives", "Objectives")),
                    required(textarea("deliverables", "Deliverables")),
                    textarea("out_of_scope", "Explicitly out of scope"),
                    checklist(
                        "service_lines",
                        "Service lines",
                        &[
                            "Assessment",
                            "Penetration Testing",
                            "vCISO",
                            "Incident Response",
                            "Managed Monitoring",
                            "Training",
                        ],
                    ),
                ],
            ),
            section(
                "commercials",
                "Commercials",
                vec![
                    select(
                        "pricing_model",
                        "Pricing model",
                        &["Fixed fee", "Time & materials", "Retainer"],
                    ),
                    number("fee", "Fee (USD)"),
                    number("estimated_hours", "Estimated hours"),
                    textarea("payment_terms", "Payment terms"),
                ],
            ),
            section(
                "acceptance",
                "Acceptance",
                vec![
                    text("client_signatory", "Client signatory"),
                    text("provider_signatory", "Provider signatory"),
                    date("signature_date", "Signature date"),
                ],
            ),
        ],
    }
}

fn security_proposal() -> TemplateStructure {
    TemplateStructure {
        id: "security-proposal".into(),
        name: "Security Services Proposal".into(),
        description: "Narrative proposal for a prospective customer".into(),
        category: "proposal".into(),
        sections: vec![
            section(
                "summary",
                "Executive Summary",
                vec![
                    required(text("client", "Prospect organization")),
                    required(textarea("situation", "Current situation")),
                    required(textarea("proposed_approach", "Proposed approach")),
                ],
            ),
            section(
                "services",
                "Recommended Services",
                vec![
                    checklist(
                        "recommended",
                        "Services recommended",
                        &[
                            "Gap Assessment",
                            "Penetration Test",
                            "vCISO",
                            "Managed Detection & Response",
                            "Incident Response Retainer",
                            "Security Awareness Training",
                        ],
                    ),
                    textarea("phasing", "Phasing and timeline"),
                    number("investment", "Estimated investment (USD)"),
                ],
            ),
            section(
                "differentiators",
                "Why Us",
                vec![
                    textarea("team", "Proposed team"),
                    textarea("references", "Relevant references"),
                    date("valid_until", "Proposal valid until"),
                ],
            ),
        ],
    }
}

// ============================================================================
// Operations templates
// ============================================================================

fn pentest_rules_of_engagement() -> TemplateStructure {
    TemplateStructure {
        id: "pentest-rules-of-engagement".into(),
        name: "Penetration Test Rules of Engagement".into(),
        description: "Authorization, scope, and constraints for a penetration test".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "authorization",
                "Authorization",
                vec![
                    required(text("client", "Client organization")),
                    required(text("authorizing_officer", "Authorizing officer")),
                    date("window_start", "Test window start"),
                    date("window_end", "Test window end"),
                ],
            ),
            section(
                "scope",
                "Scope",
                vec![
                    required(textarea("in_scope_targets", "In-scope targets (CIDR, domains)")),
                    textarea("excluded_targets", "Excluded targets"),
                    checklist(
                        "test_types",
                        "Test types authorized",
                        &[
                            "External network",
                            "Internal network",
                            "Web application",
                            "Social engineering",
                            "Physical",
                            "Wireless",
                        ],
                    ),
                    select(
                        "aggressiveness",
                        "Exploitation depth",
                        &[
                            "Discovery only",
                            "Exploit with approval",
                            "Full exploitation",
                        ],
                    ),
                ],
            ),
            section(
                "safety",
                "Safety & Communications",
                vec![
                    heading(
                        "safety_note",
                        "Stop conditions protect production; agree on them before testing begins.",
                    ),
                    required(textarea("stop_conditions", "Stop conditions")),
                    required(text("emergency_contact", "Emergency contact")),
                    text("escalation_channel", "Escalation channel"),
                ],
            ),
        ],
    }
}

fn incident_response_plan() -> TemplateStructure {
    TemplateStructure {
        id: "incident-response-plan".into(),
        name: "Incident Response Plan".into(),
        description: "Customer-facing incident response plan document".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "governance",
                "Governance",
                vec![
                    required(text("client", "Organization")),
                    required(text("plan_owner", "Plan owner")),
                    date("effective_date", "Effective date"),
                    date("next_review", "Next review date"),
                ],
            ),
            section(
                "team",
                "Response Team",
                vec![
                    required(textarea("core_team", "Core team and roles")),
                    text("external_counsel", "External counsel"),
                    text("ir_retainer", "IR retainer provider"),
                ],
            ),
            section(
                "phases",
                "Response Phases",
                vec![
                    required(textarea("detection", "Detection & analysis procedures")),
                    required(textarea("containment", "Containment strategy")),
                    textarea("eradication_recovery", "Eradication & recovery"),
                    textarea("lessons_learned", "Post-incident review process"),
                ],
            ),
            section(
                "notification",
                "Notification Matrix",
                vec![
                    checklist(
                        "notify_parties",
                        "Parties with notification obligations",
                        &[
                            "Regulators",
                            "Cyber insurer",
                            "Law enforcement",
                            "Customers",
                            "Board",
                        ],
                    ),
                    number("notification_hours", "Notification deadline (hours)"),
                ],
            ),
        ],
    }
}

fn tabletop_exercise() -> TemplateStructure {
    TemplateStructure {
        id: "tabletop-exercise".into(),
        name: "Tabletop Exercise".into(),
        description: "Planning and outcomes for an incident-response tabletop".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "planning",
                "Planning",
                vec![
                    required(text("client", "Organization")),
                    required(text("facilitator", "Facilitator")),
                    date("exercise_date", "Exercise date"),
                    select(
                        "scenario_type",
                        "Scenario",
                        &[
                            "Ransomware",
                            "Business email compromise",
                            "Insider threat",
                            "Third-party breach",
                            "OT disruption",
                        ],
                    ),
                ],
            ),
            section(
                "participants",
                "Participants",
                vec![
                    required(textarea("attendees", "Attendees and roles")),
                    checklist(
                        "functions_present",
                        "Functions represented",
                        &["IT", "Security", "Legal", "Communications", "Executive", "HR"],
                    ),
                ],
            ),
            section(
                "outcomes",
                "Outcomes",
                vec![
                    required(textarea("observations", "Key observations")),
                    required(textarea("action_items", "Action items")),
                    rating("response_maturity", "Observed response maturity", MATURITY_SCALE),
                ],
            ),
        ],
    }
}

fn engagement_kickoff() -> TemplateStructure {
    TemplateStructure {
        id: "engagement-kickoff".into(),
        name: "Engagement Kickoff Checklist".into(),
        description: "Internal checklist for starting a new delivery engagement".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "basics",
                "Engagement Basics",
                vec![
                    required(text("client", "Client organization")),
                    required(text("engagement_lead", "Engagement lead")),
                    date("kickoff_date", "Kickoff date"),
                ],
            ),
            section(
                "setup",
                "Setup",
                vec![
                    checklist(
                        "administrative",
                        "Administrative setup",
                        &[
                            "SOW countersigned",
                            "Project code created",
                            "Kickoff call scheduled",
                            "Escalation contacts exchanged",
                            "Access requests submitted",
                        ],
                    ),
                    checklist(
                        "technical",
                        "Technical setup",
                        &[
                            "VPN / access provisioned",
                            "Evidence repository created",
                            "Tooling deployed",
                            "Comms channel created",
                        ],
                    ),
                    textarea("risks", "Known risks to delivery"),
                ],
            ),
        ],
    }
}

fn risk_register_entry() -> TemplateStructure {
    TemplateStructure {
        id: "risk-register-entry".into(),
        name: "Risk Register Entry".into(),
        description: "A single risk recorded in the customer risk register".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "risk",
                "Risk",
                vec![
                    required(text("title", "Risk title")),
                    required(textarea("description", "Risk description")),
                    select("likelihood", "Likelihood", &["Rare", "Unlikely", "Possible", "Likely", "Almost certain"]),
                    select("impact", "Impact", SEVERITY_LEVELS),
                ],
            ),
            section(
                "treatment",
                "Treatment",
                vec![
                    select(
                        "strategy",
                        "Treatment strategy",
                        &["Mitigate", "Accept", "Transfer", "Avoid"],
                    ),
                    required(textarea("treatment_plan", "Treatment plan")),
                    text("risk_owner", "Risk owner"),
                    date("review_date", "Next review"),
                ],
            ),
        ],
    }
}

fn business_continuity_plan() -> TemplateStructure {
    TemplateStructure {
        id: "business-continuity-plan".into(),
        name: "Business Continuity Plan".into(),
        description: "Continuity planning document for critical business services".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "overview",
                "Overview",
                vec![
                    required(text("client", "Organization")),
                    required(text("plan_owner", "Plan owner")),
                    date("effective_date", "Effective date"),
                ],
            ),
            section(
                "impact",
                "Business Impact",
                vec![
                    required(textarea("critical_services", "Critical services and dependencies")),
                    number("rto_hours", "Recovery time objective (hours)"),
                    number("rpo_hours", "Recovery point objective (hours)"),
                ],
            ),
            section(
                "continuity",
                "Continuity Strategy",
                vec![
                    required(textarea("recovery_strategy", "Recovery strategy")),
                    textarea("alternate_sites", "Alternate sites / work arrangements"),
                    checklist(
                        "tested_components",
                        "Components exercised in the last year",
                        &[
                            "Backup restoration",
                            "Failover",
                            "Crisis communications",
                            "Alternate site activation",
                        ],
                    ),
                ],
            ),
        ],
    }
}

fn security_awareness_plan() -> TemplateStructure {
    TemplateStructure {
        id: "security-awareness-plan".into(),
        name: "Security Awareness Program Plan".into(),
        description: "Annual plan for a customer security awareness program".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "program",
                "Program",
                vec![
                    required(text("client", "Organization")),
                    required(text("program_owner", "Program owner")),
                    date("program_year_start", "Program year start"),
                ],
            ),
            section(
                "curriculum",
                "Curriculum",
                vec![
                    checklist(
                        "topics",
                        "Topics covered",
                        &[
                            "Phishing",
                            "Password hygiene",
                            "Data handling",
                            "Social engineering",
                            "Incident reporting",
                            "Remote work",
                        ],
                    ),
                    select(
                        "cadence",
                        "Training cadence",
                        &["Monthly", "Quarterly", "Twice yearly", "Annual"],
                    ),
                    number("phishing_simulations", "Phishing simulations per year"),
                ],
            ),
            section(
                "measurement",
                "Measurement",
                vec![
                    textarea("metrics", "Program metrics"),
                    number("target_completion", "Target completion rate (%)"),
                ],
            ),
        ],
    }
}

fn offboarding_checklist() -> TemplateStructure {
    TemplateStructure {
        id: "offboarding-checklist".into(),
        name: "Engagement Offboarding Checklist".into(),
        description: "Closing out a delivery engagement cleanly".into(),
        category: "operations".into(),
        sections: vec![
            section(
                "closure",
                "Closure",
                vec![
                    required(text("client", "Client organization")),
                    required(text("engagement_lead", "Engagement lead")),
                    date("closure_date", "Closure date"),
                ],
            ),
            section(
                "handover",
                "Handover & Cleanup",
                vec![
                    checklist(
                        "deliverables",
                        "Deliverables",
                        &[
                            "Final report delivered",
                            "Readout meeting held",
                            "Deliverable acceptance recorded",
                        ],
                    ),
                    checklist(
                        "cleanup",
                        "Access cleanup",
                        &[
                            "Client credentials revoked",
                            "VPN access removed",
                            "Test artifacts removed",
                            "Evidence archived",
                        ],
                    ),
                    textarea("retrospective", "Internal retrospective notes"),
                ],
            ),
        ],
    }
}

// ============================================================================
// Report templates
// ============================================================================

fn pentest_report() -> TemplateStructure {
    TemplateStructure {
        id: "pentest-report".into(),
        name: "Penetration Test Report".into(),
        description: "Findings report for a completed penetration test".into(),
        category: "report".into(),
        sections: vec![
            section(
                "overview",
                "Engagement Overview",
                vec![
                    required(text("client", "Client organization")),
                    required(text("tester", "Lead tester")),
                    date("test_start", "Test start"),
                    date("test_end", "Test end"),
                ],
            ),
            section(
                "summary",
                "Executive Summary",
                vec![
                    required(textarea("summary", "Summary of results")),
                    select("overall_risk", "Overall risk rating", SEVERITY_LEVELS),
                    number("findings_count", "Total findings"),
                ],
            ),
            section(
                "technical",
                "Technical Detail",
                vec![
                    required(textarea("attack_narrative", "Attack narrative")),
                    textarea("notable_findings", "Notable findings"),
                    checklist(
                        "techniques",
                        "Techniques that yielded access",
                        &[
                            "Credential attacks",
                            "Unpatched services",
                            "Misconfiguration",
                            "Web application flaws",
                            "Social engineering",
                        ],
                    ),
                ],
            ),
            section(
                "remediation",
                "Remediation",
                vec![
                    required(textarea("priorities", "Remediation priorities")),
                    date("retest_date", "Recommended retest date"),
                ],
            ),
        ],
    }
}

fn vulnerability_assessment_report() -> TemplateStructure {
    TemplateStructure {
        id: "vulnerability-assessment-report".into(),
        name: "Vulnerability Assessment Report".into(),
        description: "Summary of a scheduled vulnerability assessment cycle".into(),
        category: "report".into(),
        sections: vec![
            section(
                "cycle",
                "Assessment Cycle",
                vec![
                    required(text("client", "Client organization")),
                    date("scan_date", "Scan date"),
                    number("hosts_scanned", "Hosts scanned"),
                ],
            ),
            section(
                "results",
                "Results",
                vec![
                    number("critical_count", "Critical findings"),
                    number("high_count", "High findings"),
                    number("medium_count", "Medium findings"),
                    number("low_count", "Low findings"),
                    required(textarea("top_risks", "Top risks this cycle")),
                ],
            ),
            section(
                "trend",
                "Trend & Actions",
                vec![
                    select(
                        "trend",
                        "Trend vs. last cycle",
                        &["Improving", "Stable", "Worsening"],
                    ),
                    textarea("recommended_actions", "Recommended actions"),
                ],
            ),
        ],
    }
}

fn executive_summary_report() -> TemplateStructure {
    TemplateStructure {
        id: "executive-summary-report".into(),
        name: "Executive Security Summary".into(),
        description: "Quarterly security posture summary for customer leadership".into(),
        category: "report".into(),
        sections: vec![
            section(
                "period",
                "Reporting Period",
                vec![
                    required(text("client", "Client organization")),
                    select(
                        "quarter",
                        "Quarter",
                        &["Q1", "Q2", "Q3", "Q4"],
                    ),
                    number("year", "Year"),
                ],
            ),
            section(
                "posture",
                "Posture",
                vec![
                    rating("overall_posture", "Overall security posture", MATURITY_SCALE),
                    required(textarea("highlights", "Highlights")),
                    required(textarea("concerns", "Areas of concern")),
                ],
            ),
            section(
                "activity",
                "Activity",
                vec![
                    number("incidents_handled", "Incidents handled"),
                    number("findings_closed", "Findings closed"),
                    textarea("next_quarter", "Focus for next quarter"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_twenty_templates() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.list().len(), 20);
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let registry = TemplateRegistry::new();
        assert!(registry.get("cmmc-gap-assessment").is_some());
        assert!(registry.get_by_name("Statement of Work").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_categories_partition_the_catalog() {
        let registry = TemplateRegistry::new();
        let total: usize = ["assessment", "proposal", "operations", "report"]
            .iter()
            .map(|c| registry.list_by_category(c).len())
            .sum();
        assert_eq!(total, registry.list().len());
    }

    #[test]
    fn test_field_ids_unique_within_each_structure() {
        let registry = TemplateRegistry::new();
        for template in registry.list() {
            let mut seen = HashSet::new();
            for section in &template.sections {
                for field in &section.fields {
                    assert!(
                        seen.insert(field.id.clone()),
                        "duplicate field id {} in {}",
                        field.id,
                        template.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_choice_fields_declare_options() {
        let registry = TemplateRegistry::new();
        for template in registry.list() {
            for section in &template.sections {
                for field in &section.fields {
                    match field.field_type {
                        FieldType::Select | FieldType::Rating | FieldType::Checklist => {
                            assert!(
                                !field.options.is_empty(),
                                "{}/{} declares no options",
                                template.id,
                                field.id
                            );
                        }
                        _ => assert!(
                            field.options.is_empty(),
                            "{}/{} carries options it cannot use",
                            template.id,
                            field.id
                        ),
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_structure_has_sections_and_fields() {
        let registry = TemplateRegistry::new();
        for template in registry.list() {
            assert!(!template.sections.is_empty(), "{} is empty", template.id);
            for section in &template.sections {
                assert!(!section.fields.is_empty());
            }
        }
    }
}
