//! Derived completion state for template-driven documents.
//!
//! Everything here is a pure function of (schema, value map), recomputed
//! from scratch on every call. Nothing is cached or incrementally
//! maintained: the computation is cheap and must never drift from the
//! source values.

use serde::{Deserialize, Serialize};

use super::schema::{TemplateSection, TemplateStructure, ValueMap};

/// Completion status of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Empty,
    Partial,
    Complete,
}

/// Aggregate completion numbers for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProgress {
    /// Non-heading fields across all sections.
    pub total_fields: usize,
    pub filled_fields: usize,
    /// `round(filled / total * 100)`; 0 when there are no data fields.
    pub percent: u8,
    pub completed_sections: usize,
    pub total_sections: usize,
}

/// Completion status for one section given the current values.
///
/// Headings are excluded; a section with only headings (or no fields at
/// all) is trivially complete.
pub fn section_progress(section: &TemplateSection, values: &ValueMap) -> SectionStatus {
    let (total, filled) = count_fields(section, values);
    if total == 0 || filled >= total {
        SectionStatus::Complete
    } else if filled == 0 {
        SectionStatus::Empty
    } else {
        SectionStatus::Partial
    }
}

/// Aggregate completion for the whole structure.
pub fn document_progress(structure: &TemplateStructure, values: &ValueMap) -> DocumentProgress {
    let mut total_fields = 0;
    let mut filled_fields = 0;
    let mut completed_sections = 0;

    for section in &structure.sections {
        let (total, filled) = count_fields(section, values);
        total_fields += total;
        filled_fields += filled;
        if section_progress(section, values) == SectionStatus::Complete {
            completed_sections += 1;
        }
    }

    let percent = if total_fields == 0 {
        0
    } else {
        ((filled_fields as f64 / total_fields as f64) * 100.0).round() as u8
    };

    DocumentProgress {
        total_fields,
        filled_fields,
        percent,
        completed_sections,
        total_sections: structure.sections.len(),
    }
}

/// (data-bearing field count, filled count) for one section.
fn count_fields(section: &TemplateSection, values: &ValueMap) -> (usize, usize) {
    let mut total = 0;
    let mut filled = 0;
    for field in section.data_fields() {
        total += 1;
        if values.get(&field.id).is_some_and(|v| v.is_filled()) {
            filled += 1;
        }
    }
    (total, filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::schema::{FieldType, FieldValue, TemplateField, TemplateStructure};

    fn field(id: &str, field_type: FieldType) -> TemplateField {
        TemplateField {
            id: id.into(),
            label: id.into(),
            field_type,
            ..Default::default()
        }
    }

    fn three_field_section() -> TemplateSection {
        TemplateSection {
            id: "scope".into(),
            title: "Scope".into(),
            description: None,
            fields: vec![
                field("intro", FieldType::Heading),
                field("objective", FieldType::Text),
                field("systems", FieldType::Textarea),
                field("evidence", FieldType::Checklist),
            ],
        }
    }

    #[test]
    fn test_section_status_boundaries() {
        let section = three_field_section();
        let mut values = ValueMap::new();
        assert_eq!(section_progress(&section, &values), SectionStatus::Empty);

        values.insert("objective".into(), FieldValue::Text("baseline".into()));
        assert_eq!(section_progress(&section, &values), SectionStatus::Partial);

        values.insert("systems".into(), FieldValue::Text("ERP, AD".into()));
        assert_eq!(section_progress(&section, &values), SectionStatus::Partial);

        values.insert("evidence".into(), FieldValue::Items(vec!["Logs".into()]));
        assert_eq!(section_progress(&section, &values), SectionStatus::Complete);
    }

    #[test]
    fn test_blank_text_and_empty_checklist_do_not_count() {
        let section = three_field_section();
        let mut values = ValueMap::new();
        values.insert("objective".into(), FieldValue::Text("   ".into()));
        values.insert("evidence".into(), FieldValue::Items(vec![]));
        assert_eq!(section_progress(&section, &values), SectionStatus::Empty);
    }

    #[test]
    fn test_heading_only_section_is_complete() {
        let section = TemplateSection {
            id: "preamble".into(),
            title: "Preamble".into(),
            description: None,
            fields: vec![field("note", FieldType::Heading)],
        };
        assert_eq!(
            section_progress(&section, &ValueMap::new()),
            SectionStatus::Complete
        );
    }

    fn two_section_structure() -> TemplateStructure {
        TemplateStructure {
            id: "t".into(),
            name: "T".into(),
            description: String::new(),
            category: "assessment".into(),
            sections: vec![
                three_field_section(),
                TemplateSection {
                    id: "signoff".into(),
                    title: "Sign-off".into(),
                    description: None,
                    fields: vec![field("approver", FieldType::Text)],
                },
            ],
        }
    }

    #[test]
    fn test_document_progress_formulas() {
        let structure = two_section_structure();
        let mut values = ValueMap::new();

        let p = document_progress(&structure, &values);
        assert_eq!(p.total_fields, 4);
        assert_eq!(p.filled_fields, 0);
        assert_eq!(p.percent, 0);
        assert_eq!(p.completed_sections, 0);
        assert_eq!(p.total_sections, 2);

        values.insert("approver".into(), FieldValue::Text("L. Chen".into()));
        let p = document_progress(&structure, &values);
        assert_eq!(p.filled_fields, 1);
        assert_eq!(p.percent, 25);
        assert_eq!(p.completed_sections, 1);

        // changing one more field moves the aggregates consistently
        values.insert("objective".into(), FieldValue::Text("baseline".into()));
        let p = document_progress(&structure, &values);
        assert_eq!(p.filled_fields, 2);
        assert_eq!(p.percent, 50);
        assert_eq!(p.completed_sections, 1);
    }

    #[test]
    fn test_empty_structure_is_zero_percent() {
        let structure = TemplateStructure {
            id: "empty".into(),
            name: "Empty".into(),
            description: String::new(),
            category: "report".into(),
            sections: vec![],
        };
        let p = document_progress(&structure, &ValueMap::new());
        assert_eq!(p.percent, 0);
        assert_eq!(p.total_fields, 0);
        assert_eq!(p.total_sections, 0);
    }

    #[test]
    fn test_rounding() {
        // 1 of 3 filled = 33.33 -> 33; 2 of 3 = 66.67 -> 67
        let structure = TemplateStructure {
            id: "r".into(),
            name: "R".into(),
            description: String::new(),
            category: "report".into(),
            sections: vec![TemplateSection {
                id: "s".into(),
                title: "S".into(),
                description: None,
                fields: vec![
                    field("a", FieldType::Text),
                    field("b", FieldType::Text),
                    field("c", FieldType::Text),
                ],
            }],
        };
        let mut values = ValueMap::new();
        values.insert("a".into(), FieldValue::Text("x".into()));
        assert_eq!(document_progress(&structure, &values).percent, 33);
        values.insert("b".into(), FieldValue::Text("y".into()));
        assert_eq!(document_progress(&structure, &values).percent, 67);
    }
}
