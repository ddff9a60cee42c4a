//! Declarative schema for multi-section document templates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The closed set of field types a template may declare.
///
/// The engine stays exhaustive over this set; adding a variant is a
/// deliberate schema change, not an extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text. The engine stores raw strings; formatting is a
    /// presentation concern.
    Text,
    /// Multi-line text; identical to `Text` at the data-model level.
    Textarea,
    /// Single choice from the field's declared options; empty string means
    /// "unselected". The UI constrains the value, not the engine.
    Select,
    /// Date entry, stored as a raw string.
    Date,
    /// Numeric entry, stored as a raw string.
    Number,
    /// Ordinal choice from declared options; treated exactly like `Select`.
    Rating,
    /// Multiple choice; value is a collection of selected option strings.
    Checklist,
    /// Descriptive text only. Carries no data and is excluded from every
    /// completion computation.
    Heading,
}

impl FieldType {
    /// Heading fields render text but hold no value.
    pub fn is_data_bearing(self) -> bool {
        !matches!(self, Self::Heading)
    }

    /// The uniform empty value for this type: an empty collection for
    /// checklists, an empty string for every other data-bearing type,
    /// nothing for headings.
    pub fn default_value(self) -> Option<FieldValue> {
        match self {
            Self::Heading => None,
            Self::Checklist => Some(FieldValue::Items(Vec::new())),
            Self::Text | Self::Textarea | Self::Select | Self::Date | Self::Number | Self::Rating => {
                Some(FieldValue::Text(String::new()))
            }
        }
    }
}

/// A filled-in value, shaped by the field type that owns it: scalar text
/// for everything except checklists, which hold a list of selected options
/// (order not semantically meaningful).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Items(Vec<String>),
}

impl FieldValue {
    /// The "filled" predicate used by all completion tracking: a checklist
    /// counts when it has any selection, text counts when it is non-blank
    /// after trimming.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(s) => !s.trim().is_empty(),
            Self::Items(items) => !items.is_empty(),
        }
    }
}

/// Accumulated field values for one document, keyed by field id.
pub type ValueMap = HashMap<String, FieldValue>;

/// Definition of a single field within a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateField {
    /// Field identifier, unique within its structure.
    pub id: String,

    /// Human-readable label (or the display text, for headings).
    pub label: String,

    pub field_type: FieldType,

    /// Declared options for select/rating/checklist fields.
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub placeholder: Option<String>,

    /// Help text shown below the input.
    #[serde(default)]
    pub help_text: Option<String>,

    /// Required flag, enforced by the form layer.
    #[serde(default)]
    pub required: bool,

    /// Layout hint: render at half width.
    #[serde(default)]
    pub half_width: bool,
}

impl Default for TemplateField {
    fn default() -> Self {
        TemplateField {
            id: String::new(),
            label: String::new(),
            field_type: FieldType::Text,
            options: Vec::new(),
            placeholder: None,
            help_text: None,
            required: false,
            half_width: false,
        }
    }
}

/// An ordered group of fields under one title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<TemplateField>,
}

impl TemplateSection {
    /// The fields that carry data (everything except headings).
    pub fn data_fields(&self) -> impl Iterator<Item = &TemplateField> {
        self.fields.iter().filter(|f| f.field_type.is_data_bearing())
    }
}

/// A named document schema: an ordered sequence of sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateStructure {
    /// Registry identifier, e.g. "cmmc-gap-assessment".
    pub id: String,
    pub name: String,
    pub description: String,
    /// Catalog grouping, e.g. "assessment" or "report".
    pub category: String,
    pub sections: Vec<TemplateSection>,
}

impl TemplateStructure {
    /// Look up a field anywhere in the structure.
    pub fn field(&self, field_id: &str) -> Option<&TemplateField> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.id == field_id)
    }
}

/// The value for a field, falling back to the type's uniform empty value
/// when the map has no entry. This is the single defaulting rule; callers
/// must not re-implement it per site.
pub fn value_for(field: &TemplateField, values: &ValueMap) -> Option<FieldValue> {
    match values.get(&field.id) {
        Some(v) => Some(v.clone()),
        None => field.field_type.default_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_by_type() {
        assert_eq!(
            FieldType::Checklist.default_value(),
            Some(FieldValue::Items(Vec::new()))
        );
        assert_eq!(
            FieldType::Select.default_value(),
            Some(FieldValue::Text(String::new()))
        );
        assert_eq!(FieldType::Heading.default_value(), None);
    }

    #[test]
    fn test_filled_predicate() {
        assert!(!FieldValue::Text("   ".into()).is_filled());
        assert!(FieldValue::Text("done".into()).is_filled());
        assert!(!FieldValue::Items(vec![]).is_filled());
        assert!(FieldValue::Items(vec!["A".into()]).is_filled());
    }

    #[test]
    fn test_value_untagged_serde() {
        let text: FieldValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(text, FieldValue::Text("hello".into()));
        let items: FieldValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(items, FieldValue::Items(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_value_for_falls_back_to_type_default() {
        let field = TemplateField {
            id: "evidence".into(),
            label: "Evidence collected".into(),
            field_type: FieldType::Checklist,
            options: vec!["Logs".into(), "Configs".into()],
            ..Default::default()
        };
        let values = ValueMap::new();
        assert_eq!(
            value_for(&field, &values),
            Some(FieldValue::Items(Vec::new()))
        );
    }
}
