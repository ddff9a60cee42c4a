//! Persistence for filled documents.
//!
//! The one collection in the system that supports delete. Saving demands an
//! explicit, non-blank display name: a suggested default may be offered to
//! the user, but the store never substitutes one for a blank mandatory
//! field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::schema::{TemplateStructure, ValueMap};
use crate::error::{CrmError, EntityKind};
use crate::storage::{KeyValueStore, Namespace};

const DOCUMENTS: &str = "documents";

/// A saved, filled document: a value map committed under a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDocument {
    pub id: Uuid,
    pub name: String,
    /// Registry id of the template this document was filled from.
    pub template_id: String,
    pub values: ValueMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Saved-document store over the shared key-value substrate.
#[derive(Debug)]
pub struct DocumentStore<S> {
    ns: Namespace<S>,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            ns: Namespace::new(store, namespace),
        }
    }

    /// All saved documents, most recently updated first.
    pub fn list(&self) -> Vec<SavedDocument> {
        let mut docs: Vec<SavedDocument> = self.ns.read(DOCUMENTS).unwrap_or_default();
        docs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        docs
    }

    pub fn get(&self, id: Uuid) -> Option<SavedDocument> {
        self.list().into_iter().find(|d| d.id == id)
    }

    /// Commit a filled document under an explicit name.
    ///
    /// A blank name is rejected with [`CrmError::EmptyDocumentName`]; the
    /// caller must prompt the user rather than pass a default silently.
    pub fn save(
        &self,
        name: &str,
        template_id: &str,
        values: ValueMap,
    ) -> Result<SavedDocument, CrmError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CrmError::EmptyDocumentName);
        }

        let now = Utc::now();
        let doc = SavedDocument {
            id: Uuid::new_v4(),
            name: name.to_string(),
            template_id: template_id.to_string(),
            values,
            created_at: now,
            updated_at: now,
        };

        let mut docs: Vec<SavedDocument> = self.ns.read(DOCUMENTS).unwrap_or_default();
        docs.push(doc.clone());
        self.ns.write(DOCUMENTS, &docs)?;

        info!(document = %doc.name, template = %doc.template_id, "document saved");
        Ok(doc)
    }

    /// Replace the value map of an existing document, refreshing
    /// `updated_at`. Fails with `NotFound` on an unknown id.
    pub fn update_values(&self, id: Uuid, values: ValueMap) -> Result<SavedDocument, CrmError> {
        let mut docs: Vec<SavedDocument> = self.ns.read(DOCUMENTS).unwrap_or_default();
        let slot = docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CrmError::not_found(EntityKind::Document, id))?;

        slot.values = values;
        slot.updated_at = Utc::now();
        let updated = slot.clone();
        self.ns.write(DOCUMENTS, &docs)?;
        Ok(updated)
    }

    /// Delete a saved document. Deleting an unknown id is a silent no-op,
    /// matching the collection's filter-and-rewrite contract.
    pub fn delete(&self, id: Uuid) -> Result<(), CrmError> {
        let mut docs: Vec<SavedDocument> = self.ns.read(DOCUMENTS).unwrap_or_default();
        docs.retain(|d| d.id != id);
        self.ns.write(DOCUMENTS, &docs)
    }
}

/// Default display name offered at save time: template name plus the
/// current date. Offered, never silently substituted.
pub fn suggested_name(structure: &TemplateStructure) -> String {
    format!("{} - {}", structure.name, Utc::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::templates::schema::FieldValue;

    fn store() -> DocumentStore<MemoryStore> {
        DocumentStore::new(MemoryStore::new(), "test")
    }

    fn values() -> ValueMap {
        let mut v = ValueMap::new();
        v.insert("objective".into(), FieldValue::Text("baseline".into()));
        v
    }

    #[test]
    fn test_save_requires_name() {
        let docs = store();
        for blank in ["", "   "] {
            let err = docs.save(blank, "cmmc-gap-assessment", values()).unwrap_err();
            assert!(matches!(err, CrmError::EmptyDocumentName));
        }
        assert!(docs.list().is_empty());
    }

    #[test]
    fn test_save_list_get() {
        let docs = store();
        let saved = docs
            .save("  Meridian gap analysis ", "cmmc-gap-assessment", values())
            .unwrap();
        assert_eq!(saved.name, "Meridian gap analysis");

        let listed = docs.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(docs.get(saved.id).unwrap().name, saved.name);
    }

    #[test]
    fn test_update_values_refreshes_timestamp() {
        let docs = store();
        let saved = docs.save("Draft", "soc2-readiness", values()).unwrap();

        let mut v = values();
        v.insert("systems".into(), FieldValue::Text("AD".into()));
        let updated = docs.update_values(saved.id, v).unwrap();

        assert!(updated.updated_at >= saved.updated_at);
        assert_eq!(updated.values.len(), 2);
        assert!(docs.update_values(Uuid::new_v4(), values()).is_err());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let docs = store();
        let saved = docs.save("Draft", "soc2-readiness", values()).unwrap();
        docs.delete(saved.id).unwrap();
        assert!(docs.get(saved.id).is_none());
        // unknown id: silent no-op
        docs.delete(saved.id).unwrap();
    }

    #[test]
    fn test_suggested_name_has_template_and_date() {
        let structure = TemplateStructure {
            id: "t".into(),
            name: "Tabletop Exercise".into(),
            description: String::new(),
            category: "operations".into(),
            sections: vec![],
        };
        let name = suggested_name(&structure);
        assert!(name.starts_with("Tabletop Exercise - "));
    }
}
