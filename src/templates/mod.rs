//! Document template schema and form-state engine.
//!
//! A [`TemplateStructure`](schema::TemplateStructure) is a declarative tree
//! of sections and typed fields; the engine interprets it generically to
//! drive rendering and completion tracking. Nothing here special-cases any
//! particular template, section, or field id, and nothing here renders —
//! presentation code consumes these contracts.
//!
//! Independent of the repository layer; both are composed by callers.

pub mod documents;
pub mod progress;
pub mod registry;
pub mod schema;

pub use documents::{suggested_name, DocumentStore, SavedDocument};
pub use progress::{document_progress, section_progress, DocumentProgress, SectionStatus};
pub use registry::TemplateRegistry;
pub use schema::{FieldType, FieldValue, TemplateField, TemplateSection, TemplateStructure, ValueMap};
