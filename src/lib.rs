//! MSSP-CRM - Service-Delivery CRM Core
//!
//! This crate provides the data layer for a managed-security-services CRM:
//! seeded entity collections (organizations, contacts, opportunities,
//! engagements, assessments, team members) persisted through a pluggable
//! key-value substrate, plus a schema-driven document-template engine with
//! derived completion tracking.
//!
//! ## Architecture
//! Two independent components, both consumed by presentation code:
//! Repository (seed/CRUD/query) and the template engine (schema + derived
//! progress). Neither depends on the other.
//!
//! ## Quick Start
//!
//! ```rust
//! use mssp_crm::repository::Repository;
//! use mssp_crm::storage::MemoryStore;
//!
//! let repo = Repository::new(MemoryStore::new(), "crm");
//! repo.ensure_seeded().unwrap();
//! assert!(!repo.organizations().is_empty());
//! ```

// Core error handling
pub mod error;

// Entity and request models
pub mod models;

// Seed-on-first-use persistence and typed CRUD/query access
pub mod repository;

// Key-value persistence substrate
pub mod storage;

// Document template schema, registry, and form-state derivation
pub mod templates;

pub use error::{CrmError, EntityKind};
