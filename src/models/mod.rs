//! Data models for the CRM core.
//!
//! Entity records persisted by the repository, their status enums, and the
//! structured request payloads accepted by the constructor operations.

mod entities;
mod intake;

pub use entities::*;
pub use intake::*;
