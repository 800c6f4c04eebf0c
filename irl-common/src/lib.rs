//! # IRL Wizard Common Library
//!
//! Core logic for the Integration Readiness Level (IRL) co-creation wizard:
//! - Feedback store (SQLite-backed, author-scoped create/read/delete)
//! - Wizard step state machine
//! - Section key derivation from taxonomy selections
//! - Session identity and login gate
//! - Static taxonomy reference data

pub mod config;
pub mod db;
pub mod error;
pub mod section;
pub mod session;
pub mod taxonomy;
pub mod wizard;

pub use error::{Error, Result};
pub use section::{derive_section_key, TaxonomySelection, GENERAL, SECTION_DELIMITER};
pub use session::SessionIdentity;
pub use wizard::{WizardState, WizardStep};
