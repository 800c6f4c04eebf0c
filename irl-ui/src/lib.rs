//! IRL Co-Creation Wizard UI service
//!
//! HTTP layer over the irl-common core: login gate, per-session wizard
//! navigation, taxonomy browsing, and feedback submit/list/delete.

pub mod handlers;
pub mod server;
