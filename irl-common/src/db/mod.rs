//! Feedback persistence: models, schema bootstrap, and store operations

pub mod feedback;
pub mod init;
pub mod models;

pub use feedback::*;
pub use init::*;
pub use models::*;
