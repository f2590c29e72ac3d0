//! twinhealth-core
//!
//! Pure domain types shared by the scorer, the report renderer and the CLI.
//! No scoring logic lives here; this is the vocabulary of the dashboard.

pub mod error;
pub mod models;
