//! twinhealth-export
//!
//! Clinician and patient reports: tabular report models, Markdown via Tera
//! templates, and DOCX generation from that Markdown.

pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;
