//! twinhealth-cli
//!
//! Command implementations and configuration behind the `twinhealth`
//! binary.

pub mod commands;
pub mod config;
