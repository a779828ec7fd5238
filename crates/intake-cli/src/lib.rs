//! intake-cli
//!
//! Command-line host for the intake form: replays event scripts through an
//! `IntakeSession`, exports the clinical report, and manages the local
//! configuration file.

pub mod cli;
pub mod commands;
pub mod config;
