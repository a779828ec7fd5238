//! intake-session
//!
//! Per-patient session state: the validated answer store, the section
//! navigation state machine, the medication list synchronizer, and the
//! `IntakeSession` context that applies host events to all three.

pub mod error;
pub mod event;
pub mod medications;
pub mod navigation;
pub mod session;
pub mod store;

pub use event::IntakeEvent;
pub use session::{IntakeSession, reduce};
