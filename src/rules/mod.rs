//! The referee: move validation, round resolution, state update.

pub mod referee;

pub use referee::{Outcome, Referee, RejectReason, ValidationResult};
