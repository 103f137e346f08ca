//! Domain types, errors and validation rules for abstract submissions.
//!
//! Everything in this crate is pure: no I/O, no clock access. Callers pass
//! in the current time where a rule depends on it.

pub mod deadline;
pub mod error;
pub mod submission;
pub mod types;
