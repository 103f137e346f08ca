//! Row structs read back from the database.
//!
//! Insert and update inputs are the validated domain types from
//! `abstracts_core::submission`.

pub mod submission;
