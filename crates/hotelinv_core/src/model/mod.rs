//! Domain model for hotel and room inventory records.
//!
//! # Responsibility
//! - Define the canonical records held by the repositories.
//! - Own field-level validation shared by create and update paths.
//!
//! # Invariants
//! - Every record is identified by a positive integer id assigned by its
//!   repository.
//! - Stored string fields are trimmed and never blank.

pub mod hotel;
pub mod room;
pub mod validation;
