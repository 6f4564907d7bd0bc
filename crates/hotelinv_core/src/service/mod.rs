//! Use-case services consumed by presentation layers.
//!
//! # Responsibility
//! - Own both repositories and wire their read accessors into each other.
//! - Keep presentation code decoupled from persistence details.

pub mod inventory_service;
