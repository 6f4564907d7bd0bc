//! Search and filter over the live collections.
//!
//! # Invariants
//! - Pure reads: no mutation, no persistence, no notification.
//! - Results keep collection order.

pub mod filter;
