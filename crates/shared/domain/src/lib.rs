//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, no registry access, no logic beyond simple helpers.

pub mod config;
pub mod record;
