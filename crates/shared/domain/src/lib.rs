//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no DOM access, no I/O, no heavy logic, just data and simple helpers.

pub mod categories;
pub mod config;
pub mod constants;
pub mod content;
pub mod theme;
