//! # vocohub-domain
//!
//! Pure domain model for the vocohub voice-command smart-home hub.
//!
//! ## Responsibilities
//! - Define the fixed **device set** (bulb, fan, ac, tv, music) and the
//!   per-device state types with their value ranges
//! - Hold the **registry**: the canonical in-memory state table and the
//!   clamped update rules that mutate it
//! - Provide the **interpreter**: a pure function turning free text into a
//!   `(device, action, value)` command triple
//! - Define the error taxonomy for unparseable or inapplicable input
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod command;
pub mod device;
pub mod error;
pub mod interpreter;
pub mod registry;
