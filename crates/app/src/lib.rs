//! # vocohub-app
//!
//! Application layer — the use-cases the transport adapters call.
//!
//! ## Responsibilities
//! - Own the device registry behind a lock so concurrent requests targeting
//!   the same device serialize and never interleave a partial update
//! - Expose the three entry points: `interpret_and_apply`, `direct_control`,
//!   and `list_devices`
//! - Build the outcome envelopes the wire format expects, including the
//!   error-shaped ones for unparseable text
//!
//! ## Dependency rule
//! Depends on `vocohub-domain` only. Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod outcome;
pub mod service;
