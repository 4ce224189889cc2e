//! Error taxonomy for command handling.
//!
//! Every variant is a routine, recoverable outcome surfaced as a value at
//! the boundary that detects it. Nothing in the core panics on bad input.

/// Why a command or direct-control request could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// The text matched no device keyword.
    #[error("Device not recognized")]
    UnrecognizedDevice,
    /// A direct-control target outside the fixed device set.
    #[error("Device not found")]
    UnknownDevice,
    /// The device is known but the resolved action has no defined effect on
    /// it, or no action was resolved at all.
    #[error("Action not recognized or not applicable")]
    ActionNotApplicable,
}
