//! Outcome envelopes — the wire shapes returned by the entry points.

use serde::Serialize;

use vocohub_domain::command::Action;
use vocohub_domain::device::{DeviceKind, DeviceState};
use vocohub_domain::registry::DeviceRegistry;

/// Result of interpreting and applying a free-text command.
///
/// Serializes untagged: each variant carries exactly the key set its
/// outcome requires, so the JSON matches the envelope contract without a
/// discriminator field. Unparseable text is a routine outcome and travels
/// in the same channel as success.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutcome {
    /// The text matched no device keyword.
    UnrecognizedDevice { error: String, command: String },
    /// A device was recognized but the action had no defined effect on it.
    NotUnderstood {
        device: DeviceKind,
        action: Option<Action>,
        command: String,
        error: String,
        message: String,
        devices: DeviceRegistry,
    },
    /// The command was applied.
    Applied {
        device: DeviceKind,
        action: Action,
        command: String,
        message: String,
        devices: DeviceRegistry,
    },
}

impl CommandOutcome {
    /// The human-readable message, if this outcome carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedDevice { .. } => None,
            Self::NotUnderstood { message, .. } | Self::Applied { message, .. } => Some(message),
        }
    }

    /// The error string, if this outcome is error-shaped.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedDevice { error, .. } | Self::NotUnderstood { error, .. } => {
                Some(error)
            }
            Self::Applied { .. } => None,
        }
    }
}

/// Result of a successful direct-control update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlOutcome {
    pub device: DeviceKind,
    pub state: DeviceState,
}
