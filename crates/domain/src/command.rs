//! Command value objects — the structured form of a parsed instruction.

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;

/// The action resolved from a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    On,
    Off,
    SetSpeed,
    SetBrightness,
    SetTemperature,
    SetVolume,
    Increase,
    Decrease,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::SetSpeed => f.write_str("set_speed"),
            Self::SetBrightness => f.write_str("set_brightness"),
            Self::SetTemperature => f.write_str("set_temperature"),
            Self::SetVolume => f.write_str("set_volume"),
            Self::Increase => f.write_str("increase"),
            Self::Decrease => f.write_str("decrease"),
        }
    }
}

/// Payload carried by a command.
///
/// Sometimes a number ("speed 2"), sometimes the symbolic marker telling an
/// increase/decrease which attribute it steps ("louder" → volume), often
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandValue {
    #[default]
    None,
    Number(i64),
    Volume,
}

/// A parsed `(device, action, value)` triple.
///
/// Absence is represented with `None`, never an error: unmatched input is a
/// routine outcome of interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub device: Option<DeviceKind>,
    pub action: Option<Action>,
    pub value: CommandValue,
}
