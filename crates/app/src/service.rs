//! Control service — the use-case layer over the device registry.

use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use vocohub_domain::device::DeviceKind;
use vocohub_domain::error::ControlError;
use vocohub_domain::interpreter;
use vocohub_domain::registry::{DeviceRegistry, StatePatch};

use crate::outcome::{CommandOutcome, ControlOutcome};

/// Owns the registry and serializes every read-modify-write behind one
/// exclusive lock.
///
/// Each operation is a bounded synchronous computation with no suspension
/// point between interpretation and update, so concurrent callers never
/// observe a partial update. Instantiate one per process — or one per test;
/// there is no global state.
#[derive(Debug, Default)]
pub struct ControlService {
    registry: Mutex<DeviceRegistry>,
}

impl ControlService {
    /// Create a service with the registry at its fixed defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a free-text command and apply it to the registry.
    ///
    /// Always produces an envelope: unrecognized devices and inapplicable
    /// actions are routine outcomes, not failures.
    #[tracing::instrument(skip(self))]
    pub fn interpret_and_apply(&self, text: &str) -> CommandOutcome {
        let parsed = interpreter::interpret(text);

        let Some(device) = parsed.device else {
            tracing::debug!("no device keyword matched");
            return CommandOutcome::UnrecognizedDevice {
                error: ControlError::UnrecognizedDevice.to_string(),
                command: text.to_string(),
            };
        };

        let mut registry = self.lock_registry();
        let result = registry.apply(device, parsed.action, parsed.value);
        let devices = registry.clone();
        drop(registry);

        match (parsed.action, result) {
            (Some(action), Ok(message)) => {
                tracing::info!(%device, %action, %message, "command applied");
                CommandOutcome::Applied {
                    device,
                    action,
                    command: text.to_string(),
                    message,
                    devices,
                }
            }
            (action, _) => {
                tracing::debug!(%device, ?action, "command not understood");
                CommandOutcome::NotUnderstood {
                    device,
                    action,
                    command: text.to_string(),
                    error: ControlError::ActionNotApplicable.to_string(),
                    message: "Command not understood".to_string(),
                    devices,
                }
            }
        }
    }

    /// Apply a sparse field patch to one device, bypassing the interpreter.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::UnknownDevice`] when `device` is not one of
    /// the fixed device names; the registry is left unchanged.
    #[tracing::instrument(skip(self, patch))]
    pub fn direct_control(
        &self,
        device: &str,
        patch: &StatePatch,
    ) -> Result<ControlOutcome, ControlError> {
        let device = DeviceKind::from_str(device)?;
        let mut registry = self.lock_registry();
        let state = registry.apply_fields(device, patch);
        tracing::info!(%device, "device state patched");
        Ok(ControlOutcome { device, state })
    }

    /// Snapshot of the full registry.
    #[must_use]
    pub fn list_devices(&self) -> DeviceRegistry {
        self.lock_registry().clone()
    }

    fn lock_registry(&self) -> MutexGuard<'_, DeviceRegistry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
