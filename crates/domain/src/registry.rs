//! Device registry — the canonical in-memory state table.
//!
//! One typed field per device, so the JSON snapshot always serializes in
//! the fixed device order (bulb, fan, ac, tv, music) and cannot grow
//! unknown keys. Created once with fixed defaults and mutated in place.

use serde::{Deserialize, Serialize};

use crate::command::{Action, CommandValue};
use crate::device::{AcState, BulbState, DeviceKind, DeviceState, FanState, MediaState, Status};
use crate::error::ControlError;

/// The full state table for the five known devices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceRegistry {
    pub bulb: BulbState,
    pub fan: FanState,
    pub ac: AcState,
    pub tv: MediaState,
    pub music: MediaState,
}

/// A sparse direct-control request: only the fields present are applied.
///
/// Fields that are not legal for the targeted device are ignored, matching
/// the partial-update semantics of the manual control endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatePatch {
    pub status: Option<Status>,
    pub speed: Option<i64>,
    pub brightness: Option<i64>,
    pub temperature: Option<i64>,
    pub volume: Option<i64>,
}

impl DeviceRegistry {
    /// Snapshot of a single device's state.
    #[must_use]
    pub fn device_state(&self, device: DeviceKind) -> DeviceState {
        match device {
            DeviceKind::Bulb => DeviceState::Bulb(self.bulb.clone()),
            DeviceKind::Fan => DeviceState::Fan(self.fan.clone()),
            DeviceKind::Ac => DeviceState::Ac(self.ac.clone()),
            DeviceKind::Tv => DeviceState::Media(self.tv.clone()),
            DeviceKind::Music => DeviceState::Media(self.music.clone()),
        }
    }

    fn media_mut(&mut self, device: DeviceKind) -> Option<&mut MediaState> {
        match device {
            DeviceKind::Tv => Some(&mut self.tv),
            DeviceKind::Music => Some(&mut self.music),
            _ => None,
        }
    }

    fn set_status(&mut self, device: DeviceKind, status: Status) {
        match device {
            DeviceKind::Bulb => self.bulb.status = status,
            DeviceKind::Fan => self.fan.status = status,
            DeviceKind::Ac => self.ac.status = status,
            DeviceKind::Tv => self.tv.status = status,
            DeviceKind::Music => self.music.status = status,
        }
    }

    /// Apply a parsed command to one device, returning the human-readable
    /// message describing what changed.
    ///
    /// Numeric values are clamped into the device's range; statuses are
    /// derived per device rules. Messages always report the post-clamp
    /// stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::ActionNotApplicable`] when the action/value
    /// combination has no defined effect on this device (or no action was
    /// resolved at all). State is left untouched in that case.
    pub fn apply(
        &mut self,
        device: DeviceKind,
        action: Option<Action>,
        value: CommandValue,
    ) -> Result<String, ControlError> {
        match (device, action, value) {
            (_, Some(Action::On), _) => {
                self.set_status(device, Status::On);
                Ok(format!("{} turned on", device.label()))
            }
            (_, Some(Action::Off), _) => {
                self.set_status(device, Status::Off);
                Ok(format!("{} turned off", device.label()))
            }
            (DeviceKind::Fan, Some(Action::SetSpeed), CommandValue::Number(v)) => {
                self.fan.set_speed(v);
                Ok(format!("Fan speed set to {}", self.fan.speed))
            }
            (DeviceKind::Bulb, Some(Action::SetBrightness), CommandValue::Number(v)) => {
                self.bulb.set_brightness(v);
                Ok(format!("Bulb brightness set to {}%", self.bulb.brightness))
            }
            (DeviceKind::Ac, Some(Action::SetTemperature), CommandValue::Number(v)) => {
                self.ac.set_temperature(v);
                Ok(format!("AC temperature set to {}°C", self.ac.temperature))
            }
            (
                DeviceKind::Tv | DeviceKind::Music,
                Some(Action::SetVolume),
                CommandValue::Number(v),
            ) => {
                let media = self.media_mut(device).ok_or(ControlError::ActionNotApplicable)?;
                media.set_volume(v);
                Ok(format!(
                    "{} volume set to {}%",
                    device.label(),
                    media.volume
                ))
            }
            (DeviceKind::Tv | DeviceKind::Music, Some(Action::Increase), CommandValue::Volume) => {
                let media = self.media_mut(device).ok_or(ControlError::ActionNotApplicable)?;
                media.increase_volume();
                Ok(format!(
                    "{} volume increased to {}%",
                    device.label(),
                    media.volume
                ))
            }
            (DeviceKind::Tv | DeviceKind::Music, Some(Action::Decrease), CommandValue::Volume) => {
                let media = self.media_mut(device).ok_or(ControlError::ActionNotApplicable)?;
                media.decrease_volume();
                Ok(format!(
                    "{} volume decreased to {}%",
                    device.label(),
                    media.volume
                ))
            }
            _ => Err(ControlError::ActionNotApplicable),
        }
    }

    /// Apply a sparse direct-control patch to one device, returning the
    /// updated snapshot.
    ///
    /// Each present field is clamped and assigned; fields illegal for the
    /// device are silently ignored. Status changes only when the `status`
    /// field itself is supplied — numeric writes on this path never derive
    /// it.
    pub fn apply_fields(&mut self, device: DeviceKind, patch: &StatePatch) -> DeviceState {
        if let Some(status) = patch.status {
            self.set_status(device, status);
        }
        if let Some(speed) = patch.speed
            && device == DeviceKind::Fan
        {
            self.fan.speed = FanState::clamp_speed(speed);
        }
        if let Some(brightness) = patch.brightness
            && device == DeviceKind::Bulb
        {
            self.bulb.brightness = BulbState::clamp_brightness(brightness);
        }
        if let Some(temperature) = patch.temperature
            && device == DeviceKind::Ac
        {
            self.ac.temperature = AcState::clamp_temperature(temperature);
        }
        if let Some(volume) = patch.volume
            && let Some(media) = self.media_mut(device)
        {
            media.volume = MediaState::clamp_volume(volume);
        }
        self.device_state(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_fixed_defaults() {
        let registry = DeviceRegistry::default();
        assert_eq!(registry.bulb.status, Status::Off);
        assert_eq!(registry.bulb.brightness, 50);
        assert_eq!(registry.fan.speed, 1);
        assert_eq!(registry.ac.temperature, 22);
        assert_eq!(registry.tv.volume, 30);
        assert_eq!(registry.music.volume, 50);
    }

    #[test]
    fn should_serialize_snapshot_in_fixed_device_order() {
        let registry = DeviceRegistry::default();
        let json = serde_json::to_string(&registry).unwrap();
        let bulb = json.find("\"bulb\"").unwrap();
        let fan = json.find("\"fan\"").unwrap();
        let ac = json.find("\"ac\"").unwrap();
        let tv = json.find("\"tv\"").unwrap();
        let music = json.find("\"music\"").unwrap();
        assert!(bulb < fan && fan < ac && ac < tv && tv < music);
    }

    #[test]
    fn should_turn_device_on_and_report_message() {
        let mut registry = DeviceRegistry::default();
        let message = registry
            .apply(DeviceKind::Fan, Some(Action::On), CommandValue::None)
            .unwrap();
        assert_eq!(message, "Fan turned on");
        assert_eq!(registry.fan.status, Status::On);
    }

    #[test]
    fn should_be_idempotent_when_turning_on_twice() {
        let mut registry = DeviceRegistry::default();
        registry
            .apply(DeviceKind::Tv, Some(Action::On), CommandValue::None)
            .unwrap();
        let once = registry.clone();
        registry
            .apply(DeviceKind::Tv, Some(Action::On), CommandValue::None)
            .unwrap();
        assert_eq!(registry, once);
    }

    #[test]
    fn should_capitalize_device_in_messages() {
        let mut registry = DeviceRegistry::default();
        let message = registry
            .apply(DeviceKind::Tv, Some(Action::Off), CommandValue::None)
            .unwrap();
        assert_eq!(message, "Tv turned off");
    }

    #[test]
    fn should_clamp_volume_and_derive_status() {
        let mut registry = DeviceRegistry::default();
        let message = registry
            .apply(DeviceKind::Tv, Some(Action::SetVolume), CommandValue::Number(150))
            .unwrap();
        assert_eq!(message, "Tv volume set to 100%");
        assert_eq!(registry.tv.volume, 100);
        assert_eq!(registry.tv.status, Status::On);

        registry
            .apply(DeviceKind::Tv, Some(Action::SetVolume), CommandValue::Number(-5))
            .unwrap();
        assert_eq!(registry.tv.volume, 0);
        assert_eq!(registry.tv.status, Status::Off);
    }

    #[test]
    fn should_report_post_clamp_value_in_message() {
        let mut registry = DeviceRegistry::default();
        let message = registry
            .apply(DeviceKind::Ac, Some(Action::SetTemperature), CommandValue::Number(50))
            .unwrap();
        assert_eq!(message, "AC temperature set to 30°C");
    }

    #[test]
    fn should_step_volume_as_mutual_inverses() {
        let mut registry = DeviceRegistry::default();
        registry
            .apply(DeviceKind::Music, Some(Action::Increase), CommandValue::Volume)
            .unwrap();
        let message = registry
            .apply(DeviceKind::Music, Some(Action::Decrease), CommandValue::Volume)
            .unwrap();
        assert_eq!(message, "Music volume decreased to 50%");
        assert_eq!(registry.music.volume, 50);
    }

    #[test]
    fn should_reject_action_not_applicable_to_device() {
        let mut registry = DeviceRegistry::default();
        let before = registry.clone();
        let result = registry.apply(
            DeviceKind::Bulb,
            Some(Action::SetSpeed),
            CommandValue::Number(2),
        );
        assert_eq!(result, Err(ControlError::ActionNotApplicable));
        assert_eq!(registry, before);
    }

    #[test]
    fn should_reject_missing_action() {
        let mut registry = DeviceRegistry::default();
        let result = registry.apply(DeviceKind::Fan, None, CommandValue::None);
        assert_eq!(result, Err(ControlError::ActionNotApplicable));
    }

    #[test]
    fn should_reject_volume_step_without_marker() {
        let mut registry = DeviceRegistry::default();
        let result = registry.apply(DeviceKind::Tv, Some(Action::Increase), CommandValue::None);
        assert_eq!(result, Err(ControlError::ActionNotApplicable));
    }

    #[test]
    fn should_not_touch_other_devices() {
        let mut registry = DeviceRegistry::default();
        let before = registry.clone();
        registry
            .apply(DeviceKind::Fan, Some(Action::SetSpeed), CommandValue::Number(3))
            .unwrap();
        assert_eq!(registry.bulb, before.bulb);
        assert_eq!(registry.ac, before.ac);
        assert_eq!(registry.tv, before.tv);
        assert_eq!(registry.music, before.music);
    }

    #[test]
    fn should_apply_partial_patch_and_leave_other_fields_untouched() {
        let mut registry = DeviceRegistry::default();
        let state = registry.apply_fields(
            DeviceKind::Bulb,
            &StatePatch {
                brightness: Some(80),
                ..StatePatch::default()
            },
        );
        assert_eq!(registry.bulb.brightness, 80);
        // numeric writes on the direct path never derive status
        assert_eq!(registry.bulb.status, Status::Off);
        assert_eq!(state, DeviceState::Bulb(registry.bulb.clone()));
    }

    #[test]
    fn should_clamp_patched_fields() {
        let mut registry = DeviceRegistry::default();
        registry.apply_fields(
            DeviceKind::Fan,
            &StatePatch {
                speed: Some(99),
                ..StatePatch::default()
            },
        );
        assert_eq!(registry.fan.speed, 3);

        registry.apply_fields(
            DeviceKind::Ac,
            &StatePatch {
                temperature: Some(-40),
                ..StatePatch::default()
            },
        );
        assert_eq!(registry.ac.temperature, 16);
    }

    #[test]
    fn should_ignore_fields_illegal_for_device() {
        let mut registry = DeviceRegistry::default();
        let before = registry.clone();
        registry.apply_fields(
            DeviceKind::Bulb,
            &StatePatch {
                speed: Some(3),
                volume: Some(90),
                temperature: Some(25),
                ..StatePatch::default()
            },
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn should_apply_status_and_volume_together() {
        let mut registry = DeviceRegistry::default();
        registry.apply_fields(
            DeviceKind::Music,
            &StatePatch {
                status: Some(Status::On),
                volume: Some(70),
                ..StatePatch::default()
            },
        );
        assert_eq!(registry.music.status, Status::On);
        assert_eq!(registry.music.volume, 70);
    }
}
