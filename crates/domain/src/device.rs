//! Device kinds and per-device state types.
//!
//! The device set is closed: exactly five devices exist, each with a status
//! and one numeric attribute confined to a closed range. Setters clamp at
//! the range bounds, so a state value can never leave its range.

use serde::{Deserialize, Serialize};

/// On/off status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    On,
    #[default]
    Off,
}

impl Status {
    /// Derive status from a magnitude: anything above zero is on.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        if level > 0 { Self::On } else { Self::Off }
    }

    /// Whether the device is on.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// One of the five known devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Bulb,
    Fan,
    Ac,
    Tv,
    Music,
}

impl DeviceKind {
    /// Every device, in registry iteration order.
    pub const ALL: [Self; 5] = [Self::Bulb, Self::Fan, Self::Ac, Self::Tv, Self::Music];

    /// Lowercase identifier, as used in URLs and JSON keys.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bulb => "bulb",
            Self::Fan => "fan",
            Self::Ac => "ac",
            Self::Tv => "tv",
            Self::Music => "music",
        }
    }

    /// Capitalized form used in response messages ("Bulb", "Tv", …).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bulb => "Bulb",
            Self::Fan => "Fan",
            Self::Ac => "Ac",
            Self::Tv => "Tv",
            Self::Music => "Music",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DeviceKind {
    type Err = crate::error::ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bulb" => Ok(Self::Bulb),
            "fan" => Ok(Self::Fan),
            "ac" => Ok(Self::Ac),
            "tv" => Ok(Self::Tv),
            "music" => Ok(Self::Music),
            _ => Err(crate::error::ControlError::UnknownDevice),
        }
    }
}

/// Clamp a raw command value into a `u8` range.
fn clamp(value: i64, min: u8, max: u8) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = value.clamp(i64::from(min), i64::from(max)) as u8;
    clamped
}

/// State of the bulb: status plus brightness in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulbState {
    pub status: Status,
    pub brightness: u8,
}

impl BulbState {
    pub const BRIGHTNESS_MIN: u8 = 0;
    pub const BRIGHTNESS_MAX: u8 = 100;

    /// Saturate a raw value into the brightness range.
    #[must_use]
    pub fn clamp_brightness(value: i64) -> u8 {
        clamp(value, Self::BRIGHTNESS_MIN, Self::BRIGHTNESS_MAX)
    }

    /// Clamp and store brightness; status follows the stored level.
    pub fn set_brightness(&mut self, value: i64) {
        self.brightness = Self::clamp_brightness(value);
        self.status = Status::from_level(self.brightness);
    }
}

impl Default for BulbState {
    fn default() -> Self {
        Self {
            status: Status::Off,
            brightness: 50,
        }
    }
}

/// State of the fan: status plus speed in `{1, 2, 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanState {
    pub status: Status,
    pub speed: u8,
}

impl FanState {
    pub const SPEED_MIN: u8 = 1;
    pub const SPEED_MAX: u8 = 3;

    /// Saturate a raw value into the speed range.
    #[must_use]
    pub fn clamp_speed(value: i64) -> u8 {
        clamp(value, Self::SPEED_MIN, Self::SPEED_MAX)
    }

    /// Clamp and store the speed; setting a speed always turns the fan on.
    pub fn set_speed(&mut self, value: i64) {
        self.speed = Self::clamp_speed(value);
        self.status = Status::On;
    }
}

impl Default for FanState {
    fn default() -> Self {
        Self {
            status: Status::Off,
            speed: 1,
        }
    }
}

/// State of the AC: status plus temperature in `[16, 30]` °C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcState {
    pub status: Status,
    pub temperature: u8,
}

impl AcState {
    pub const TEMPERATURE_MIN: u8 = 16;
    pub const TEMPERATURE_MAX: u8 = 30;

    /// Saturate a raw value into the temperature range.
    #[must_use]
    pub fn clamp_temperature(value: i64) -> u8 {
        clamp(value, Self::TEMPERATURE_MIN, Self::TEMPERATURE_MAX)
    }

    /// Clamp and store the temperature; setting one always turns the AC on.
    pub fn set_temperature(&mut self, value: i64) {
        self.temperature = Self::clamp_temperature(value);
        self.status = Status::On;
    }
}

impl Default for AcState {
    fn default() -> Self {
        Self {
            status: Status::Off,
            temperature: 22,
        }
    }
}

/// State shared by the tv and the music player: status plus volume in
/// `[0, 100]`. Both devices follow identical volume rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaState {
    pub status: Status,
    pub volume: u8,
}

impl MediaState {
    pub const VOLUME_MIN: u8 = 0;
    pub const VOLUME_MAX: u8 = 100;
    /// How much one increase/decrease step moves the volume.
    pub const VOLUME_STEP: u8 = 10;

    /// Saturate a raw value into the volume range.
    #[must_use]
    pub fn clamp_volume(value: i64) -> u8 {
        clamp(value, Self::VOLUME_MIN, Self::VOLUME_MAX)
    }

    /// Clamp and store the volume; status follows the stored level.
    pub fn set_volume(&mut self, value: i64) {
        self.volume = Self::clamp_volume(value);
        self.status = Status::from_level(self.volume);
    }

    /// Step the volume up, saturating at the maximum.
    pub fn increase_volume(&mut self) {
        self.volume = self
            .volume
            .saturating_add(Self::VOLUME_STEP)
            .min(Self::VOLUME_MAX);
        self.status = Status::from_level(self.volume);
    }

    /// Step the volume down, saturating at zero. Reaching zero turns the
    /// device off, the same derivation as a direct volume set.
    pub fn decrease_volume(&mut self) {
        self.volume = self.volume.saturating_sub(Self::VOLUME_STEP);
        self.status = Status::from_level(self.volume);
    }
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            status: Status::Off,
            volume: 50,
        }
    }
}

/// Snapshot of a single device's state, for `{device, state}` responses.
///
/// Serializes untagged, so the JSON is just the state object itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeviceState {
    Bulb(BulbState),
    Fan(FanState),
    Ac(AcState),
    Media(MediaState),
}
