//! Command interpreter — free text to a `(device, action, value)` triple.
//!
//! Matching is deliberately naive: keyword synonyms are tested as raw
//! substrings of the lowercased input, in a fixed order, first match wins.
//! That makes behavior fully deterministic but also means "stop the air
//! conditioning" resolves to action `on` ("on" is a substring of
//! "conditioning") and "lower the fan" resolves speed 1 ("low" is a
//! substring of "lower"). These collisions are part of the contract; tests
//! pin them so they cannot drift.

use std::sync::LazyLock;

use regex::Regex;

use crate::command::{Action, Command, CommandValue};
use crate::device::DeviceKind;

/// Device synonyms, tested in this order. First device with any matching
/// synonym wins, regardless of match length.
const DEVICE_KEYWORDS: [(DeviceKind, &[&str]); 5] = [
    (DeviceKind::Bulb, &["bulb", "light", "lamp"]),
    (DeviceKind::Fan, &["fan", "ceiling fan"]),
    (DeviceKind::Ac, &["ac", "air conditioner", "air conditioning"]),
    (DeviceKind::Tv, &["tv", "television", "telly"]),
    (DeviceKind::Music, &["music", "speaker", "audio"]),
];

/// Generic action synonyms, tested independently of the device.
const ACTION_KEYWORDS: [(Action, &[&str]); 4] = [
    (Action::On, &["on", "turn on", "switch on", "start"]),
    (Action::Off, &["off", "turn off", "switch off", "stop"]),
    (Action::Increase, &["increase", "up", "higher", "more", "louder"]),
    (Action::Decrease, &["decrease", "down", "lower", "less", "quieter"]),
];

// ASCII digits only, so every captured run is parseable and the saturation
// fallback below fires solely on overflow.
static SPEED_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"speed ([0-9]+)"));
static BRIGHTNESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"brightness ([0-9]+)"));
static DEGREE_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"([0-9]+) degree"));
static AC_TEMPERATURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"ac temperature ([0-9]+)"));
static VOLUME_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"volume ([0-9]+)"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("hardcoded pattern")
}

/// Extract the first number a pattern captures, if it matches.
///
/// A digit run too large for `i64` saturates at `i64::MAX`; the updater
/// clamps it like any other out-of-range value.
fn capture_number(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)
        .map(|caps| caps[1].parse().unwrap_or(i64::MAX))
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Parse a free-text command into a structured triple.
///
/// Pure function, no side effects. Unmatched input yields `None` fields
/// rather than an error.
#[must_use]
pub fn interpret(text: &str) -> Command {
    let normalized = text.to_lowercase();
    let command = normalized.trim();

    let device = DEVICE_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(command, keywords))
        .map(|(device, _)| *device);

    let action = ACTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(command, keywords))
        .map(|(action, _)| *action);

    // Device-specific override patterns take precedence over the generic
    // action when they match.
    match device {
        Some(DeviceKind::Fan) => {
            if let Some(speed) = capture_number(&SPEED_PATTERN, command) {
                return triple(device, Action::SetSpeed, CommandValue::Number(speed));
            }
            if contains_any(command, &["slow", "low"]) {
                return triple(device, Action::SetSpeed, CommandValue::Number(1));
            }
            if contains_any(command, &["medium", "med"]) {
                return triple(device, Action::SetSpeed, CommandValue::Number(2));
            }
            if contains_any(command, &["fast", "high", "max"]) {
                return triple(device, Action::SetSpeed, CommandValue::Number(3));
            }
        }
        Some(DeviceKind::Bulb) => {
            if let Some(brightness) = capture_number(&BRIGHTNESS_PATTERN, command) {
                return triple(
                    device,
                    Action::SetBrightness,
                    CommandValue::Number(brightness),
                );
            }
        }
        Some(DeviceKind::Ac) => {
            if let Some(temperature) = capture_number(&DEGREE_PATTERN, command)
                .or_else(|| capture_number(&AC_TEMPERATURE_PATTERN, command))
            {
                return triple(
                    device,
                    Action::SetTemperature,
                    CommandValue::Number(temperature),
                );
            }
        }
        Some(DeviceKind::Tv | DeviceKind::Music) => {
            if let Some(volume) = capture_number(&VOLUME_PATTERN, command) {
                return triple(device, Action::SetVolume, CommandValue::Number(volume));
            }
            if matches!(action, Some(Action::Increase | Action::Decrease)) {
                return Command {
                    device,
                    action,
                    value: CommandValue::Volume,
                };
            }
        }
        None => {}
    }

    Command {
        device,
        action,
        value: CommandValue::None,
    }
}

fn triple(device: Option<DeviceKind>, action: Action, value: CommandValue) -> Command {
    Command {
        device,
        action: Some(action),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_device_and_on_action() {
        let cmd = interpret("turn on the fan");
        assert_eq!(cmd.device, Some(DeviceKind::Fan));
        assert_eq!(cmd.action, Some(Action::On));
        assert_eq!(cmd.value, CommandValue::None);
    }

    #[test]
    fn should_normalize_case_and_whitespace() {
        let cmd = interpret("  TURN ON THE Fan  ");
        assert_eq!(cmd.device, Some(DeviceKind::Fan));
        assert_eq!(cmd.action, Some(Action::On));
    }

    #[test]
    fn should_extract_fan_speed_number() {
        let cmd = interpret("set fan speed 2");
        assert_eq!(cmd.device, Some(DeviceKind::Fan));
        assert_eq!(cmd.action, Some(Action::SetSpeed));
        assert_eq!(cmd.value, CommandValue::Number(2));
    }

    #[test]
    fn should_map_fan_speed_words_to_levels() {
        assert_eq!(
            interpret("set the fan to slow").value,
            CommandValue::Number(1)
        );
        assert_eq!(
            interpret("fan to medium please").value,
            CommandValue::Number(2)
        );
        assert_eq!(interpret("fan on max").value, CommandValue::Number(3));
    }

    #[test]
    fn should_prefer_numeric_speed_over_speed_words() {
        let cmd = interpret("fan speed 3 but slow");
        assert_eq!(cmd.action, Some(Action::SetSpeed));
        assert_eq!(cmd.value, CommandValue::Number(3));
    }

    #[test]
    fn should_extract_bulb_brightness() {
        let cmd = interpret("brightness 75 on bulb");
        assert_eq!(cmd.device, Some(DeviceKind::Bulb));
        assert_eq!(cmd.action, Some(Action::SetBrightness));
        assert_eq!(cmd.value, CommandValue::Number(75));
    }

    #[test]
    fn should_extract_ac_temperature_from_degree_phrase() {
        let cmd = interpret("set ac to 24 degrees");
        assert_eq!(cmd.device, Some(DeviceKind::Ac));
        assert_eq!(cmd.action, Some(Action::SetTemperature));
        assert_eq!(cmd.value, CommandValue::Number(24));
    }

    #[test]
    fn should_extract_ac_temperature_from_explicit_phrase() {
        let cmd = interpret("ac temperature 18");
        assert_eq!(cmd.action, Some(Action::SetTemperature));
        assert_eq!(cmd.value, CommandValue::Number(18));
    }

    #[test]
    fn should_extract_tv_volume_number() {
        let cmd = interpret("tv volume 80");
        assert_eq!(cmd.device, Some(DeviceKind::Tv));
        assert_eq!(cmd.action, Some(Action::SetVolume));
        assert_eq!(cmd.value, CommandValue::Number(80));
    }

    #[test]
    fn should_mark_volume_direction_for_media_devices() {
        let cmd = interpret("make the music louder");
        assert_eq!(cmd.device, Some(DeviceKind::Music));
        assert_eq!(cmd.action, Some(Action::Increase));
        assert_eq!(cmd.value, CommandValue::Volume);

        let cmd = interpret("tv quieter");
        assert_eq!(cmd.action, Some(Action::Decrease));
        assert_eq!(cmd.value, CommandValue::Volume);
    }

    #[test]
    fn should_return_no_device_when_nothing_matches() {
        let cmd = interpret("make it quieter");
        assert_eq!(cmd.device, None);
        // the generic action still resolves even without a device
        assert_eq!(cmd.action, Some(Action::Decrease));
    }

    #[test]
    fn should_return_no_action_when_only_device_matches() {
        let cmd = interpret("the fan please");
        assert_eq!(cmd.device, Some(DeviceKind::Fan));
        assert_eq!(cmd.action, None);
        assert_eq!(cmd.value, CommandValue::None);
    }

    #[test]
    fn should_recognize_light_and_lamp_as_bulb() {
        assert_eq!(interpret("turn off the light").device, Some(DeviceKind::Bulb));
        assert_eq!(interpret("lamp on").device, Some(DeviceKind::Bulb));
    }

    #[test]
    fn should_saturate_oversized_numbers() {
        let cmd = interpret("tv volume 99999999999999999999999");
        assert_eq!(cmd.value, CommandValue::Number(i64::MAX));
    }

    #[test]
    fn should_not_match_non_ascii_digits() {
        let cmd = interpret("bulb brightness ٥");
        assert_eq!(cmd.device, Some(DeviceKind::Bulb));
        assert_eq!(cmd.action, None);
        assert_eq!(cmd.value, CommandValue::None);
    }

    // The substring collisions below are pinned contract, not bugs.

    #[test]
    fn should_keep_on_substring_collision_inside_conditioning() {
        let cmd = interpret("stop the air conditioning");
        assert_eq!(cmd.device, Some(DeviceKind::Ac));
        assert_eq!(cmd.action, Some(Action::On));
    }

    #[test]
    fn should_keep_low_substring_collision_inside_lower() {
        let cmd = interpret("lower the fan");
        assert_eq!(cmd.action, Some(Action::SetSpeed));
        assert_eq!(cmd.value, CommandValue::Number(1));
    }

    #[test]
    fn should_keep_device_order_precedence_over_match_position() {
        // "fan" appears first in the text, but bulb is tested first
        let cmd = interpret("fan light");
        assert_eq!(cmd.device, Some(DeviceKind::Bulb));
    }

    #[test]
    fn should_keep_off_losing_to_on_inside_turn_off() {
        // "on" is a substring of neither "turn off" nor "off", so off wins
        // only through its own keywords; "turn off the tv" resolves off.
        let cmd = interpret("turn off the tv");
        assert_eq!(cmd.action, Some(Action::Off));
    }
}
