//! Smart-home panel service.
//!
//! # Responsibility
//! - Hold the device power map and the air-conditioner target temperature.
//! - Expose the static dashboard tiles.
//!
//! # Invariants
//! - Target temperature stays within `[MIN_TARGET_CELSIUS, MAX_TARGET_CELSIUS]`.
//! - Every catalogue device has exactly one state entry.

use crate::model::device::Device;
use crate::model::label::ClosedSet;
use log::debug;
use std::collections::BTreeMap;

pub const MIN_TARGET_CELSIUS: i32 = 10;
pub const MAX_TARGET_CELSIUS: i32 = 30;
pub const DEFAULT_TARGET_CELSIUS: i32 = 22;

/// Non-interactive dashboard tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub title: &'static str,
    pub value: &'static str,
}

pub const READINGS: &[Reading] = &[
    Reading {
        title: "Current Consumption",
        value: "1.1 KW",
    },
    Reading {
        title: "Humidity",
        value: "50.2%",
    },
    Reading {
        title: "Temperature",
        value: "16 °C",
    },
    Reading {
        title: "Energy Usage",
        value: "2.2 K",
    },
];

/// Outdoor weather card; display only.
pub const WEATHER: Reading = Reading {
    title: "Sunny with cold",
    value: "28 °C",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartHomeService {
    devices: BTreeMap<Device, bool>,
    target_celsius: i32,
}

impl Default for SmartHomeService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SmartHomeService {
    pub fn seeded() -> Self {
        Self {
            devices: Device::ALL
                .iter()
                .map(|device| (*device, device.seeded_state()))
                .collect(),
            target_celsius: DEFAULT_TARGET_CELSIUS,
        }
    }

    /// Device states in catalogue order.
    pub fn devices(&self) -> impl Iterator<Item = (Device, bool)> + '_ {
        self.devices.iter().map(|(device, on)| (*device, *on))
    }

    pub fn is_on(&self, device: Device) -> bool {
        self.devices.get(&device).copied().unwrap_or(false)
    }

    /// Flips `device` and returns its new state.
    pub fn toggle(&mut self, device: Device) -> bool {
        let state = self.devices.entry(device).or_insert(false);
        *state = !*state;
        debug!(
            "event=device_toggled module=smart_home status=ok device={} on={}",
            device.key(),
            *state
        );
        *state
    }

    /// Toggles by catalogue key; unknown names are ignored.
    pub fn toggle_by_key(&mut self, key: &str) -> Option<bool> {
        match Device::from_key(key) {
            Some(device) => Some(self.toggle(device)),
            None => {
                debug!("event=device_toggled module=smart_home status=ignored reason=unknown_device");
                None
            }
        }
    }

    pub fn target_celsius(&self) -> i32 {
        self.target_celsius
    }

    /// Moves the target by `steps` degrees, clamped to the supported range.
    pub fn adjust_target(&mut self, steps: i32) -> i32 {
        self.target_celsius = self
            .target_celsius
            .saturating_add(steps)
            .clamp(MIN_TARGET_CELSIUS, MAX_TARGET_CELSIUS);
        self.target_celsius
    }

    pub fn readings(&self) -> &'static [Reading] {
        READINGS
    }

    /// Outdoor weather card: `title` is the condition, `value` the temperature.
    pub fn weather(&self) -> Reading {
        WEATHER
    }
}

#[cfg(test)]
mod tests {
    use super::{SmartHomeService, MAX_TARGET_CELSIUS, MIN_TARGET_CELSIUS};
    use crate::model::device::Device;

    #[test]
    fn seeded_states_match_catalogue() {
        let service = SmartHomeService::seeded();
        assert_eq!(service.devices().count(), 7);
        assert!(service.is_on(Device::Light));
        assert!(!service.is_on(Device::Tv));
        assert!(!service.is_on(Device::Humidifier));
        assert_eq!(service.target_celsius(), 22);
    }

    #[test]
    fn static_tiles_include_outdoor_weather() {
        let service = SmartHomeService::seeded();
        assert_eq!(service.readings().len(), 4);
        let weather = service.weather();
        assert_eq!(weather.title, "Sunny with cold");
        assert_eq!(weather.value, "28 °C");
    }

    #[test]
    fn toggles_are_independent() {
        let mut service = SmartHomeService::seeded();
        assert!(service.toggle(Device::Tv));
        assert!(service.is_on(Device::Light));
        assert_eq!(service.toggle_by_key("light"), Some(false));
        assert_eq!(service.toggle_by_key("toaster"), None);
        assert!(service.is_on(Device::Tv));
    }

    #[test]
    fn target_temperature_clamps() {
        let mut service = SmartHomeService::seeded();
        for _ in 0..20 {
            service.adjust_target(1);
        }
        assert_eq!(service.target_celsius(), MAX_TARGET_CELSIUS);
        assert_eq!(service.adjust_target(-100), MIN_TARGET_CELSIUS);
        assert_eq!(service.adjust_target(1), MIN_TARGET_CELSIUS + 1);
    }
}
