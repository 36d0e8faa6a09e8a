//! Smart-home device catalogue.
//!
//! Devices are not records: they form a flat name-to-state mapping with no
//! identifiers and no backing hardware link.

use crate::model::label::ClosedSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Device {
    Light,
    AirConditioner,
    Tv,
    Router,
    Speaker,
    Cctv,
    Humidifier,
}

impl Device {
    /// Power state the dashboard starts with.
    pub fn seeded_state(self) -> bool {
        !matches!(self, Self::Tv | Self::Humidifier)
    }
}

impl ClosedSet for Device {
    const ALL: &'static [Self] = &[
        Self::Light,
        Self::AirConditioner,
        Self::Tv,
        Self::Router,
        Self::Speaker,
        Self::Cctv,
        Self::Humidifier,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::AirConditioner => "airConditioner",
            Self::Tv => "tv",
            Self::Router => "router",
            Self::Speaker => "speaker",
            Self::Cctv => "cctv",
            Self::Humidifier => "humidifier",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::AirConditioner => "Air Conditioning",
            Self::Tv => "Smart TV",
            Self::Router => "Router",
            Self::Speaker => "Speaker",
            Self::Cctv => "CCTV",
            Self::Humidifier => "Humidifier",
        }
    }
}
