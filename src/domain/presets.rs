//! Named ocean locations and wind strengths for quick parameter selection.

use super::model::EkmanParameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
}

impl LocationPreset {
    /// Applies the preset's latitude and wind, keeping the depth.
    pub fn apply(&self, parameters: &mut EkmanParameters) {
        parameters.latitude = self.latitude;
        parameters.wind_speed = self.wind_speed;
        parameters.wind_direction = self.wind_direction;
    }
}

pub const LOCATIONS: &[LocationPreset] = &[
    LocationPreset {
        key: "los_angeles",
        name: "Los Angeles",
        latitude: 34.0,
        wind_speed: 3.0,
        wind_direction: 270.0,
    },
    LocationPreset {
        key: "busan",
        name: "Busan",
        latitude: 35.1,
        wind_speed: 3.5,
        wind_direction: 135.0,
    },
    LocationPreset {
        key: "north_pacific",
        name: "North Pacific",
        latitude: 45.0,
        wind_speed: 6.0,
        wind_direction: 135.0,
    },
    LocationPreset {
        key: "north_atlantic",
        name: "North Atlantic",
        latitude: 50.0,
        wind_speed: 8.0,
        wind_direction: 270.0,
    },
    LocationPreset {
        key: "okhotsk_sea",
        name: "Sea of Okhotsk",
        latitude: 55.0,
        wind_speed: 7.0,
        wind_direction: 135.0,
    },
    LocationPreset {
        key: "southern_ocean",
        name: "Southern Ocean",
        latitude: -60.0,
        wind_speed: 11.0,
        wind_direction: 270.0,
    },
    LocationPreset {
        key: "equator",
        name: "Equator",
        latitude: 2.0,
        wind_speed: 2.0,
        wind_direction: 90.0,
    },
];

/// (key, wind speed in m/s)
pub const WIND_PRESETS: &[(&str, f64)] = &[("normal", 10.0), ("strong_wind", 20.0), ("typhoon", 30.0)];

pub fn find_location(key: &str) -> Option<&'static LocationPreset> {
    LOCATIONS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}

pub fn find_wind_preset(key: &str) -> Option<f64> {
    WIND_PRESETS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, speed)| *speed)
}
