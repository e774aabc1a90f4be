use std::{fmt, str::FromStr};

/// Converts a straight-line distance into a travel time.
///
/// Two conventions exist for the donation routes and they disagree:
/// a constant 50 km/h (1.2 min per km) and a flat 1 min per km. `Default`
/// is the flat pace; use `"50km/h"` for the other one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedModel {
    /// `duration = km / kmh * 3600`
    AverageSpeed { kmh: f64 },
    /// `duration = km * minutes * 60`
    PacePerKm { minutes: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeedModelError {
    #[error("unrecognised speed model {0:?} (expected e.g. \"50km/h\" or \"1min/km\")")]
    Unrecognised(String),
    #[error("speed model value must be a positive finite number, got {0}")]
    NonPositive(f64),
}

impl Default for SpeedModel {
    fn default() -> Self {
        SpeedModel::PacePerKm { minutes: 1.0 }
    }
}

impl SpeedModel {
    pub fn average_speed(kmh: f64) -> Result<Self, SpeedModelError> {
        check_positive(kmh).map(|kmh| SpeedModel::AverageSpeed { kmh })
    }

    pub fn pace_per_km(minutes: f64) -> Result<Self, SpeedModelError> {
        check_positive(minutes).map(|minutes| SpeedModel::PacePerKm { minutes })
    }

    pub fn duration_seconds(&self, distance_m: f64) -> f64 {
        let km = distance_m / 1000.0;
        match *self {
            SpeedModel::AverageSpeed { kmh } => km / kmh * 3600.0,
            SpeedModel::PacePerKm { minutes } => km * minutes * 60.0,
        }
    }

    pub fn validate(&self) -> Result<(), SpeedModelError> {
        match *self {
            SpeedModel::AverageSpeed { kmh: value } | SpeedModel::PacePerKm { minutes: value } => {
                check_positive(value).map(|_| ())
            }
        }
    }
}

fn check_positive(value: f64) -> Result<f64, SpeedModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SpeedModelError::NonPositive(value))
    }
}

impl FromStr for SpeedModel {
    type Err = SpeedModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(' ', "");
        let unrecognised = || SpeedModelError::Unrecognised(s.to_string());

        if let Some(value) = normalized
            .strip_suffix("km/h")
            .or_else(|| normalized.strip_suffix("kmh"))
        {
            let kmh = value.parse::<f64>().map_err(|_| unrecognised())?;
            return SpeedModel::average_speed(kmh);
        }
        if let Some(value) = normalized.strip_suffix("min/km") {
            let minutes = value.parse::<f64>().map_err(|_| unrecognised())?;
            return SpeedModel::pace_per_km(minutes);
        }
        Err(unrecognised())
    }
}

impl fmt::Display for SpeedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedModel::AverageSpeed { kmh } => write!(f, "{kmh}km/h"),
            SpeedModel::PacePerKm { minutes } => write!(f, "{minutes}min/km"),
        }
    }
}
