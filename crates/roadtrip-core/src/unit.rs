use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Miles per kilometer.
pub const KM_TO_MILES: f64 = 0.621371;

/// Unit a distance is reported in. Stop distances are always stored in kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Convert a distance in kilometers into this unit.
    pub fn convert(self, km: u32) -> f64 {
        match self {
            DistanceUnit::Kilometers => f64::from(km),
            DistanceUnit::Miles => f64::from(km) * KM_TO_MILES,
        }
    }

    /// Short label used in display text (`km` / `miles`).
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "miles",
        }
    }

    /// The other unit.
    pub fn toggle(self) -> Self {
        match self {
            DistanceUnit::Kilometers => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Kilometers,
        }
    }

    /// Format a converted value: whole kilometers, miles to one decimal place.
    pub fn format_value(self, value: f64) -> String {
        match self {
            DistanceUnit::Kilometers => format!("{}", value.round() as i64),
            DistanceUnit::Miles => format!("{:.1}", value),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kms" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(format!(
                "unknown distance unit '{other}' (expected 'km' or 'miles')"
            )),
        }
    }
}
