use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::JourneyError;
use crate::stop::Stop;
use crate::tracker::JourneyTracker;

/// Name reported for the compiled-in route.
pub const BUILTIN_ROUTE_NAME: &str = "Delhi to Kanyakumari";

/// The compiled-in route: `(name, kilometers from Delhi)`.
const BUILTIN_STOPS: &[(&str, u32)] = &[
    ("Delhi", 0),
    ("Agra, Uttar Pradesh", 150),
    ("Jaipur, Rajasthan", 280),
    ("Kota, Rajasthan", 350),
    ("Ajmer, Rajasthan", 415),
    ("Udaipur, Rajasthan", 550),
    ("Ahmedabad, Gujarat", 945),
    ("Vadodara, Gujarat", 1100),
    ("Surat, Gujarat", 1300),
    ("Mumbai, Maharashtra", 1475),
    ("Thane, Maharashtra", 1600),
    ("Pune, Maharashtra", 2005),
    ("Satara, Maharashtra", 2150),
    ("Kolhapur, Maharashtra", 2250),
    ("Belgaum, Karnataka", 2315),
    ("Dharwad, Karnataka", 2400),
    ("Hubli, Karnataka", 2480),
    ("Davanagere, Karnataka", 2550),
    ("Tumkur, Karnataka", 2600),
    ("Hosur, Tamil Nadu", 2650),
    ("Bangalore, Karnataka", 2700),
    ("Electronic City, Karnataka", 2720),
    ("Mysuru, Karnataka", 2800),
    ("Ooty, Tamil Nadu", 3000),
    ("Coimbatore, Tamil Nadu", 3100),
    ("Salem, Tamil Nadu", 3200),
    ("Erode, Tamil Nadu", 3300),
    ("Tiruppur, Tamil Nadu", 3400),
    ("Coonoor, Tamil Nadu", 3500),
    ("Palakkad, Kerala", 3600),
    ("Thrissur, Kerala", 3700),
    ("Kochi, Kerala", 3800),
    ("Alappuzha, Kerala", 3900),
    ("Kollam, Kerala", 4000),
    ("Trivandrum, Kerala", 4100),
    ("Kanyakumari, Tamil Nadu", 4200),
];

/// Stops of the compiled-in route.
pub fn builtin_stops() -> Vec<Stop> {
    BUILTIN_STOPS
        .iter()
        .map(|&(name, distance)| Stop::new(name, distance))
        .collect()
}

/// A route definition, either compiled in or read from a YAML/JSON file.
///
/// ```yaml
/// name: Weekend loop
/// stops:
///   - name: Home
///     distance: 0
///   - name: Lake
///     distance: 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub name: Option<String>,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn builtin() -> Self {
        Self {
            name: Some(BUILTIN_ROUTE_NAME.to_string()),
            stops: builtin_stops(),
        }
    }

    /// Load a route file. Files ending in `.json` are parsed as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let route: Route = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {} as JSON", path.display()))?
        } else {
            yaml_serde::from_str(&content)
                .with_context(|| format!("Failed to parse {} as YAML", path.display()))?
        };

        Ok(route)
    }

    /// Load `path` if given, otherwise the compiled-in route.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Display name, falling back to "<first> to <last>".
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) if self.stops.len() > 1 => {
                format!("{} to {}", first.name.trim(), last.name.trim())
            }
            (Some(only), _) => only.name.trim().to_string(),
            _ => "Empty route".to_string(),
        }
    }

    /// Build a tracker positioned at this route's first stop.
    pub fn into_tracker(self) -> Result<JourneyTracker, JourneyError> {
        JourneyTracker::new(self.stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_route_shape() {
        let stops = builtin_stops();
        assert_eq!(stops.len(), 36);
        assert_eq!(stops[0], Stop::new("Delhi", 0));
        assert_eq!(stops.last().unwrap().distance, 4200);
        assert!(stops.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_builtin_route_builds_tracker() {
        let tracker = Route::builtin().into_tracker().unwrap();
        assert_eq!(tracker.total_distance(), 4200);
        assert_eq!(tracker.current_stop_name(), "Delhi");
    }

    #[test]
    fn test_load_yaml_route() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("route.yaml");
        fs::write(
            &path,
            "name: Short hop\nstops:\n  - name: Delhi\n    distance: 0\n  - name: Agra\n    distance: 150\n",
        )
        .unwrap();

        let route = Route::load(&path).unwrap();
        assert_eq!(route.display_name(), "Short hop");
        assert_eq!(
            route.stops,
            vec![Stop::new("Delhi", 0), Stop::new("Agra", 150)]
        );
    }

    #[test]
    fn test_load_json_route_without_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("route.JSON");
        fs::write(
            &path,
            r#"{"stops": [{"name": "Delhi", "distance": 0}, {"name": "Jaipur", "distance": 280}]}"#,
        )
        .unwrap();

        let route = Route::load(&path).unwrap();
        assert_eq!(route.name, None);
        assert_eq!(route.display_name(), "Delhi to Jaipur");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = Route::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read route file"));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("route.yaml");
        fs::write(&path, "stops: not-a-list\n").unwrap();
        let err = Route::load(&path).unwrap_err();
        assert!(err.to_string().contains("as YAML"));
    }

    #[test]
    fn test_empty_route_is_invalid_configuration() {
        let route = Route {
            name: None,
            stops: vec![],
        };
        assert_eq!(route.display_name(), "Empty route");
        assert!(matches!(
            route.into_tracker(),
            Err(JourneyError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let route = Route::load_or_builtin(None).unwrap();
        assert_eq!(route, Route::builtin());
    }
}
