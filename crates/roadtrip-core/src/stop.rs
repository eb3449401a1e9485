use serde::{Deserialize, Serialize};

/// A named waypoint and its cumulative distance from the origin, in kilometers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    /// Kilometers from the first stop of the journey.
    pub distance: u32,
}

impl Stop {
    pub fn new(name: impl Into<String>, distance: u32) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
name: Agra, Uttar Pradesh
distance: 150
"#;
        let stop: Stop = yaml_serde::from_str(yaml).unwrap();
        assert_eq!(stop, Stop::new("Agra, Uttar Pradesh", 150));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let result: Result<Stop, _> =
            serde_json::from_str(r#"{"name": "Nowhere", "distance": -5}"#);
        assert!(result.is_err());
    }
}
