use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::math::{Vec3, Vec3f};

/// The two operands crossed by the demo. Fields missing from the JSON keep
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub a: Vec3f,
    pub b: Vec3f,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            a: Vec3::splat(1.0),
            b: Vec3::splat(-1.0),
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid demo config")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::info!("Loaded demo config from {}: a={}, b={}", path.display(), config.a, config.b);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.a, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(config.b, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(DemoConfig::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_partial_override() {
        let config = DemoConfig::from_json(r#"{"b": {"x": 0.0, "y": 1.0, "z": 0.0}}"#).unwrap();
        assert_eq!(config.a, Vec3::splat(1.0));
        assert_eq!(config.b, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rejects_malformed() {
        let err = DemoConfig::from_json(r#"{"a": [1, 2]}"#).unwrap_err();
        assert!(err.to_string().contains("invalid demo config"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load("/nonexistent/geomath-demo.json").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("geomath-demo-{}.json", std::process::id()));
        fs::write(&path, r#"{"a": {"x": 1.0, "y": 0.0, "z": 0.0}}"#).unwrap();
        let config = DemoConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.a, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(config.b, Vec3::splat(-1.0));
    }
}
