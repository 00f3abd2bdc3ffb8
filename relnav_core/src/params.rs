//! Simple runtime parameter system for RELNAV
//!
//! Provides a straightforward key-value store for robot calibration values.
//! Parameters are seeded with defaults and can be persisted as YAML.

use crate::error::{NavError, NavResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Default location of the project parameter file
pub const DEFAULT_PARAMS_PATH: &str = ".relnav/config/params.yaml";

/// Simple runtime parameter store
pub struct RuntimeParams {
    /// Parameter storage - BTreeMap maintains sorted order
    params: Arc<RwLock<BTreeMap<String, Value>>>,
    /// Optional persistence path
    persist_path: Option<PathBuf>,
}

fn default_params() -> BTreeMap<String, Value> {
    let mut params = BTreeMap::new();

    // Translation calibration
    params.insert("increment_amount".to_string(), Value::from(0.1));
    params.insert("movement_multiple".to_string(), Value::from(1.8));
    params.insert("goal_tolerance".to_string(), Value::from(0.1));
    params.insert("movement_interval_ms".to_string(), Value::from(500));
    params.insert("calibration_velocity".to_string(), Value::from(0.1));

    // Rotation calibration
    params.insert("angle_tolerance".to_string(), Value::from(10f64.to_radians()));
    params.insert("left_turn_velocity".to_string(), Value::from(2.54629));
    params.insert("right_turn_velocity".to_string(), Value::from(-2.56));
    params.insert(
        "fine_turn_gain".to_string(),
        Value::from(2.54629 / std::f64::consts::FRAC_PI_2),
    );
    params.insert("turn_settle_ms".to_string(), Value::from(600));

    // Diagnostics
    params.insert("heading_log_interval".to_string(), Value::from(100));
    params.insert("log_level".to_string(), Value::from("INFO"));

    params
}

impl RuntimeParams {
    /// Create new parameter store, loading `.relnav/config/params.yaml` if present
    pub fn init() -> NavResult<Self> {
        Self::from_path(DEFAULT_PARAMS_PATH)
    }

    /// Create a parameter store backed by a specific YAML file
    ///
    /// Missing or unreadable files fall back to the built-in defaults.
    pub fn from_path(path: impl Into<PathBuf>) -> NavResult<Self> {
        let params_file = path.into();
        let mut initial_params = BTreeMap::new();

        if params_file.exists() {
            if let Ok(yaml_str) = std::fs::read_to_string(&params_file) {
                match serde_yaml::from_str::<BTreeMap<String, Value>>(&yaml_str) {
                    Ok(loaded) => initial_params = loaded,
                    Err(e) => log::warn!(
                        "Ignoring malformed parameter file {}: {}",
                        params_file.display(),
                        e
                    ),
                }
            }
        }

        if initial_params.is_empty() {
            initial_params = default_params();
        }

        Ok(Self {
            params: Arc::new(RwLock::new(initial_params)),
            persist_path: Some(params_file),
        })
    }

    /// In-memory store holding only the defaults
    pub fn with_defaults() -> Self {
        Self {
            params: Arc::new(RwLock::new(default_params())),
            persist_path: None,
        }
    }

    /// Get a parameter value
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let params = self.params.read().ok()?;
        let value = params.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Get parameter with default
    pub fn get_or<T: for<'de> Deserialize<'de>>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Get parameter as f64 with default
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    /// Get parameter as u64 with default
    pub fn get_u64(&self, key: &str, default: u64) -> u64 {
        self.get_or(key, default)
    }

    /// Set a parameter value
    pub fn set<T: Serialize>(&self, key: &str, value: T) -> NavResult<()> {
        let json_value = serde_json::to_value(value)?;
        let mut params = self.params.write()?;
        params.insert(key.to_string(), json_value);
        Ok(())
    }

    /// Check if a parameter exists
    pub fn has(&self, key: &str) -> bool {
        self.params
            .read()
            .map(|p| p.contains_key(key))
            .unwrap_or(false)
    }

    /// Clear all parameters and reset to defaults
    pub fn reset(&self) -> NavResult<()> {
        let mut params = self.params.write()?;
        *params = default_params();
        Ok(())
    }

    /// Save parameters to the YAML file
    pub fn save_to_disk(&self) -> NavResult<()> {
        let path = self
            .persist_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PARAMS_PATH));

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let params = self.params.read()?;
        let yaml = serde_yaml::to_string(&*params)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Load parameters from a YAML file, replacing the current set
    pub fn load_from_disk(&self, path: &Path) -> NavResult<()> {
        if !path.exists() {
            return Err(NavError::config(format!(
                "Parameter file not found: {}",
                path.display()
            )));
        }
        let yaml_str = std::fs::read_to_string(path)?;
        let loaded: BTreeMap<String, Value> = serde_yaml::from_str(&yaml_str)?;

        let mut params = self.params.write()?;
        *params = loaded;
        Ok(())
    }
}

impl Clone for RuntimeParams {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            persist_path: self.persist_path.clone(),
        }
    }
}

impl Default for RuntimeParams {
    fn default() -> Self {
        Self::init().unwrap_or_else(|e| {
            log::warn!("Failed to initialize RuntimeParams: {}. Using defaults.", e);
            Self::with_defaults()
        })
    }
}
