//! Calibration constants for the motion controller
//!
//! Every timing and velocity constant the controller depends on lives here so
//! a robot can be recalibrated without touching control logic.
//!
//! Search order for [`MotionConfig::find_and_load`]:
//! 1. `./relnav.toml` or `./relnav.yaml`
//! 2. `.relnav/config/params.yaml` (runtime parameter store)
//! 3. built-in defaults

use relnav_core::{NavError, NavResult, RuntimeParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Length of one closed-loop forward step
    pub increment_amount: f64,
    /// Velocity command needed to cover `increment_amount` in one movement interval
    pub movement_multiple: f64,
    /// Distance acceptance radius
    pub goal_tolerance: f64,
    /// Heading acceptance radius (rad)
    pub angle_tolerance: f64,
    /// Angular velocity of the calibrated quarter turn to the left
    pub left_turn_velocity: f64,
    /// Angular velocity of the calibrated quarter turn to the right
    pub right_turn_velocity: f64,
    /// Angular velocity per radian of heading error during fine correction
    pub fine_turn_gain: f64,
    pub movement_interval_ms: u64,
    pub turn_settle_ms: u64,
    /// Linear velocity of the forward calibration step
    pub calibration_velocity: f64,
    /// Pose samples between heading traces (0 disables)
    pub heading_log_interval: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let left_turn_velocity = 2.54629;
        Self {
            increment_amount: 0.1,
            movement_multiple: 1.8,
            goal_tolerance: 0.1,
            angle_tolerance: 10f64.to_radians(),
            left_turn_velocity,
            right_turn_velocity: -2.56,
            // a quarter turn's velocity spread over its angle
            fine_turn_gain: left_turn_velocity / std::f64::consts::FRAC_PI_2,
            movement_interval_ms: 500,
            turn_settle_ms: 600,
            calibration_velocity: 0.1,
            heading_log_interval: 100,
        }
    }
}

impl MotionConfig {
    pub fn movement_interval(&self) -> Duration {
        Duration::from_millis(self.movement_interval_ms)
    }

    pub fn turn_settle(&self) -> Duration {
        Duration::from_millis(self.turn_settle_ms)
    }

    /// Check that the calibration values describe a controller that can terminate
    pub fn validate(&self) -> NavResult<()> {
        let finite = [
            ("increment_amount", self.increment_amount),
            ("movement_multiple", self.movement_multiple),
            ("goal_tolerance", self.goal_tolerance),
            ("angle_tolerance", self.angle_tolerance),
            ("left_turn_velocity", self.left_turn_velocity),
            ("right_turn_velocity", self.right_turn_velocity),
            ("fine_turn_gain", self.fine_turn_gain),
            ("calibration_velocity", self.calibration_velocity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(NavError::config(format!("{} must be finite", name)));
            }
        }

        for (name, value) in [
            ("increment_amount", self.increment_amount),
            ("movement_multiple", self.movement_multiple),
            ("goal_tolerance", self.goal_tolerance),
            ("angle_tolerance", self.angle_tolerance),
            ("fine_turn_gain", self.fine_turn_gain),
        ] {
            if value <= 0.0 {
                return Err(NavError::config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.angle_tolerance >= std::f64::consts::FRAC_PI_2 {
            return Err(NavError::config(
                "angle_tolerance must be smaller than a quarter turn",
            ));
        }
        if self.left_turn_velocity <= 0.0 {
            return Err(NavError::config("left_turn_velocity must be positive"));
        }
        if self.right_turn_velocity >= 0.0 {
            return Err(NavError::config("right_turn_velocity must be negative"));
        }
        if self.movement_interval_ms == 0 || self.turn_settle_ms == 0 {
            return Err(NavError::config("settle intervals must be non-zero"));
        }
        Ok(())
    }

    /// Load config from a file (auto-detect format)
    pub fn from_file<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NavError::config(format!("Failed to read config file: {}", e)))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            _ => Self::from_toml(&contents).or_else(|_| Self::from_yaml(&contents)),
        }
    }

    /// Parse config from TOML string
    pub fn from_toml(contents: &str) -> NavResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| NavError::config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from YAML string
    pub fn from_yaml(contents: &str) -> NavResult<Self> {
        let config: Self = serde_yaml::from_str(contents)
            .map_err(|e| NavError::config(format!("Failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read every calibration key from the runtime parameter store
    pub fn from_params(params: &RuntimeParams) -> NavResult<Self> {
        let defaults = Self::default();
        let config = Self {
            increment_amount: params.get_f64("increment_amount", defaults.increment_amount),
            movement_multiple: params.get_f64("movement_multiple", defaults.movement_multiple),
            goal_tolerance: params.get_f64("goal_tolerance", defaults.goal_tolerance),
            angle_tolerance: params.get_f64("angle_tolerance", defaults.angle_tolerance),
            left_turn_velocity: params
                .get_f64("left_turn_velocity", defaults.left_turn_velocity),
            right_turn_velocity: params
                .get_f64("right_turn_velocity", defaults.right_turn_velocity),
            fine_turn_gain: params.get_f64("fine_turn_gain", defaults.fine_turn_gain),
            movement_interval_ms: params
                .get_u64("movement_interval_ms", defaults.movement_interval_ms),
            turn_settle_ms: params.get_u64("turn_settle_ms", defaults.turn_settle_ms),
            calibration_velocity: params
                .get_f64("calibration_velocity", defaults.calibration_velocity),
            heading_log_interval: params
                .get_u64("heading_log_interval", defaults.heading_log_interval),
        };
        config.validate()?;
        Ok(config)
    }

    /// Find and load config from the standard search paths
    pub fn find_and_load() -> NavResult<Self> {
        for path in Self::get_search_paths() {
            if path.exists() {
                log::info!("Loading motion config from {}", path.display());
                return Self::from_file(&path);
            }
        }
        Self::from_params(&RuntimeParams::init()?)
    }

    fn get_search_paths() -> Vec<PathBuf> {
        vec![PathBuf::from("relnav.toml"), PathBuf::from("relnav.yaml")]
    }
}
