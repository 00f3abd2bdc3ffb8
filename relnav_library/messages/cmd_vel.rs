use relnav_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Command velocity message for robot control
///
/// Published once per control step. Contains the forward (linear) and yaw
/// (angular) velocity the base should hold until the next command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct CmdVel {
    pub stamp_nanos: u64,
    pub linear: f64,  // forward velocity
    pub angular: f64, // rad/s turning velocity
}

impl CmdVel {
    /// Create a new CmdVel message with current timestamp
    pub fn new(linear: f64, angular: f64) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            linear,
            angular,
        }
    }

    /// Create a zero velocity command (stop)
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Pure forward motion
    pub fn forward(linear: f64) -> Self {
        Self::new(linear, 0.0)
    }

    /// In-place rotation
    pub fn rotate(angular: f64) -> Self {
        Self::new(0.0, angular)
    }

    /// Create a CmdVel with explicit timestamp
    pub fn with_timestamp(linear: f64, angular: f64, stamp_nanos: u64) -> Self {
        Self {
            stamp_nanos,
            linear,
            angular,
        }
    }

    pub fn is_stop(&self) -> bool {
        self.linear == 0.0 && self.angular == 0.0
    }
}

impl Default for CmdVel {
    fn default() -> Self {
        Self::zero()
    }
}

impl LogSummary for CmdVel {
    fn log_summary(&self) -> String {
        format!("CmdVel(v={:.3}, w={:.3})", self.linear, self.angular)
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for CmdVel {}
unsafe impl bytemuck::Zeroable for CmdVel {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cmd_vel_creation() {
        let cmd = CmdVel::new(0.18, 0.0);
        assert_relative_eq!(cmd.linear, 0.18);
        assert_relative_eq!(cmd.angular, 0.0);
        assert!(cmd.stamp_nanos > 0);
    }

    #[test]
    fn test_cmd_vel_zero_is_stop() {
        assert!(CmdVel::zero().is_stop());
        assert!(!CmdVel::rotate(2.54629).is_stop());
    }

    #[test]
    fn test_cmd_vel_with_timestamp() {
        let cmd = CmdVel::with_timestamp(0.1, -2.56, 123456789);
        assert_relative_eq!(cmd.angular, -2.56);
        assert_eq!(cmd.stamp_nanos, 123456789);
    }

    #[test]
    fn test_bytemuck_traits() {
        let cmd = CmdVel::forward(0.18);
        let bytes: &[u8] = bytemuck::bytes_of(&cmd);
        assert_eq!(bytes.len(), 24);
    }
}
