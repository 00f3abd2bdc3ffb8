//! Kinematic test base: odometry reports exactly the commanded motion
#![allow(dead_code)]

use relnav_library::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::time::{Duration, Instant};

pub const TICK: Duration = Duration::from_millis(100);
pub const MAX_TICKS: usize = 2000;

pub struct SimBase {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
    config: MotionConfig,
}

impl SimBase {
    pub fn new(config: &MotionConfig) -> Self {
        Self::at(config, 0.0, 0.0, 0.0)
    }

    /// Base starting at an arbitrary world pose
    pub fn at(config: &MotionConfig, x: f64, y: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            yaw,
            config: config.clone(),
        }
    }

    /// World position reached by a displacement given in the base's current frame
    pub fn target_of(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (sin, cos) = self.yaw.sin_cos();
        (self.x + dx * cos - dy * sin, self.y + dx * sin + dy * cos)
    }

    /// Apply a command held for its full settle interval
    pub fn apply(&mut self, cmd: &CmdVel) -> Odometry {
        if cmd.linear != 0.0 {
            let distance = cmd.linear / self.config.movement_multiple;
            self.x += distance * self.yaw.cos();
            self.y += distance * self.yaw.sin();
        }
        if cmd.angular > 0.0 {
            self.yaw += cmd.angular / self.config.left_turn_velocity * FRAC_PI_2;
        } else if cmd.angular < 0.0 {
            self.yaw += cmd.angular / self.config.right_turn_velocity.abs() * FRAC_PI_2;
        }
        while self.yaw > PI {
            self.yaw -= TAU;
        }
        while self.yaw <= -PI {
            self.yaw += TAU;
        }
        self.odometry()
    }

    pub fn odometry(&self) -> Odometry {
        Odometry::from_pose(self.x, self.y, self.yaw)
    }
}

/// Run the controller against the simulated base until it goes idle
///
/// Returns the number of commands issued.
pub fn run_to_idle(controller: &mut MotionController, sim: &mut SimBase) -> usize {
    let mut now = Instant::now();
    let mut commands = 0;
    controller.on_pose(&sim.odometry()).unwrap();

    for _ in 0..MAX_TICKS {
        if let Some(cmd) = controller.step(now) {
            commands += 1;
            let odom = sim.apply(&cmd);
            controller.on_pose(&odom).unwrap();
        }
        if controller.phase() == MotionPhase::Idle {
            return commands;
        }
        now += TICK;
    }
    panic!(
        "controller did not finish within {} ticks (phase {})",
        MAX_TICKS,
        controller.phase()
    );
}
