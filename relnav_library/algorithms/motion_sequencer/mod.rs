//! Motion Sequencer
//!
//! The goal-directed state machine. A goal is executed as up to four legs:
//!
//! ```text
//! Idle ─► Orienting180 ─► TranslatingX ─► OrientingY ─► TranslatingY ─► Idle
//!          (goal behind)
//! ```
//!
//! A bumper contact returns to `Idle` from any phase.
//!
//! # Stepping
//!
//! [`MotionController::step`] never blocks. A command that needs time to take
//! effect arms a settle timer; every step before the deadline returns `None`.
//! The first step after the deadline finishes the pending work (translation
//! read-back) and evaluates the phase again. Phase-terminal decisions advance
//! immediately, so one step can pass through several phases before it issues a
//! command.
//!
//! # Example
//!
//! ```rust
//! use relnav_library::algorithms::motion_sequencer::MotionController;
//! use relnav_library::{DisplacementGoal, MotionConfig};
//! use std::time::Instant;
//!
//! let mut controller = MotionController::new(MotionConfig::default()).unwrap();
//! controller.submit_goal(&DisplacementGoal::new(1.0, 0.5));
//!
//! let cmd = controller.step(Instant::now()).unwrap();
//! assert!(cmd.linear > 0.0);
//! ```

use crate::algorithms::goal_intake::{GoalIntake, GoalResponse};
use crate::algorithms::pose_tracker::PoseTracker;
use crate::algorithms::robot_state::{Axis, MotionPhase, RobotState};
use crate::algorithms::rotation::{self, RotationDecision};
use crate::algorithms::safety_monitor::{BumperResponse, SafetyMonitor};
use crate::algorithms::translation::{self, TranslationDecision};
use crate::config::MotionConfig;
use crate::messages::{BumperEvent, CmdVel, DisplacementGoal, Odometry, Point2};
use relnav_core::{NavResult, SettleTimer};
use std::time::Instant;

/// How the last goal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    Arrived,
    Aborted,
}

/// Work left to finish once the settle timer elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingStep {
    Translate(Axis),
    Rotate,
}

// One pass per phase is enough to reach a command or Idle
const MAX_TRANSITIONS_PER_STEP: usize = 5;

#[derive(Debug)]
pub struct MotionController {
    config: MotionConfig,
    state: RobotState,
    phase: MotionPhase,
    intake: GoalIntake,
    tracker: PoseTracker,
    safety: SafetyMonitor,
    timer: SettleTimer,
    pending: Option<PendingStep>,
    outcome: Option<GoalOutcome>,
    commands_issued: u64,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            intake: GoalIntake::new(config.goal_tolerance),
            tracker: PoseTracker::new(config.heading_log_interval),
            config,
            state: RobotState::new(),
            phase: MotionPhase::Idle,
            safety: SafetyMonitor::new(),
            timer: SettleTimer::new(),
            pending: None,
            outcome: None,
            commands_issued: 0,
        })
    }

    /// Offer a displacement goal; see [`GoalIntake::submit`]
    ///
    /// The goal is relative to the pose of the last odometry sample.
    pub fn submit_goal(&mut self, goal: &DisplacementGoal) -> GoalResponse {
        let response = self.intake.submit(&mut self.state, goal);
        if response.is_accepted() {
            PoseTracker::refresh_heading(&mut self.state);
            self.timer.cancel();
            self.pending = None;
            self.outcome = None;
            self.phase = if self.state.started_x_negative {
                MotionPhase::Orienting180
            } else {
                MotionPhase::TranslatingX
            };
            self.enter_phase(self.phase);
        }
        response
    }

    /// Full pose sample: position and yaw
    pub fn on_pose(&mut self, odom: &Odometry) -> NavResult<()> {
        self.tracker
            .record_odometry(&mut self.state, &odom.position)?;
        self.tracker
            .update_heading(&mut self.state, odom.yaw())?;
        Ok(())
    }

    /// Position-only odometry sample
    pub fn on_position(&mut self, position: &Point2) -> NavResult<()> {
        self.tracker.record_odometry(&mut self.state, position)
    }

    /// Collision input; returns a stop command when an active goal was aborted
    pub fn on_bumper(&mut self, event: &BumperEvent) -> Option<CmdVel> {
        let remaining = (self.state.remaining_x, self.state.remaining_y);
        match self.safety.on_bumper(&mut self.state, event) {
            BumperResponse::Aborted => {
                log::warn!(
                    "Goal aborted in {} with x={:.3} y={:.3} remaining",
                    self.phase,
                    remaining.0,
                    remaining.1
                );
                self.timer.cancel();
                self.pending = None;
                self.phase = MotionPhase::Idle;
                self.outcome = Some(GoalOutcome::Aborted);
                Some(CmdVel::zero())
            }
            BumperResponse::Clear | BumperResponse::ContactWhileIdle => None,
        }
    }

    /// Advance the state machine; returns the command to publish, if any
    pub fn step(&mut self, now: Instant) -> Option<CmdVel> {
        if !self.state.goal_active {
            self.timer.cancel();
            self.pending = None;
            self.phase = MotionPhase::Idle;
            return None;
        }

        if let Some(pending) = self.pending {
            if !self.timer.take_if_elapsed(now) {
                return None;
            }
            self.pending = None;
            if let PendingStep::Translate(axis) = pending {
                translation::read_back(&mut self.state, axis);
            }
        }

        for _ in 0..MAX_TRANSITIONS_PER_STEP {
            match self.phase {
                MotionPhase::Idle => return None,
                MotionPhase::Orienting180 => {
                    let decision = rotation::turn_180(&mut self.state, &self.config);
                    if let Some(cmd) = self.issue_rotation(decision, now) {
                        return Some(cmd);
                    }
                    self.advance_to(MotionPhase::TranslatingX);
                }
                MotionPhase::TranslatingX => {
                    let decision = translation::advance(&self.state, Axis::X, &self.config);
                    if let Some(cmd) = self.issue_translation(Axis::X, decision, now) {
                        return Some(cmd);
                    }
                    self.advance_to(MotionPhase::OrientingY);
                }
                MotionPhase::OrientingY => {
                    let decision = rotation::face_destination(&mut self.state, &self.config);
                    if let Some(cmd) = self.issue_rotation(decision, now) {
                        return Some(cmd);
                    }
                    self.advance_to(MotionPhase::TranslatingY);
                }
                MotionPhase::TranslatingY => {
                    let decision = translation::advance(&self.state, Axis::Y, &self.config);
                    if let Some(cmd) = self.issue_translation(Axis::Y, decision, now) {
                        return Some(cmd);
                    }
                    return Some(self.finish_goal());
                }
            }
        }

        log::error!("Phase transitions did not settle in {}", self.phase);
        None
    }

    /// Forward step used to calibrate `movement_multiple`
    ///
    /// Held for one movement interval, the robot should travel
    /// `calibration_velocity / movement_multiple`.
    pub fn calibration_command(&self) -> CmdVel {
        CmdVel::forward(self.config.calibration_velocity)
    }

    fn issue_rotation(&mut self, decision: RotationDecision, now: Instant) -> Option<CmdVel> {
        let (cmd, settle) = decision.command(&self.config)?;
        if let RotationDecision::FineCorrection { angular } = decision {
            log::debug!("Fine heading correction at {:.3} rad/s", angular);
        }
        self.timer.arm(now, settle);
        self.pending = Some(PendingStep::Rotate);
        self.commands_issued += 1;
        Some(cmd)
    }

    fn issue_translation(
        &mut self,
        axis: Axis,
        decision: TranslationDecision,
        now: Instant,
    ) -> Option<CmdVel> {
        let cmd = decision.command()?;
        self.timer.arm(now, self.config.movement_interval());
        self.pending = Some(PendingStep::Translate(axis));
        self.commands_issued += 1;
        Some(cmd)
    }

    fn advance_to(&mut self, next: MotionPhase) {
        log::info!("Phase {} -> {}", self.phase, next);
        self.phase = next;
        self.enter_phase(next);
    }

    fn enter_phase(&mut self, phase: MotionPhase) {
        if matches!(phase, MotionPhase::TranslatingX | MotionPhase::TranslatingY) {
            self.state.rebase_odometry();
        }
    }

    fn finish_goal(&mut self) -> CmdVel {
        log::info!(
            "Arrived: x={:.3} y={:.3} left within tolerance {:.3}",
            self.state.remaining_x,
            self.state.remaining_y,
            self.state.tolerance
        );
        self.state.reset_to_idle();
        self.phase = MotionPhase::Idle;
        self.outcome = Some(GoalOutcome::Arrived);
        CmdVel::zero()
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Outcome of the most recent goal; cleared when a new goal is accepted
    pub fn outcome(&self) -> Option<GoalOutcome> {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        self.state.goal_active
    }

    /// True while a command is waiting out its settle interval
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    pub fn commands_issued(&self) -> u64 {
        self.commands_issued
    }

    pub fn safety(&self) -> &SafetyMonitor {
        &self.safety
    }
}
