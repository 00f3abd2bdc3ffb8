use crate::algorithms::goal_intake::{GoalResponse, IgnoreReason, RejectReason};
use crate::algorithms::motion_sequencer::MotionController;
use crate::config::MotionConfig;
use crate::{BumperEvent, CmdVel, DisplacementGoal, Odometry, Point2};
use relnav_core::{Hub, NavError, NavResult, Node, NodeInfo, NodeInfoExt, NodeState};
use std::time::Instant;

/// Relative Navigation Node - drives the base to a commanded displacement
///
/// Subscribes to displacement goals, odometry and bumper events; publishes
/// one `CmdVel` per control step. Bumper events are drained first on every
/// tick so a contact preempts whatever step was in progress. Pose samples are
/// drained before goals so a new goal is framed on the freshest pose.
pub struct RelativeNavNode {
    // Subscribers
    goal_subscriber: Hub<DisplacementGoal>,
    pose_subscriber: Hub<Odometry>,
    position_subscriber: Hub<Point2>,
    bumper_subscriber: Hub<BumperEvent>,

    // Publishers
    cmd_publisher: Hub<CmdVel>,

    controller: MotionController,
    last_response: Option<GoalResponse>,
}

impl RelativeNavNode {
    /// Create a navigation node on the default topics
    pub fn new(config: MotionConfig) -> NavResult<Self> {
        Self::new_with_topics(config, "nav_goal", "odom", "odom_position", "bumper", "cmd_vel")
    }

    /// Create a navigation node with custom topics
    pub fn new_with_topics(
        config: MotionConfig,
        goal_topic: &str,
        odom_topic: &str,
        position_topic: &str,
        bumper_topic: &str,
        cmd_topic: &str,
    ) -> NavResult<Self> {
        Ok(Self {
            goal_subscriber: Hub::new(goal_topic)?,
            pose_subscriber: Hub::new(odom_topic)?,
            position_subscriber: Hub::new(position_topic)?,
            bumper_subscriber: Hub::new(bumper_topic)?,
            cmd_publisher: Hub::new(cmd_topic)?,
            controller: MotionController::new(config)?,
            last_response: None,
        })
    }

    pub fn goal_topic(&self) -> Hub<DisplacementGoal> {
        self.goal_subscriber.clone()
    }

    pub fn odom_topic(&self) -> Hub<Odometry> {
        self.pose_subscriber.clone()
    }

    pub fn position_topic(&self) -> Hub<Point2> {
        self.position_subscriber.clone()
    }

    pub fn bumper_topic(&self) -> Hub<BumperEvent> {
        self.bumper_subscriber.clone()
    }

    pub fn cmd_topic(&self) -> Hub<CmdVel> {
        self.cmd_publisher.clone()
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    /// Response to the most recent goal message
    pub fn last_response(&self) -> Option<GoalResponse> {
        self.last_response
    }

    /// Publish the forward calibration command
    ///
    /// Hold it for one movement interval and measure the distance covered to
    /// tune `movement_multiple`.
    pub fn publish_calibration_step(&mut self, mut ctx: Option<&mut NodeInfo>) -> NavResult<()> {
        let cmd = self.controller.calibration_command();
        ctx.log_info(&format!(
            "Calibration step: v={:.3} for {} ms",
            cmd.linear,
            self.controller.config().movement_interval_ms
        ));
        self.publish(cmd, ctx)
    }

    /// One control cycle at an explicit time
    pub fn tick_at(&mut self, now: Instant, mut ctx: Option<&mut NodeInfo>) {
        if let Some(info) = ctx.as_deref_mut() {
            info.record_tick();
        }

        while let Some(event) = self.bumper_subscriber.recv(ctx.as_deref_mut()) {
            if let Some(stop) = self.controller.on_bumper(&event) {
                ctx.log_warning(&format!(
                    "Bumper contact ({:#04x}); goal aborted",
                    event.bump_indicator
                ));
                if let Err(e) = self.publish(stop, ctx.as_deref_mut()) {
                    ctx.log_error(&e.to_string());
                }
            }
        }

        while let Some(odom) = self.pose_subscriber.recv(ctx.as_deref_mut()) {
            if let Err(e) = self.controller.on_pose(&odom) {
                ctx.log_warning(&e.to_string());
            }
        }

        while let Some(position) = self.position_subscriber.recv(ctx.as_deref_mut()) {
            if let Err(e) = self.controller.on_position(&position) {
                ctx.log_warning(&e.to_string());
            }
        }

        while let Some(goal) = self.goal_subscriber.recv(ctx.as_deref_mut()) {
            let response = self.controller.submit_goal(&goal);
            match response {
                GoalResponse::Accepted => {
                    ctx.log_info(&format!("Executing goal x={:.3} y={:.3}", goal.x, goal.y))
                }
                GoalResponse::Rejected(RejectReason::Busy) => {
                    ctx.log_warning("Goal rejected: controller busy")
                }
                GoalResponse::Rejected(RejectReason::NonFinite) => {
                    ctx.log_warning("Goal rejected: non-finite displacement")
                }
                GoalResponse::Ignored(IgnoreReason::ZeroDisplacement) => {
                    ctx.log_debug("Zero displacement goal ignored")
                }
            }
            self.last_response = Some(response);
        }

        if let Some(cmd) = self.controller.step(now) {
            if ctx.is_attached() {
                ctx.log_debug(&format!(
                    "{} step: v={:.3} w={:.3}",
                    self.controller.phase(),
                    cmd.linear,
                    cmd.angular
                ));
            }
            if let Err(e) = self.publish(cmd, ctx.as_deref_mut()) {
                ctx.log_error(&e.to_string());
            }
        }
    }

    fn publish(&self, cmd: CmdVel, ctx: Option<&mut NodeInfo>) -> NavResult<()> {
        self.cmd_publisher.send(cmd, ctx).map_err(|_| {
            NavError::communication(format!(
                "Failed to publish on '{}'",
                self.cmd_publisher.get_topic_name()
            ))
        })
    }
}

impl Node for RelativeNavNode {
    fn name(&self) -> &'static str {
        "RelativeNavNode"
    }

    fn init(&mut self, ctx: &mut NodeInfo) -> NavResult<()> {
        ctx.set_state(NodeState::Initializing);
        let config = self.controller.config();
        ctx.log_info(&format!(
            "Relative navigation ready: increment={:.3} tolerance={:.3} angle_tolerance={:.1}°",
            config.increment_amount,
            config.goal_tolerance,
            config.angle_tolerance.to_degrees()
        ));
        ctx.set_state(NodeState::Running);
        Ok(())
    }

    fn tick(&mut self, ctx: Option<&mut NodeInfo>) {
        self.tick_at(Instant::now(), ctx);
    }

    fn shutdown(&mut self, ctx: &mut NodeInfo) -> NavResult<()> {
        ctx.set_state(NodeState::Stopping);
        ctx.log_info("Stopping base");
        if let Err(e) = self.publish(CmdVel::zero(), Some(&mut *ctx)) {
            ctx.transition_to_error(e.to_string());
            return Err(e);
        }
        ctx.set_state(NodeState::Stopped);
        Ok(())
    }
}
