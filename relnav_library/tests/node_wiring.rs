mod common;

use common::{SimBase, MAX_TICKS, TICK};
use relnav_core::{Node, NodeInfo, NodeState};
use relnav_library::prelude::*;
use std::time::Instant;

#[test]
fn test_node_drives_sim_over_topics() {
    let mut nav = RelativeNavNode::new(MotionConfig::default()).unwrap();
    let mut info = NodeInfo::new(nav.name().to_string(), false);
    nav.init(&mut info).unwrap();
    assert_eq!(info.state(), &NodeState::Running);

    let goals = nav.goal_topic();
    let odom = nav.odom_topic();
    let cmds = nav.cmd_topic();
    let mut sim = SimBase::new(nav.controller().config());

    goals.send(DisplacementGoal::new(0.6, -0.3), None).unwrap();
    odom.send(sim.odometry(), None).unwrap();

    let mut now = Instant::now();
    let mut published: u64 = 0;
    for _ in 0..MAX_TICKS {
        nav.tick_at(now, Some(&mut info));
        while let Some(cmd) = cmds.recv(None) {
            published += 1;
            odom.send(sim.apply(&cmd), None).unwrap();
        }
        if nav.controller().outcome().is_some() {
            break;
        }
        now += TICK;
    }

    assert_eq!(nav.controller().outcome(), Some(GoalOutcome::Arrived));
    assert!((sim.x - 0.6).abs() <= 0.1);
    assert!((sim.y + 0.3).abs() <= 0.1);
    assert_eq!(info.published_topics().get("cmd_vel"), Some(&published));
    assert_eq!(info.metrics().errors_count, 0);

    nav.shutdown(&mut info).unwrap();
    assert!(cmds.recv(None).unwrap().is_stop());
    assert_eq!(info.state(), &NodeState::Stopped);
}

#[test]
fn test_second_goal_rejected_while_driving() {
    let mut nav = RelativeNavNode::new(MotionConfig::default()).unwrap();
    let goals = nav.goal_topic();
    let now = Instant::now();

    goals.send(DisplacementGoal::new(1.0, 0.0), None).unwrap();
    nav.tick_at(now, None);
    goals.send(DisplacementGoal::new(0.0, 1.0), None).unwrap();
    nav.tick_at(now + TICK, None);

    assert_eq!(
        nav.last_response(),
        Some(GoalResponse::Rejected(RejectReason::Busy))
    );
    assert_eq!(nav.controller().phase(), MotionPhase::TranslatingX);
    assert!((nav.controller().state().remaining_x - 1.0).abs() < 1e-12);
}

#[test]
fn test_custom_topics() {
    let nav = RelativeNavNode::new_with_topics(
        MotionConfig::default(),
        "robot1/goal",
        "robot1/odom",
        "robot1/position",
        "robot1/bumper",
        "robot1/cmd_vel",
    )
    .unwrap();
    assert_eq!(nav.goal_topic().get_topic_name(), "robot1/goal");
    assert_eq!(nav.cmd_topic().get_topic_name(), "robot1/cmd_vel");
}
