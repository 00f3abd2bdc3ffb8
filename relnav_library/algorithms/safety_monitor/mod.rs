//! Safety Monitor
//!
//! Bump-triggered abort. Any nonzero bumper indicator clears the active goal
//! immediately; the sequencer observes the cleared flag on its next step and
//! issues no further motion for that goal.

use crate::algorithms::robot_state::RobotState;
use crate::messages::BumperEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumperResponse {
    /// Indicator was zero
    Clear,
    /// Contact while no goal was active
    ContactWhileIdle,
    /// Active goal dropped
    Aborted,
}

#[derive(Debug, Clone, Default)]
pub struct SafetyMonitor {
    contacts: u64,
    aborts: u64,
}

impl SafetyMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_bumper(&mut self, state: &mut RobotState, event: &BumperEvent) -> BumperResponse {
        if !event.is_contact() {
            return BumperResponse::Clear;
        }
        self.contacts += 1;

        let was_active = state.goal_active;
        state.reset_to_idle();

        if was_active {
            self.aborts += 1;
            log::warn!(
                "Bumper contact ({:#04x}); aborting goal",
                event.bump_indicator
            );
            BumperResponse::Aborted
        } else {
            log::info!(
                "Bumper contact ({:#04x}) with no active goal",
                event.bump_indicator
            );
            BumperResponse::ContactWhileIdle
        }
    }

    pub fn contact_count(&self) -> u64 {
        self.contacts
    }

    pub fn abort_count(&self) -> u64 {
        self.aborts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translating_state() -> RobotState {
        RobotState {
            remaining_x: 0.5,
            remaining_y: 0.5,
            heading_goal: std::f64::consts::FRAC_PI_2,
            goal_active: true,
            tolerance: 0.1,
            ..RobotState::default()
        }
    }

    #[test]
    fn test_contact_aborts_active_goal() {
        let mut monitor = SafetyMonitor::new();
        let mut state = translating_state();

        let response = monitor.on_bumper(&mut state, &BumperEvent::new(1));
        assert_eq!(response, BumperResponse::Aborted);
        assert!(!state.goal_active);
        assert_eq!(state.remaining_x, 0.0);
        assert_eq!(state.remaining_y, 0.0);
        assert_eq!(monitor.abort_count(), 1);
    }

    #[test]
    fn test_zero_indicator_is_ignored() {
        let mut monitor = SafetyMonitor::new();
        let mut state = translating_state();
        let before = state.clone();

        assert_eq!(
            monitor.on_bumper(&mut state, &BumperEvent::new(0)),
            BumperResponse::Clear
        );
        assert_eq!(state, before);
        assert_eq!(monitor.contact_count(), 0);
    }

    #[test]
    fn test_contact_while_idle() {
        let mut monitor = SafetyMonitor::new();
        let mut state = RobotState::new();
        assert_eq!(
            monitor.on_bumper(&mut state, &BumperEvent::new(4)),
            BumperResponse::ContactWhileIdle
        );
        assert_eq!(monitor.contact_count(), 1);
        assert_eq!(monitor.abort_count(), 0);
    }
}
