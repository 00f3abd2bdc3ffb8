//! Scheduling primitives
//!
//! Control steps that must wait for a command to take effect arm a
//! [`SettleTimer`] and return immediately; the owner resumes the step on a
//! later tick once the deadline has passed. No tick ever sleeps.

pub mod timer;

pub use timer::SettleTimer;
