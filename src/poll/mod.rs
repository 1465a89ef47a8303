//! Scheduling helpers for the Pixy driver.
//!
//! The driver itself has no notion of time; it is meant to be polled once per
//! control loop cycle. This module offers two ways to do that:
//!
//! - `run_poll_loop` (feature `delay-loop`): a blocking loop that polls, hands the
//!   objects to a callback, and sleeps with an `embedded_hal::delay::DelayNs`.
//! - `global_pixy_*` and `init_pixy!()` (feature `global-driver`): a driver
//!   singleton behind a `critical_section::Mutex`, for firmware that polls from
//!   one context (e.g. a timer interrupt) and sends commands from another.
//!
//! The sensor produces a frame every 20 ms, so polling faster than
//! [`FRAME_PERIOD_US`] only returns empty sequences in between.

#[cfg(feature = "delay-loop")]
mod delay;
#[cfg_attr(feature = "delay-loop", allow(unused_imports))]
#[cfg(feature = "delay-loop")]
pub use delay::*;

#[cfg(feature = "global-driver")]
mod shared;
#[cfg_attr(feature = "global-driver", allow(unused_imports))]
#[cfg(feature = "global-driver")]
pub use shared::*;

#[cfg(feature = "global-driver")]
mod macros;

/// Frames per second produced by the sensor.
pub const FRAMES_PER_SECOND: u32 = 50;

/// Microseconds between two frames.
pub const FRAME_PERIOD_US: u32 = 1_000_000 / FRAMES_PER_SECOND;
