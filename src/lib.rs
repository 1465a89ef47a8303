//! # pixy-spi
//!
//! A portable, no_std Rust driver for Pixy-style vision sensors on an SPI bus.
//!
//! The sensor streams object-detection frames as 16-bit words while accepting
//! configuration commands (servo positions, exposure, LED color) on the same
//! full-duplex exchanges. This crate handles both directions:
//!
//! - `embedded-hal` [`SpiDevice`](embedded_hal::spi::SpiDevice) for the transport
//! - frame synchronization, including recovery when the stream slips by one byte
//! - per-block checksum validation
//! - a fixed-size, all-or-nothing command queue multiplexed onto the poll exchanges
//!
//! ## Crate features
//! | Feature                   | Description |
//! |---------------------------|-------------|
//! | `std`                     | Disables `#![no_std]` support and replaces `heapless::Vec`s with `std::vec::Vec`s |
//! | `delay-loop`              | Blocking poll loop driven by `embedded_hal::delay::DelayNs` |
//! | `global-driver` (default) | Driver singleton helpers using `critical_section` |
//! | `defmt-0-3`               | Uses `defmt` logging |
//! | `log`                     | Uses `log` logging |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pixy_spi::driver::Pixy;
//!
//! let mut pixy = Pixy::new(spi);
//! pixy.set_led(0, 255, 0)?;
//! loop {
//!     for object in pixy.get_detected_objects()?.iter() {
//!         // steer towards object.x(), object.y()
//!     }
//!     delay.delay_ms(20);
//! }
//! ```
//!
//! Or, use `run_poll_loop()` with a `DelayNs` implementation:
//!
//! ```rust,ignore
//! pixy_spi::poll::run_poll_loop(&mut pixy, &mut delay, pixy_spi::poll::FRAME_PERIOD_US, |_, objects| Ok(()));
//! ```
//!
//! ## Integration Notes
//!
//! - The SPI device must be set up MSB-first, sampling on the rising edge.
//! - Each poll blocks for a variable number of word exchanges: at least 2, plus
//!   about 7 per detected object.
//! - The driver is not thread safe. If commands are queued from a different
//!   context than the poll, guard both with one lock (see [`poll`]).
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "global-driver")]
pub use critical_section;

#[cfg(not(feature = "std"))]
pub use heapless;

#[macro_use]
mod fmt;

pub(crate) mod checksum;
pub mod command;
pub mod consts;
pub mod driver;
pub mod error;
pub mod link;
pub mod object;
pub mod poll;
pub mod queue;
pub mod sync;

#[cfg(test)]
mod test_util;

pub use driver::{DecodeStats, FrameContext, Objects, Pixy};
pub use error::{Error, InvalidArgument, QueueEmpty};
pub use object::{BlockType, DetectedObject};
