//! Error types for the Pixy driver.
//!
//! Only two things can go wrong at the driver level: a command parameter is out
//! of range, or the SPI transport reports a failure. Checksum mismatches and
//! full command queues are not errors; they are reported through
//! [`DecodeStats`](crate::driver::DecodeStats) and return values instead.

use thiserror::Error;

/// Returned by [`ByteQueue::dequeue`](crate::queue::ByteQueue::dequeue) when there
/// is nothing left to remove.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
#[error("cannot dequeue from an empty queue")]
pub struct QueueEmpty;

/// A command parameter outside its accepted range.
///
/// Raised before anything is queued, so a rejected command never reaches the wire.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
#[error("{name} = {value} is outside 0..={max}")]
pub struct InvalidArgument {
    /// Name of the offending parameter (e.g. `"s1"`, `"exposure"`, `"red"`).
    pub name: &'static str,
    /// The rejected value.
    pub value: u16,
    /// Largest accepted value.
    pub max: u16,
}

impl InvalidArgument {
    /// Checks `value` against `0..=max`.
    pub(crate) fn check(name: &'static str, value: u16, max: u16) -> Result<u16, Self> {
        if value > max {
            Err(Self { name, value, max })
        } else {
            Ok(value)
        }
    }
}

/// Errors surfaced by the driver, generic over the SPI error type `E`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Error<E> {
    /// The SPI transport failed during an exchange.
    #[error("SPI transfer failed: {0:?}")]
    Spi(E),
    /// A command parameter was out of range.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}
