//! Constants used across the Pixy SPI protocol implementation.
//!
//! This module defines the wire-level sync bytes and sync words, the command
//! opcodes, and the sizing limits shared by the queue, link and decoder.
//!
//! ## Key Concepts
//!
//! - **Sync bytes**: The first byte of every outbound 2-byte exchange. It tells the
//!   sensor whether the second byte carries command data.
//! - **Sync words**: Reserved 16-bit values in the inbound stream that mark frame
//!   and block boundaries, or signal that the stream is one byte out of phase.
//! - **Opcodes**: The second byte of every outbound command, after a `0x00` lead-in.
//!
//! All inbound words are big-endian: the first byte clocked in is the high byte.

/// Sync byte sent when no outbound command byte is queued.
///
/// The second byte of the exchange is `0x00` and is ignored by the sensor.
pub const IDLE_SYNC_BYTE: u8 = 0x5a;

/// Sync byte sent when the second byte of the exchange is a queued command byte.
pub const DATA_SYNC_BYTE: u8 = 0x5b;

/// Start marker for a frame or a normal (signature) block.
///
/// Two of these back to back mark the start of a new frame.
pub const START_WORD: u16 = 0xaa55;

/// Start marker for a color-code block, which carries an extra `angle` word.
pub const START_WORD_CC: u16 = 0xaa56;

/// The start marker seen with its bytes swapped.
///
/// Receiving this means the link is one byte out of phase and must be shifted
/// with a single-byte exchange.
pub const OUT_OF_SYNC_WORD: u16 = 0x55aa;

/// Opcode for the pan/tilt servo position command.
pub const SERVO_SYNC: u8 = 0xff;

/// Opcode for the camera exposure (brightness) command.
pub const EXPOSURE_SYNC: u8 = 0xfe;

/// Opcode for the RGB LED color command.
pub const LED_SYNC: u8 = 0xfd;

/// Capacity (in bytes) of the outbound command queue.
pub const QUEUE_CAPACITY: usize = 64;

/// Highest accepted servo position.
pub const MAX_SERVO_POSITION: u16 = 1000;

/// Highest accepted exposure value, and highest accepted LED channel value.
pub const MAX_BYTE_PARAMETER: u16 = u8::MAX as u16;

/// Maximum number of objects returned from a single poll without the `std` feature.
///
/// See [`Objects`](crate::driver::Objects).
pub const MAX_OBJECTS: usize = 32;
