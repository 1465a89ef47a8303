//! Pixy vision sensor driver.
//!
//! This module provides the [`Pixy`] struct, which polls a Pixy-style vision sensor
//! over SPI for detected objects while feeding queued configuration commands
//! (servo positions, exposure, LED color) to it over the same exchanges.
//!
//! ## Frame Layout
//!
//! Each frame is a sequence of 16-bit words:
//!
//! ```text
//! aa55 aa55 | checksum sig x y w h | aa55 | checksum sig x y w h | ... | 0000
//!  frame      block                  next    block                      end
//! ```
//!
//! A block announced with `aa56` instead of `aa55` is a color-code block and
//! carries an extra `angle` word after `h`. The checksum is the sum of the data
//! words, mod 2^16. Blocks that fail it are dropped.
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
//! use pixy_spi::driver::Pixy;
//!
//! # let idle = |word: u16| [
//! #     SpiTransaction::transaction_start(),
//! #     SpiTransaction::transfer(vec![0x5a, 0x00], word.to_be_bytes().to_vec()),
//! #     SpiTransaction::transaction_end(),
//! # ];
//! # let spi = SpiMock::new(&[idle(0), idle(0)].concat());
//! let mut pixy = Pixy::new(spi);
//!
//! loop {
//!     let objects = pixy.get_detected_objects().unwrap_or_default();
//!     for object in objects.iter() {
//!         let _ = (object.signature(), object.x(), object.y());
//!     }
//!     # break; // For testing purposes
//! }
//! # pixy.release().done();
//! ```
//!
//! ## Design Notes
//!
//! The driver is single-threaded and blocking. Polling and commands share the
//! link's queue and scratch buffers, so if commands are issued from another
//! context (e.g. an interrupt) both paths must go through one lock. See
//! [`crate::poll`] for ready-made helpers.

#[cfg(not(feature = "std"))]
use crate::consts::MAX_OBJECTS;

use crate::command::{encode_exposure, encode_led, encode_servos};
use crate::error::{Error, InvalidArgument};
use crate::link::PixyLink;
use crate::object::{BlockType, DetectedObject};
use crate::sync::find_frame_start;
use embedded_hal::spi::SpiDevice;

#[cfg(not(feature = "std"))]
use heapless::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// The objects returned by one poll.
#[cfg(not(feature = "std"))]
pub type Objects = Vec<DetectedObject, MAX_OBJECTS>;

/// The objects returned by one poll.
#[cfg(feature = "std")]
pub type Objects = Vec<DetectedObject>;

/// Decoder state carried from one poll to the next.
///
/// A poll that runs into the next frame's start marker has already consumed it.
/// The context records that, along with the block type it announced, so the
/// following poll can read that frame without searching for its start again.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct FrameContext {
    /// Shape of the next block to be read.
    pub block_type: BlockType,
    /// Whether the next frame's start marker has already been read.
    pub start_consumed: bool,
}

/// Running counters kept by the driver. All counters wrap.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct DecodeStats {
    /// Frames read (polls that found data).
    pub frames: u16,
    /// Blocks whose checksum matched.
    pub accepted: u16,
    /// Blocks dropped for a checksum mismatch.
    pub rejected: u16,
    /// Commands dropped because the queue had no room for them.
    pub dropped_commands: u16,
}

/// Driver for a Pixy-style vision sensor on an SPI bus.
///
/// ## Type Parameters
///
/// - `SPI`: An [`embedded_hal::spi::SpiDevice`] configured for MSB-first transfers
///   sampled on the rising clock edge.
///
/// ## Notes
///
/// - Call [`get_detected_objects()`](Pixy::get_detected_objects) once per control
///   loop cycle.
/// - Commands are only queued by the `set_*` methods. Their bytes go out one per
///   exchange during subsequent polls.
#[derive(Debug)]
pub struct Pixy<SPI> {
    link: PixyLink<SPI>,
    context: FrameContext,
    /// Frame, block and command counters.
    pub stats: DecodeStats,
}

impl<SPI> Pixy<SPI>
where
    SPI: SpiDevice,
{
    /// Creates a driver with an empty command queue and a fresh [`FrameContext`].
    pub fn new(spi: SPI) -> Self {
        Self {
            link: PixyLink::new(spi),
            context: FrameContext::default(),
            stats: DecodeStats::default(),
        }
    }

    /// The decoder state carried between polls.
    pub fn context(&self) -> FrameContext {
        self.context
    }

    /// Number of command bytes still waiting to be sent.
    pub fn pending_command_bytes(&self) -> usize {
        self.link.queue().len()
    }

    /// Exchanges one raw word with the sensor, sending a queued command byte if any.
    pub fn transact(&mut self) -> Result<u16, Error<SPI::Error>> {
        self.link.transact().map_err(Error::Spi)
    }

    /// Queues a raw command, all or nothing.
    ///
    /// Returns `false` if the queue lacks room; the command is then dropped
    /// and counted in [`DecodeStats::dropped_commands`].
    pub fn send(&mut self, command: &[u8]) -> bool {
        let queued = self.link.send(command);
        if !queued {
            self.stats.dropped_commands = self.stats.dropped_commands.wrapping_add(1);
            warn!(
                "command queue full, dropping {}-byte command",
                command.len()
            );
        }
        queued
    }

    /// Reads the next frame from the sensor.
    ///
    /// Returns the checksum-valid objects of one frame, in the order they were
    /// sent. An empty sequence means either no data this cycle or a frame with
    /// no valid blocks.
    ///
    /// # Behavior
    /// - If the previous poll already read this frame's start marker, reading
    ///   begins at the first block. Otherwise the stream is searched for a frame
    ///   start, and if the sensor reports no data the poll ends there without
    ///   touching the [`FrameContext`].
    /// - Blocks are read until a zero checksum word, a word after a block that is
    ///   not a start marker, or the next frame's start marker. The last case is
    ///   remembered in the context.
    pub fn get_detected_objects(&mut self) -> Result<Objects, Error<SPI::Error>> {
        self.read_frame().map_err(Error::Spi)
    }

    /// Moves the pan and tilt servos. Both positions must lie in `0..=1000`.
    ///
    /// Returns whether the command was queued; see [`send`](Pixy::send).
    pub fn set_servos(&mut self, s1: u16, s2: u16) -> Result<bool, InvalidArgument> {
        let command = encode_servos(s1, s2)?;
        Ok(self.send(&command))
    }

    /// Sets the camera exposure. `exposure` must lie in `0..=255`.
    ///
    /// Returns whether the command was queued; see [`send`](Pixy::send).
    pub fn set_exposure(&mut self, exposure: u16) -> Result<bool, InvalidArgument> {
        let command = encode_exposure(exposure)?;
        Ok(self.send(&command))
    }

    /// Sets the RGB LED color. Each channel must lie in `0..=255`.
    ///
    /// Returns whether the command was queued; see [`send`](Pixy::send).
    pub fn set_led(&mut self, red: u16, green: u16, blue: u16) -> Result<bool, InvalidArgument> {
        let command = encode_led(red, green, blue)?;
        Ok(self.send(&command))
    }

    /// Releases the underlying SPI device. Queued command bytes are discarded.
    pub fn release(self) -> SPI {
        self.link.release()
    }

    fn read_frame(&mut self) -> Result<Objects, SPI::Error> {
        let mut objects = Objects::new();

        if self.context.start_consumed {
            self.context.start_consumed = false;
        } else {
            match find_frame_start(&mut self.link)? {
                Some(block_type) => {
                    trace!("frame start found, {:?} block", block_type);
                    self.context.block_type = block_type;
                }
                None => {
                    trace!("no data available");
                    return Ok(objects);
                }
            }
        }
        self.stats.frames = self.stats.frames.wrapping_add(1);

        loop {
            let checksum = self.link.transact()?;
            if let Some(block_type) = BlockType::from_start_word(checksum) {
                // Start of the next frame
                self.context = FrameContext {
                    block_type,
                    start_consumed: true,
                };
                return Ok(objects);
            }
            if checksum == 0 {
                return Ok(objects);
            }

            let object = self.read_block()?;
            if object.checksum() == checksum {
                self.stats.accepted = self.stats.accepted.wrapping_add(1);
                store(&mut objects, object);
            } else {
                self.stats.rejected = self.stats.rejected.wrapping_add(1);
                debug!(
                    "checksum mismatch: expected {:#x}, got {:#x}",
                    checksum,
                    object.checksum()
                );
            }

            match BlockType::from_start_word(self.link.transact()?) {
                Some(block_type) => self.context.block_type = block_type,
                None => return Ok(objects),
            }
        }
    }

    fn read_block(&mut self) -> Result<DetectedObject, SPI::Error> {
        let mut words = [0u16; 6];
        for word in words.iter_mut().take(self.context.block_type.data_words()) {
            *word = self.link.transact()?;
        }
        let [signature, x, y, width, height, angle] = words;
        Ok(DetectedObject::new(signature, x, y, width, height, angle))
    }
}

#[cfg(feature = "std")]
fn store(objects: &mut Objects, object: DetectedObject) {
    objects.push(object);
}

#[cfg(not(feature = "std"))]
fn store(objects: &mut Objects, object: DetectedObject) {
    if objects.push(object).is_err() {
        warn!(
            "object sequence full, dropping object with signature {}",
            object.signature()
        );
    }
}
