//! Word-level SPI link to the sensor.
//!
//! Every exchange with the sensor is full duplex: while a 16-bit word of frame data
//! is clocked in, two bytes are clocked out. The first outbound byte is a sync byte
//! and the second optionally carries one byte of a queued command:
//!
//! | Outbound              | Meaning                         |
//! |-----------------------|---------------------------------|
//! | `[0x5a, 0x00]`        | idle, nothing to send           |
//! | `[0x5b, command byte]`| one byte of a queued command    |
//!
//! A single-byte exchange ([`resync`](PixyLink::resync)) shifts the word alignment
//! by one byte when the frame synchronizer detects the stream is out of phase.
//!
//! The link owns its transmit and receive scratch buffers. They are reused for
//! every exchange and never handed out.

use crate::consts::{DATA_SYNC_BYTE, IDLE_SYNC_BYTE};
use crate::queue::CommandQueue;
use embedded_hal::spi::SpiDevice;

/// Duplex word exchange over an [`SpiDevice`], with an outbound command queue.
///
/// The SPI device must be configured by the platform for MSB-first transfers,
/// sampling on the rising clock edge.
#[derive(Debug)]
pub struct PixyLink<SPI> {
    spi: SPI,
    queue: CommandQueue,
    tx_buf: [u8; 2],
    rx_buf: [u8; 2],
}

impl<SPI> PixyLink<SPI>
where
    SPI: SpiDevice,
{
    /// Wraps an SPI device with an empty command queue.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            queue: CommandQueue::new(),
            tx_buf: [0; 2],
            rx_buf: [0; 2],
        }
    }

    /// Exchanges one word with the sensor.
    ///
    /// Sends the next queued command byte if there is one, otherwise an idle
    /// sync byte. Returns the received word, first byte high.
    ///
    /// The command byte leaves the queue before the transfer starts. If the
    /// transfer fails that byte is lost, and the sensor sees a truncated
    /// command. Transport faults are not retried at this layer.
    pub fn transact(&mut self) -> Result<u16, SPI::Error> {
        self.tx_buf = match self.queue.dequeue() {
            Ok(byte) => [DATA_SYNC_BYTE, byte],
            Err(_) => [IDLE_SYNC_BYTE, 0],
        };
        self.spi.transfer(&mut self.rx_buf, &self.tx_buf)?;
        Ok(u16::from_be_bytes(self.rx_buf))
    }

    /// Exchanges a single byte to shift the word alignment by one.
    pub fn resync(&mut self) -> Result<(), SPI::Error> {
        self.tx_buf[0] = IDLE_SYNC_BYTE;
        self.spi.transfer(&mut self.rx_buf[..1], &self.tx_buf[..1])
    }

    /// Queues a command for transmission.
    ///
    /// The command is queued whole or not at all. Returns `false` if the
    /// queue does not have room for it, in which case nothing is queued.
    pub fn send(&mut self, command: &[u8]) -> bool {
        self.queue.enqueue_command(command)
    }

    /// The outbound command queue.
    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// Releases the underlying SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}
