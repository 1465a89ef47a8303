//! Fixed-capacity FIFO byte queue for outbound command bytes.
//!
//! Commands are not sent in one go. Each 2-byte SPI exchange can carry at most one
//! command byte, so commands are parked here and drained one byte per
//! [`transact()`](crate::link::PixyLink::transact) call.
//!
//! The queue never allocates and never grows. [`enqueue_command`](ByteQueue::enqueue_command)
//! is all-or-nothing so a half-queued command can never corrupt the stream.

use crate::consts::QUEUE_CAPACITY;
use crate::error::QueueEmpty;

/// The command queue used by [`PixyLink`](crate::link::PixyLink).
pub type CommandQueue = ByteQueue<QUEUE_CAPACITY>;

/// A ring buffer of `N` bytes.
///
/// `head` points at the oldest byte, `tail` at the next free slot, and `len`
/// counts stored bytes so a full and an empty buffer can be told apart.
#[derive(Debug, Clone)]
pub struct ByteQueue<const N: usize> {
    buf: [u8; N],
    head: usize,
    tail: usize,
    len: usize,
}

impl<const N: usize> ByteQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Appends one byte.
    ///
    /// Returns `false` and leaves the queue untouched if it is full.
    pub fn enqueue(&mut self, byte: u8) -> bool {
        if self.len >= N {
            return false;
        }
        self.buf[self.tail] = byte;
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        true
    }

    /// Removes and returns the oldest byte.
    pub fn dequeue(&mut self) -> Result<u8, QueueEmpty> {
        if self.len == 0 {
            return Err(QueueEmpty);
        }
        let byte = self.buf[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Ok(byte)
    }

    /// Queues every byte of `command`, or none of them.
    ///
    /// # Returns
    /// - `true`: the whole command was queued
    /// - `false`: not enough free space; the queue is unchanged
    pub fn enqueue_command(&mut self, command: &[u8]) -> bool {
        if command.len() > self.free() {
            return false;
        }
        for &byte in command {
            let _ = self.enqueue(byte);
        }
        true
    }

    /// Total number of bytes the queue can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of bytes waiting to be sent.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Number of bytes that can still be queued.
    pub const fn free(&self) -> usize {
        N - self.len
    }

    /// Whether there is nothing waiting to be sent.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = CommandQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 64);
        assert_eq!(queue.free(), 64);
    }

    #[test]
    fn test_fifo_order_across_wraparound() {
        let mut queue: ByteQueue<4> = ByteQueue::new();
        let mut expected = 0u8;
        let mut next = 0u8;

        // Interleave so head and tail wrap several times.
        for round in 0..10 {
            for _ in 0..(round % 4 + 1) {
                assert!(queue.enqueue(next));
                next += 1;
            }
            while !queue.is_empty() {
                assert_eq!(queue.dequeue(), Ok(expected));
                expected += 1;
            }
        }
        assert_eq!(expected, next);
    }

    #[test]
    fn test_enqueue_on_full_returns_false() {
        let mut queue: ByteQueue<3> = ByteQueue::new();
        assert!(queue.enqueue(1));
        assert!(queue.enqueue(2));
        assert!(queue.enqueue(3));
        assert!(!queue.enqueue(4));
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
    }

    #[test]
    fn test_dequeue_on_empty_fails() {
        let mut queue: ByteQueue<2> = ByteQueue::new();
        assert_eq!(queue.dequeue(), Err(QueueEmpty));

        assert!(queue.enqueue(7));
        assert_eq!(queue.dequeue(), Ok(7));
        assert_eq!(queue.dequeue(), Err(QueueEmpty));
    }

    #[test]
    fn test_enqueue_command_is_all_or_nothing() {
        let mut queue: ByteQueue<8> = ByteQueue::new();
        assert!(queue.enqueue_command(&[1, 2, 3]));
        assert_eq!(queue.free(), 5);

        assert!(!queue.enqueue_command(&[9, 9, 9, 9, 9, 9]));
        assert_eq!(queue.len(), 3);

        // Exactly filling the remaining space is allowed.
        assert!(queue.enqueue_command(&[4, 5, 6, 7, 8]));
        assert_eq!(queue.free(), 0);

        for expected in 1..=8 {
            assert_eq!(queue.dequeue(), Ok(expected));
        }
    }
}
