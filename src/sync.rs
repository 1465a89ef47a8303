//! Frame synchronizer.
//!
//! The sensor streams frames as 16-bit words, but nothing guarantees the link is
//! word aligned when polling starts, or that it stays aligned. This module finds
//! the start of the next frame in that stream:
//!
//! - Two [`START_WORD`]s in a row start a frame of normal blocks.
//! - [`START_WORD`] followed by [`START_WORD_CC`] starts a frame whose first
//!   block is a color-code block.
//! - Two `0x0000` words in a row mean the sensor has nothing to report.
//! - [`OUT_OF_SYNC_WORD`] is a start word seen with its bytes swapped, so the link
//!   is one byte out of phase and a single-byte exchange realigns it.
//!
//! [`FrameSync`] is the pure state machine; [`find_frame_start`] drives it from a
//! [`PixyLink`].

use crate::consts::{OUT_OF_SYNC_WORD, START_WORD, START_WORD_CC};
use crate::link::PixyLink;
use crate::object::BlockType;
use embedded_hal::spi::SpiDevice;

/// Outcome of feeding one word to [`FrameSync`].
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum SyncState {
    /// No frame start yet; keep reading words.
    #[default]
    Seeking,
    /// Still seeking, but the stream is a byte out of phase. The caller must
    /// issue one [`resync`](PixyLink::resync) exchange before reading on.
    Misaligned,
    /// A frame of normal blocks starts with the next word.
    FoundNormal,
    /// A frame starting with a color-code block starts with the next word.
    FoundColorCode,
    /// The sensor has no data this cycle.
    NoData,
}

impl SyncState {
    /// Whether seeking is over.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::FoundNormal | Self::FoundColorCode | Self::NoData)
    }
}

/// Word-by-word frame start detector.
#[derive(Debug, Clone, Copy)]
pub struct FrameSync {
    last_word: u16,
}

impl FrameSync {
    /// Creates a detector with no history.
    pub const fn new() -> Self {
        Self { last_word: 0xffff }
    }

    /// Feeds the next received word and reports what it means.
    pub fn feed(&mut self, word: u16) -> SyncState {
        let last_word = self.last_word;
        self.last_word = word;
        match (last_word, word) {
            (0, 0) => SyncState::NoData,
            (START_WORD, START_WORD) => SyncState::FoundNormal,
            (START_WORD, START_WORD_CC) => SyncState::FoundColorCode,
            (_, OUT_OF_SYNC_WORD) => SyncState::Misaligned,
            _ => SyncState::Seeking,
        }
    }
}

impl Default for FrameSync {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads words from `link` until a frame start is found or the sensor reports
/// no data.
///
/// # Returns
/// - `Some(block_type)`: the link is positioned at the first block's checksum
/// - `None`: the sensor has nothing to report
pub fn find_frame_start<SPI>(link: &mut PixyLink<SPI>) -> Result<Option<BlockType>, SPI::Error>
where
    SPI: SpiDevice,
{
    let mut sync = FrameSync::new();
    loop {
        let word = link.transact()?;
        match sync.feed(word) {
            SyncState::Seeking => {}
            SyncState::Misaligned => {
                trace!("stream out of phase, shifting by one byte");
                link.resync()?;
            }
            SyncState::FoundNormal => return Ok(Some(BlockType::Normal)),
            SyncState::FoundColorCode => return Ok(Some(BlockType::ColorCode)),
            SyncState::NoData => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{idle_words, resync_byte};
    use embedded_hal_mock::eh1::spi::Mock as SpiMock;

    #[test]
    fn test_feed_two_zero_words_is_no_data() {
        let mut sync = FrameSync::new();
        assert_eq!(sync.feed(0), SyncState::Seeking);
        assert_eq!(sync.feed(0), SyncState::NoData);
    }

    #[test]
    fn test_feed_detects_frame_starts() {
        let mut sync = FrameSync::new();
        assert_eq!(sync.feed(0xaa55), SyncState::Seeking);
        assert_eq!(sync.feed(0xaa55), SyncState::FoundNormal);

        let mut sync = FrameSync::new();
        assert_eq!(sync.feed(0xaa55), SyncState::Seeking);
        assert_eq!(sync.feed(0xaa56), SyncState::FoundColorCode);
        assert!(SyncState::FoundColorCode.is_terminal());
    }

    #[test]
    fn test_feed_needs_consecutive_words() {
        let mut sync = FrameSync::new();
        for word in [0xaa56, 0xaa55, 0x1234, 0xaa55, 0x0000, 0xaa56] {
            assert!(!sync.feed(word).is_terminal());
        }
    }

    #[test]
    fn test_feed_flags_out_of_sync_word() {
        let mut sync = FrameSync::new();
        assert_eq!(sync.feed(0x55aa), SyncState::Misaligned);
        assert!(!SyncState::Misaligned.is_terminal());
    }

    #[test]
    fn test_find_frame_start_no_data() {
        let spi = SpiMock::new(&idle_words(&[0x0000, 0x0000]));
        let mut link = PixyLink::new(spi);

        assert_eq!(find_frame_start(&mut link), Ok(None));
        link.release().done();
    }

    #[test]
    fn test_find_frame_start_normal_after_noise() {
        let spi = SpiMock::new(&idle_words(&[0x1234, 0x0000, 0xaa55, 0xaa55]));
        let mut link = PixyLink::new(spi);

        assert_eq!(find_frame_start(&mut link), Ok(Some(BlockType::Normal)));
        link.release().done();
    }

    #[test]
    fn test_find_frame_start_color_code() {
        let spi = SpiMock::new(&idle_words(&[0xaa55, 0xaa56]));
        let mut link = PixyLink::new(spi);

        assert_eq!(find_frame_start(&mut link), Ok(Some(BlockType::ColorCode)));
        link.release().done();
    }

    #[test]
    fn test_find_frame_start_resyncs_once_on_out_of_sync_word() {
        let mut expectations = idle_words(&[0x55aa]);
        expectations.extend(resync_byte(0x55));
        expectations.extend(idle_words(&[0xaa55, 0xaa55]));
        let spi = SpiMock::new(&expectations);
        let mut link = PixyLink::new(spi);

        assert_eq!(find_frame_start(&mut link), Ok(Some(BlockType::Normal)));
        link.release().done();
    }
}
