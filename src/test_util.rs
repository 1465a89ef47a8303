//! Mock SPI expectations shared by the unit tests.

use crate::checksum::word_sum;
use crate::consts::{DATA_SYNC_BYTE, IDLE_SYNC_BYTE};
use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;

fn exchange(write: &[u8], read: &[u8]) -> Vec<SpiTransaction<u8>> {
    vec![
        SpiTransaction::transaction_start(),
        SpiTransaction::transfer(write.to_vec(), read.to_vec()),
        SpiTransaction::transaction_end(),
    ]
}

/// An idle 2-byte exchange that receives `word`.
pub(crate) fn idle_word(word: u16) -> Vec<SpiTransaction<u8>> {
    exchange(&[IDLE_SYNC_BYTE, 0], &word.to_be_bytes())
}

/// A 2-byte exchange carrying command byte `byte` that receives `word`.
pub(crate) fn data_word(byte: u8, word: u16) -> Vec<SpiTransaction<u8>> {
    exchange(&[DATA_SYNC_BYTE, byte], &word.to_be_bytes())
}

/// A 1-byte resync exchange that receives `byte`.
pub(crate) fn resync_byte(byte: u8) -> Vec<SpiTransaction<u8>> {
    exchange(&[IDLE_SYNC_BYTE], &[byte])
}

/// Idle exchanges receiving each of `words` in turn.
pub(crate) fn idle_words(words: &[u16]) -> Vec<SpiTransaction<u8>> {
    words.iter().flat_map(|&word| idle_word(word)).collect()
}

/// The words of one block record: checksum followed by its data words.
pub(crate) fn block(fields: &[u16]) -> Vec<u16> {
    let mut words = vec![word_sum(fields)];
    words.extend_from_slice(fields);
    words
}

/// Like [`block`], but with a checksum that does not match the fields.
pub(crate) fn bad_block(fields: &[u16]) -> Vec<u16> {
    let mut words = block(fields);
    words[0] = words[0].wrapping_add(1);
    words
}
