/// Sums 16-bit words, wrapping at 2^16 like the sensor's block checksum.
pub(crate) fn word_sum(words: &[u16]) -> u16 {
    words.iter().fold(0u16, |sum, &w| sum.wrapping_add(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_sum() {
        assert_eq!(word_sum(&[]), 0);
        assert_eq!(word_sum(&[1, 10, 20, 30, 40, 0]), 101);
        assert_eq!(word_sum(&[0xffff, 1]), 0);
    }
}
