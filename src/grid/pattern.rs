//! Static mapping between hexagram indices and their six-line patterns
//!
//! A hexagram index is a 6-bit value. Reading its zero-padded binary
//! representation most-significant-bit first gives the lines from top to
//! bottom: a set bit is a solid (yang) line, a clear bit is a broken (yin)
//! line. Index 0 is therefore six broken lines and index 63 six solid lines.
//! The mapping is pure and owned by no renderer; both rendering paths read it.

use bitvec::order::Msb0;
use bitvec::view::BitView;

/// Number of lines in a hexagram glyph
pub const LINES_PER_HEXAGRAM: usize = 6;

/// Number of distinct hexagram glyphs
pub const HEXAGRAM_COUNT: usize = 64;

/// Kind of a single horizontal line within a hexagram glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Unbroken yang line, rendered as one rectangle
    Solid,
    /// Gapped yin line, rendered as two rectangles
    Broken,
}

/// Decode a hexagram index into its six line kinds, top line first
///
/// Only the low six bits of `index` participate; the high two bits are
/// ignored so that any `u8` decodes without a precondition.
pub fn lines(index: u8) -> [LineKind; LINES_PER_HEXAGRAM] {
    let mut pattern = [LineKind::Broken; LINES_PER_HEXAGRAM];
    let bits = index.view_bits::<Msb0>();

    // Skip the two padding bits above the 6-bit value
    for (line, bit) in pattern.iter_mut().zip(bits.iter().by_vals().skip(2)) {
        if bit {
            *line = LineKind::Solid;
        }
    }

    pattern
}

/// Re-encode six line kinds, top line first, into a hexagram index
pub fn encode(pattern: &[LineKind; LINES_PER_HEXAGRAM]) -> u8 {
    let mut index = 0u8;
    let bits = index.view_bits_mut::<Msb0>();

    for (position, line) in pattern.iter().enumerate() {
        if let Some(mut bit) = bits.get_mut(position + 2) {
            *bit = matches!(line, LineKind::Solid);
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::{HEXAGRAM_COUNT, LineKind, encode, lines};

    #[test]
    fn test_extreme_indices_decode_to_uniform_patterns() {
        assert_eq!(lines(0), [LineKind::Broken; 6]);
        assert_eq!(lines(63), [LineKind::Solid; 6]);
    }

    #[test]
    fn test_msb_is_top_line() {
        // 0b100000 = 32: only the topmost line is solid
        let pattern = lines(32);
        assert_eq!(pattern.first(), Some(&LineKind::Solid));
        assert!(pattern.iter().skip(1).all(|l| *l == LineKind::Broken));
    }

    #[test]
    fn test_round_trip_all_indices() {
        for index in 0..HEXAGRAM_COUNT as u8 {
            assert_eq!(
                encode(&lines(index)),
                index,
                "pattern for index {index} should re-encode to itself"
            );
        }
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(lines(63), lines(255));
    }
}
