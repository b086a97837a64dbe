//! # Glyph Table
//!
//! 256 fixed-size bitmap glyphs, one byte per row, MSB = leftmost column.
//!
//! The bitmaps come from the `font8x8` legacy tables. Those are 8x8 with the
//! LSB as the leftmost pixel, so at compile time every row is bit-reversed
//! and emitted twice to get the 8x16 VGA cell shape.
//!
//! | Range     | Source           |
//! |-----------|------------------|
//! | 0x00-0x7F | `BASIC_LEGACY`   |
//! | 0x80-0x9F | `CONTROL_LEGACY` |
//! | 0xA0-0xFF | `LATIN_LEGACY`   |

use font8x8::legacy::{BASIC_LEGACY, CONTROL_LEGACY, LATIN_LEGACY};

pub const GLYPH_WIDTH: usize = 8;
pub const GLYPH_HEIGHT: usize = 16;

pub type Glyph = [u8; GLYPH_HEIGHT];

static GLYPHS: [Glyph; 256] = build_table();

/// Bitmap for `byte`. Every byte value has an entry.
#[inline(always)]
pub fn glyph(byte: u8) -> &'static Glyph {
    &GLYPHS[byte as usize]
}

const fn widen(src: &[u8; 8]) -> Glyph {
    let mut out = [0u8; GLYPH_HEIGHT];
    let mut row = 0;
    while row < 8 {
        let bits = src[row].reverse_bits();
        out[row * 2] = bits;
        out[row * 2 + 1] = bits;
        row += 1;
    }
    out
}

const fn build_table() -> [Glyph; 256] {
    let mut table = [[0u8; GLYPH_HEIGHT]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = if i < 0x80 {
            widen(&BASIC_LEGACY[i])
        } else if i < 0xA0 {
            widen(&CONTROL_LEGACY[i - 0x80])
        } else {
            widen(&LATIN_LEGACY[i - 0xA0])
        };
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert!(glyph(b' ').iter().all(|&row| row == 0));
    }

    #[test]
    fn test_printable_glyphs_have_ink() {
        for b in 0x21u8..0x7F {
            assert!(glyph(b).iter().any(|&row| row != 0), "glyph {:#x} is empty", b);
        }
    }

    #[test]
    fn test_rows_are_doubled() {
        let g = glyph(b'A');
        for pair in g.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_msb_is_leftmost() {
        for row in 0..8 {
            let src = BASIC_LEGACY[b'F' as usize][row];
            assert_eq!(glyph(b'F')[row * 2], src.reverse_bits());
        }
        // 'F' has a vertical stroke on the left and nothing in the far right column.
        assert!(glyph(b'F').iter().any(|&row| row & 0x40 != 0));
        assert!(glyph(b'F').iter().all(|&row| row & 0x01 == 0));
    }
}
