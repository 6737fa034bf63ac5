//! # Code Page 437 Encoding
//!
//! Most ESC/POS printers power up on code page 437 (PC USA). ASCII passes
//! through unchanged; the upper half is mapped through [`UPPER_HALF`].
//! Characters with no CP437 form become `?`.

use tracing::warn;

/// Unicode characters for CP437 bytes 0x80-0xFF, indexed by `byte - 0x80`.
pub const UPPER_HALF: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Map one character to its CP437 byte.
pub fn byte_for(ch: char) -> Option<u8> {
    if ch.is_ascii() {
        return Some(ch as u8);
    }
    UPPER_HALF
        .iter()
        .position(|&c| c == ch)
        .map(|i| 0x80 + i as u8)
}

/// Encode a Unicode string as CP437 bytes.
pub fn encode(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            byte_for(ch).unwrap_or_else(|| {
                warn!(character = %ch, code = ch as u32, "cp437: unmapped character replaced with '?'");
                b'?'
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Hello, world!"), b"Hello, world!");
        assert_eq!(encode(""), b"");
    }

    #[test]
    fn test_shade_blocks() {
        // The sampler's three shade glyphs
        assert_eq!(encode("▓▒░"), vec![178, 177, 176]);
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(encode("Año"), vec![0x41, 0xA4, 0x6F]);
        assert_eq!(encode("¿Qué?"), vec![0xA8, 0x51, 0x75, 0x82, 0x3F]);
        assert_eq!(encode("Café"), vec![0x43, 0x61, 0x66, 0x82]);
    }

    #[test]
    fn test_box_frame() {
        assert_eq!(encode("┌──┐"), vec![0xDA, 0xC4, 0xC4, 0xBF]);
        assert_eq!(encode("╚═╝"), vec![0xC8, 0xCD, 0xBC]);
    }

    #[test]
    fn test_table_edges() {
        assert_eq!(byte_for('Ç'), Some(0x80));
        assert_eq!(byte_for('°'), Some(0xF8));
        assert_eq!(byte_for('\u{00A0}'), Some(0xFF));
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        assert_eq!(encode("★"), vec![b'?']);
    }
}
