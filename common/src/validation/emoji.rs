/// Code point ranges treated as emoji or pictographs in header text.
///
/// Kept as a plain table so new Unicode blocks can be added and tested on
/// their own.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F000, 0x1F02F), // mahjong tiles
    (0x1F0A0, 0x1F0FF), // playing cards
    (0x1F100, 0x1F1FF), // enclosed alphanumerics, regional indicators
    (0x1F200, 0x1F2FF), // enclosed ideographic supplement
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F700, 0x1F77F), // alchemical symbols
    (0x1F780, 0x1F7FF), // geometric shapes extended
    (0x1F800, 0x1F8FF), // supplemental arrows-c
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA00, 0x1FAFF), // chess symbols, symbols and pictographs extended-a
    (0x00A9, 0x00A9),   // copyright sign
    (0x00AE, 0x00AE),   // registered sign
    (0x2122, 0x2122),   // trade mark sign
    (0x2190, 0x21FF),   // arrows
    (0x2300, 0x23FF),   // misc technical (watch, hourglass, ...)
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
    (0x2B00, 0x2BFF),   // misc symbols and arrows
    (0x3030, 0x3030),   // wavy dash
    (0x303D, 0x303D),   // part alternation mark
    (0x200D, 0x200D),   // zero width joiner
    (0xFE0F, 0xFE0F),   // emoji presentation selector
];

pub fn is_emoji(ch: char) -> bool {
    let cp = u32::from(ch);
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_astral_pictographs() {
        assert!(contains_emoji("Thanks 😀"));
        assert!(contains_emoji("🚀 launch"));
        assert!(contains_emoji("flag 🇲🇽"));
    }

    #[test]
    fn detects_bmp_symbols() {
        assert!(contains_emoji("sunny ☀"));
        assert!(contains_emoji("done ✅"));
        assert!(contains_emoji("heart ❤\u{FE0F}"));
    }

    #[test]
    fn detects_legal_marks_arrows_and_cjk_marks() {
        assert!(contains_emoji("Acme \u{00A9} 2024"));
        assert!(contains_emoji("Acme\u{00AE} rewards"));
        assert!(contains_emoji("SuperApp\u{2122}"));
        assert!(contains_emoji("Next \u{2192} step"));
        assert!(contains_emoji("swap \u{21C4}"));
        assert!(contains_emoji("wave \u{3030}"));
        assert!(contains_emoji("mark \u{303D}"));
    }

    #[test]
    fn plain_and_accented_text_is_clean() {
        assert!(!contains_emoji("Your order #123 is ready"));
        assert!(!contains_emoji("Encuesta de satisfacción ¿Qué tal?"));
        assert!(!contains_emoji("日本語のテキスト"));
    }
}
