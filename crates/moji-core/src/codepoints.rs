//! Well-known codepoints that give emoji sequences their structure.

/// COMBINING ENCLOSING KEYCAP.
pub const KEYCAP: u32 = 0x20E3;
/// ZERO WIDTH JOINER.
pub const ZWJ: u32 = 0x200D;
pub const MAN: u32 = 0x1F468;
pub const WOMAN: u32 = 0x1F469;
pub const PERSON: u32 = 0x1F9D1;
/// VARIATION SELECTOR-15 (text presentation).
pub const VS15: u32 = 0xFE0E;
/// VARIATION SELECTOR-16 (emoji presentation).
pub const VS16: u32 = 0xFE0F;
pub const FEMALE_SIGN: u32 = 0x2640;
pub const MALE_SIGN: u32 = 0x2642;
pub const LIGHTEST_SKIN_TONE: u32 = 0x1F3FB;
pub const DARKEST_SKIN_TONE: u32 = 0x1F3FF;

/// The five Fitzpatrick modifiers, lightest first.
pub const SKIN_TONES: [u32; 5] = [
    LIGHTEST_SKIN_TONE,
    LIGHTEST_SKIN_TONE + 1,
    LIGHTEST_SKIN_TONE + 2,
    LIGHTEST_SKIN_TONE + 3,
    DARKEST_SKIN_TONE,
];

pub fn is_skin_tone(cp: u32) -> bool {
    (LIGHTEST_SKIN_TONE..=DARKEST_SKIN_TONE).contains(&cp)
}

/// `char` forms, for code that works on text rather than codepoint arrays.
pub mod chars {
    pub const ZWJ: char = '\u{200D}';
    pub const VS15: char = '\u{FE0E}';
    pub const VS16: char = '\u{FE0F}';
}
