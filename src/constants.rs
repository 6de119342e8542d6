pub const MAX_POSITIONS: u8 = 8; // 3 address bits
pub const ADDRESS_BITS: u8 = 3;

pub const BLANK_PATTERN: u8 = 0x00;
pub const DOT_MASK: u8 = 0x80;

/// Segment codes indexed by symbol: digits 0-9, hex letters A-F, blank, dot.
pub const SEGMENT_TABLE: [u8; 18] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
    0x00, 0x80,
];

pub mod symbol {
    pub const HEX_A: u8 = 10;
    pub const HEX_F: u8 = 15;
    pub const BLANK: u8 = 16;
    pub const DOT: u8 = 17;

    pub const DIGITS_ONLY_LEN: u8 = 10; // 0-9
    pub const FULL_LEN: u8 = 18; // 0-9, A-F, blank, dot
}

pub mod segment {
    pub const A: u8 = 0x01; // bit 0: top
    pub const B: u8 = 0x02; // bit 1: top right
    pub const C: u8 = 0x04; // bit 2: bottom right
    pub const D: u8 = 0x08; // bit 3: bottom
    pub const E: u8 = 0x10; // bit 4: bottom left
    pub const F: u8 = 0x20; // bit 5: top left
    pub const G: u8 = 0x40; // bit 6: middle
    pub const DP: u8 = 0x80; // bit 7: decimal point
}
