use crate::constants::{symbol, DOT_MASK, SEGMENT_TABLE};

/// Which part of the segment table a display accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SymbolSet {
    DigitsOnly,
    #[default]
    DigitsHexBlankDot,
}

impl SymbolSet {
    pub fn symbol_count(self) -> u8 {
        match self {
            SymbolSet::DigitsOnly => symbol::DIGITS_ONLY_LEN,
            SymbolSet::DigitsHexBlankDot => symbol::FULL_LEN,
        }
    }

    pub fn contains(self, symbol: u8) -> bool {
        symbol < self.symbol_count()
    }

    /// Segment pattern for `symbol`, or `None` when the symbol is outside this set.
    pub fn encode(self, symbol: u8) -> Option<u8> {
        if !self.contains(symbol) {
            return None;
        }
        SEGMENT_TABLE.get(symbol as usize).copied()
    }

    pub fn encode_char(self, c: char) -> Option<u8> {
        let symbol = match c {
            '0'..='9' => c as u8 - b'0',
            'a'..='f' => c as u8 - b'a' + symbol::HEX_A,
            'A'..='F' => c as u8 - b'A' + symbol::HEX_A,
            ' ' => symbol::BLANK,
            '.' => symbol::DOT,
            _ => return None,
        };
        self.encode(symbol)
    }
}

/// Named codes for the non-digit symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Letter {
    A = 0x77,
    B = 0x7C,
    C = 0x39,
    D = 0x5E,
    E = 0x79,
    F = 0x71,
    Blank = 0x00,
    Dot = 0x80,
}

impl Letter {
    pub fn pattern(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> u8 {
        match self {
            Letter::A => symbol::HEX_A,
            Letter::B => symbol::HEX_A + 1,
            Letter::C => symbol::HEX_A + 2,
            Letter::D => symbol::HEX_A + 3,
            Letter::E => symbol::HEX_A + 4,
            Letter::F => symbol::HEX_F,
            Letter::Blank => symbol::BLANK,
            Letter::Dot => symbol::DOT,
        }
    }
}

/// Encodes with the full table.
pub fn encode(symbol: u8) -> Option<u8> {
    SymbolSet::DigitsHexBlankDot.encode(symbol)
}

pub fn with_dot(pattern: u8) -> u8 {
    pattern | DOT_MASK
}
