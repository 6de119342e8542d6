use crate::{Polarity, SymbolSet};

/// Whether digit selection goes through a binary decoder chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderPresence {
    #[default]
    Present,
    Absent,
}

/// Whether the decoder's output enable is wired to the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableLine {
    Present,
    #[default]
    Absent,
}

/// Board-level choices, fixed for the lifetime of a display bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Sense of the segment bus; applied to data and blanking writes alike.
    pub polarity: Polarity,
    pub decoder: DecoderPresence,
    pub enable_line: EnableLine,
    pub symbol_set: SymbolSet,
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            polarity: Polarity::ActiveHigh,
            decoder: DecoderPresence::Present,
            enable_line: EnableLine::Absent,
            symbol_set: SymbolSet::DigitsHexBlankDot,
        }
    }

    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub const fn with_decoder(mut self, decoder: DecoderPresence) -> Self {
        self.decoder = decoder;
        self
    }

    pub const fn with_enable_line(mut self, enable_line: EnableLine) -> Self {
        self.enable_line = enable_line;
        self
    }

    pub const fn with_symbol_set(mut self, symbol_set: SymbolSet) -> Self {
        self.symbol_set = symbol_set;
        self
    }
}
