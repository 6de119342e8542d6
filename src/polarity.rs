/// Electrical sense of a line or bus.
///
/// `ActiveHigh` suits common-cathode displays, where a set bit lights a segment.
/// `ActiveLow` suits common-anode displays and inverts every byte written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Converts a logical segment pattern into the byte driven onto the bus.
    pub fn apply(self, pattern: u8) -> u8 {
        match self {
            Polarity::ActiveHigh => pattern,
            Polarity::ActiveLow => !pattern,
        }
    }

    /// Electrical level (`true` = high) that puts a single line in the requested state.
    pub fn level(self, active: bool) -> bool {
        match self {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        }
    }
}
