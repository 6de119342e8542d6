//! Scan driver for banks of multiplexed seven-segment digits.
//!
//! The segment lines of every digit share one 8-bit bus while a 74HC138 (or one
//! line per digit when no decoder is fitted) picks the digit that is lit. Call
//! [`ScanController::advance`] from a periodic timer: each call lights exactly one
//! digit, blanks it again and moves on, so the whole number appears steady.
//!
//! ```ignore
//! let decoder = Hc138::new(a0, a1, a2);
//! let bus = PinBus::new([seg_a, seg_b, seg_c, seg_d, seg_e, seg_f, seg_g, seg_dp]);
//! let mut display = ScanController::new(decoder, bus, DisplayConfig::new())?;
//! let window = display.window(4)?;
//! display.init()?;
//! loop {
//!     display.advance(1234u16, window)?;
//!     delay.delay_us(500);
//! }
//! ```
#![no_std]

pub mod bits;
mod bus;
mod config;
mod constants;
mod decoder;
mod encoder;
mod polarity;
mod scan;

pub use bus::{PinBus, SegmentBus};
pub use config::{DecoderPresence, DisplayConfig, EnableLine};
pub use constants::*;
pub use decoder::{DirectSelect, Hc138, NoEnable, PositionDecoder};
pub use encoder::{encode, with_dot, Letter, SymbolSet};
pub use polarity::Polarity;
pub use scan::{ScanController, ScanState, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayError<E> {
    Pin(E),
    InvalidValue,
    InvalidLocation(u8),
    InvalidSymbol(u8),
    InvalidWindow(u8),
    NoEnableLine,
    ConfigMismatch,
}

impl<E> From<E> for DisplayError<E> {
    fn from(error: E) -> Self {
        DisplayError::Pin(error)
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for DisplayError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DisplayError::Pin(_e) => defmt::write!(f, "Pin error"),
            DisplayError::InvalidValue => defmt::write!(f, "Invalid value"),
            DisplayError::InvalidLocation(position) => {
                defmt::write!(f, "Invalid location {=u8}", position)
            }
            DisplayError::InvalidSymbol(symbol) => defmt::write!(f, "Invalid symbol {=u8}", symbol),
            DisplayError::InvalidWindow(width) => defmt::write!(f, "Invalid window {=u8}", width),
            DisplayError::NoEnableLine => defmt::write!(f, "No enable line"),
            DisplayError::ConfigMismatch => defmt::write!(f, "Config does not match hardware"),
        }
    }
}
