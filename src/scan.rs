use num_traits::ToPrimitive;

use crate::bits::{digit_at, hex_digit_at};
use crate::{
    DisplayConfig, DisplayError, EnableLine, Letter, PositionDecoder, SegmentBus, BLANK_PATTERN,
    MAX_POSITIONS,
};

/// How many trailing positions of the bank are scanned.
///
/// The window is always the high end of the position range: a width of 4 on an
/// 8-position bank cycles positions 4 to 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window(u8);

impl Window {
    pub const FULL: Window = Window(MAX_POSITIONS);

    /// Returns `None` unless `1 <= width <= MAX_POSITIONS`.
    pub fn new(width: u8) -> Option<Self> {
        Self::within(width, MAX_POSITIONS)
    }

    /// Returns `None` unless `1 <= width <= positions`.
    pub fn within(width: u8, positions: u8) -> Option<Self> {
        if width == 0 || width > positions {
            return None;
        }
        Some(Window(width))
    }

    pub fn width(self) -> u8 {
        self.0
    }

    /// First position of the window on a bank of `positions` digits.
    pub fn floor(self, positions: u8) -> u8 {
        positions.saturating_sub(self.0)
    }
}

/// Position the scan will light next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanState {
    position: u8,
}

impl ScanState {
    /// Starts at position 0, so the first pass covers the whole bank before
    /// settling into the window.
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    /// Moves to the next position, wrapping to the window floor past the last one.
    pub fn step(&mut self, window: Window, positions: u8) {
        let next = self.position.saturating_add(1);
        self.position = if next >= positions {
            window.floor(positions)
        } else {
            next
        };
    }

    /// Jumps straight to the window floor, skipping the startup pass.
    pub fn align(&mut self, window: Window, positions: u8) {
        self.position = window.floor(positions);
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Refreshes a multiplexed bank one position per call.
pub struct ScanController<D, B> {
    decoder: D,
    bus: B,
    config: DisplayConfig,
    state: ScanState,
}

impl<D, B, E> ScanController<D, B>
where
    D: PositionDecoder<Error = E>,
    B: SegmentBus<Error = E>,
{
    /// Fails with [`DisplayError::ConfigMismatch`] when `config` claims a decoder or
    /// enable line that `decoder` does not have.
    pub fn new(decoder: D, bus: B, config: DisplayConfig) -> Result<Self, DisplayError<E>> {
        if config.decoder != decoder.presence() {
            return Err(DisplayError::ConfigMismatch);
        }
        if config.enable_line == EnableLine::Present && !decoder.has_enable_line() {
            return Err(DisplayError::ConfigMismatch);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "scan controller: {=u8} positions, {}",
            decoder.positions(),
            config
        );

        Ok(Self {
            decoder,
            bus,
            config,
            state: ScanState::new(),
        })
    }

    pub fn destroy(self) -> (D, B) {
        (self.decoder, self.bus)
    }

    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    pub fn positions(&self) -> u8 {
        self.decoder.positions()
    }

    pub fn position(&self) -> u8 {
        self.state.position()
    }

    /// Validates a window width for this bank.
    pub fn window(&self, width: u8) -> Result<Window, DisplayError<E>> {
        Window::within(width, self.decoder.positions()).ok_or(DisplayError::InvalidWindow(width))
    }

    /// Blanks the bus, addresses position 0 and opens the enable gate if wired.
    pub fn init(&mut self) -> Result<(), DisplayError<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("scan init, enable line {}", self.config.enable_line);

        self.clear()?;
        self.decoder.select(0)?;
        if self.config.enable_line == EnableLine::Present {
            self.decoder.enable(true)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn align(&mut self, window: Window) {
        let positions = self.decoder.positions();
        self.state.align(window, positions);
    }

    /// Shows the decimal digit of `value` that belongs to the current position,
    /// blanks it, then steps to the next position.
    ///
    /// Position 0 carries the most significant of the bank's decimal places.
    pub fn advance<T>(&mut self, value: T, window: Window) -> Result<(), DisplayError<E>>
    where
        T: ToPrimitive,
    {
        let value = value.to_u32().ok_or(DisplayError::InvalidValue)?;
        self.scan(window, |place| digit_at(value, place))
    }

    /// Same as [`advance`](Self::advance) with hex digits. Needs the full symbol set.
    pub fn advance_hex<T>(&mut self, value: T, window: Window) -> Result<(), DisplayError<E>>
    where
        T: ToPrimitive,
    {
        let value = value.to_u32().ok_or(DisplayError::InvalidValue)?;
        self.scan(window, |place| hex_digit_at(value, place))
    }

    /// Writes a symbol to whichever position is currently addressed.
    pub fn show_symbol(&mut self, symbol: u8) -> Result<(), DisplayError<E>> {
        let pattern = self.encode(symbol)?;
        self.write(pattern)
    }

    pub fn show_at(&mut self, position: u8, symbol: u8) -> Result<(), DisplayError<E>> {
        let pattern = self.encode(symbol)?;
        self.show_pattern_at(position, pattern)
    }

    pub fn show_letter_at(&mut self, position: u8, letter: Letter) -> Result<(), DisplayError<E>> {
        self.show_at(position, letter.symbol())
    }

    /// Addresses `position` and writes a raw segment pattern, e.g. one built with
    /// [`with_dot`](crate::with_dot).
    pub fn show_pattern_at(&mut self, position: u8, pattern: u8) -> Result<(), DisplayError<E>> {
        self.address(position)?;
        self.write(pattern)
    }

    pub fn clear(&mut self) -> Result<(), DisplayError<E>> {
        self.write(BLANK_PATTERN)
    }

    fn scan<F>(&mut self, window: Window, digit: F) -> Result<(), DisplayError<E>>
    where
        F: Fn(u8) -> u8,
    {
        let positions = self.decoder.positions();
        let position = self.state.position();
        let place = positions.saturating_sub(1).saturating_sub(position);
        let symbol = digit(place);
        let pattern = self.encode(symbol)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("scan position {=u8} symbol {=u8}", position, symbol);

        self.address(position)?;
        self.write(pattern)?;
        // blank the same position so the next address change does not carry it over
        self.write(BLANK_PATTERN)?;

        self.state.step(window, positions);
        Ok(())
    }

    fn address(&mut self, position: u8) -> Result<(), DisplayError<E>> {
        // a rejected position leaves the enable gate untouched
        if position >= self.decoder.positions() {
            return Err(DisplayError::InvalidLocation(position));
        }
        if self.config.enable_line == EnableLine::Present {
            self.decoder.enable(false)?;
            self.decoder.select(position)?;
            self.decoder.enable(true)?;
        } else {
            self.decoder.select(position)?;
        }
        Ok(())
    }

    fn encode(&self, symbol: u8) -> Result<u8, DisplayError<E>> {
        self.config
            .symbol_set
            .encode(symbol)
            .ok_or(DisplayError::InvalidSymbol(symbol))
    }

    fn write(&mut self, pattern: u8) -> Result<(), DisplayError<E>> {
        self.bus.write(self.config.polarity.apply(pattern))?;
        Ok(())
    }
}
