use core::marker::PhantomData;

use embedded_hal::digital::{self, ErrorType, OutputPin, PinState};

use crate::bits::check_bit;
use crate::{DecoderPresence, DisplayError, Polarity, ADDRESS_BITS, MAX_POSITIONS};

/// Picks which physical digit of the bank is live.
pub trait PositionDecoder {
    type Error;

    /// Number of addressable positions.
    fn positions(&self) -> u8;

    fn presence(&self) -> DecoderPresence;

    fn has_enable_line(&self) -> bool;

    /// Addresses `position`. Out-of-range positions fail with
    /// [`DisplayError::InvalidLocation`] before any line is driven.
    fn select(&mut self, position: u8) -> Result<(), DisplayError<Self::Error>>;

    /// Gates the selected output on or off without changing the selection.
    fn enable(&mut self, active: bool) -> Result<(), DisplayError<Self::Error>>;
}

impl<D: PositionDecoder + ?Sized> PositionDecoder for &mut D {
    type Error = D::Error;

    fn positions(&self) -> u8 {
        (**self).positions()
    }

    fn presence(&self) -> DecoderPresence {
        (**self).presence()
    }

    fn has_enable_line(&self) -> bool {
        (**self).has_enable_line()
    }

    fn select(&mut self, position: u8) -> Result<(), DisplayError<Self::Error>> {
        (**self).select(position)
    }

    fn enable(&mut self, active: bool) -> Result<(), DisplayError<Self::Error>> {
        (**self).enable(active)
    }
}

/// 74HC138 3-to-8 line decoder on three address pins, with an optional enable pin.
pub struct Hc138<A0, A1, A2, EN> {
    a0: A0,
    a1: A1,
    a2: A2,
    enable: Option<EN>,
    enable_polarity: Polarity,
}

impl<A0, A1, A2> Hc138<A0, A1, A2, NoEnable<A0::Error>>
where
    A0: OutputPin,
{
    /// Decoder with its enable inputs strapped active in hardware.
    pub fn new(a0: A0, a1: A1, a2: A2) -> Self {
        Self {
            a0,
            a1,
            a2,
            enable: None,
            enable_polarity: Polarity::ActiveHigh,
        }
    }
}

impl<A0, A1, A2, EN> Hc138<A0, A1, A2, EN> {
    /// Decoder whose enable input is driven by `enable`.
    ///
    /// Use [`Polarity::ActiveHigh`] for G1 and [`Polarity::ActiveLow`] for G2A/G2B.
    pub fn with_enable(a0: A0, a1: A1, a2: A2, enable: EN, polarity: Polarity) -> Self {
        Self {
            a0,
            a1,
            a2,
            enable: Some(enable),
            enable_polarity: polarity,
        }
    }

    pub fn destroy(self) -> (A0, A1, A2, Option<EN>) {
        (self.a0, self.a1, self.a2, self.enable)
    }
}

impl<A0, A1, A2, EN> PositionDecoder for Hc138<A0, A1, A2, EN>
where
    A0: OutputPin,
    A1: OutputPin<Error = A0::Error>,
    A2: OutputPin<Error = A0::Error>,
    EN: OutputPin<Error = A0::Error>,
{
    type Error = A0::Error;

    fn positions(&self) -> u8 {
        MAX_POSITIONS
    }

    fn presence(&self) -> DecoderPresence {
        DecoderPresence::Present
    }

    fn has_enable_line(&self) -> bool {
        self.enable.is_some()
    }

    fn select(&mut self, position: u8) -> Result<(), DisplayError<Self::Error>> {
        if position >= MAX_POSITIONS {
            return Err(DisplayError::InvalidLocation(position));
        }
        debug_assert!(position >> ADDRESS_BITS == 0);

        self.a0.set_state(PinState::from(check_bit(position, 0)))?;
        self.a1.set_state(PinState::from(check_bit(position, 1)))?;
        self.a2.set_state(PinState::from(check_bit(position, 2)))?;
        Ok(())
    }

    fn enable(&mut self, active: bool) -> Result<(), DisplayError<Self::Error>> {
        let level = self.enable_polarity.level(active);
        let pin = self.enable.as_mut().ok_or(DisplayError::NoEnableLine)?;
        pin.set_state(PinState::from(level))?;
        Ok(())
    }
}

/// Placeholder type for an [`Hc138`] built without an enable pin. Never driven.
pub struct NoEnable<E>(PhantomData<E>);

impl<E: digital::Error> ErrorType for NoEnable<E> {
    type Error = E;
}

impl<E: digital::Error> OutputPin for NoEnable<E> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// One select line per digit, used when no decoder chip is fitted.
pub struct DirectSelect<P, const N: usize> {
    pins: [P; N],
    polarity: Polarity,
}

impl<P, const N: usize> DirectSelect<P, N> {
    /// `polarity` is the level that turns a digit on, e.g. `ActiveLow` for a
    /// common cathode sunk directly by the pin.
    pub fn new(pins: [P; N], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    pub fn destroy(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> PositionDecoder for DirectSelect<P, N> {
    type Error = P::Error;

    fn positions(&self) -> u8 {
        u8::try_from(N).unwrap_or(u8::MAX)
    }

    fn presence(&self) -> DecoderPresence {
        DecoderPresence::Absent
    }

    fn has_enable_line(&self) -> bool {
        false
    }

    fn select(&mut self, position: u8) -> Result<(), DisplayError<Self::Error>> {
        if position >= self.positions() {
            return Err(DisplayError::InvalidLocation(position));
        }

        // release the old digit before driving the new one
        let off = PinState::from(self.polarity.level(false));
        for (index, pin) in self.pins.iter_mut().enumerate() {
            if index != position as usize {
                pin.set_state(off)?;
            }
        }
        if let Some(pin) = self.pins.get_mut(position as usize) {
            pin.set_state(PinState::from(self.polarity.level(true)))?;
        }
        Ok(())
    }

    fn enable(&mut self, _active: bool) -> Result<(), DisplayError<Self::Error>> {
        Err(DisplayError::NoEnableLine)
    }
}
