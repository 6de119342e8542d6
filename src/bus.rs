use embedded_hal::digital::{OutputPin, PinState};

/// The 8-bit segment port shared by every digit of the bank.
pub trait SegmentBus {
    type Error;

    /// Drives all eight segment lines at once. The byte is written as-is,
    /// polarity has already been applied.
    fn write(&mut self, pattern: u8) -> Result<(), Self::Error>;
}

impl<B: SegmentBus + ?Sized> SegmentBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, pattern: u8) -> Result<(), Self::Error> {
        (**self).write(pattern)
    }
}

/// Segment bus built from eight individual pins, segment a (bit 0) first.
pub struct PinBus<P> {
    pins: [P; 8],
}

impl<P: OutputPin> PinBus<P> {
    pub fn new(pins: [P; 8]) -> Self {
        Self { pins }
    }

    pub fn destroy(self) -> [P; 8] {
        self.pins
    }
}

impl<P: OutputPin> SegmentBus for PinBus<P> {
    type Error = P::Error;

    fn write(&mut self, pattern: u8) -> Result<(), Self::Error> {
        let mut bits = pattern;
        for pin in &mut self.pins {
            pin.set_state(PinState::from(bits & 1 == 1))?;
            bits >>= 1;
        }
        Ok(())
    }
}
