extern crate segmux;

use std::cell::RefCell;
use std::rc::Rc;

use segmux::{
    DecoderPresence, DisplayConfig, DisplayError, EnableLine, Letter, Polarity, PositionDecoder,
    ScanController, SegmentBus, SymbolSet, Window, SEGMENT_TABLE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    Select(u8),
    Enable(bool),
    Write(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MockError;

type Log = Rc<RefCell<Vec<Event>>>;

struct MockDecoder {
    log: Log,
    positions: u8,
    enable_line: bool,
}

impl PositionDecoder for MockDecoder {
    type Error = MockError;

    fn positions(&self) -> u8 {
        self.positions
    }

    fn presence(&self) -> DecoderPresence {
        DecoderPresence::Present
    }

    fn has_enable_line(&self) -> bool {
        self.enable_line
    }

    fn select(&mut self, position: u8) -> Result<(), DisplayError<MockError>> {
        if position >= self.positions {
            return Err(DisplayError::InvalidLocation(position));
        }
        self.log.borrow_mut().push(Event::Select(position));
        Ok(())
    }

    fn enable(&mut self, active: bool) -> Result<(), DisplayError<MockError>> {
        if !self.enable_line {
            return Err(DisplayError::NoEnableLine);
        }
        self.log.borrow_mut().push(Event::Enable(active));
        Ok(())
    }
}

struct MockBus {
    log: Log,
    fail: bool,
}

impl SegmentBus for MockBus {
    type Error = MockError;

    fn write(&mut self, pattern: u8) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Write(pattern));
        Ok(())
    }
}

fn bank(
    positions: u8,
    enable_line: bool,
    config: DisplayConfig,
) -> (ScanController<MockDecoder, MockBus>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let decoder = MockDecoder {
        log: log.clone(),
        positions,
        enable_line,
    };
    let bus = MockBus {
        log: log.clone(),
        fail: false,
    };
    let controller = ScanController::new(decoder, bus, config).unwrap();
    (controller, log)
}

fn selections(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Select(position) => Some(*position),
            _ => None,
        })
        .collect()
}

fn writes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Write(pattern) => Some(*pattern),
            _ => None,
        })
        .collect()
}

#[test]
fn window_of_four_shows_1234() {
    let (mut display, log) = bank(8, false, DisplayConfig::new());
    let window = display.window(4).unwrap();

    for _ in 0..12 {
        display.advance(1234u16, window).unwrap();
    }

    assert_eq!(selections(&log), [0, 1, 2, 3, 4, 5, 6, 7, 4, 5, 6, 7]);

    let data: Vec<u8> = writes(&log).into_iter().step_by(2).collect();
    let digits = [0, 0, 0, 0, 1, 2, 3, 4, 1, 2, 3, 4];
    let expected: Vec<u8> = digits.iter().map(|&d| SEGMENT_TABLE[d]).collect();
    assert_eq!(data, expected);
}

#[test]
fn every_tick_blanks_the_position_it_lit() {
    let (mut display, log) = bank(8, false, DisplayConfig::new());
    let window = display.window(3).unwrap();

    for tick in 0..20u32 {
        let position = display.position();
        log.borrow_mut().clear();
        display.advance(tick * 37, window).unwrap();

        let events = log.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], Event::Select(position));
        assert!(matches!(events[1], Event::Write(_)));
        assert_eq!(events[2], Event::Write(0x00));
    }
}

#[test]
fn active_low_inverts_data_and_blank() {
    let config = DisplayConfig::new().with_polarity(Polarity::ActiveLow);
    let (mut display, log) = bank(8, false, config);
    display.align(Window::new(1).unwrap());

    display.advance(8u8, Window::new(1).unwrap()).unwrap();

    assert_eq!(writes(&log), [!SEGMENT_TABLE[8], 0xFF]);
}

#[test]
fn cycle_closes_inside_window() {
    for width in 1..=8 {
        let (mut display, _log) = bank(8, false, DisplayConfig::new());
        let window = display.window(width).unwrap();
        display.align(window);
        let start = display.position();
        assert_eq!(start, 8 - width);

        for _ in 0..width {
            display.advance(98765432u32, window).unwrap();
        }
        assert_eq!(display.position(), start);

        if 8 % width == 0 {
            for _ in 0..8 {
                display.advance(98765432u32, window).unwrap();
            }
            assert_eq!(display.position(), start);
        }
    }
}

#[test]
fn first_pass_starts_at_zero() {
    let (mut display, log) = bank(8, false, DisplayConfig::new());
    let window = display.window(2).unwrap();
    assert_eq!(display.position(), 0);

    for _ in 0..8 {
        display.advance(42u8, window).unwrap();
    }
    assert_eq!(display.position(), 6);
    assert_eq!(selections(&log), [0, 1, 2, 3, 4, 5, 6, 7]);

    display.reset();
    assert_eq!(display.position(), 0);
}

#[test]
fn window_is_validated_at_the_boundary() {
    let (display, _log) = bank(8, false, DisplayConfig::new());
    assert_eq!(display.window(0), Err(DisplayError::InvalidWindow(0)));
    assert_eq!(display.window(9), Err(DisplayError::InvalidWindow(9)));
    assert_eq!(display.window(8).map(Window::width), Ok(8));

    let (small, _log) = bank(4, false, DisplayConfig::new());
    assert_eq!(small.window(5), Err(DisplayError::InvalidWindow(5)));

    assert!(Window::new(0).is_none());
    assert!(Window::new(9).is_none());
    assert_eq!(Window::FULL.width(), 8);
    assert_eq!(Window::new(3).unwrap().floor(8), 5);
}

#[test]
fn config_must_match_decoder() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let decoder = MockDecoder {
        log: log.clone(),
        positions: 8,
        enable_line: false,
    };
    let bus = MockBus {
        log: log.clone(),
        fail: false,
    };
    let config = DisplayConfig::new().with_enable_line(EnableLine::Present);
    assert!(matches!(
        ScanController::new(decoder, bus, config),
        Err(DisplayError::ConfigMismatch)
    ));

    let decoder = MockDecoder {
        log: log.clone(),
        positions: 8,
        enable_line: false,
    };
    let bus = MockBus {
        log: log.clone(),
        fail: false,
    };
    let config = DisplayConfig::new().with_decoder(DecoderPresence::Absent);
    assert!(matches!(
        ScanController::new(decoder, bus, config),
        Err(DisplayError::ConfigMismatch)
    ));
    assert!(log.borrow().is_empty());
}

#[test]
fn enable_line_gates_the_address_change() {
    let config = DisplayConfig::new().with_enable_line(EnableLine::Present);
    let (mut display, log) = bank(8, true, config);

    display.advance(5u8, Window::FULL).unwrap();

    assert_eq!(
        *log.borrow(),
        [
            Event::Enable(false),
            Event::Select(0),
            Event::Enable(true),
            Event::Write(SEGMENT_TABLE[0]),
            Event::Write(0x00),
        ]
    );
}

#[test]
fn init_blanks_and_addresses_first_position() {
    let config = DisplayConfig::new()
        .with_polarity(Polarity::ActiveLow)
        .with_enable_line(EnableLine::Present);
    let (mut display, log) = bank(8, true, config);

    display.init().unwrap();

    assert_eq!(
        *log.borrow(),
        [Event::Write(0xFF), Event::Select(0), Event::Enable(true)]
    );
}

#[test]
fn bus_error_keeps_position() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let decoder = MockDecoder {
        log: log.clone(),
        positions: 8,
        enable_line: false,
    };
    let bus = MockBus {
        log: log.clone(),
        fail: true,
    };
    let mut display = ScanController::new(decoder, bus, DisplayConfig::new()).unwrap();

    assert_eq!(
        display.advance(1u8, Window::FULL),
        Err(DisplayError::Pin(MockError))
    );
    assert_eq!(display.position(), 0);
}

#[test]
fn negative_value_is_rejected() {
    let (mut display, log) = bank(8, false, DisplayConfig::new());

    assert_eq!(
        display.advance(-1i32, Window::FULL),
        Err(DisplayError::InvalidValue)
    );
    assert_eq!(display.position(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn only_eight_decimal_places_are_scanned() {
    let (mut display, log) = bank(8, false, DisplayConfig::new());

    for _ in 0..8 {
        display.advance(123_456_789u32, Window::FULL).unwrap();
    }

    let data: Vec<u8> = writes(&log).into_iter().step_by(2).collect();
    let expected: Vec<u8> = [2, 3, 4, 5, 6, 7, 8, 9]
        .iter()
        .map(|&d| SEGMENT_TABLE[d])
        .collect();
    assert_eq!(data, expected);
}

#[test]
fn hex_scan_needs_full_symbol_set() {
    let window = Window::new(1).unwrap();

    let (mut display, log) = bank(8, false, DisplayConfig::new());
    display.align(window);
    display.advance_hex(0xABu8, window).unwrap();
    assert_eq!(writes(&log), [SEGMENT_TABLE[0xB], 0x00]);

    let config = DisplayConfig::new().with_symbol_set(SymbolSet::DigitsOnly);
    let (mut display, log) = bank(8, false, config);
    display.align(window);
    assert_eq!(
        display.advance_hex(0xABu8, window),
        Err(DisplayError::InvalidSymbol(0xB))
    );
    assert!(log.borrow().is_empty());
    assert_eq!(display.position(), 7);
}

#[test]
fn direct_writes() {
    let (mut display, log) = bank(8, false, DisplayConfig::new());

    display.show_at(3, 9).unwrap();
    display.show_letter_at(4, Letter::E).unwrap();
    display.show_pattern_at(5, segmux::with_dot(SEGMENT_TABLE[1])).unwrap();
    display.show_symbol(segmux::symbol::DOT).unwrap();
    display.clear().unwrap();

    assert_eq!(
        *log.borrow(),
        [
            Event::Select(3),
            Event::Write(0x6F),
            Event::Select(4),
            Event::Write(0x79),
            Event::Select(5),
            Event::Write(0x86),
            Event::Write(0x80),
            Event::Write(0x00),
        ]
    );
}

#[test]
fn direct_write_errors_touch_nothing() {
    let config = DisplayConfig::new().with_symbol_set(SymbolSet::DigitsOnly);
    let (mut display, log) = bank(8, false, config);

    assert_eq!(display.show_at(8, 1), Err(DisplayError::InvalidLocation(8)));
    assert_eq!(
        display.show_letter_at(0, Letter::A),
        Err(DisplayError::InvalidSymbol(10))
    );
    assert_eq!(display.show_symbol(16), Err(DisplayError::InvalidSymbol(16)));
    assert!(log.borrow().is_empty());
}

#[test]
fn rejected_position_keeps_enable_gate_open() {
    let config = DisplayConfig::new().with_enable_line(EnableLine::Present);
    let (mut display, log) = bank(8, true, config);
    display.init().unwrap();
    log.borrow_mut().clear();

    assert_eq!(display.show_at(8, 1), Err(DisplayError::InvalidLocation(8)));
    assert_eq!(
        display.show_letter_at(9, Letter::A),
        Err(DisplayError::InvalidLocation(9))
    );
    assert_eq!(
        display.show_pattern_at(u8::MAX, 0x06),
        Err(DisplayError::InvalidLocation(255))
    );
    assert!(log.borrow().is_empty());

    display.show_at(2, 1).unwrap();
    assert_eq!(
        *log.borrow(),
        [
            Event::Enable(false),
            Event::Select(2),
            Event::Enable(true),
            Event::Write(0x06),
        ]
    );
}

#[test]
fn banks_scan_independently() {
    let (mut left, left_log) = bank(8, false, DisplayConfig::new());
    let (mut right, right_log) = bank(8, false, DisplayConfig::new());

    for _ in 0..3 {
        left.advance(1u8, Window::FULL).unwrap();
    }
    right.advance(1u8, Window::FULL).unwrap();

    assert_eq!(left.position(), 3);
    assert_eq!(right.position(), 1);
    assert_eq!(selections(&left_log), [0, 1, 2]);
    assert_eq!(selections(&right_log), [0]);

    let (decoder, _bus) = left.destroy();
    assert_eq!(decoder.positions(), 8);
}
