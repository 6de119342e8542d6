//! Integer helpers the scan pipeline is built on.

use num_traits::PrimInt;

// zero for bit numbers past the byte, so the helpers below leave `value` alone
fn mask(n: u8) -> u8 {
    1u8.checked_shl(u32::from(n)).unwrap_or(0)
}

pub fn set_bit(value: &mut u8, n: u8) {
    *value |= mask(n);
}

pub fn clear_bit(value: &mut u8, n: u8) {
    *value &= !mask(n);
}

pub fn toggle_bit(value: &mut u8, n: u8) {
    *value ^= mask(n);
}

pub fn check_bit(value: u8, n: u8) -> bool {
    value & mask(n) != 0
}

/// Moves the low nibble into the high nibble.
pub fn shift_low(hex: u8) -> u8 {
    hex << 4
}

/// Moves the high nibble into the low nibble.
pub fn shift_high(hex: u8) -> u8 {
    (hex >> 4) & 0x0F
}

/// `base` raised to `exponent`, `None` on overflow.
pub fn checked_pow<T: PrimInt>(base: T, exponent: u8) -> Option<T> {
    num_traits::checked_pow(base, exponent as usize)
}

/// Decimal digit of `value` at `place`, counted from the least significant (place 0).
///
/// Places past the last digit read as 0, including places beyond what a `u32` can hold.
pub fn digit_at(value: u32, place: u8) -> u8 {
    radix_digit_at(value, place, 10)
}

/// Hex digit of `value` at `place`, counted from the least significant nibble.
pub fn hex_digit_at(value: u32, place: u8) -> u8 {
    radix_digit_at(value, place, 16)
}

fn radix_digit_at(value: u32, place: u8, radix: u32) -> u8 {
    match checked_pow(radix, place) {
        Some(divisor) => ((value / divisor) % radix) as u8,
        None => 0,
    }
}

/// Number of decimal digits in `value`; zero has none.
pub fn digit_count(mut value: u32) -> u8 {
    let mut count = 0;
    while value != 0 {
        count += 1;
        value /= 10;
    }
    count
}
