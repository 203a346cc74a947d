//! Clamped decimal integer parsing.
//!
//! Every parser here resolves to a usable value: the parsed number when it
//! is in range, the violated bound when it is not, and the caller's default
//! when no number could be taken from the text at all. A diagnostic signal
//! rides beside the value so callers can still tell success from fallback.

use log::trace;

/// Direction in which a parsed value escaped its allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDirection {
    Low,
    High,
}

impl std::fmt::Display for RangeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeDirection::Low => f.write_str("below minimum"),
            RangeDirection::High => f.write_str("above maximum"),
        }
    }
}

/// Diagnostic raised beside a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseSignal {
    /// No digits were found.
    #[error("no digits were found")]
    NoDigits,
    /// Characters remain after the numeric token.
    #[error("unexpected characters after the number")]
    TrailingCharacters,
    /// The value fell outside `[min, max]` and was clamped to the bound.
    #[error("parsed value is {0}")]
    OutOfRange(RangeDirection),
    /// The underlying decimal scan failed (overflow of the widest
    /// intermediate type).
    #[error("parsing error")]
    SystemParseFailure,
}

/// Scans a leading base-10 token: optional ASCII whitespace, optional sign,
/// digits. Returns `(value, bytes_consumed, overflowed)`; `consumed == 0`
/// means no digits were found (whitespace and sign alone do not count).
fn scan_signed(text: &str) -> (i64, usize, bool) {
    let s = text.as_bytes();
    let mut i = 0;

    while i < s.len() && s[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut negative = false;
    if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }

    // |i64::MIN| exceeds i64::MAX, so the accumulator is unsigned and the
    // cutoff depends on the sign.
    let abs_max: u64 = if negative { 1u64 << 63 } else { i64::MAX as u64 };
    let cutoff = abs_max / 10;
    let cutlim = abs_max % 10;

    let mut acc: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;

    while i < s.len() && s[i].is_ascii_digit() {
        let digit = u64::from(s[i] - b'0');
        if !overflow {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                overflow = true;
            } else {
                acc = acc * 10 + digit;
            }
        }
        any_digits = true;
        i += 1;
    }

    if !any_digits {
        return (0, 0, false);
    }

    let value = if negative {
        (acc as i64).wrapping_neg()
    } else {
        acc as i64
    };
    (value, i, overflow)
}

/// Unsigned counterpart of [`scan_signed`]. A leading `-` negates the
/// accumulated magnitude with wraparound, as the C `strtoul` grammar does.
fn scan_unsigned(text: &str) -> (u64, usize, bool) {
    let s = text.as_bytes();
    let mut i = 0;

    while i < s.len() && s[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut negative = false;
    if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }

    let cutoff = u64::MAX / 10;
    let cutlim = u64::MAX % 10;

    let mut acc: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;

    while i < s.len() && s[i].is_ascii_digit() {
        let digit = u64::from(s[i] - b'0');
        if !overflow {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                overflow = true;
            } else {
                acc = acc * 10 + digit;
            }
        }
        any_digits = true;
        i += 1;
    }

    if !any_digits {
        return (0, 0, false);
    }

    let value = if negative { acc.wrapping_neg() } else { acc };
    (value, i, overflow)
}

/// Parses `text` as a base-10 integer clamped to `[min, max]` (inclusive).
///
/// Resolution policy: a failed scan (no digits, trailing characters, or
/// overflow of the widest intermediate) resolves to `default`; an in-grammar
/// value outside the bounds resolves to the violated bound. The signal names
/// which case occurred; `None` means the value was parsed cleanly.
pub fn parse_integer(
    text: &str,
    default: i64,
    min: i64,
    max: i64,
) -> (i64, Option<ParseSignal>) {
    trace!("parse_integer({text:?}, default={default}, min={min}, max={max})");
    let (parsed, consumed, overflowed) = scan_signed(text);

    if overflowed {
        return (default, Some(ParseSignal::SystemParseFailure));
    }
    if consumed == 0 {
        return (default, Some(ParseSignal::NoDigits));
    }
    if consumed < text.len() {
        return (default, Some(ParseSignal::TrailingCharacters));
    }
    if parsed < min {
        return (min, Some(ParseSignal::OutOfRange(RangeDirection::Low)));
    }
    if parsed > max {
        return (max, Some(ParseSignal::OutOfRange(RangeDirection::High)));
    }
    (parsed, None)
}

/// Unsigned counterpart of [`parse_integer`], with implicit lower bound 0.
pub fn parse_unsigned_integer(
    text: &str,
    default: u64,
    max: u64,
) -> (u64, Option<ParseSignal>) {
    trace!("parse_unsigned_integer({text:?}, default={default}, max={max})");
    let (parsed, consumed, overflowed) = scan_unsigned(text);

    if overflowed {
        return (default, Some(ParseSignal::SystemParseFailure));
    }
    if consumed == 0 {
        return (default, Some(ParseSignal::NoDigits));
    }
    if consumed < text.len() {
        return (default, Some(ParseSignal::TrailingCharacters));
    }
    if parsed > max {
        return (max, Some(ParseSignal::OutOfRange(RangeDirection::High)));
    }
    (parsed, None)
}

// ---------------------------------------------------------------------------
// Width-specific entry points
// ---------------------------------------------------------------------------
//
// Thin instantiations of the widest-type routines with fixed bounds. The
// narrowing cast is lossless: the clamp already guarantees the value fits.

macro_rules! signed_parsers {
    ($ty:ty, $plain:ident, $positive:ident, $negative:ident) => {
        #[doc = concat!(
            "Parses `text` as `", stringify!($ty),
            "`, clamping to the full range of the type."
        )]
        pub fn $plain(text: &str, default: $ty) -> ($ty, Option<ParseSignal>) {
            let (value, signal) = parse_integer(
                text,
                i64::from(default),
                i64::from(<$ty>::MIN),
                i64::from(<$ty>::MAX),
            );
            (value as $ty, signal)
        }

        #[doc = concat!(
            "Parses `text` as a non-negative `", stringify!($ty),
            "`, clamping to `[0, ", stringify!($ty), "::MAX]`."
        )]
        pub fn $positive(text: &str, default: $ty) -> ($ty, Option<ParseSignal>) {
            let (value, signal) =
                parse_integer(text, i64::from(default), 0, i64::from(<$ty>::MAX));
            (value as $ty, signal)
        }

        #[doc = concat!(
            "Parses `text` as a negative `", stringify!($ty),
            "`, clamping to `[", stringify!($ty), "::MIN, -1]`."
        )]
        pub fn $negative(text: &str, default: $ty) -> ($ty, Option<ParseSignal>) {
            let (value, signal) =
                parse_integer(text, i64::from(default), i64::from(<$ty>::MIN), -1);
            (value as $ty, signal)
        }
    };
}

macro_rules! unsigned_parsers {
    ($ty:ty, $name:ident) => {
        #[doc = concat!(
            "Parses `text` as `", stringify!($ty),
            "`, clamping to the full range of the type."
        )]
        pub fn $name(text: &str, default: $ty) -> ($ty, Option<ParseSignal>) {
            let (value, signal) =
                parse_unsigned_integer(text, u64::from(default), u64::from(<$ty>::MAX));
            (value as $ty, signal)
        }
    };
}

signed_parsers!(i8, parse_i8, parse_positive_i8, parse_negative_i8);
signed_parsers!(i16, parse_i16, parse_positive_i16, parse_negative_i16);
signed_parsers!(i32, parse_i32, parse_positive_i32, parse_negative_i32);
signed_parsers!(i64, parse_i64, parse_positive_i64, parse_negative_i64);

unsigned_parsers!(u8, parse_u8);
unsigned_parsers!(u16, parse_u16);
unsigned_parsers!(u32, parse_u32);
unsigned_parsers!(u64, parse_u64);

// ===========================================================================
// Tests
// ===========================================================================
