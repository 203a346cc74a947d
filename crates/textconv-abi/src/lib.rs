//! # textconv-abi
//!
//! C-callable boundary for textconv. Inputs are null-terminated strings;
//! diagnostics travel through a caller-supplied status out-parameter, and
//! the address converter writes the platform's native `sockaddr` layouts
//! into a caller-owned `sockaddr_storage`.

use std::ffi::{CStr, c_char, c_int};

use textconv_core::integer::{ParseSignal, RangeDirection};

pub mod integer_abi;
pub mod net_abi;

pub use integer_abi::*;
pub use net_abi::*;

// ---------------------------------------------------------------------------
// Status codes
// ---------------------------------------------------------------------------

/// Conversion completed with no diagnostic.
pub const TC_OK: c_int = 0;
/// No digits were found.
pub const TC_ERR_NO_DIGITS: c_int = 1;
/// Characters remain after the numeric token.
pub const TC_ERR_TRAILING: c_int = 2;
/// The value fell below the minimum and was clamped to it.
pub const TC_ERR_BELOW_MIN: c_int = 3;
/// The value rose above the maximum and was clamped to it.
pub const TC_ERR_ABOVE_MAX: c_int = 4;
/// The underlying decimal scan failed, or the input pointer was null.
pub const TC_ERR_SYSTEM: c_int = 5;
/// The output buffer pointer was null; nothing was written.
pub const TC_ERR_BUFFER: c_int = 6;

pub(crate) fn signal_code(signal: Option<ParseSignal>) -> c_int {
    match signal {
        None => TC_OK,
        Some(ParseSignal::NoDigits) => TC_ERR_NO_DIGITS,
        Some(ParseSignal::TrailingCharacters) => TC_ERR_TRAILING,
        Some(ParseSignal::OutOfRange(RangeDirection::Low)) => TC_ERR_BELOW_MIN,
        Some(ParseSignal::OutOfRange(RangeDirection::High)) => TC_ERR_ABOVE_MAX,
        Some(ParseSignal::SystemParseFailure) => TC_ERR_SYSTEM,
    }
}

/// Stores `code` through `out` when the caller supplied a status location.
///
/// # Safety
/// `out` must be null or valid for writes of `c_int`.
pub(crate) unsafe fn store_signal(out: *mut c_int, code: c_int) {
    if !out.is_null() {
        unsafe { *out = code };
    }
}

/// Reads a null-terminated C string into owned text. Bytes that are not
/// valid UTF-8 are replaced and will fail the strict parsers downstream.
///
/// # Safety
/// `s` must be null or point to a null-terminated string.
pub(crate) unsafe fn cstr_text(s: *const c_char) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(s) };
    Some(text.to_string_lossy().into_owned())
}
