//! ABI layer for the clamped decimal integer parsers.
//!
//! One extern function per width/signedness/range variant, generated from
//! the same table that instantiates the core parsers. Every function returns
//! a usable value (parsed, clamped, or the default) and reports the
//! diagnostic through the optional `signal` out-parameter.

use std::ffi::{c_char, c_int};

macro_rules! parse_abi {
    ($name:ident, $ty:ty, $core:path) => {
        #[doc = concat!(
            "C entry point for `", stringify!($core), "`. `signal`, when",
            " non-null, receives `TC_OK` or the raised `TC_ERR_*` code; a",
            " null `s` reports `TC_ERR_SYSTEM` and returns the default."
        )]
        ///
        /// # Safety
        /// `s` must be null or a valid null-terminated string; `signal`
        /// must be null or valid for writes.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(
            s: *const c_char,
            default_value: $ty,
            signal: *mut c_int,
        ) -> $ty {
            let Some(text) = (unsafe { crate::cstr_text(s) }) else {
                unsafe { crate::store_signal(signal, crate::TC_ERR_SYSTEM) };
                return default_value;
            };
            let (value, raised) = $core(&text, default_value);
            unsafe { crate::store_signal(signal, crate::signal_code(raised)) };
            value
        }
    };
}

parse_abi!(tc_parse_i8, i8, textconv_core::integer::parse_i8);
parse_abi!(tc_parse_i16, i16, textconv_core::integer::parse_i16);
parse_abi!(tc_parse_i32, i32, textconv_core::integer::parse_i32);
parse_abi!(tc_parse_i64, i64, textconv_core::integer::parse_i64);

parse_abi!(tc_parse_u8, u8, textconv_core::integer::parse_u8);
parse_abi!(tc_parse_u16, u16, textconv_core::integer::parse_u16);
parse_abi!(tc_parse_u32, u32, textconv_core::integer::parse_u32);
parse_abi!(tc_parse_u64, u64, textconv_core::integer::parse_u64);

parse_abi!(
    tc_parse_positive_i8,
    i8,
    textconv_core::integer::parse_positive_i8
);
parse_abi!(
    tc_parse_positive_i16,
    i16,
    textconv_core::integer::parse_positive_i16
);
parse_abi!(
    tc_parse_positive_i32,
    i32,
    textconv_core::integer::parse_positive_i32
);
parse_abi!(
    tc_parse_positive_i64,
    i64,
    textconv_core::integer::parse_positive_i64
);

parse_abi!(
    tc_parse_negative_i8,
    i8,
    textconv_core::integer::parse_negative_i8
);
parse_abi!(
    tc_parse_negative_i16,
    i16,
    textconv_core::integer::parse_negative_i16
);
parse_abi!(
    tc_parse_negative_i32,
    i32,
    textconv_core::integer::parse_negative_i32
);
parse_abi!(
    tc_parse_negative_i64,
    i64,
    textconv_core::integer::parse_negative_i64
);
