//! ABI layer for socket-address conversion.
//!
//! `tc_convert_address` writes whichever native `sockaddr` layout matches
//! the text into a caller-owned `sockaddr_storage`, so the result can be
//! handed straight to `bind`/`connect`. The family field is authoritative;
//! inet port fields are left zero (the conversion carries no port).

use std::ffi::{c_char, c_int};

use textconv_core::net::{self, SocketAddress};

/// C entry point for [`textconv_core::net::parse_port`]: a 16-bit port with
/// default 0. `signal` follows the same contract as the integer parsers.
///
/// # Safety
/// `s` must be null or a valid null-terminated string; `signal` must be
/// null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tc_parse_port(s: *const c_char, signal: *mut c_int) -> u16 {
    let Some(text) = (unsafe { crate::cstr_text(s) }) else {
        unsafe { crate::store_signal(signal, crate::TC_ERR_SYSTEM) };
        return 0;
    };
    let (value, raised) = net::parse_port(&text);
    unsafe { crate::store_signal(signal, crate::signal_code(raised)) };
    value
}

/// C entry point for [`textconv_core::net::convert_address`].
///
/// Zeroes `addr`, then populates a `sockaddr_in`, `sockaddr_in6`,
/// `sockaddr_un`, or bare `AF_UNSPEC` family tag per the ordered-probe
/// outcome. Returns `TC_OK`, or `TC_ERR_BUFFER` when `addr` or `s` is null
/// (in which case nothing is written). Text matching no format is not an
/// error; it yields the `AF_UNSPEC` record.
///
/// # Safety
/// `s` must be null or a valid null-terminated string; `addr` must be null
/// or valid for writes of `sockaddr_storage`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tc_convert_address(
    s: *const c_char,
    addr: *mut libc::sockaddr_storage,
) -> c_int {
    if addr.is_null() {
        return crate::TC_ERR_BUFFER;
    }
    let Some(text) = (unsafe { crate::cstr_text(s) }) else {
        return crate::TC_ERR_BUFFER;
    };

    let record = net::convert_address(&text);
    unsafe { std::ptr::write_bytes(addr, 0, 1) };

    match record {
        SocketAddress::V4(octets) => {
            let sin = unsafe { &mut *addr.cast::<libc::sockaddr_in>() };
            sin.sin_family = libc::AF_INET as libc::sa_family_t;
            sin.sin_port = 0;
            // Octets are already network byte order.
            sin.sin_addr.s_addr = u32::from_ne_bytes(octets);
        }
        SocketAddress::V6(octets) => {
            let sin6 = unsafe { &mut *addr.cast::<libc::sockaddr_in6>() };
            sin6.sin6_family = libc::AF_INET6 as libc::sa_family_t;
            sin6.sin6_port = 0;
            sin6.sin6_addr.s6_addr = octets;
        }
        SocketAddress::Unix(path) => {
            let sun = unsafe { &mut *addr.cast::<libc::sockaddr_un>() };
            sun.sun_family = libc::AF_UNIX as libc::sa_family_t;
            for (dst, src) in sun.sun_path.iter_mut().zip(path.iter()) {
                *dst = *src as libc::c_char;
            }
        }
        SocketAddress::Unspec => {
            let storage = unsafe { &mut *addr };
            storage.ss_family = libc::AF_UNSPEC as libc::sa_family_t;
        }
    }
    crate::TC_OK
}
