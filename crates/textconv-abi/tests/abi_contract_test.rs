//! Integration test: C boundary contract.
//!
//! Drives the extern "C" surface with null-terminated inputs and verifies
//! the status out-parameter protocol and the native sockaddr layouts the
//! address converter produces.
//!
//! Run: cargo test -p textconv-abi --test abi_contract_test

use std::ffi::{CString, c_int};
use std::mem;

use textconv_abi::{
    TC_ERR_ABOVE_MAX, TC_ERR_BELOW_MIN, TC_ERR_BUFFER, TC_ERR_NO_DIGITS, TC_ERR_SYSTEM,
    TC_ERR_TRAILING, TC_OK, tc_convert_address, tc_parse_i32, tc_parse_negative_i16,
    tc_parse_port, tc_parse_positive_i8, tc_parse_u8,
};
use textconv_core::net::UNIX_PATH_MAX;

fn cstr(s: &str) -> CString {
    CString::new(s).expect("test string contains no interior null")
}

fn zeroed_storage() -> libc::sockaddr_storage {
    unsafe { mem::zeroed() }
}

// ---------------------------------------------------------------------------
// Integer parsers
// ---------------------------------------------------------------------------

#[test]
fn parse_i32_clean() {
    let text = cstr("42");
    let mut signal: c_int = -1;
    let value = unsafe { tc_parse_i32(text.as_ptr(), 0, &mut signal) };
    assert_eq!(value, 42);
    assert_eq!(signal, TC_OK);
}

#[test]
fn parse_i32_null_signal_pointer_is_allowed() {
    let text = cstr("42");
    let value = unsafe { tc_parse_i32(text.as_ptr(), 0, std::ptr::null_mut()) };
    assert_eq!(value, 42);
}

#[test]
fn parse_null_input_reports_system_and_returns_default() {
    let mut signal: c_int = -1;
    let value = unsafe { tc_parse_i32(std::ptr::null(), 99, &mut signal) };
    assert_eq!(value, 99);
    assert_eq!(signal, TC_ERR_SYSTEM);
}

#[test]
fn parse_u8_clamp_and_signal() {
    let mut signal: c_int = -1;
    let value = unsafe { tc_parse_u8(cstr("255").as_ptr(), 0, &mut signal) };
    assert_eq!((value, signal), (255, TC_OK));

    let value = unsafe { tc_parse_u8(cstr("256").as_ptr(), 0, &mut signal) };
    assert_eq!((value, signal), (255, TC_ERR_ABOVE_MAX));

    let value = unsafe { tc_parse_u8(cstr("abc").as_ptr(), 7, &mut signal) };
    assert_eq!((value, signal), (7, TC_ERR_NO_DIGITS));

    let value = unsafe { tc_parse_u8(cstr("12abc").as_ptr(), 7, &mut signal) };
    assert_eq!((value, signal), (7, TC_ERR_TRAILING));
}

#[test]
fn parse_range_variants() {
    let mut signal: c_int = -1;
    let value = unsafe { tc_parse_positive_i8(cstr("-1").as_ptr(), 0, &mut signal) };
    assert_eq!((value, signal), (0, TC_ERR_BELOW_MIN));

    let value = unsafe { tc_parse_negative_i16(cstr("5").as_ptr(), -3, &mut signal) };
    assert_eq!((value, signal), (-1, TC_ERR_ABOVE_MAX));
}

#[test]
fn parse_port_contract() {
    let mut signal: c_int = -1;
    let value = unsafe { tc_parse_port(cstr("8080").as_ptr(), &mut signal) };
    assert_eq!((value, signal), (8080, TC_OK));

    let value = unsafe { tc_parse_port(cstr("65536").as_ptr(), &mut signal) };
    assert_eq!((value, signal), (65535, TC_ERR_ABOVE_MAX));

    let value = unsafe { tc_parse_port(cstr("").as_ptr(), &mut signal) };
    assert_eq!((value, signal), (0, TC_ERR_NO_DIGITS));
}

// ---------------------------------------------------------------------------
// Address conversion
// ---------------------------------------------------------------------------

#[test]
fn convert_null_output_buffer_is_rejected() {
    let text = cstr("127.0.0.1");
    let rc = unsafe { tc_convert_address(text.as_ptr(), std::ptr::null_mut()) };
    assert_eq!(rc, TC_ERR_BUFFER);
}

#[test]
fn convert_null_input_is_rejected_without_writing() {
    let mut storage = zeroed_storage();
    storage.ss_family = 0xbeu8 as libc::sa_family_t;
    let rc = unsafe { tc_convert_address(std::ptr::null(), &mut storage) };
    assert_eq!(rc, TC_ERR_BUFFER);
    assert_eq!(storage.ss_family, 0xbeu8 as libc::sa_family_t);
}

#[test]
fn convert_ipv4_native_layout() {
    let mut storage = zeroed_storage();
    let rc = unsafe { tc_convert_address(cstr("127.0.0.1").as_ptr(), &mut storage) };
    assert_eq!(rc, TC_OK);
    assert_eq!(storage.ss_family, libc::AF_INET as libc::sa_family_t);

    let sin = unsafe { *(&raw const storage).cast::<libc::sockaddr_in>() };
    assert_eq!(sin.sin_port, 0);
    assert_eq!(sin.sin_addr.s_addr.to_ne_bytes(), [127, 0, 0, 1]);
}

#[test]
fn convert_ipv6_native_layout() {
    let mut storage = zeroed_storage();
    let rc = unsafe { tc_convert_address(cstr("::1").as_ptr(), &mut storage) };
    assert_eq!(rc, TC_OK);
    assert_eq!(storage.ss_family, libc::AF_INET6 as libc::sa_family_t);

    let sin6 = unsafe { *(&raw const storage).cast::<libc::sockaddr_in6>() };
    assert_eq!(sin6.sin6_port, 0);
    let mut loopback = [0u8; 16];
    loopback[15] = 1;
    assert_eq!(sin6.sin6_addr.s6_addr, loopback);
}

#[test]
fn convert_unix_native_layout() {
    let mut storage = zeroed_storage();
    let rc = unsafe { tc_convert_address(cstr("/tmp/socket.sock").as_ptr(), &mut storage) };
    assert_eq!(rc, TC_OK);
    assert_eq!(storage.ss_family, libc::AF_UNIX as libc::sa_family_t);

    let sun = unsafe { *(&raw const storage).cast::<libc::sockaddr_un>() };
    let path: Vec<u8> = sun.sun_path.iter().map(|&c| c as u8).collect();
    assert_eq!(&path[..16], b"/tmp/socket.sock");
    assert!(path[16..].iter().all(|&b| b == 0));
}

#[test]
fn convert_unmatched_is_unspec() {
    let mut storage = zeroed_storage();
    let text = "not-an-address-and-also-way-too-long-for-a-socket-path-field-".repeat(3);
    let rc = unsafe { tc_convert_address(cstr(&text).as_ptr(), &mut storage) };
    assert_eq!(rc, TC_OK);
    assert_eq!(storage.ss_family, libc::AF_UNSPEC as libc::sa_family_t);
}

#[test]
fn unix_path_capacity_matches_native_sun_path() {
    let sun: libc::sockaddr_un = unsafe { mem::zeroed() };
    assert_eq!(UNIX_PATH_MAX, mem::size_of_val(&sun.sun_path));
}
