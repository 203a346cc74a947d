//! # textconv-core
//!
//! Bounds-checked textual-to-binary conversion for untrusted input.
//!
//! Decimal text becomes a fixed-width integer with explicit min/max clamping
//! and default-value fallback; address text becomes a tagged binary
//! socket-address record via ordered format probing. All logic is safe Rust
//! with no syscalls. No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod integer;
pub mod net;
