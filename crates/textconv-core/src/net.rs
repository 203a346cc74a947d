//! Socket-address text conversion.
//!
//! Turns free-form address text into a tagged binary socket-address record
//! by ordered probing, most-specific format first: dotted-decimal IPv4, then
//! colon-hex IPv6, then Unix-domain path, else unspecified. Each probe is a
//! strict accept/reject parser; a failed probe carries nothing into the
//! next. Pure logic, no syscalls.

use log::trace;

use crate::integer::{ParseSignal, parse_u16};

// ---------------------------------------------------------------------------
// Address families (AF_*)
// ---------------------------------------------------------------------------

/// Unspecified address family.
pub const AF_UNSPEC: i32 = 0;
/// Unix domain sockets.
pub const AF_UNIX: i32 = 1;
/// IPv4 Internet protocols.
pub const AF_INET: i32 = 2;
/// IPv6 Internet protocols.
pub const AF_INET6: i32 = 10;

/// Capacity of the `sun_path` field of `sockaddr_un` on Linux, including the
/// reserved null terminator.
pub const UNIX_PATH_MAX: usize = 108;

// ---------------------------------------------------------------------------
// SocketAddress
// ---------------------------------------------------------------------------

/// A converted socket address, constructed fresh per call and owned by the
/// caller. The variant is the authoritative family tag; address bytes are in
/// network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketAddress {
    /// IPv4 endpoint: four address octets.
    V4([u8; 4]),
    /// IPv6 endpoint: sixteen address octets.
    V6([u8; 16]),
    /// Unix-domain path: zero-filled buffer holding the path followed by its
    /// null terminator.
    Unix([u8; UNIX_PATH_MAX]),
    /// The text matched no recognized format. A well-defined outcome, not an
    /// error.
    Unspec,
}

impl SocketAddress {
    /// Returns the `AF_*` tag for the held variant.
    pub fn family(&self) -> i32 {
        match self {
            SocketAddress::V4(_) => AF_INET,
            SocketAddress::V6(_) => AF_INET6,
            SocketAddress::Unix(_) => AF_UNIX,
            SocketAddress::Unspec => AF_UNSPEC,
        }
    }
}

// ---------------------------------------------------------------------------
// Port parsing
// ---------------------------------------------------------------------------

/// Parses `text` as a 16-bit port number with default 0.
///
/// Same clamp-and-signal taxonomy as the [`crate::integer`] parsers.
pub fn parse_port(text: &str) -> (u16, Option<ParseSignal>) {
    parse_u16(text, 0)
}

// ---------------------------------------------------------------------------
// Address conversion
// ---------------------------------------------------------------------------

/// Converts address text to a tagged socket-address record.
///
/// Formats are probed in a fixed priority order and the first strict parser
/// that accepts the text wins:
///
/// 1. dotted-decimal IPv4;
/// 2. colon-hex IPv6 (including compressed `::` forms);
/// 3. Unix-domain path, if the text fits `sun_path` with a null terminator;
/// 4. otherwise [`SocketAddress::Unspec`].
pub fn convert_address(text: &str) -> SocketAddress {
    trace!("convert_address({text:?})");

    if let Some(octets) = parse_ipv4(text) {
        return SocketAddress::V4(octets);
    }
    if let Some(octets) = parse_ipv6(text) {
        return SocketAddress::V6(octets);
    }
    if text.len() <= UNIX_PATH_MAX - 1 {
        let mut path = [0u8; UNIX_PATH_MAX];
        path[..text.len()].copy_from_slice(text.as_bytes());
        return SocketAddress::Unix(path);
    }
    SocketAddress::Unspec
}

// ---------------------------------------------------------------------------
// IPv4 probe
// ---------------------------------------------------------------------------

/// Strict dotted-decimal IPv4: exactly four octets, each 0-255, decimal
/// digits only, no leading zeros.
pub fn parse_ipv4(text: &str) -> Option<[u8; 4]> {
    let mut fields = text.split('.');
    let mut octets = [0u8; 4];
    for slot in &mut octets {
        *slot = parse_octet(fields.next()?)?;
    }
    // A fifth field means trailing junk.
    if fields.next().is_some() {
        return None;
    }
    Some(octets)
}

fn parse_octet(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Reject leading zeros (octal ambiguity).
    if field.len() > 1 && field.starts_with('0') {
        return None;
    }
    let value: u16 = field.parse().ok()?;
    u8::try_from(value).ok()
}

// ---------------------------------------------------------------------------
// IPv6 probe
// ---------------------------------------------------------------------------

/// Strict colon-hex IPv6: the full eight-group form, at most one `::`
/// compression, and an optional trailing dotted-quad (IPv4-mapped) form.
pub fn parse_ipv6(text: &str) -> Option<[u8; 16]> {
    if text.is_empty() {
        return None;
    }
    // A lone leading or trailing colon is only legal as part of "::".
    if (text.starts_with(':') && !text.starts_with("::"))
        || (text.ends_with(':') && !text.ends_with("::"))
    {
        return None;
    }

    let (head, tail) = match text.find("::") {
        Some(pos) => {
            let tail = &text[pos + 2..];
            if tail.contains("::") {
                return None;
            }
            (&text[..pos], Some(tail))
        }
        None => (text, None),
    };

    let mut groups: Vec<u16> = Vec::with_capacity(8);
    push_groups(head, tail.is_none(), &mut groups)?;

    match tail {
        Some(tail) => {
            let mut rest: Vec<u16> = Vec::new();
            push_groups(tail, true, &mut rest)?;
            if groups.len() + rest.len() > 8 {
                return None;
            }
            // The "::" stands for the zero groups needed to reach eight.
            groups.resize(8 - rest.len(), 0);
            groups.extend_from_slice(&rest);
        }
        None => {
            if groups.len() != 8 {
                return None;
            }
        }
    }

    let mut octets = [0u8; 16];
    for (chunk, group) in octets.chunks_exact_mut(2).zip(&groups) {
        chunk.copy_from_slice(&group.to_be_bytes());
    }
    Some(octets)
}

/// Splits a colon-separated run into 16-bit groups. When `at_end`, a final
/// dotted-quad field expands to two groups (IPv4-mapped notation). An empty
/// run contributes nothing.
fn push_groups(run: &str, at_end: bool, out: &mut Vec<u16>) -> Option<()> {
    if run.is_empty() {
        return Some(());
    }
    let mut fields = run.split(':').peekable();
    while let Some(field) = fields.next() {
        if at_end && fields.peek().is_none() && field.contains('.') {
            let quad = parse_ipv4(field)?;
            out.push(u16::from_be_bytes([quad[0], quad[1]]));
            out.push(u16::from_be_bytes([quad[2], quad[3]]));
            return Some(());
        }
        if field.is_empty()
            || field.len() > 4
            || !field.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }
        out.push(u16::from_str_radix(field, 16).ok()?);
    }
    Some(())
}

// ===========================================================================
// Tests
// ===========================================================================
