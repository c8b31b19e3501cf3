//! Address comparison helpers over IPv4/IPv6 socket addresses.
//!
//! `std::net::SocketAddr` already unifies the v4/v6 representations the
//! original distinguished by address family, so both helpers here are thin:
//! the interesting behavior is that they exist as named, testable
//! operations rather than being inlined at every call site.

use std::net::SocketAddr;

/// True iff `a` and `b` are the same address family, address bytes, and
/// port. `SocketAddr`'s own `PartialEq` already implements exactly this, but
/// the spec calls it out as a named operation with its own test coverage.
pub fn addr_equal(a: &SocketAddr, b: &SocketAddr) -> bool {
    a == b
}

/// Host-order port for an IPv4/IPv6 address.
pub fn port_get(addr: &SocketAddr) -> u16 {
    addr.port()
}

