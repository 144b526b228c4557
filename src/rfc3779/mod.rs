//! IP address prefixes as used by RFC 3779.
//!
//! RFC 3779 certificate extensions delegate IP address space. Prefixes are
//! encoded as BIT STRINGs containing only the leading bits of an address
//! that are covered by the prefix. The type definitions in this module
//! layer the familiar textual form on top of that encoding via
//! [`Codec::extend`], so that a prefix is decoded into a value like
//! `"192.0.2.0/24"` and such a value can be encoded again.
//!
//! The conversion itself is available through
//! [`AddressFamily::format_prefix`] and [`AddressFamily::parse_prefix`].
//!
//! [`Codec::extend`]: crate::Codec::extend

pub use self::family::AddressFamily;
pub use self::prefix::{
    ADDRESS_FAMILY, ADDRESS_PREFIX, address_prefix, address_prefixes,
    family_prefix,
};

mod family;
mod prefix;
