//! DER encoding for various strings types.
//!
//! This module provides the type definitions for the string types needed
//! by the schemas. There are two types of strings for binary data.
//! OCTET STRINGs contain an unrestricted sequence of octets while BIT
//! STRINGs contain a sequence of bits that does not need to be of a length
//! divisible by eight.
//!
//! In addition, there is IA5String, a character string that contains ASCII
//! characters only. It is encoded the same as an OCTET STRING and only
//! differs in its tag.

//--- Re-exports

pub use self::bit::{BitString, bit_string};
pub use self::octet::{OctetString, ia5string, octet_string};

//--- Private modules

mod bit;
mod octet;
