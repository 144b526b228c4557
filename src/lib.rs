//! Composable type definitions for DER-encoded data.
//!
//! This crate allows describing the ASN.1 types of X.509 certificate
//! extensions and RFC 3779 IP resources in code and then decoding data of
//! these types from their Distinguished Encoding Rules (DER) form into
//! generic [`Value`]s and encoding such values back into DER.
//!
//! # Type Definitions
//!
//! The primitive types are created by the functions [`boolean`],
//! [`integer`], [`bit_string`], [`octet_string`], and [`ia5string`]. Each
//! of them returns a [`Definition`] with the default parameters of the
//! type. These parameters can be changed by handing [`Options`] to
//! [`Definition::with`]. This way, a type can be given an implicit tag,
//! size or value constraints, or names for the bits of a BIT STRING.
//!
//! Types are combined into larger structures via [`sequence`],
//! [`sequence_of`], [`choice`], and [`explicit`]. These take their inner
//! types as a [`Type`], a shareable, type-erased definition created via
//! [`Codec::shared`].
//!
//! All type definitions implement the [`Codec`] trait which provides
//! decoding and encoding. Through [`Codec::extend`] additional conversions
//! can be layered on top of any definition. The [`rfc3779`] module uses
//! this to convert IP address prefixes into their textual form.
//!
//! # Example
//!
//! ```
//! use dertype::{Codec, Options, Value, octet_string, sequence};
//!
//! // AuthorityKeyIdentifier ::= SEQUENCE {
//! //     keyIdentifier [0] IMPLICIT OCTET STRING }
//! let key_id = sequence([(
//!     "keyIdentifier",
//!     octet_string().with(&Options::new().tag(0)).shared()
//! )]);
//!
//! let value = key_id.decode(b"\x30\x04\x80\x02\xAB\xCD").unwrap();
//! assert_eq!(
//!     value.get("keyIdentifier").and_then(Value::as_bytes),
//!     Some(&b"\xAB\xCD"[..])
//! );
//! assert_eq!(key_id.encode(&value).unwrap(), b"\x30\x04\x80\x02\xAB\xCD");
//! ```
//!
//! # Limitations
//!
//! Only what is necessary for the data in question is supported. In
//! particular, tags are limited to the low tag number form, integers to
//! non-negative values that fit into an `i128`, and only the DER forms of
//! values are accepted.

//--- Re-exports

pub use self::boolean::{Boolean, boolean};
pub use self::codec::{Codec, Extended, Type};
pub use self::definition::{Content, Definition, define};
pub use self::error::{Error, Result};
pub use self::header::Header;
pub use self::int::{Integer, integer};
pub use self::params::{Bounds, Options, Params};
pub use self::string::{
    BitString, OctetString, bit_string, ia5string, octet_string,
};
pub use self::structure::{
    Choice, Explicit, Sequence, SequenceOf, choice, explicit, sequence,
    sequence_of,
};
pub use self::tag::{Class, Tag};
pub use self::value::{Kind, Value};


//--- Public modules

#[macro_use] mod debug;

pub mod header;
pub mod int;
pub mod rfc3779;
pub mod string;
pub mod structure;
pub mod tag;


//--- Private modules

mod boolean;
mod codec;
mod definition;
mod error;
mod length;
mod params;
mod value;
