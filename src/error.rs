//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use crate::value::{Kind, Value};


//------------ Error ---------------------------------------------------------

/// An error happened while decoding or encoding a value.
///
/// A value that simply doesn’t fit a type definition – because its tag is
/// different or because it violates one of the definition’s bounds – is not
/// an error. Instead, [`Codec::decode_raw`] returns `Ok(None)` in this case
/// so that a CHOICE can move on to the next alternative. All the variants
/// here are fatal and abort the whole decoding or encoding attempt.
///
/// [`Codec::decode_raw`]: crate::Codec::decode_raw
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The length octets don’t agree with the amount of content available.
    #[error(
        "length octets announce {declared} octets but {actual} are present"
    )]
    DataLengthMismatch {
        /// The length given in the length octets.
        declared: usize,

        /// The number of octets actually following the header.
        actual: usize,
    },

    /// A SEQUENCE had data left over after its last component.
    #[error("{0} octets of excess data after last component")]
    ExcessData(usize),

    /// The data is encoded in a form this crate doesn’t support.
    ///
    /// This covers the indefinite length form, high tag numbers, and
    /// negative integers.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(&'static str),

    /// The data is not correctly encoded.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    /// The data or value doesn’t conform to the type definition.
    #[error("conformance error: {0}")]
    Conformance(String),

    /// A value to be encoded violates the bounds of its definition.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    /// A value of the wrong kind was given for encoding.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind required by the definition.
        expected: Kind,

        /// The kind of the value that was given.
        found: Kind,
    },

    /// A number given as an integer value has a fractional part.
    #[error("not an integer")]
    NotAnInteger,

    /// The textual form of an IP address prefix is malformed.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    pub(crate) fn conformance(msg: impl Into<String>) -> Self {
        Error::Conformance(msg.into())
    }

    pub(crate) fn type_mismatch(expected: Kind, value: &Value) -> Self {
        Error::TypeMismatch { expected, found: value.kind() }
    }

    pub(crate) fn invalid_address(msg: impl Into<String>) -> Self {
        Error::InvalidAddress(msg.into())
    }
}


//------------ Result --------------------------------------------------------

/// The result type of all codec operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
