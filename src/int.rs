//! DER encoded integers.
//!
//! Only non-negative integers are supported. Anything that would be
//! negative in two’s complement is rejected as an unsupported encoding.

use crate::definition::{Content, Definition};
use crate::error::Error;
use crate::params::Params;
use crate::tag::Tag;
use crate::value::{Kind, Value};


//------------ integer -------------------------------------------------------

/// Returns a definition of the INTEGER type for non-negative values.
pub fn integer() -> Definition<Integer> {
    Definition::new(
        Integer,
        Params::universal(Tag::INTEGER.number(), false)
            .with_kind(Kind::Integer)
    )
}


//------------ Integer -------------------------------------------------------

/// The content of a non-negative INTEGER value.
///
/// # DER Encoding
///
/// In DER, an INTEGER is encoded as a primitive value with the content
/// octets providing a variable-length, big-endian, two‘s complement byte
/// sequence of that integer. Thus, the most-significant bit of the first
/// octet serves as the sign bit. For positive numbers that have this bit
/// set, an extra zero octet is prepended.
///
/// The encoding must use the smallest possible number of octets, i.e., the
/// first nine bits of a multi-octet integer may not all be the same. We
/// reject integers that violate this rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integer;

impl Integer {
    /// The maximum number of content octets that fit into an `i128`.
    ///
    /// A minimal encoding with a leading zero octet always has the sign bit
    /// of the next octet set and thus never fits.
    const MAX_LEN: usize = 16;

    /// Checks that an integer is started correctly.
    ///
    /// Specifically, checks that there is at least one octet, that the
    /// integer isn’t negative, and that it is encoded minimally.
    fn check_head(content: &[u8]) -> Result<(), Error> {
        match (content.first(), content.get(1).map(|x| x & 0x80 != 0)) {
            (None, _) => {
                xerr!(Err(Error::InvalidEncoding("empty integer")))
            }
            (Some(first), _) if first & 0x80 != 0 => {
                xerr!(Err(Error::UnsupportedEncoding("negative integer")))
            }
            (Some(0), Some(false)) => {
                xerr!(Err(Error::InvalidEncoding("non-minimal integer")))
            }
            _ => Ok(())
        }
    }

    /// Decodes the content octets into a number.
    pub fn from_content(content: &[u8]) -> Result<i128, Error> {
        Self::check_head(content)?;

        if content.len() > Self::MAX_LEN {
            xerr!(return Err(Error::UnsupportedEncoding("integer too large")))
        }
        Ok(content.iter().fold(0i128, |res, &octet| {
            (res << 8) | i128::from(octet)
        }))
    }

    /// Appends the minimal encoding of a non-negative number.
    pub fn append_content(
        number: i128, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        if number < 0 {
            xerr!(return Err(Error::UnsupportedEncoding("negative integer")))
        }
        let octets = number.to_be_bytes();
        let start = octets.iter().position(|&octet| octet != 0)
            .unwrap_or(octets.len() - 1);
        if octets[start] & 0x80 != 0 {
            target.push(0);
        }
        target.extend_from_slice(&octets[start..]);
        Ok(())
    }
}

impl Content for Integer {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        Self::from_content(content).map(Value::Integer)
    }

    fn encode_content(
        &self, _params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        match *value {
            Value::Integer(number) => Self::append_content(number, target),
            ref value => {
                xerr!(Err(Error::type_mismatch(Kind::Integer, value)))
            }
        }
    }
}


//============ Tests =========================================================
