//! DER-encoded bit strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::definition::{Content, Definition};
use crate::error::Error;
use crate::params::Params;
use crate::tag::Tag;
use crate::value::{Kind, Value};


//------------ bit_string ----------------------------------------------------

/// Returns a definition of the BIT STRING type.
///
/// If the definition is given bit names via [`Options::names`], values are
/// decoded into [`Value::Flags`]. Otherwise they are decoded into
/// [`Value::Bits`].
///
/// [`Options::names`]: crate::Options::names
pub fn bit_string() -> Definition<BitString> {
    Definition::new(
        BitString,
        Params::universal(Tag::BIT_STRING.number(), false)
            .with_kind(Kind::Bits)
    )
}


//------------ BitString -----------------------------------------------------

/// The content of a BIT STRING value.
///
/// # DER Encoding
///
/// In DER, bit strings are always encoded as primitive values. The first
/// octet of the content contains the number of unused bits in the last
/// octet and the following octets contain the bits with the first bit in
/// the most significant bit of the octet. The unused bits must be zero.
///
/// For bit strings with named bits, trailing zero bits are removed before
/// encoding. Size bounds then apply to the number of encoded bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitString;

impl BitString {
    /// Unpacks the content of a bit string into its bits.
    pub fn unpack(content: &[u8]) -> Result<Vec<bool>, Error> {
        let Some((&unused, octets)) = content.split_first() else {
            xerr!(return Err(Error::InvalidEncoding(
                "missing unused bits octet"
            )))
        };
        if unused > 7 {
            xerr!(return Err(Error::InvalidEncoding(
                "more than seven unused bits"
            )))
        }
        match octets.last() {
            None if unused != 0 => {
                xerr!(return Err(Error::InvalidEncoding(
                    "unused bits in empty bit string"
                )))
            }
            Some(last) if last & ((1u8 << unused) - 1) != 0 => {
                xerr!(return Err(Error::InvalidEncoding(
                    "non-zero unused bits"
                )))
            }
            _ => { }
        }
        let len = octets.len() * 8 - usize::from(unused);
        Ok(
            (0..len).map(|bit| {
                octets[bit >> 3] & (0x80 >> (bit & 7)) != 0
            }).collect()
        )
    }

    /// Appends the packed content for the given bits to `target`.
    ///
    /// The last octet is padded with zero bits and the number of those is
    /// recorded in the first octet.
    pub fn append_packed(bits: &[bool], target: &mut Vec<u8>) {
        target.push(((8 - bits.len() % 8) % 8) as u8);
        target.extend(bits.chunks(8).map(|chunk| {
            chunk.iter().enumerate().fold(0u8, |octet, (idx, &bit)| {
                if bit { octet | (0x80 >> idx) } else { octet }
            })
        }));
    }

    /// Converts bits into flags with the given names.
    fn to_flags(bits: Vec<bool>, names: &[String]) -> Result<Value, Error> {
        if bits.iter().skip(names.len()).any(|bit| *bit) {
            xerr!(return Err(Error::InvalidEncoding(
                "bit set beyond the named bits"
            )))
        }
        Ok(Value::Flags(
            names.iter().enumerate().map(|(idx, name)| {
                (name.clone(), bits.get(idx).copied().unwrap_or(false))
            }).collect()
        ))
    }

    /// Converts flags into bits positioned by the given names.
    fn from_flags(
        flags: &[(String, bool)], names: &[String]
    ) -> Result<Vec<bool>, Error> {
        if let Some((name, _)) = flags.iter().find(|(name, _)| {
            !names.contains(name)
        }) {
            xerr!(return Err(Error::ValueOutOfRange(
                format!("unknown named bit '{}'", name)
            )))
        }
        let mut bits: Vec<_> = names.iter().map(|name| {
            flags.iter().any(|(flag, set)| flag == name && *set)
        }).collect();
        while bits.last() == Some(&false) {
            bits.pop();
        }
        Ok(bits)
    }
}

impl Content for BitString {
    fn decode_content(
        &self, params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        let bits = Self::unpack(content)?;
        match params.names() {
            Some(names) => Self::to_flags(bits, names),
            None => Ok(Value::Bits(bits)),
        }
    }

    fn encode_content(
        &self, params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        match (value, params.names()) {
            (Value::Bits(bits), None) => {
                Self::append_packed(bits, target);
            }
            (Value::Bits(_), Some(_)) => {
                xerr!(return Err(Error::conformance(
                    "plain bits for a bit string with named bits"
                )))
            }
            (Value::Flags(flags), Some(names)) => {
                Self::append_packed(&Self::from_flags(flags, names)?, target)
            }
            (Value::Flags(_), None) => {
                xerr!(return Err(Error::conformance(
                    "named bits for a bit string without names"
                )))
            }
            (value, _) => {
                xerr!(return Err(Error::type_mismatch(Kind::Bits, value)))
            }
        }
        Ok(())
    }
}


//============ Tests =========================================================
