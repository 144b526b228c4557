//! Type definitions for IP address prefixes.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::codec::Codec;
use crate::definition::Definition;
use crate::error::Error;
use crate::params::Options;
use crate::string::{bit_string, octet_string};
use crate::structure::{SequenceOf, sequence, sequence_of};
use crate::value::{Kind, Value};
use super::family::AddressFamily;


//------------ Component Names -----------------------------------------------

/// The name of the component holding the address family.
pub const ADDRESS_FAMILY: &str = "addressFamily";

/// The name of the component holding the address prefix.
pub const ADDRESS_PREFIX: &str = "addressPrefix";


//------------ address_prefix ------------------------------------------------

/// Returns a definition of an address prefix of the given family.
///
/// The prefix is encoded as a BIT STRING containing the leading bits of
/// the address. Values are the textual form of the prefix, e.g.,
/// `"192.0.2.0/24"`.
pub fn address_prefix(
    family: AddressFamily
) -> impl Codec<Value = Value> + Send + Sync + 'static {
    bit_string().extend(
        move |value: Value| -> Result<Value, Error> {
            format_bits(family, &value)
        },
        move |value: &Value| -> Result<Value, Error> {
            parse_text(family, value)
        }
    )
}


//------------ address_prefixes ----------------------------------------------

/// Returns a definition of a SEQUENCE OF address prefixes.
pub fn address_prefixes(family: AddressFamily) -> Definition<SequenceOf> {
    sequence_of(address_prefix(family).shared())
}


//------------ family_prefix -------------------------------------------------

/// Returns a definition of an address prefix along with its family.
///
/// The definition is a SEQUENCE of an `addressFamily` OCTET STRING and an
/// `addressPrefix` BIT STRING. In values, the address prefix is given in
/// its textual form for the family named by the first component.
pub fn family_prefix() -> impl Codec<Value = Value> + Send + Sync + 'static {
    sequence([
        (
            ADDRESS_FAMILY,
            octet_string().with(&Options::new().size(2, 3)).shared()
        ),
        (ADDRESS_PREFIX, bit_string().shared()),
    ]).extend(
        |value: Value| -> Result<Value, Error> {
            convert_prefix(&value, format_bits)
        },
        |value: &Value| -> Result<Value, Error> {
            convert_prefix(value, parse_text)
        }
    )
}


//------------ Helper Functions ----------------------------------------------

/// Converts a bits value into the textual form of a prefix.
fn format_bits(family: AddressFamily, value: &Value) -> Result<Value, Error> {
    match value.as_bits() {
        Some(bits) => family.format_prefix(bits).map(Value::Text),
        None => xerr!(Err(Error::type_mismatch(Kind::Bits, value)))
    }
}

/// Converts the textual form of a prefix into a bits value.
fn parse_text(family: AddressFamily, value: &Value) -> Result<Value, Error> {
    match value.as_text() {
        Some(text) => family.parse_prefix(text).map(Value::Bits),
        None => xerr!(Err(Error::type_mismatch(Kind::Text, value)))
    }
}

/// Converts the prefix component of a record via `op`.
///
/// The address family is taken from the family component. All other
/// components are kept as they are.
fn convert_prefix(
    value: &Value,
    op: fn(AddressFamily, &Value) -> Result<Value, Error>,
) -> Result<Value, Error> {
    let Value::Record(fields) = value else {
        xerr!(return Err(Error::type_mismatch(Kind::Record, value)))
    };
    let family = match value.get(ADDRESS_FAMILY).and_then(Value::as_bytes) {
        Some(octets) => AddressFamily::from_afi(octets)?,
        None => {
            xerr!(return Err(Error::conformance("missing address family")))
        }
    };
    let mut res = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let field = if name == ADDRESS_PREFIX {
            op(family, field)?
        }
        else {
            field.clone()
        };
        res.push((name.clone(), field));
    }
    Ok(Value::Record(res))
}


//============ Tests =========================================================
