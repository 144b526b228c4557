//! Decoded values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use std::convert::TryFrom;
use bytes::Bytes;
use crate::error::Error;


//------------ Kind ----------------------------------------------------------

/// The kind of a [`Value`].
///
/// Type definitions use the kind to check early that a value given for
/// encoding has the expected shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Boolean,
    Integer,
    Bytes,

    /// A sequence of bits, either plain or as named flags.
    Bits,

    Record,
    List,
    Choice,
    Text,
}

impl Kind {
    /// Returns whether a value is acceptable for this kind.
    ///
    /// Apart from an exact match, text is acceptable where bytes are
    /// expected and is then used as its UTF-8 octets.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value.kind()) {
            (Kind::Bytes, Kind::Text) => true,
            (expected, found) => expected == found
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Bytes => "bytes",
            Kind::Bits => "bits",
            Kind::Record => "record",
            Kind::List => "list",
            Kind::Choice => "choice",
            Kind::Text => "text",
        })
    }
}


//------------ Value ---------------------------------------------------------

/// A value produced by decoding or consumed by encoding.
///
/// Which variant a type definition produces is determined by the
/// definition: primitives produce the simple variants, a SEQUENCE a
/// record of its components in order, a SEQUENCE OF a list, and a CHOICE
/// the name of the matching alternative together with its value.
///
/// Values compare by content rather than by representation. Records and
/// flags are compared as maps, so the order of their entries doesn’t
/// matter and a missing flag equals a cleared one. Text equals bytes with
/// the same octets. A choice equals a record whose single component is the
/// chosen alternative. These are exactly the forms an encoder accepts in
/// place of what decoding the same type produces.
#[derive(Clone, Debug, Eq)]
pub enum Value {
    /// A BOOLEAN.
    Boolean(bool),

    /// An INTEGER.
    ///
    /// Only non-negative values can be encoded.
    Integer(i128),

    /// The content of an OCTET STRING or IA5String.
    Bytes(Bytes),

    /// The bits of a BIT STRING in order.
    Bits(Vec<bool>),

    /// The bits of a BIT STRING with named bits.
    ///
    /// Each name is paired with the bit at its position in the list of
    /// names of the type definition.
    Flags(Vec<(String, bool)>),

    /// The components of a SEQUENCE in order.
    Record(Vec<(String, Value)>),

    /// The elements of a SEQUENCE OF.
    List(Vec<Value>),

    /// The selected alternative of a CHOICE.
    Choice(String, Box<Value>),

    /// A textual refinement of some other value.
    Text(String),
}

impl Value {
    /// Creates a record value from pairs of names and values.
    pub fn record<N, I>(fields: I) -> Self
    where N: Into<String>, I: IntoIterator<Item = (N, Value)> {
        Value::Record(
            fields.into_iter().map(|(n, v)| (n.into(), v)).collect()
        )
    }

    /// Creates a flags value from pairs of names and bits.
    pub fn flags<N, I>(flags: I) -> Self
    where N: Into<String>, I: IntoIterator<Item = (N, bool)> {
        Value::Flags(
            flags.into_iter().map(|(n, v)| (n.into(), v)).collect()
        )
    }

    /// Creates a choice value.
    pub fn choice(name: impl Into<String>, value: Value) -> Self {
        Value::Choice(name.into(), Box::new(value))
    }

    /// Returns the kind of the value.
    pub fn kind(&self) -> Kind {
        match *self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Bytes(_) => Kind::Bytes,
            Value::Bits(_) | Value::Flags(_) => Kind::Bits,
            Value::Record(_) => Kind::Record,
            Value::List(_) => Kind::List,
            Value::Choice(..) => Kind::Choice,
            Value::Text(_) => Kind::Text,
        }
    }

    /// Returns the size of the value for checking size bounds.
    ///
    /// This is the number of octets for bytes and text, the number of bits
    /// or flags for bit strings, and the number of components or elements
    /// for records and lists. Other values don’t have a size.
    ///
    /// A bit string definition with named bits doesn’t use this for flags.
    /// It measures the number of bits that are actually encoded instead.
    pub fn size(&self) -> Option<usize> {
        match *self {
            Value::Bytes(ref bytes) => Some(bytes.len()),
            Value::Text(ref text) => Some(text.len()),
            Value::Bits(ref bits) => Some(bits.len()),
            Value::Flags(ref flags) => Some(flags.len()),
            Value::Record(ref fields) => Some(fields.len()),
            Value::List(ref list) => Some(list.len()),
            Value::Boolean(_) | Value::Integer(_) | Value::Choice(..) => None,
        }
    }

    /// Returns the content of a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(value) => Some(value),
            _ => None
        }
    }

    /// Returns the number of an integer value.
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::Integer(value) => Some(value),
            _ => None
        }
    }

    /// Returns the octets of a bytes or text value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match *self {
            Value::Bytes(ref bytes) => Some(bytes.as_ref()),
            Value::Text(ref text) => Some(text.as_bytes()),
            _ => None
        }
    }

    /// Returns the bits of a plain bit string value.
    pub fn as_bits(&self) -> Option<&[bool]> {
        match *self {
            Value::Bits(ref bits) => Some(bits.as_slice()),
            _ => None
        }
    }

    /// Returns the content of a text value.
    pub fn as_text(&self) -> Option<&str> {
        match *self {
            Value::Text(ref text) => Some(text.as_str()),
            _ => None
        }
    }

    /// Returns the elements of a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match *self {
            Value::List(ref list) => Some(list.as_slice()),
            _ => None
        }
    }

    /// Returns the component or alternative with the given name.
    ///
    /// For a record, returns the value of the component. For a choice,
    /// returns the value if the selected alternative has the name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match *self {
            Value::Record(ref fields) => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            Value::Choice(ref n, ref value) if n == name => {
                Some(value.as_ref())
            }
            _ => None
        }
    }

    /// Returns the bit with the given name of a flags value.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match *self {
            Value::Flags(ref flags) => {
                flags.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
            }
            _ => None
        }
    }
}


//--- PartialEq

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Integer(left), Value::Integer(right)) => left == right,
            (Value::Bits(left), Value::Bits(right)) => left == right,
            (Value::Flags(left), Value::Flags(right)) => {
                left.iter().chain(right).all(|(name, _)| {
                    is_set(left, name) == is_set(right, name)
                })
            }
            (Value::Record(left), Value::Record(right)) => {
                left.len() == right.len()
                && contains_fields(left, right)
                && contains_fields(right, left)
            }
            (Value::List(left), Value::List(right)) => left == right,
            (
                Value::Choice(left_name, left),
                Value::Choice(right_name, right)
            ) => {
                left_name == right_name && left == right
            }
            (Value::Choice(name, value), Value::Record(fields))
            | (Value::Record(fields), Value::Choice(name, value)) => {
                match fields.as_slice() {
                    [(field, field_value)] => {
                        field == name && field_value == value.as_ref()
                    }
                    _ => false
                }
            }
            (left, right) => {
                match (left.as_bytes(), right.as_bytes()) {
                    (Some(left), Some(right)) => left == right,
                    _ => false
                }
            }
        }
    }
}

/// Returns whether any entry sets the flag `name`.
fn is_set(flags: &[(String, bool)], name: &str) -> bool {
    flags.iter().any(|(flag, set)| flag == name && *set)
}

/// Returns whether every field of `fields` is present in `other`.
fn contains_fields(
    fields: &[(String, Value)], other: &[(String, Value)]
) -> bool {
    fields.iter().all(|(name, value)| {
        other.iter().any(|(other_name, other_value)| {
            name == other_name && value == other_value
        })
    })
}


//--- From and TryFrom

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

macro_rules! int_from {
    ( $( $type:ident ),* ) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::Integer(i128::from(value))
                }
            }
        )*
    }
}

int_from!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl TryFrom<f64> for Value {
    type Error = Error;

    /// Converts a floating point number into an integer value.
    ///
    /// Fails with [`Error::NotAnInteger`] if the number has a fractional
    /// part or isn’t finite.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0. {
            xerr!(return Err(Error::NotAnInteger))
        }
        if value.abs() >= 2f64.powi(127) {
            xerr!(return Err(Error::ValueOutOfRange(
                format!("{} exceeds the integer range", value)
            )))
        }
        Ok(Value::Integer(value as i128))
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value.into())
    }
}

impl<'a> From<&'a [u8]> for Value {
    fn from(value: &'a [u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<Vec<bool>> for Value {
    fn from(value: Vec<bool>) -> Self {
        Value::Bits(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(value: &'a str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}


//============ Tests =========================================================
