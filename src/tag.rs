//! The identifier octet of a DER encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::error::Error;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Class {
    /// The ‘universal’ class used by the built-in ASN.1 types.
    Universal,

    /// The ‘application’ class.
    Application,

    /// The ‘context-specific’ class used for tags scoped to a construct.
    Context,

    /// The ‘private’ class.
    Private,
}

impl Class {
    /// Returns the bits of the identifier octet for this class.
    pub const fn bits(self) -> u8 {
        match self {
            Class::Universal => 0x00,
            Class::Application => 0x40,
            Class::Context => 0x80,
            Class::Private => 0xc0,
        }
    }

    /// Returns the class encoded in the given identifier octet.
    pub const fn from_octet(octet: u8) -> Self {
        match octet & Tag::CLASS_MASK {
            0x00 => Class::Universal,
            0x40 => Class::Application,
            0x80 => Class::Context,
            _ => Class::Private,
        }
    }
}


//------------ Tag -----------------------------------------------------------

/// The tag of a DER encoded value.
///
/// Each DER encoded value starts with the _identifier octets._ They encode
/// the class of the tag, its number, and whether the value uses primitive or
/// constructed encoding. Unlike BER in general, we only support the low tag
/// number form, i.e., tag numbers between 0 and 30. Because of that, the
/// identifier is always exactly one octet and the `Tag` type simply wraps
/// this octet, constructed bit included.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Tag(u8);

/// # Constants for Often Used Tag Values
///
impl Tag {
    /// The mask for checking the class.
    const CLASS_MASK: u8 = 0xc0;

    /// The mask for checking whether the value is constructed.
    ///
    /// A value of 0 indicates primitive.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number.
    const NUMBER_MASK: u8 = 0x1f;

    /// The largest tag number we support.
    ///
    /// The next number, 31, marks the high tag number form.
    pub const MAX_NUMBER: u32 = 30;

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Tag(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Tag(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Tag(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Tag(4);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Tag(22);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    ///
    /// This is the constructed form which is the only one allowed.
    pub const SEQUENCE: Self = Tag(16 | Tag::CONSTRUCTED_MASK);
}

impl Tag {
    /// Creates a tag from its parts.
    ///
    /// Returns an error if `number` needs the high tag number form, i.e.,
    /// if it is larger than [`Tag::MAX_NUMBER`].
    pub fn new(
        class: Class, number: u32, constructed: bool
    ) -> Result<Self, Error> {
        if number > Self::MAX_NUMBER {
            xerr!(return Err(Error::UnsupportedEncoding(
                "high tag number form"
            )))
        }
        let mut octet = class.bits() | number as u8;
        if constructed {
            octet |= Self::CONSTRUCTED_MASK
        }
        Ok(Tag(octet))
    }

    /// Creates a tag from an identifier octet.
    ///
    /// Returns an error if the octet announces the high tag number form.
    pub fn from_octet(octet: u8) -> Result<Self, Error> {
        if octet & Self::NUMBER_MASK == Self::NUMBER_MASK {
            xerr!(return Err(Error::UnsupportedEncoding(
                "high tag number form"
            )))
        }
        Ok(Tag(octet))
    }

    /// Returns the identifier octet.
    pub fn octet(self) -> u8 {
        self.0
    }

    /// Returns the class of the tag.
    pub fn class(self) -> Class {
        Class::from_octet(self.0)
    }

    /// Returns the number of the tag.
    pub fn number(self) -> u32 {
        u32::from(self.0 & Self::NUMBER_MASK)
    }

    /// Returns whether the tag signals constructed encoding.
    pub fn is_constructed(self) -> bool {
        self.0 & Self::CONSTRUCTED_MASK != 0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            tag => {
                match tag.class() {
                    Class::Universal => write!(f, "[UNIVERSAL ")?,
                    Class::Application => write!(f, "[APPLICATION ")?,
                    Class::Context => write!(f, "[")?,
                    Class::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", tag.number())?;
                if tag.is_constructed() {
                    write!(f, " constructed")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}


//============ Tests =========================================================
