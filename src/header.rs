//! The header of a DER encoded value.
//!
//! Every encoded value starts with the identifier octet and the length
//! octets, followed by as many content octets as the length announces.
//! This module deals with this tag-length prefix.

use smallvec::SmallVec;
use crate::error::Error;
use crate::length::Length;
use crate::tag::{Class, Tag};


//------------ Header --------------------------------------------------------

/// The octets encoded header of a single value.
///
/// The identifier octet, one octet for the length form, and at most as many
/// length octets as a `usize` has.
pub type HeaderOctets = SmallVec<[u8; 10]>;

/// The header of a DER encoded value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header {
    /// The tag of the value, including the constructed bit.
    tag: Tag,

    /// The number of content octets.
    length: Length,
}

impl Header {
    /// Creates a new header from a tag and the length of the content.
    pub fn new(tag: Tag, length: usize) -> Self {
        Header { tag, length: Length::new(length) }
    }

    /// Returns the tag of the value.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the class of the value’s tag.
    pub fn class(&self) -> Class {
        self.tag.class()
    }

    /// Returns the number of the value’s tag.
    pub fn number(&self) -> u32 {
        self.tag.number()
    }

    /// Returns whether the value is encoded in constructed form.
    pub fn is_constructed(&self) -> bool {
        self.tag.is_constructed()
    }

    /// Returns the number of content octets.
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Returns the number of octets of the encoded header itself.
    pub fn header_len(&self) -> usize {
        1 + self.length.encoded_len()
    }

    /// Returns the number of octets of the complete encoded value.
    pub fn total_len(&self) -> usize {
        self.header_len().saturating_add(self.length())
    }

    /// Returns the encoded header.
    pub fn encode(&self) -> HeaderOctets {
        let mut res = HeaderOctets::new();
        res.push(self.tag.octet());
        self.length.append_encoded(&mut res);
        res
    }

    /// Appends the encoded header to `target`.
    pub fn append_encoded(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.encode())
    }
}


//------------ split ---------------------------------------------------------

/// Splits the header off the beginning of `data`.
///
/// Returns the header and everything following it. The function doesn’t
/// check whether the remainder is as long as the header says.
pub fn split(data: &[u8]) -> Result<(Header, &[u8]), Error> {
    let Some((&octet, data)) = data.split_first() else {
        xerr!(return Err(Error::InvalidEncoding("missing identifier octet")))
    };
    let tag = Tag::from_octet(octet)?;
    let (length, data) = Length::take_from(data)?;
    Ok((Header { tag, length }, data))
}

/// Splits the first complete value off the beginning of `data`.
///
/// Returns the encoded value, header included, and the remaining data. If
/// `data` is shorter than what the header announces, the returned value
/// is truncated and decoding it will fail with a length mismatch.
pub fn split_element(data: &[u8]) -> Result<(&[u8], &[u8]), Error> {
    let (header, _) = split(data)?;
    Ok(data.split_at(header.total_len().min(data.len())))
}

/// Appends the header for a value with the given tag and content length.
pub fn write_header(target: &mut Vec<u8>, tag: Tag, length: usize) {
    Header::new(tag, length).append_encoded(target)
}


//============ Tests =========================================================
