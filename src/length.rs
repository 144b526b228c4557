//! The length octets.
//!
//! This is a private module. The [`Length`] defined herein is not
//! publicly exposed.

use crate::error::Error;


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// # DER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets are one octet long and the remaining bits of this
/// first octet provide the length. Thus, if the first octet is less than
/// 128, it provides the length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. Those octets give the big-endian encoding of the length. If
/// they specify that there are zero more octets, i.e., the first octet is
/// 128, the length is indefinite which DER doesn’t allow.
///
/// DER requires the length to be encoded in the minimum number of octets.
/// We insist on this rule when decoding.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Length(usize);

impl Length {
    const LEN: usize = 0usize.to_ne_bytes().len();

    /// Creates a new length.
    pub fn new(len: usize) -> Self {
        Length(len)
    }

    /// Returns the length as a plain number.
    pub fn get(self) -> usize {
        self.0
    }

    /// Takes the length octets from the beginning of `data`.
    ///
    /// Returns the length and the remainder of `data`.
    pub fn take_from(data: &[u8]) -> Result<(Self, &[u8]), Error> {
        let Some((&first, data)) = data.split_first() else {
            xerr!(return Err(Error::InvalidEncoding("missing length octets")))
        };

        // Bit 7 clear: single.
        if first & 0x80 == 0 {
            return Ok((Length(usize::from(first)), data))
        }

        let count = usize::from(first & 0x7F);
        if count == 0 {
            xerr!(return Err(Error::InvalidEncoding(
                "indefinite length form"
            )))
        }
        if count == 0x7F {
            xerr!(return Err(Error::InvalidEncoding("illegal length octets")))
        }
        let Some((octets, data)) = data.split_at_checked(count) else {
            xerr!(return Err(Error::InvalidEncoding(
                "unexpected end of data in length octets"
            )))
        };

        // Zero octets at the start mean there is a shorter encoding.
        if octets.first() == Some(&0) {
            xerr!(return Err(Error::InvalidEncoding("non-minimal length")))
        }
        if count > Self::LEN {
            xerr!(return Err(Error::UnsupportedEncoding("excessive length")))
        }
        let len = octets.iter().fold(0usize, |len, &octet| {
            (len << 8) | usize::from(octet)
        });

        // Anything below 0x80 should have used the short form.
        if len < 0x80 {
            xerr!(return Err(Error::InvalidEncoding("non-minimal length")))
        }
        Ok((Length(len), data))
    }

    /// Returns the length of the encoded representation of the value.
    pub fn encoded_len(self) -> usize {
        if self.0 > 0x7F {
            Self::LEN - self.encoded_start_idx() + 1
        }
        else {
            1
        }
    }

    /// Appends the encoded length to the end of `target`.
    pub fn append_encoded<T: Extend<u8>>(self, target: &mut T) {
        if self.0 > 0x7F {
            let idx = self.encoded_start_idx();
            debug_assert!(idx < Self::LEN);

            // LEN will never be greater than 126 bytes. Also, `idx` won’t be
            // greater than LEN, so the subtraction here is fine.
            target.extend(Some(((Self::LEN - idx) | 0x80) as u8));
            target.extend(self.0.to_be_bytes().into_iter().skip(idx));
        }
        else {
            target.extend(Some(self.0 as u8))
        }
    }

    /// Returns the index of the first non-zero octet of the length.
    fn encoded_start_idx(self) -> usize {
        (self.0.leading_zeros() / 8) as usize
    }
}


//============ Tests =========================================================
