//! DER-encoded OCTET STRING and IA5String.
//!
//! This is an internal module. Its public types are re-exported by the
//! parent.

use bytes::Bytes;
use crate::definition::{Content, Definition};
use crate::error::Error;
use crate::params::Params;
use crate::tag::Tag;
use crate::value::{Kind, Value};


//------------ octet_string and ia5string ------------------------------------

/// Returns a definition of the OCTET STRING type.
pub fn octet_string() -> Definition<OctetString> {
    Definition::new(
        OctetString,
        Params::universal(Tag::OCTET_STRING.number(), false)
            .with_kind(Kind::Bytes)
    )
}

/// Returns a definition of the IA5String type.
///
/// The content is treated the same as for an OCTET STRING. The character
/// set is not enforced.
pub fn ia5string() -> Definition<OctetString> {
    Definition::new(
        OctetString,
        Params::universal(Tag::IA5_STRING.number(), false)
            .with_kind(Kind::Bytes)
    )
}


//------------ OctetString ---------------------------------------------------

/// The content of an octet string value.
///
/// # DER Encoding
///
/// In DER, only the primitive form is allowed and the content octets are
/// the string’s octets.
#[derive(Clone, Copy, Debug, Default)]
pub struct OctetString;

impl Content for OctetString {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        Ok(Value::Bytes(Bytes::copy_from_slice(content)))
    }

    fn encode_content(
        &self, _params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        match value.as_bytes() {
            Some(bytes) => {
                target.extend_from_slice(bytes);
                Ok(())
            }
            None => xerr!(Err(Error::type_mismatch(Kind::Bytes, value)))
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::Codec;
    use crate::params::Options;

    #[test]
    fn octet_string_identity() {
        let value = Value::from(&b"\xAB\xCD"[..]);
        let encoded = octet_string().encode(&value).unwrap();
        assert_eq!(encoded, b"\x04\x02\xAB\xCD");
        assert_eq!(octet_string().decode(&encoded), Ok(value));
        assert_eq!(
            octet_string().decode(b"\x04\x00"),
            Ok(Value::from(&b""[..]))
        );
    }

    #[test]
    fn ia5string_differs_in_tag() {
        let encoded = ia5string().encode(&Value::from("example.com")).unwrap();
        assert_eq!(encoded, b"\x16\x0bexample.com");
        assert_eq!(
            ia5string().decode(&encoded),
            Ok(Value::from(&b"example.com"[..]))
        );
        assert_eq!(octet_string().decode_raw(&encoded), Ok(None));
        assert_eq!(ia5string().decode_raw(b"\x04\x00"), Ok(None));
    }

    #[test]
    fn long_form_length() {
        let value = Value::from(vec![0x5Au8; 300]);
        let encoded = octet_string().encode(&value).unwrap();
        assert_eq!(&encoded[..4], b"\x04\x82\x01\x2C");
        assert_eq!(encoded.len(), 304);
        assert_eq!(octet_string().decode(&encoded), Ok(value));
    }

    #[test]
    fn size_bounds() {
        let def = octet_string().with(&Options::new().size(2, 3));
        assert_eq!(def.decode_raw(b"\x04\x01\x01"), Ok(None));
        assert!(def.decode_raw(b"\x04\x02\x00\x01").unwrap().is_some());
        assert!(def.decode_raw(b"\x04\x03\x00\x01\x02").unwrap().is_some());
        assert_eq!(def.decode_raw(b"\x04\x04\x00\x01\x02\x03"), Ok(None));
        assert!(matches!(
            def.encode(&Value::from(vec![1u8; 4])),
            Err(Error::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn wrong_kind() {
        assert_eq!(
            octet_string().encode(&Value::from(1u8)),
            Err(Error::TypeMismatch {
                expected: Kind::Bytes, found: Kind::Integer
            })
        );
    }
}
