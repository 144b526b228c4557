//! The BOOLEAN type.

use crate::definition::{Content, Definition};
use crate::error::Error;
use crate::params::Params;
use crate::tag::Tag;
use crate::value::{Kind, Value};


//------------ boolean -------------------------------------------------------

/// Returns a definition of the BOOLEAN type.
pub fn boolean() -> Definition<Boolean> {
    Definition::new(
        Boolean,
        Params::universal(Tag::BOOLEAN.number(), false)
            .with_kind(Kind::Boolean)
    )
}


//------------ Boolean -------------------------------------------------------

/// The content of a BOOLEAN value.
///
/// # DER Encoding
///
/// The content is a single octet. It is zero for false and all ones for
/// true. When decoding, we accept any non-zero octet as true.
#[derive(Clone, Copy, Debug, Default)]
pub struct Boolean;

impl Content for Boolean {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        match *content {
            [octet] => Ok(Value::Boolean(octet != 0)),
            _ => {
                xerr!(Err(Error::InvalidEncoding(
                    "boolean content must be a single octet"
                )))
            }
        }
    }

    fn encode_content(
        &self, _params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        match *value {
            Value::Boolean(true) => target.push(0xff),
            Value::Boolean(false) => target.push(0),
            ref value => {
                xerr!(return Err(Error::type_mismatch(Kind::Boolean, value)))
            }
        }
        Ok(())
    }
}


//============ Tests =========================================================
