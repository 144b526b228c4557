//! Explicit tagging.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::codec::{Codec, Type};
use crate::definition::{Content, Definition};
use crate::error::Error;
use crate::params::Params;
use crate::tag::Class;
use crate::value::Value;


//------------ explicit ------------------------------------------------------

/// Returns a definition explicitly tagging `inner`.
///
/// The encoded value of `inner` is wrapped into a constructed value with
/// the context-specific tag `number`.
pub fn explicit(number: u32, inner: Type) -> Definition<Explicit> {
    Definition::new(
        Explicit { inner },
        Params::new(Class::Context, number, true)
    )
}


//------------ Explicit ------------------------------------------------------

/// The content of an explicitly tagged value.
///
/// The content is the complete encoding of the inner value.
#[derive(Clone)]
pub struct Explicit {
    inner: Type,
}

impl Content for Explicit {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        self.inner.decode(content)
    }

    fn encode_content(
        &self, _params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        target.extend_from_slice(&self.inner.encode(value)?);
        Ok(())
    }
}


//============ Tests =========================================================
