//! Type definitions.
//!
//! This is an internal module. The relevant items are re-exported by the
//! parent.

use log::trace;
use crate::codec::Codec;
use crate::error::Error;
use crate::header;
use crate::params::{Options, Params};
use crate::value::Value;


//------------ Content -------------------------------------------------------

/// A type that knows how to decode and encode the content of a value.
///
/// This trait should be implemented for the building blocks of a schema.
/// It only deals with the content octets of a single value. Everything
/// else – the header, checking the tag, checking the kind and bounds of
/// the value – is done by [`Definition`] which combines the content with
/// the [`Params`] of a concrete type.
pub trait Content {
    /// Decodes a value from the content octets.
    fn decode_content(
        &self, params: &Params, content: &[u8]
    ) -> Result<Value, Error>;

    /// Appends the content octets for `value` to `target`.
    ///
    /// The kind and the bounds of the value have been checked already.
    fn encode_content(
        &self, params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error>;
}


//------------ Definition ----------------------------------------------------

/// A concrete type definition.
///
/// A definition combines a [`Content`] with the complete parameters of the
/// type. Definitions are immutable. A new definition with modified
/// parameters can be derived via [`with`][Self::with].
#[derive(Clone, Debug)]
pub struct Definition<C> {
    /// The parameters of the type.
    params: Params,

    /// The decoder and encoder for the content octets.
    content: C,
}

impl<C> Definition<C> {
    /// Creates a new definition from content and its default parameters.
    pub fn new(content: C, params: Params) -> Self {
        Definition { params, content }
    }

    /// Returns a definition with the parameters specialized by `options`.
    pub fn with(self, options: &Options) -> Self {
        Definition {
            params: self.params.specialize(options),
            content: self.content,
        }
    }

    /// Returns the parameters of the definition.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the content of the definition.
    pub fn content(&self) -> &C {
        &self.content
    }
}

impl<C: Content> Codec for Definition<C> {
    type Value = Value;

    fn decode_raw(&self, data: &[u8]) -> Result<Option<Value>, Error> {
        let (header, content) = header::split(data)?;
        if content.len() != header.length() {
            xerr!(return Err(Error::DataLengthMismatch {
                declared: header.length(),
                actual: content.len(),
            }))
        }
        let tag = self.params.tag()?;
        if header.tag() != tag {
            trace!("expected {} but found {}", tag, header.tag());
            return Ok(None)
        }
        let value = self.content.decode_content(&self.params, content)?;
        if let Err(err) = self.params.check_bounds(&value) {
            trace!("{} value rejected: {}", tag, err);
            return Ok(None)
        }
        Ok(Some(value))
    }

    fn encode_raw(&self, value: &Value) -> Result<Vec<u8>, Error> {
        if let Err(err) = self.params.check_kind(value) {
            xerr!(return Err(err))
        }
        if let Err(err) = self.params.check_bounds(value) {
            xerr!(return Err(err))
        }
        let tag = self.params.tag()?;
        let mut content = Vec::new();
        self.content.encode_content(&self.params, value, &mut content)?;
        let mut target = Vec::with_capacity(content.len() + 2);
        header::write_header(&mut target, tag, content.len());
        target.extend_from_slice(&content);
        Ok(target)
    }
}


//------------ define --------------------------------------------------------

/// Returns a factory for definitions of the given content.
///
/// Each invocation of the returned closure creates a definition whose
/// parameters are `defaults` specialized by the given options.
pub fn define<C: Content + Clone>(
    content: C, defaults: Params
) -> impl Fn(&Options) -> Definition<C> {
    move |options| {
        Definition::new(content.clone(), defaults.specialize(options))
    }
}


//============ Tests =========================================================
