//! Everything related to the `Codec` trait.
//!
//! This is an internal module. The relevant items are re-exported by the
//! parent.

use std::fmt;
use std::sync::Arc;
use crate::error::Error;
use crate::value::Value;


//------------ Codec ---------------------------------------------------------

/// A type that knows how to decode and encode values.
///
/// Every type definition of a schema implements this trait. The two
/// required methods, [`decode_raw`] and [`encode_raw`], do the actual work.
/// The difference between [`decode_raw`] and [`decode`] is how they treat
/// data that simply doesn’t have the shape of the type: `decode_raw`
/// returns `Ok(None)` so that the caller can try something else while
/// `decode` turns this into an error.
///
/// [`decode_raw`]: Self::decode_raw
/// [`encode_raw`]: Self::encode_raw
/// [`decode`]: Self::decode
pub trait Codec {
    /// The type of value this codec produces and consumes.
    type Value;

    /// Decodes a value if the data has the shape of this type.
    ///
    /// The data must contain exactly one encoded value. If its tag differs
    /// from the tag of the type or the decoded value violates the bounds of
    /// the type, returns `Ok(None)`. All other problems are errors.
    fn decode_raw(&self, data: &[u8]) -> Result<Option<Self::Value>, Error>;

    /// Encodes a value.
    fn encode_raw(&self, value: &Self::Value) -> Result<Vec<u8>, Error>;


    //--- Provided methods

    /// Decodes a value.
    ///
    /// Unlike [`decode_raw`][Self::decode_raw], it is an error if the data
    /// doesn’t have the shape of this type.
    fn decode(&self, data: &[u8]) -> Result<Self::Value, Error> {
        match self.decode_raw(data)? {
            Some(value) => Ok(value),
            None => {
                xerr!(Err(Error::conformance("no matching definition")))
            }
        }
    }

    /// Encodes a value.
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>, Error> {
        self.encode_raw(value)
    }

    /// Layers conversions on top of this codec.
    ///
    /// The returned codec decodes by running `post` over every value
    /// decoded by `self` and encodes by running `pre` over the given value
    /// and encoding the result with `self`. This way, additional semantics
    /// can be attached to a type without touching how it is encoded.
    fn extend<U, D, E>(self, post: D, pre: E) -> Extended<Self, D, E>
    where
        Self: Sized,
        D: Fn(Self::Value) -> Result<U, Error>,
        E: Fn(&U) -> Result<Self::Value, Error>,
    {
        Extended::new(self, post, pre)
    }

    /// Converts the codec into a [`Type`] for use in a schema.
    fn shared(self) -> Type
    where Self: Codec<Value = Value> + Sized + Send + Sync + 'static {
        Arc::new(self)
    }
}


//--- Blanket impls

impl<C: Codec + ?Sized> Codec for &'_ C {
    type Value = C::Value;

    fn decode_raw(&self, data: &[u8]) -> Result<Option<Self::Value>, Error> {
        (*self).decode_raw(data)
    }

    fn encode_raw(&self, value: &Self::Value) -> Result<Vec<u8>, Error> {
        (*self).encode_raw(value)
    }
}

impl<C: Codec + ?Sized> Codec for Arc<C> {
    type Value = C::Value;

    fn decode_raw(&self, data: &[u8]) -> Result<Option<Self::Value>, Error> {
        self.as_ref().decode_raw(data)
    }

    fn encode_raw(&self, value: &Self::Value) -> Result<Vec<u8>, Error> {
        self.as_ref().encode_raw(value)
    }
}


//------------ Type ----------------------------------------------------------

/// A shareable type definition producing [`Value`]s.
///
/// The structural combinators are built from values of this type. Since
/// it is reference counted, the same definition can be used in many
/// places of a schema and by many threads at once.
pub type Type = Arc<dyn Codec<Value = Value> + Send + Sync>;


//------------ Extended ------------------------------------------------------

/// A codec with conversions layered on top of another codec.
///
/// Values of this type are created via [`Codec::extend`].
#[derive(Clone)]
pub struct Extended<C, D, E> {
    /// The codec doing the actual encoding.
    inner: C,

    /// The conversion applied after decoding.
    post: D,

    /// The conversion applied before encoding.
    pre: E,
}

impl<C, D, E> Extended<C, D, E> {
    /// Creates a new codec from the inner codec and both conversions.
    pub fn new(inner: C, post: D, pre: E) -> Self {
        Extended { inner, post, pre }
    }

    /// Returns a reference to the underlying codec.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C, D, E, U> Codec for Extended<C, D, E>
where
    C: Codec,
    D: Fn(C::Value) -> Result<U, Error>,
    E: Fn(&U) -> Result<C::Value, Error>,
{
    type Value = U;

    fn decode_raw(&self, data: &[u8]) -> Result<Option<U>, Error> {
        self.inner.decode_raw(data)?.map(&self.post).transpose()
    }

    fn encode_raw(&self, value: &U) -> Result<Vec<u8>, Error> {
        self.inner.encode_raw(&(self.pre)(value)?)
    }
}

impl<C: fmt::Debug, D, E> fmt::Debug for Extended<C, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Extended").field("inner", &self.inner).finish()
    }
}
