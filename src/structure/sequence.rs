//! SEQUENCE and SEQUENCE OF.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::codec::{Codec, Type};
use crate::definition::{Content, Definition};
use crate::error::Error;
use crate::header;
use crate::params::Params;
use crate::tag::Tag;
use crate::value::{Kind, Value};


//------------ sequence ------------------------------------------------------

/// Returns a definition of a SEQUENCE with the given components.
///
/// The components are encoded in the given order. All of them have to be
/// present. Decoded values are [`Value::Record`]s with the components in
/// the same order.
pub fn sequence<N, I>(components: I) -> Definition<Sequence>
where N: Into<String>, I: IntoIterator<Item = (N, Type)> {
    Definition::new(
        Sequence {
            components: components.into_iter().map(|(name, ty)| {
                (name.into(), ty)
            }).collect()
        },
        Params::universal(Tag::SEQUENCE.number(), true)
            .with_kind(Kind::Record)
    )
}


//------------ Sequence ------------------------------------------------------

/// The content of a SEQUENCE value.
#[derive(Clone)]
pub struct Sequence {
    /// The names and types of the components in order.
    components: Vec<(String, Type)>,
}

impl Sequence {
    /// Returns an iterator over the names of the components.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.components.iter().map(|(name, _)| name.as_str())
    }
}

impl Content for Sequence {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        let mut fields = Vec::with_capacity(self.components.len());
        let mut data = content;
        for (name, ty) in &self.components {
            if data.is_empty() {
                xerr!(return Err(Error::Conformance(
                    format!("missing component '{}'", name)
                )))
            }
            let (element, tail) = header::split_element(data)?;
            fields.push((name.clone(), ty.decode(element)?));
            data = tail;
        }
        if !data.is_empty() {
            xerr!(return Err(Error::ExcessData(data.len())))
        }
        Ok(Value::Record(fields))
    }

    fn encode_content(
        &self, _params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        let Value::Record(fields) = value else {
            xerr!(return Err(Error::type_mismatch(Kind::Record, value)))
        };
        if let Some((name, _)) = fields.iter().find(|(name, _)| {
            !self.components.iter().any(|(component, _)| component == name)
        }) {
            xerr!(return Err(Error::Conformance(
                format!("unknown component '{}'", name)
            )))
        }
        for (name, ty) in &self.components {
            let Some(value) = value.get(name) else {
                xerr!(return Err(Error::Conformance(
                    format!("missing component '{}'", name)
                )))
            };
            target.extend_from_slice(&ty.encode(value)?);
        }
        Ok(())
    }
}


//------------ sequence_of ---------------------------------------------------

/// Returns a definition of a SEQUENCE OF the given element type.
///
/// Decoded values are [`Value::List`]s.
pub fn sequence_of(element: Type) -> Definition<SequenceOf> {
    Definition::new(
        SequenceOf { element },
        Params::universal(Tag::SEQUENCE.number(), true)
            .with_kind(Kind::List)
    )
}


//------------ SequenceOf ----------------------------------------------------

/// The content of a SEQUENCE OF value.
#[derive(Clone)]
pub struct SequenceOf {
    /// The type of the elements.
    element: Type,
}

impl Content for SequenceOf {
    fn decode_content(
        &self, _params: &Params, content: &[u8]
    ) -> Result<Value, Error> {
        let mut res = Vec::new();
        let mut data = content;
        while !data.is_empty() {
            let (element, tail) = header::split_element(data)?;
            res.push(self.element.decode(element)?);
            data = tail;
        }
        Ok(Value::List(res))
    }

    fn encode_content(
        &self, _params: &Params, value: &Value, target: &mut Vec<u8>
    ) -> Result<(), Error> {
        let Value::List(elements) = value else {
            xerr!(return Err(Error::type_mismatch(Kind::List, value)))
        };
        for element in elements {
            target.extend_from_slice(&self.element.encode(element)?);
        }
        Ok(())
    }
}


//============ Tests =========================================================
