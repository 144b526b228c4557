//! CHOICE.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use log::trace;
use crate::codec::{Codec, Type};
use crate::error::Error;
use crate::value::{Kind, Value};


//------------ choice --------------------------------------------------------

/// Returns a CHOICE between the given alternatives.
///
/// Alternatives are tried in the order given. The first one that matches
/// wins.
pub fn choice<N, I>(alternatives: I) -> Choice
where N: Into<String>, I: IntoIterator<Item = (N, Type)> {
    Choice {
        alternatives: alternatives.into_iter().map(|(name, ty)| {
            (name.into(), ty)
        }).collect()
    }
}


//------------ Choice --------------------------------------------------------

/// A CHOICE type.
///
/// A choice doesn’t have a tag of its own. When decoding, the data is given
/// to each alternative in turn until one of them produces a value. The
/// result is a [`Value::Choice`] naming that alternative.
///
/// For encoding, the alternative is selected either via a
/// [`Value::Choice`] or via a [`Value::Record`] with exactly one component.
#[derive(Clone)]
pub struct Choice {
    alternatives: Vec<(String, Type)>,
}

impl Choice {
    /// Returns an iterator over the names of the alternatives.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.alternatives.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the type of the alternative with the given name.
    fn alternative(&self, name: &str) -> Result<&Type, Error> {
        match self.alternatives.iter().find(|(n, _)| n == name) {
            Some((_, ty)) => Ok(ty),
            None => {
                xerr!(Err(Error::Conformance(
                    format!("no matching alternative '{}'", name)
                )))
            }
        }
    }
}

impl Codec for Choice {
    type Value = Value;

    fn decode_raw(&self, data: &[u8]) -> Result<Option<Value>, Error> {
        for (name, ty) in &self.alternatives {
            if let Some(value) = ty.decode_raw(data)? {
                return Ok(Some(Value::choice(name.as_str(), value)))
            }
            trace!("choice alternative '{}' did not match", name);
        }
        Ok(None)
    }

    fn encode_raw(&self, value: &Value) -> Result<Vec<u8>, Error> {
        match *value {
            Value::Choice(ref name, ref value) => {
                self.alternative(name)?.encode(value)
            }
            Value::Record(ref fields) => {
                match fields.as_slice() {
                    [(name, value)] => self.alternative(name)?.encode(value),
                    [] => {
                        xerr!(Err(Error::conformance(
                            "no matching alternative"
                        )))
                    }
                    _ => {
                        xerr!(Err(Error::conformance("ambiguous choice")))
                    }
                }
            }
            _ => xerr!(Err(Error::type_mismatch(Kind::Choice, value)))
        }
    }
}

impl fmt::Debug for Choice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::boolean::boolean;
    use crate::int::integer;
    use crate::params::Options;
    use crate::string::{ia5string, octet_string};
    use crate::structure::explicit;

    fn name() -> Choice {
        choice([
            ("dNSName", ia5string().with(&Options::new().tag(2)).shared()),
            ("iPAddress", octet_string().with(&Options::new().tag(7)).shared()),
            ("flag", boolean().shared()),
        ])
    }

    #[test]
    fn decode_alternatives() {
        assert_eq!(
            name().decode(b"\x82\x03a.b"),
            Ok(Value::choice("dNSName", Value::from(&b"a.b"[..])))
        );
        assert_eq!(
            name().decode(b"\x87\x04\xC0\x00\x02\x01"),
            Ok(Value::choice("iPAddress", Value::from(&b"\xC0\x00\x02\x01"[..])))
        );
        assert_eq!(
            name().decode(b"\x01\x01\x00"),
            Ok(Value::choice("flag", Value::from(false)))
        );
        assert_eq!(name().decode_raw(b"\x02\x01\x00"), Ok(None));
        assert!(matches!(
            name().decode(b"\x02\x01\x00"),
            Err(Error::Conformance(_))
        ));
    }

    #[test]
    fn first_match_wins() {
        let bounded = choice([
            ("small", integer().with(&Options::new().max(9)).shared()),
            ("any", integer().shared()),
        ]);
        assert_eq!(
            bounded.decode(b"\x02\x01\x05"),
            Ok(Value::choice("small", 5u8.into()))
        );
        assert_eq!(
            bounded.decode(b"\x02\x01\x0A"),
            Ok(Value::choice("any", 10u8.into()))
        );

        let overlapping = choice([
            ("first", integer().shared()),
            ("second", integer().shared()),
        ]);
        for _ in 0..3 {
            assert_eq!(
                overlapping.decode(b"\x02\x01\x01"),
                Ok(Value::choice("first", 1u8.into()))
            );
        }
    }

    #[test]
    fn errors_are_not_fall_through() {
        let def = choice([
            ("wrapped", explicit(0, integer().shared()).shared()),
            ("plain", octet_string().with(&Options::new().tag(0)).shared()),
        ]);
        assert!(matches!(
            def.decode(b"\xA0\x03\x04\x01\x00"),
            Err(Error::Conformance(_))
        ));
    }

    #[test]
    fn encode_alternatives() {
        assert_eq!(
            name().encode(&Value::choice("dNSName", "a.b".into())).unwrap(),
            b"\x82\x03a.b"
        );
        assert_eq!(
            name().encode(&Value::record([("flag", Value::from(true))]))
                .unwrap(),
            b"\x01\x01\xFF"
        );
        assert!(matches!(
            name().encode(&Value::choice("uri", "a.b".into())),
            Err(Error::Conformance(_))
        ));
        assert!(matches!(
            name().encode(&Value::record::<&str, _>([])),
            Err(Error::Conformance(_))
        ));
        assert_eq!(
            name().encode(&Value::record([
                ("flag", Value::from(true)),
                ("dNSName", Value::from("a.b")),
            ])),
            Err(Error::conformance("ambiguous choice"))
        );
        assert_eq!(
            name().encode(&Value::from(true)),
            Err(Error::TypeMismatch {
                expected: Kind::Choice, found: Kind::Boolean
            })
        );
    }
}
