//! The parameters of a type definition.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::error::Error;
use crate::tag::{Class, Tag};
use crate::value::{Kind, Value};


//------------ Bounds --------------------------------------------------------

/// An optional lower and upper bound, both inclusive.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Bounds<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// Creates new bounds.
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Bounds { min, max }
    }

    /// Creates bounds that contain everything.
    pub const fn unbounded() -> Self {
        Bounds { min: None, max: None }
    }

    /// Returns the lower bound if there is one.
    pub fn min(&self) -> Option<T> {
        self.min
    }

    /// Returns the upper bound if there is one.
    pub fn max(&self) -> Option<T> {
        self.max
    }

    /// Returns whether `value` is within the bounds.
    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| min <= value)
        && self.max.map_or(true, |max| value <= max)
    }

    /// Returns bounds with each limit set in `other` replacing ours.
    fn merge(self, other: Self) -> Self {
        Bounds {
            min: other.min.or(self.min),
            max: other.max.or(self.max),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.min {
            Some(ref min) => write!(f, "{}..", min)?,
            None => f.write_str("MIN..")?,
        }
        match self.max {
            Some(ref max) => write!(f, "{}", max),
            None => f.write_str("MAX"),
        }
    }
}


//------------ Params --------------------------------------------------------

/// The complete parameters of a type definition.
///
/// Each primitive and structural type starts out with its own default
/// parameters. Schema authors specialize these through [`Options`]: the
/// specialized parameters are a copy of the defaults with every field set
/// in the options replacing the default.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    /// The class of the tag.
    class: Class,

    /// The number of the tag.
    ///
    /// This is checked to be within the low tag number form only when the
    /// tag is used.
    number: u32,

    /// Whether the type uses constructed encoding.
    constructed: bool,

    /// The kind of value the type accepts for encoding.
    kind: Option<Kind>,

    /// The bounds for the size of the value.
    size: Bounds<usize>,

    /// The bounds for an integer value.
    value: Bounds<i128>,

    /// The names of the bits of a bit string.
    names: Option<Vec<String>>,
}

impl Params {
    /// Creates new parameters for the given tag.
    pub fn new(class: Class, number: u32, constructed: bool) -> Self {
        Params {
            class, number, constructed,
            kind: None,
            size: Bounds::unbounded(),
            value: Bounds::unbounded(),
            names: None,
        }
    }

    /// Creates new parameters for the universal class.
    pub fn universal(number: u32, constructed: bool) -> Self {
        Self::new(Class::Universal, number, constructed)
    }

    /// Sets the value kind.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns new parameters specialized by `options`.
    pub fn specialize(&self, options: &Options) -> Self {
        let mut res = self.clone();
        if let Some(number) = options.tag {
            res.number = number;
            res.class = Class::Context;
        }
        if let Some(class) = options.class {
            res.class = class;
        }
        res.size = self.size.merge(options.size);
        res.value = self.value.merge(options.value);
        if let Some(ref names) = options.names {
            res.names = Some(names.clone());
        }
        res
    }

    /// Returns the class of the tag.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the number of the tag.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns whether the type uses constructed encoding.
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Returns the kind of value accepted for encoding, if restricted.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Returns the bounds for the size of the value.
    pub fn size(&self) -> Bounds<usize> {
        self.size
    }

    /// Returns the bounds for an integer value.
    pub fn value(&self) -> Bounds<i128> {
        self.value
    }

    /// Returns the names of the bits of a bit string if there are any.
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Returns the tag of the type.
    ///
    /// Fails if the tag number needs the high tag number form.
    pub fn tag(&self) -> Result<Tag, Error> {
        Tag::new(self.class, self.number, self.constructed)
    }

    /// Checks that the value is of the expected kind.
    pub fn check_kind(&self, value: &Value) -> Result<(), Error> {
        match self.kind {
            Some(kind) if !kind.accepts(value) => {
                Err(Error::type_mismatch(kind, value))
            }
            _ => Ok(())
        }
    }

    /// Returns the size of a value for checking the size bounds.
    ///
    /// For flags of a bit string with named bits, this is the number of
    /// bits in the encoding, i.e., the position of the last set bit plus
    /// one. Flags without a name are ignored here and rejected when
    /// encoding.
    fn value_size(&self, value: &Value) -> Option<usize> {
        match (value, self.names()) {
            (Value::Flags(flags), Some(names)) => {
                Some(
                    names.iter().rposition(|name| {
                        flags.iter().any(|(flag, set)| flag == name && *set)
                    }).map_or(0, |idx| idx + 1)
                )
            }
            _ => value.size()
        }
    }

    /// Checks that the value is within the size and value bounds.
    pub fn check_bounds(&self, value: &Value) -> Result<(), Error> {
        if let Some(size) = self.value_size(value) {
            if !self.size.contains(size) {
                return Err(Error::ValueOutOfRange(format!(
                    "size {} outside of {}", size, self.size
                )))
            }
        }
        if let Value::Integer(number) = *value {
            if !self.value.contains(number) {
                return Err(Error::ValueOutOfRange(format!(
                    "{} outside of {}", number, self.value
                )))
            }
        }
        Ok(())
    }
}


//------------ Options -------------------------------------------------------

/// The options for specializing a type definition.
///
/// All fields are optional. Fields that aren’t set keep the value of the
/// definition that is being specialized.
///
/// Setting a tag number without setting the class as well implicitly
/// changes the class to context-specific.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    tag: Option<u32>,
    class: Option<Class>,
    size: Bounds<usize>,
    value: Bounds<i128>,
    names: Option<Vec<String>>,
}

impl Options {
    /// Creates empty options that change nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag number.
    pub fn tag(mut self, number: u32) -> Self {
        self.tag = Some(number);
        self
    }

    /// Sets the class of the tag.
    pub fn class(mut self, class: Class) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets both size bounds.
    pub fn size(mut self, min: usize, max: usize) -> Self {
        self.size = Bounds::new(Some(min), Some(max));
        self
    }

    /// Sets the lower size bound.
    pub fn min_size(mut self, min: usize) -> Self {
        self.size.min = Some(min);
        self
    }

    /// Sets the upper size bound.
    pub fn max_size(mut self, max: usize) -> Self {
        self.size.max = Some(max);
        self
    }

    /// Sets the lower bound for integer values.
    pub fn min(mut self, min: i128) -> Self {
        self.value.min = Some(min);
        self
    }

    /// Sets the upper bound for integer values.
    pub fn max(mut self, max: i128) -> Self {
        self.value.max = Some(max);
        self
    }

    /// Sets the names of the bits of a bit string in order.
    pub fn names<I, S>(mut self, names: I) -> Self
    where I: IntoIterator<Item = S>, S: Into<String> {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds() {
        let bounds = Bounds::new(Some(2usize), Some(3));
        assert!(!bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(bounds.contains(3));
        assert!(!bounds.contains(4));
        assert!(Bounds::<i128>::unbounded().contains(i128::MIN));
        assert_eq!(format!("{}", bounds), "2..3");
        assert_eq!(
            format!("{}", Bounds::new(None, Some(5i128))), "MIN..5"
        );
    }

    #[test]
    fn tag_implies_context() {
        let params = Params::universal(4, false).specialize(
            &Options::new().tag(0)
        );
        assert_eq!(params.class(), Class::Context);
        assert_eq!(params.number(), 0);
        assert_eq!(params.tag().unwrap().octet(), 0x80);

        let params = Params::universal(16, true).specialize(
            &Options::new().tag(1).class(Class::Application)
        );
        assert_eq!(params.tag().unwrap().octet(), 0x61);
    }

    #[test]
    fn override_over_defaults() {
        let base = Params::universal(2, false)
            .with_kind(Kind::Integer)
            .specialize(&Options::new().min(1).max(10));
        let child = base.specialize(&Options::new().max(5));
        assert_eq!(child.value(), Bounds::new(Some(1), Some(5)));
        assert_eq!(child.kind(), Some(Kind::Integer));
        assert_eq!(child.class(), Class::Universal);
        assert_eq!(base.value(), Bounds::new(Some(1), Some(10)));

        let named = child.specialize(&Options::new().names(["a", "b"]));
        assert_eq!(
            named.names(), Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(named.specialize(&Options::new()).names(), named.names());
    }

    #[test]
    fn checks() {
        let params = Params::universal(4, false)
            .with_kind(Kind::Bytes)
            .specialize(&Options::new().size(2, 3));
        assert!(params.check_kind(&Value::from(&b"ab"[..])).is_ok());
        assert_eq!(
            params.check_kind(&Value::from(true)),
            Err(Error::TypeMismatch {
                expected: Kind::Bytes, found: Kind::Boolean
            })
        );
        assert!(params.check_bounds(&Value::from(&b"ab"[..])).is_ok());
        assert!(params.check_bounds(&Value::from(&b"a"[..])).is_err());

        let params = Params::universal(2, false)
            .specialize(&Options::new().min(0).max(255));
        assert!(params.check_bounds(&Value::from(255u8)).is_ok());
        assert!(params.check_bounds(&Value::from(256u16)).is_err());
    }

    #[test]
    fn named_bits_size() {
        let params = Params::universal(3, false)
            .with_kind(Kind::Bits)
            .specialize(&Options::new().names(["a", "b", "c"]).max_size(2));
        assert!(params.check_bounds(&Value::flags([("b", true)])).is_ok());
        assert!(params.check_bounds(&Value::flags([
            ("a", false), ("b", true), ("c", false)
        ])).is_ok());
        assert!(params.check_bounds(&Value::flags([
            ("c", true), ("a", true)
        ])).is_err());
        assert!(params.check_bounds(&Value::flags::<&str, _>([])).is_ok());
    }

    #[test]
    fn high_tag_number() {
        let params = Params::universal(4, false)
            .specialize(&Options::new().tag(31));
        assert_eq!(
            params.tag(),
            Err(Error::UnsupportedEncoding("high tag number form"))
        );
    }
}
