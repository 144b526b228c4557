//! Structured types.
//!
//! This module provides the combinators that build new types from other
//! types. A [`sequence`] contains a fixed list of named components, a
//! [`sequence_of`] any number of values of the same type, a [`choice`]
//! exactly one of a list of alternatives. Finally, [`explicit`] wraps a
//! value into an additional tagged value.
//!
//! All combinators take their inner types as [`Type`]s which are created
//! from any codec producing [`Value`]s via [`Codec::shared`].
//!
//! [`Type`]: crate::Type
//! [`Value`]: crate::Value
//! [`Codec::shared`]: crate::Codec::shared

pub use self::choice::{Choice, choice};
pub use self::explicit::{Explicit, explicit};
pub use self::sequence::{Sequence, SequenceOf, sequence, sequence_of};

mod choice;
mod explicit;
mod sequence;
