//! Exact rational arithmetic and polynomial evaluation over generic ring elements.
//!
//! [`Rational`] is a canonical-form fraction over any signed integer type:
//! denominators are always positive, fractions are always in lowest terms, and
//! zero is always `0/1`. [`Polynomial`] evaluates coefficient sequences in any
//! type implementing [`RingElement`], which includes native integers, floats,
//! [`num_complex::Complex`] and [`Rational`] itself.

mod polynomial;
mod rational;
mod ring;

pub use polynomial::Polynomial;
pub use rational::Rational;
pub use rational::RationalScalar;
pub use ring::RingElement;
