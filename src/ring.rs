use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::Mul;

use num_complex::Complex;

/// A trait representing an element of a ring-like structure:
/// a type with a zero value, a one value, addition and multiplication.
///
/// This is the full contract required of a polynomial coefficient.
/// Native integers, floats, `Complex` and [`Rational`](crate::Rational)
/// all implement it.
pub trait RingElement:
    Clone + PartialEq + Debug + Display + Add<Output = Self> + Mul<Output = Self>
{
    /// The additive identity of the ring.
    fn zero() -> Self;

    /// The multiplicative identity of the ring.
    fn one() -> Self;

    /// Returns true if `self` is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// A static name for the implementing type, used in debug
    /// renderings. Declared explicitly rather than recovered from
    /// runtime type information.
    fn name_str() -> &'static str;
}

/// Implement [`RingElement`] for a type whose zero and one are
/// expressible as literals.
macro_rules! ring_element {
    ( $t: ty, $zero: expr, $one: expr, $name_str: expr ) => {
        impl RingElement for $t {
            fn zero() -> Self {
                $zero
            }

            fn one() -> Self {
                $one
            }

            fn name_str() -> &'static str {
                $name_str
            }
        }
    };
}

ring_element!(i16, 0, 1, "i16");
ring_element!(i32, 0, 1, "i32");
ring_element!(i64, 0, 1, "i64");
ring_element!(i128, 0, 1, "i128");
ring_element!(f32, 0.0, 1.0, "f32");
ring_element!(f64, 0.0, 1.0, "f64");
ring_element!(Complex<f32>, Complex::new(0.0, 0.0), Complex::new(1.0, 0.0), "Complex<f32>");
ring_element!(Complex<f64>, Complex::new(0.0, 0.0), Complex::new(1.0, 0.0), "Complex<f64>");
