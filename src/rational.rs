use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use anyhow::Result;
use num_integer::Integer;
use num_traits::Signed;

use super::ring::RingElement;

/// The scalar contract for a rational's numerator and denominator:
/// a signed integer with ordering, subtraction, multiplication,
/// division and gcd.
pub trait RationalScalar: Integer + Signed + Copy + Debug + Display {}

impl<I> RationalScalar for I where I: Integer + Signed + Copy + Debug + Display {}

/// An exact fraction over a signed integer type `I`.
///
/// Values are always held in canonical form: the denominator is
/// positive, numerator and denominator share no common factor, and
/// zero is represented as `0/1`. Every constructor and operator
/// canonicalizes, so no code path can observe a non-canonical value.
///
/// Overflow behavior is inherited from `I` unchanged: this type adds
/// no overflow checks of its own, so `Rational<i64>` wraps or panics
/// exactly where `i64` arithmetic would.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational<I: RationalScalar> {
    n: I,
    d: I,
}

impl<I: RationalScalar> Rational<I> {
    /// Build a fraction from numerator and denominator, reducing it
    /// to canonical form. Errors if the denominator is zero.
    pub fn new(n: I, d: I) -> Result<Self> {
        if d.is_zero() {
            anyhow::bail!("rational denominator cannot be zero");
        }
        Ok(Self::canonical(n, d))
    }

    /// Build a whole number as a fraction with denominator one.
    pub fn from_integer(n: I) -> Self {
        Self { n, d: I::one() }
    }

    /// Reduce to canonical form. The denominator must be nonzero.
    fn canonical(mut n: I, mut d: I) -> Self {
        debug_assert!(!d.is_zero());
        if d.is_negative() {
            n = -n;
            d = -d;
        }
        // gcd(0, d) == d, so a zero numerator reduces to 0/1 here
        let g = n.gcd(&d);
        Self { n: n / g, d: d / g }
    }

    /// The canonical numerator. Carries the sign of the value.
    pub fn numer(&self) -> I {
        self.n
    }

    /// The canonical denominator. Always positive.
    pub fn denom(&self) -> I {
        self.d
    }

    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.n.is_one() && self.d.is_one()
    }

    /// The multiplicative inverse. Errors if `self` is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            anyhow::bail!("rational zero has no multiplicative inverse");
        }
        Ok(Self::canonical(self.d, self.n))
    }

    /// Division that surfaces a zero divisor as an error instead of
    /// a panic.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            anyhow::bail!("rational division by zero");
        }
        Ok(Self::canonical(self.n * other.d, self.d * other.n))
    }

    /// Sample a uniform random value with numerator in `-50..=50` and
    /// denominator in `1..=50`, canonicalized.
    #[cfg(feature = "rand")]
    pub fn sample_rand<R: rand::Rng>(rng: &mut R) -> Self
    where
        I: From<i8> + rand::distributions::uniform::SampleUniform,
    {
        let n = rng.gen_range(I::from(-50)..=I::from(50));
        let d = rng.gen_range(I::from(1)..=I::from(50));
        Self::canonical(n, d)
    }
}

impl<I: RationalScalar> Default for Rational<I> {
    fn default() -> Self {
        Self::from_integer(I::zero())
    }
}

impl<I: RationalScalar> From<I> for Rational<I> {
    fn from(n: I) -> Self {
        Self::from_integer(n)
    }
}

impl<I: RationalScalar> RingElement for Rational<I> {
    fn zero() -> Self {
        Self::from_integer(I::zero())
    }

    fn one() -> Self {
        Self::from_integer(I::one())
    }

    fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    fn name_str() -> &'static str {
        "Rational"
    }
}

impl<I: RationalScalar> Display for Rational<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}

impl<I: RationalScalar> Debug for Rational<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", Self::name_str(), self.n, self.d)
    }
}

impl<I: RationalScalar> Add for Rational<I> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::canonical(self.n * other.d + other.n * self.d, self.d * other.d)
    }
}

impl<I: RationalScalar> Sub for Rational<I> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::canonical(self.n * other.d - other.n * self.d, self.d * other.d)
    }
}

impl<I: RationalScalar> Mul for Rational<I> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::canonical(self.n * other.n, self.d * other.d)
    }
}

impl<I: RationalScalar> Div for Rational<I> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when dividing by the rational zero. Use
    /// [`checked_div`](Rational::checked_div) to get an error instead.
    fn div(self, other: Self) -> Self {
        if other.is_zero() {
            panic!("rational division by zero");
        }
        Self::canonical(self.n * other.d, self.d * other.n)
    }
}

impl<I: RationalScalar> Neg for Rational<I> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            n: -self.n,
            d: self.d,
        }
    }
}

// Denominators are always positive, so cross-multiplication orders
// values without sign fixups.
impl<I: RationalScalar> Ord for Rational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.n * other.d).cmp(&(other.n * self.d))
    }
}

impl<I: RationalScalar> PartialOrd for Rational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
impl<I> serde::Serialize for Rational<I>
where
    I: RationalScalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.n, self.d).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, I> serde::Deserialize<'de> for Rational<I>
where
    I: RationalScalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (n, d) = <(I, I)>::deserialize(deserializer)?;
        Rational::new(n, d).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    #[cfg(feature = "rand")]
    use rand::Rng;

    use super::*;

    type R = Rational<i64>;

    #[test]
    fn construction_reduces() {
        let r = R::new(4, 6).unwrap();
        assert_eq!(r.numer(), 2);
        assert_eq!(r.denom(), 3);
    }

    #[test]
    fn construction_normalizes_signs() {
        let r = R::new(-4, -6).unwrap();
        assert_eq!(r.numer(), 2);
        assert_eq!(r.denom(), 3);

        let r = R::new(4, -6).unwrap();
        assert_eq!(r.numer(), -2);
        assert_eq!(r.denom(), 3);

        let r = R::new(-4, 6).unwrap();
        assert_eq!(r.numer(), -2);
        assert_eq!(r.denom(), 3);
    }

    #[test]
    fn zero_is_canonical() {
        for d in [1_i64, 2, 7, -3, -100] {
            let r = R::new(0, d).unwrap();
            assert_eq!(r.numer(), 0);
            assert_eq!(r.denom(), 1);
        }
        assert_eq!(R::default(), R::zero());
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert!(R::new(1, 0).is_err());
        assert!(R::new(0, 0).is_err());
    }

    #[test]
    fn addition() {
        let a = R::new(1, 2).unwrap();
        let b = R::new(1, 3).unwrap();
        assert_eq!(a + b, R::new(5, 6).unwrap());
    }

    #[test]
    fn multiplication() {
        let a = R::new(2, 3).unwrap();
        let b = R::new(3, 4).unwrap();
        assert_eq!(a * b, R::new(1, 2).unwrap());
    }

    #[test]
    fn subtraction_and_negation() {
        let a = R::new(7, 10).unwrap();
        assert_eq!(a - a, R::zero());
        assert_eq!(-a, R::new(-7, 10).unwrap());
        assert_eq!(a + -a, R::zero());
    }

    #[test]
    fn division() {
        let a = R::new(1, 2).unwrap();
        let b = R::new(2, 3).unwrap();
        assert_eq!(a / b, R::new(3, 4).unwrap());
        assert_eq!(a.checked_div(&b).unwrap(), R::new(3, 4).unwrap());
    }

    #[test]
    #[should_panic(expected = "rational division by zero")]
    fn division_by_zero_panics() {
        let _ = R::new(1, 2).unwrap() / R::zero();
    }

    #[test]
    fn checked_division_by_zero_errors() {
        let a = R::new(1, 2).unwrap();
        assert!(a.checked_div(&R::zero()).is_err());
        assert!(R::zero().recip().is_err());
    }

    #[test]
    fn identities() {
        let a = R::new(-9, 14).unwrap();
        assert_eq!(a + R::zero(), a);
        assert_eq!(a * R::one(), a);
        assert_eq!(a * a.recip().unwrap(), R::one());
    }

    #[cfg(feature = "rand")]
    #[test]
    fn canonical_form() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let n = rng.gen_range(-500_i64..=500);
            let mut d = 0;
            while d == 0 {
                d = rng.gen_range(-500_i64..=500);
            }
            let r = R::new(n, d).unwrap();
            assert!(r.denom() > 0);
            if r.numer() == 0 {
                assert_eq!(r.denom(), 1);
            } else {
                assert_eq!(r.numer().gcd(&r.denom()), 1);
            }
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn commutativity() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = R::sample_rand(&mut rng);
            let b = R::sample_rand(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn division_inverts_multiplication() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = R::sample_rand(&mut rng);
            let mut b = R::sample_rand(&mut rng);
            while b.is_zero() {
                b = R::sample_rand(&mut rng);
            }
            assert_eq!((a / b) * b, a);
            assert_eq!(a - a, R::zero());
        }
    }

    #[test]
    fn ordering() {
        let a = R::new(2, 3).unwrap();
        let b = R::new(5, 6).unwrap();
        assert!(a < b);
        assert!(b > a);
        assert!(R::new(-1, 2).unwrap() < R::zero());
        assert_eq!(a.cmp(&R::new(4, 6).unwrap()), Ordering::Equal);
    }

    #[test]
    fn promotion_from_integer() {
        let r = R::from_integer(5);
        assert_eq!(r.numer(), 5);
        assert_eq!(r.denom(), 1);
        assert_eq!(R::from(5), r);
        assert_eq!(r, R::new(5, 1).unwrap());
    }

    #[test]
    fn display_and_debug() {
        let r = R::new(-4, 6).unwrap();
        assert_eq!(r.to_string(), "-2/3");
        assert_eq!(format!("{:?}", r), "Rational(-2,3)");
        assert_eq!(R::from_integer(3).to_string(), "3/1");
    }

    #[test]
    fn works_with_other_scalar_widths() {
        let r = Rational::<i32>::new(10, -15).unwrap();
        assert_eq!(r.numer(), -2);
        assert_eq!(r.denom(), 3);
        let r = Rational::<i128>::new(1 << 40, 1 << 41).unwrap();
        assert_eq!(r, Rational::<i128>::new(1, 2).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_recanonicalizes() {
        let r = R::new(3, 7).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(serde_json::from_str::<R>(&json).unwrap(), r);

        // non-canonical and invalid payloads go through the
        // validating constructor
        assert_eq!(
            serde_json::from_str::<R>("[4,-6]").unwrap(),
            R::new(-2, 3).unwrap()
        );
        assert!(serde_json::from_str::<R>("[1,0]").is_err());
    }
}
