use std::ops::Neg;
use std::ops::Sub;

use super::ring::RingElement;

/// A univariate polynomial with coefficients in a ring
///
/// `coefficients[i]` is the coefficient of `x^i`. Trailing entries
/// may be zero; non-existent entries are assumed to be zero.
#[derive(Clone, Debug, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial<T: RingElement> {
    pub coefficients: Vec<T>,
}

impl<T: RingElement> Polynomial<T> {
    pub fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }

    /// Return the zero polynomial
    pub fn zero() -> Self {
        Self {
            coefficients: vec![],
        }
    }

    /// Return the constant polynomial 1
    pub fn identity() -> Self {
        Self {
            coefficients: vec![T::one()],
        }
    }

    /// Returns true if `self` is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|v| v.is_zero())
    }

    /// Append a coefficient for the next-highest power of `x`
    pub fn push(&mut self, coef: T) {
        self.coefficients.push(coef);
    }

    /// Add a term to the polynomial
    pub fn term(&mut self, coef: &T, exp: usize) {
        if self.coefficients.len() < exp + 1 {
            self.coefficients.resize(exp + 1, T::zero());
        }
        self.coefficients[exp] = self.coefficients[exp].clone() + coef.clone();
    }

    /// Do a scalar multiplication in place
    pub fn mul_scalar(&mut self, v: &T) {
        for c in self.coefficients.iter_mut() {
            *c = c.clone() * v.clone();
        }
    }

    /// Return the degree of the polynomial. e.g. the degree of the
    /// largest non-zero term
    pub fn degree(&self) -> usize {
        for i in 0..self.coefficients.len() {
            let index = self.coefficients.len() - (i + 1);
            if !self.coefficients[index].is_zero() {
                return index;
            }
        }
        0
    }

    /// Evaluate the polynomial at `x` by accumulating powers of `x`
    /// alongside the running sum. Uses one addition and two
    /// multiplications per coefficient rather than re-exponentiating,
    /// which matters for coefficient types like
    /// [`Rational`](crate::Rational) where every operation
    /// canonicalizes.
    ///
    /// An empty coefficient vector evaluates to zero for any `x`.
    pub fn evaluate(&self, x: &T) -> T {
        let mut result = T::zero();
        let mut xx = T::one();
        for c in &self.coefficients {
            result = result + c.clone() * xx.clone();
            xx = xx * x.clone();
        }
        result
    }
}

impl<T: RingElement> std::fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            write!(f, "[0]")
        } else {
            write!(
                f,
                "[{}]",
                self.coefficients
                    .iter()
                    .enumerate()
                    .map(|(i, v)| format!("{v}x^{i}"))
                    .collect::<Vec<_>>()
                    .join(",")
            )
        }
    }
}

impl<T: RingElement> std::ops::Add for Polynomial<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let max_len = self.coefficients.len().max(other.coefficients.len());
        let mut coefficients = vec![T::zero(); max_len];
        for (x, c) in coefficients.iter_mut().enumerate() {
            if x < self.coefficients.len() {
                *c = c.clone() + self.coefficients[x].clone();
            }
            if x < other.coefficients.len() {
                *c = c.clone() + other.coefficients[x].clone();
            }
        }
        Polynomial { coefficients }
    }
}

impl<T: RingElement + Sub<Output = T>> std::ops::Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let max_len = self.coefficients.len().max(other.coefficients.len());
        let mut coefficients = vec![T::zero(); max_len];
        for (x, c) in coefficients.iter_mut().enumerate() {
            if x < self.coefficients.len() {
                *c = c.clone() + self.coefficients[x].clone();
            }
            if x < other.coefficients.len() {
                *c = c.clone() - other.coefficients[x].clone();
            }
        }
        Polynomial { coefficients }
    }
}

impl<T: RingElement> std::ops::Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        if self.coefficients.is_empty() || other.coefficients.is_empty() {
            return Polynomial::zero();
        }
        let mut coefficients =
            vec![T::zero(); self.coefficients.len() + other.coefficients.len() - 1];
        for i in 0..other.coefficients.len() {
            for j in 0..self.coefficients.len() {
                // combine the exponents
                let e = j + i;
                coefficients[e] = coefficients[e].clone()
                    + self.coefficients[j].clone() * other.coefficients[i].clone();
            }
        }
        Polynomial { coefficients }
    }
}

impl<T: RingElement + Neg<Output = T>> std::ops::Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Polynomial {
            coefficients: self.coefficients.iter().map(|v| -v.clone()).collect(),
        }
    }
}

// Trailing zero coefficients do not affect equality
impl<T: RingElement> std::cmp::PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        let max_len = self.coefficients.len().max(other.coefficients.len());
        for i in 0..max_len {
            let a = self.coefficients.get(i).cloned().unwrap_or_else(T::zero);
            let b = other.coefficients.get(i).cloned().unwrap_or_else(T::zero);
            if a != b {
                return false;
            }
        }
        true
    }
}
