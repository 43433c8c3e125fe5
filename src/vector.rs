// src/vector.rs
//! Immutable Euclidean vector whose dimension is part of its type.
//!
//! `Vector<3>` and `Vector<4>` are different types, so operators between
//! mismatched dimensions are rejected by the compiler. Only construction
//! from variable-length input (slices, `Vec`, iterators, or a vector of a
//! different dimension) can fail at runtime, with
//! [`VectorError::LengthMismatch`].

use crate::error::{Result, VectorError};
use crate::types::Scalar;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// A `D`-dimensional Euclidean vector.
#[derive(Copy, Clone, Debug)]
pub struct Vector<const D: usize> {
    components: [Scalar; D],
}

/// A 2-D vector.
pub type Vector2 = Vector<2>;
/// A 3-D vector.
pub type Vector3 = Vector<3>;
/// A 4-D vector.
pub type Vector4 = Vector<4>;

/// Build a 2-D vector from `(x, y)`.
#[inline(always)]
pub fn vec2<T: Into<Scalar>>(x: T, y: T) -> Vector2 {
    Vector::new([x.into(), y.into()])
}

/// Build a 3-D vector from `(x, y, z)`.
#[inline(always)]
pub fn vec3<T: Into<Scalar>>(x: T, y: T, z: T) -> Vector3 {
    Vector::new([x.into(), y.into(), z.into()])
}

/// Build a 4-D vector from `(x, y, z, t)`.
#[inline(always)]
pub fn vec4<T: Into<Scalar>>(x: T, y: T, z: T, t: T) -> Vector4 {
    Vector::new([x.into(), y.into(), z.into(), t.into()])
}

impl<const D: usize> Vector<D> {
    /// Largest per-axis difference still treated as equal by `==`.
    pub const TOLERANCE: Scalar = 1e-6;

    /// Construct from an array of length `D`.
    #[inline(always)]
    pub const fn new(components: [Scalar; D]) -> Self {
        Self { components }
    }

    /// Every component set to `value`.
    #[inline]
    pub const fn splat(value: Scalar) -> Self {
        Self { components: [value; D] }
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Construct from a slice, which must hold exactly `D` values.
    pub fn from_slice<T: Copy + Into<Scalar>>(values: &[T]) -> Result<Self> {
        if values.len() != D {
            return Err(Self::length_mismatch(values.len()));
        }
        let mut components = [0.0; D];
        for (slot, &value) in components.iter_mut().zip(values) {
            *slot = value.into();
        }
        Ok(Self { components })
    }

    /// Construct from an iterator, which must yield exactly `D` values.
    ///
    /// At most `D + 1` values are read, so an overlong or endless source
    /// fails fast with `found: D + 1`.
    pub fn try_from_iter<T, I>(values: I) -> Result<Self>
    where
        T: Into<Scalar>,
        I: IntoIterator<Item = T>,
    {
        let mut components = [0.0; D];
        let mut found = 0;
        for value in values.into_iter().take(D + 1) {
            if let Some(slot) = components.get_mut(found) {
                *slot = value.into();
            }
            found += 1;
        }
        if found != D {
            return Err(Self::length_mismatch(found));
        }
        Ok(Self { components })
    }

    /// Copy a vector of dimension `E` into dimension `D`.
    ///
    /// Succeeds only when `E == D`; there is no truncation or padding.
    pub fn try_from_vector<const E: usize>(other: &Vector<E>) -> Result<Self> {
        Self::from_slice(other.components.as_slice())
    }

    fn length_mismatch(found: usize) -> VectorError {
        log::debug!("rejected {} components for a vector of dimension {}", found, D);
        VectorError::LengthMismatch { expected: D, found }
    }

    /// Number of components.
    #[inline(always)]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Borrow the components in axis order.
    #[inline(always)]
    pub fn components(&self) -> &[Scalar; D] {
        &self.components
    }

    /// Consume the vector into its component array.
    #[inline(always)]
    pub fn to_array(self) -> [Scalar; D] {
        self.components
    }

    /// Iterate the components by value in axis order.
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.components.iter().copied()
    }

    /// The `index`-th component, or `OutOfRange` when `index >= D`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<Scalar> {
        self.get(index).ok_or_else(|| {
            log::trace!("component {} requested from a vector of dimension {}", index, D);
            VectorError::OutOfRange { index, dimension: D }
        })
    }

    /// The `index`-th component, or `None` when `index >= D`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.components.get(index).copied()
    }

    /// First component; fails only for `D == 0`.
    #[inline]
    pub fn x(&self) -> Result<Scalar> {
        self.at(0)
    }

    /// Second component; needs `D >= 2`.
    #[inline]
    pub fn y(&self) -> Result<Scalar> {
        self.at(1)
    }

    /// Third component; needs `D >= 3`.
    #[inline]
    pub fn z(&self) -> Result<Scalar> {
        self.at(2)
    }

    /// Fourth component; needs `D >= 4`.
    #[inline]
    pub fn t(&self) -> Result<Scalar> {
        self.at(3)
    }

    /// Alias of [`Vector::t`].
    #[inline]
    pub fn w(&self) -> Result<Scalar> {
        self.t()
    }

    /// Component-wise comparison with an explicit tolerance.
    ///
    /// Vectors of different dimensions are never equal. A component pair is
    /// equal when `|a - b| < tolerance`, so NaN never compares equal.
    pub fn approx_eq<const E: usize>(&self, other: &Vector<E>, tolerance: Scalar) -> bool {
        D == E
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(a, b)| (a - b).abs() < tolerance)
    }

    /// Dot product over the first three components only.
    ///
    /// Components past `z` are ignored for every `D`. Fails with
    /// `OutOfRange` when `D < 3`.
    pub fn dot(&self, other: &Self) -> Result<Scalar> {
        Ok(self.x()? * other.x()? + self.y()? * other.y()? + self.z()? * other.z()?)
    }

    /// Cross product of the first three components.
    ///
    /// Fails with `OutOfRange` when `D < 3`. Components past `z` are zero in
    /// the result.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let (ax, ay, az) = (self.x()?, self.y()?, self.z()?);
        let (bx, by, bz) = (other.x()?, other.y()?, other.z()?);

        let mut components = [0.0; D];
        let axes = [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx];
        for (slot, value) in components.iter_mut().zip(axes) {
            *slot = value;
        }
        Ok(Self { components })
    }

    /// Sum of squares of all `D` components.
    #[inline]
    pub fn norm_squared(&self) -> Scalar {
        self.components.iter().map(|c| c * c).sum()
    }

    /// Euclidean length over all `D` components.
    #[inline]
    pub fn norm(&self) -> Scalar {
        self.norm_squared().sqrt()
    }

    /// Multiply every component by `s`.
    #[inline]
    pub fn scale(&self, s: Scalar) -> Self {
        self.map(|c| c * s)
    }

    #[inline]
    fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Self {
        Self { components: self.components.map(f) }
    }

    #[inline]
    fn zip_with(&self, rhs: &Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Self {
        let mut out = self.components;
        for (a, &b) in out.iter_mut().zip(rhs.components.iter()) {
            *a = f(*a, b);
        }
        Self { components: out }
    }
}

impl<const D: usize> Default for Vector<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> From<[Scalar; D]> for Vector<D> {
    fn from(arr: [Scalar; D]) -> Self {
        Self::new(arr)
    }
}

impl<const D: usize> From<Vector<D>> for [Scalar; D] {
    fn from(v: Vector<D>) -> Self {
        v.components
    }
}

impl<const D: usize> TryFrom<&[Scalar]> for Vector<D> {
    type Error = VectorError;

    fn try_from(values: &[Scalar]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<const D: usize> TryFrom<Vec<Scalar>> for Vector<D> {
    type Error = VectorError;

    fn try_from(values: Vec<Scalar>) -> Result<Self> {
        Self::from_slice(values.as_slice())
    }
}

/// Panics when `index >= D`, as slice indexing does. Use [`Vector::at`] for
/// a checked read.
impl<const D: usize> Index<usize> for Vector<D> {
    type Output = Scalar;

    #[inline]
    fn index(&self, index: usize) -> &Scalar {
        &self.components[index]
    }
}

impl<const D: usize, const E: usize> PartialEq<Vector<E>> for Vector<D> {
    fn eq(&self, other: &Vector<E>) -> bool {
        self.approx_eq(other, Self::TOLERANCE)
    }
}

// Arithmetic operators
impl<const D: usize> Add for Vector<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<const D: usize> Sub for Vector<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<const D: usize> Neg for Vector<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const D: usize> Mul<Scalar> for Vector<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        self.scale(rhs)
    }
}

impl<const D: usize> Mul<Vector<D>> for Scalar {
    type Output = Vector<D>;
    #[inline]
    fn mul(self, rhs: Vector<D>) -> Vector<D> {
        rhs.scale(self)
    }
}

/// `a * b` is the dot product. Only defined for 3-D vectors, where it
/// cannot fail.
impl Mul for Vector<3> {
    type Output = Scalar;
    #[inline]
    fn mul(self, rhs: Self) -> Scalar {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = rhs.components;
        ax * bx + ay * by + az * bz
    }
}

/// Plain IEEE division: a zero divisor yields infinities or NaN.
impl<const D: usize> Div<Scalar> for Vector<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Scalar) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<const D: usize> AddAssign for Vector<D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const D: usize> SubAssign for Vector<D> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const D: usize> MulAssign<Scalar> for Vector<D> {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

impl<const D: usize> DivAssign<Scalar> for Vector<D> {
    fn div_assign(&mut self, rhs: Scalar) {
        *self = *self / rhs;
    }
}

impl<const D: usize> fmt::Display for Vector<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a, const D: usize>(pub &'a Vector<D>, pub usize);

impl<'a, const D: usize> fmt::Display for Rounded<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "Vector<{}> (", D)?;
        for (i, c) in v.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:.dec$}", c = c, dec = dec)?;
        }
        write!(f, ")")
    }
}

impl<'a, const D: usize> Rounded<'a, D> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector<D>, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
