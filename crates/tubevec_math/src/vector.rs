use std::fmt::{Display, Formatter};
use std::iter::repeat;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use log::trace;

use crate::axis::Axis;
use crate::error::{Result, VectorError};
use crate::number_traits::{ApproxEq, IsPositiveNoise, IsZero};
use crate::scalar_format::ShortestScalar;

/// Builds a [`Vector`] from a list of components convertible to `f64`.
///
/// ```
/// use tubevec_math::vector;
///
/// let v = vector![1, 2.5, -3];
/// assert_eq!(v.to_string(), "[1 2.5 -3]");
/// ```
#[macro_export]
macro_rules! vector {
    ($($component:expr),* $(,)?) => {
        $crate::vector::Vector::new(vec![$(f64::from($component)),*])
    };
}

/// Row vector of any dimension.
///
/// Binary operations reconcile mismatched lengths in two different ways:
/// [`Vector::add_into`] and [`Vector::sub_into`] only touch the components
/// both operands share and never grow the receiver, while [`Vector::dot`]
/// pads the shorter operand with zeros.
#[must_use]
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    pub fn zeros(dimension: usize) -> Self {
        Self::new(vec![0.0; dimension])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.components
    }

    /// Component along `axis`, 0 if the vector is too short to have one.
    #[must_use]
    pub fn component(&self, axis: Axis) -> f64 {
        self.components.get(axis.index()).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.component(Axis::X)
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.component(Axis::Y)
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.component(Axis::Z)
    }

    /// Same dimension and no pair of components further apart than `1e-8`.
    ///
    /// The tolerance is absolute and does not scale with the magnitude of
    /// the components.
    #[must_use]
    pub fn equal(&self, other: &Vector) -> bool {
        self.len() == other.len()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a.approx_eq(b))
    }

    /// Adds each addend in order, in place.
    ///
    /// Components of an addend beyond the receiver's dimension are dropped,
    /// and a shorter addend leaves the receiver's trailing components alone.
    pub fn add_into<'a, I>(&mut self, addends: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        self.combine_into(addends, |component, value| *component += value)
    }

    pub fn added<'a, I>(&self, addends: I) -> Vector
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut sum = self.clone();
        sum.add_into(addends);
        sum
    }

    /// Subtracts each operand in order, in place, with the same length policy
    /// as [`Vector::add_into`].
    pub fn sub_into<'a, I>(&mut self, subtrahends: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        self.combine_into(subtrahends, |component, value| *component -= value)
    }

    pub fn subtracted<'a, I>(&self, subtrahends: I) -> Vector
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut difference = self.clone();
        difference.sub_into(subtrahends);
        difference
    }

    fn combine_into<'a, I, F>(&mut self, operands: I, combine: F) -> &mut Self
    where
        I: IntoIterator<Item = &'a Vector>,
        F: Fn(&mut f64, f64),
    {
        let dimension = self.len();
        for operand in operands {
            if operand.len() > dimension {
                trace!(
                    "Dropping {} trailing components of a {}-dimensional operand",
                    operand.len() - dimension,
                    operand.len()
                );
            }

            for (component, &value) in self.components.iter_mut().zip(&operand.components) {
                combine(component, value);
            }
        }

        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for component in &mut self.components {
            *component *= factor;
        }

        self
    }

    pub fn scaled(&self, factor: f64) -> Vector {
        let mut scaled = self.clone();
        scaled.scale(factor);
        scaled
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.components
            .iter()
            .fold(0.0, |sum, component| sum + component * component)
            .sqrt()
    }

    /// Divides every component by the magnitude.
    ///
    /// A vector whose magnitude is below `1e-8` is left untouched instead of
    /// being divided by a near-zero value.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            trace!("Not normalizing near-zero vector {}", self);
            return self;
        }

        for component in &mut self.components {
            *component /= magnitude;
        }

        self
    }

    pub fn normalized(&self) -> Vector {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized
    }

    /// Dot product, the shorter operand being padded with zeros.
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        let dimension = self.len().max(other.len());
        self.padded(dimension)
            .zip(other.padded(dimension))
            .fold(0.0, |sum, (a, b)| sum + a * b)
    }

    fn padded(&self, dimension: usize) -> impl Iterator<Item = f64> + '_ {
        self.components
            .iter()
            .copied()
            .chain(repeat(0.0))
            .take(dimension)
    }

    /// Right-handed cross product.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NotThreeDimensional`] unless both vectors have
    /// exactly 3 components.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.len() != 3 || other.len() != 3 {
            return Err(VectorError::NotThreeDimensional);
        }

        let (x, y, z) = (Axis::X, Axis::Y, Axis::Z);
        Ok(Vector::from([
            self[y] * other[z] - other[y] * self[z],
            self[z] * other[x] - other[z] * self[x],
            self[x] * other[y] - other[x] * self[y],
        ]))
    }

    /// Rotates by `angle` radians about the Z axis, in place.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.rotate_about(angle, Axis::Z)
    }

    /// Rotates by `angle` radians about `axis`, in place.
    ///
    /// Vectors too short to hold the rotation plane are extended with zeros
    /// (to 2 components about Z, 3 about X or Y). Only the first 3
    /// components take part: longer vectors come out truncated to 3. An
    /// empty vector is left as is.
    pub fn rotate_about(&mut self, angle: f64, axis: Axis) -> &mut Self {
        let dimension = self.len();
        if dimension == 0 {
            return self;
        }

        let required = match axis {
            Axis::Z => 2,
            Axis::X | Axis::Y => 3,
        };
        if dimension < required {
            trace!("Extending {dimension}-dimensional vector to {required} dimensions to rotate about {axis:?}");
            self.components.resize(required, 0.0);
        }

        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self[Axis::X], self[Axis::Y]);
        match axis {
            Axis::X => {
                let z = self[Axis::Z];
                self[Axis::Y] = y * cos - z * sin;
                self[Axis::Z] = y * sin + z * cos;
            }
            Axis::Y => {
                let z = self[Axis::Z];
                self[Axis::X] = x * cos + z * sin;
                self[Axis::Z] = -x * sin + z * cos;
            }
            Axis::Z => {
                self[Axis::X] = x * cos - y * sin;
                self[Axis::Y] = x * sin + y * cos;
            }
        }

        if dimension > 3 {
            trace!("Truncating rotated {dimension}-dimensional vector to 3 dimensions");
            self.components.truncate(3);
        }

        self
    }

    pub fn rotated(&self, angle: f64) -> Vector {
        self.rotated_about(angle, Axis::Z)
    }

    pub fn rotated_about(&self, angle: f64, axis: Axis) -> Vector {
        let mut rotated = self.clone();
        rotated.rotate_about(angle, axis);
        rotated
    }

    /// Angle in radians from `self` to `other`, along with the axis of the
    /// rotation between them.
    ///
    /// - 0 dimensions: angle 0, empty axis.
    /// - 1 dimension: angle π if the signs strictly differ, 0 otherwise; empty axis.
    /// - 2 dimensions: signed difference of the polar angles, not wrapped
    ///   into any range; the axis is `[0 0 1]`.
    /// - 3 dimensions and more: angle in `[0, π]`; the axis is the
    ///   normalized cross product, which only exists in 3 dimensions and is
    ///   empty beyond.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NotSameDimensions`] if the dimensions differ.
    pub fn angle(&self, other: &Vector) -> Result<(f64, Vector)> {
        if self.len() != other.len() {
            trace!(
                "Cannot compute the angle between {}- and {}-dimensional vectors",
                self.len(),
                other.len()
            );
            return Err(VectorError::NotSameDimensions);
        }

        match self.len() {
            0 => Ok((0.0, Vector::default())),
            1 => {
                let (a, b) = (self.x(), other.x());
                let opposed = (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0);
                let angle = if opposed { std::f64::consts::PI } else { 0.0 };
                Ok((angle, Vector::default()))
            }
            2 => {
                let angle = other.y().atan2(other.x()) - self.y().atan2(self.x());
                Ok((angle, Vector::from([0.0, 0.0, 1.0])))
            }
            _ => {
                let cosine = self.normalized().dot(&other.normalized());
                let axis = self
                    .cross(other)
                    .map(|mut axis| {
                        axis.normalize();
                        axis
                    })
                    .unwrap_or_default();
                Ok((cosine.clamp(-1.0, 1.0).acos(), axis))
            }
        }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl Index<Axis> for Vector {
    type Output = f64;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.components[axis.index()]
    }
}

impl IndexMut<Axis> for Vector {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.components[axis.index()]
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_into([&rhs]);
        self
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Self::Output {
        self.added([rhs])
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        self.add_into([rhs]);
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.sub_into([&rhs]);
        self
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Self::Output {
        self.subtracted([rhs])
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        self.sub_into([rhs]);
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale(rhs);
        self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.scale(-1.0);
        self
    }
}

/// Renders as `[c0 c1 ...]`. Positive components below `1e-8` are printed
/// as `0`; negative ones are printed as they are.
impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            if component.is_positive_noise() {
                write!(f, "0")?;
            } else {
                write!(f, "{}", ShortestScalar(*component))?;
            }
        }
        write!(f, "]")
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self::new(components.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.components
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
