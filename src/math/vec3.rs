use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::math::Scalar;

/// A point or direction in 3-space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;

impl<T: Scalar> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Broadcasts `value` to every component.
    pub fn splat(value: T) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn max_abs(&self) -> T {
        let (x, y, z) = (self.x.abs(), self.y.abs(), self.z.abs());
        let xy = if x > y { x } else { y };
        if xy > z { xy } else { z }
    }

    // Components divided by the largest magnitude, so squaring them can
    // neither underflow to zero nor overflow.
    fn scaled_down(&self, max: T) -> Self {
        Self {
            x: self.x / max,
            y: self.y / max,
            z: self.z / max,
        }
    }

    /// Euclidean norm.
    pub fn length(&self) -> T {
        let max = self.max_abs();
        if max > T::zero() {
            let unit = self.scaled_down(max);
            max * unit.dot(&unit).sqrt()
        } else {
            self.dot(self).sqrt()
        }
    }

    /// Scales `self` to unit length in place and returns it for chaining.
    ///
    /// A zero-length vector is left as it is.
    pub fn normalize(&mut self) -> &mut Self {
        let max = self.max_abs();
        if max > T::zero() {
            *self = self.scaled_down(max);
            let inv_len = self.dot(self).sqrt().recip();
            self.x *= inv_len;
            self.y *= inv_len;
            self.z *= inv_len;
        } else {
            log::trace!("normalize: zero-length vector left unchanged");
        }
        self
    }

    /// By-value form of [`Vec3::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<T: Scalar> Default for Vec3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.y, self.z)
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

// Component-wise, e.g. surface colour times light colour.
impl<T: Scalar> Mul for Vec3<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty)+) => ($(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            fn mul(self, v: Vec3<$t>) -> Vec3<$t> {
                v * self
            }
        }
    )+)
}

impl_scalar_lhs_mul! { f32 f64 }

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Vec3<T> {}
