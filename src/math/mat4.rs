use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::math::{Scalar, Vec3};

/// A row-major 4x4 matrix.
///
/// Points are treated as row vectors, so translation lives in the last row
/// and `a * b` applies `a` first, then `b`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mat4<T: Scalar> {
    pub data: [[T; 4]; 4],
}

pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;

impl<T: Scalar> Mat4<T> {
    pub fn new(data: [[T; 4]; 4]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            result.data[i][i] = T::one();
        }
        result
    }

    pub fn zero() -> Self {
        Self {
            data: [[T::zero(); 4]; 4],
        }
    }

    pub fn from_translation(translation: Vec3<T>) -> Self {
        let mut result = Self::identity();
        result.data[3] = [translation.x, translation.y, translation.z, T::one()];
        result
    }

    pub fn from_scale(scale: T) -> Self {
        Self::from_nonuniform_scale(scale, scale, scale)
    }

    pub fn from_nonuniform_scale(x: T, y: T, z: T) -> Self {
        let mut result = Self::identity();
        result.data[0][0] = x;
        result.data[1][1] = y;
        result.data[2][2] = z;
        result
    }

    /// Checked form of `m[row]`.
    pub fn try_row(&self, row: usize) -> Result<&[T; 4]> {
        self.data.get(row).ok_or(MathError::RowOutOfRange { row })
    }

    pub fn try_row_mut(&mut self, row: usize) -> Result<&mut [T; 4]> {
        self.data.get_mut(row).ok_or(MathError::RowOutOfRange { row })
    }

    pub fn column(&self, index: usize) -> [T; 4] {
        [
            self.data[0][index],
            self.data[1][index],
            self.data[2][index],
            self.data[3][index],
        ]
    }

    pub fn transpose(self) -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                result.data[i][j] = self.data[j][i];
            }
        }
        result
    }

    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        let [x, y, z, w] = self.row_times(point, T::one());

        if w != T::zero() {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        let [x, y, z, _] = self.row_times(vector, T::zero());
        Vec3::new(x, y, z)
    }

    // [v.x v.y v.z w] * self
    fn row_times(&self, v: Vec3<T>, w: T) -> [T; 4] {
        let mut out = [T::zero(); 4];
        for (j, o) in out.iter_mut().enumerate() {
            *o = v.x * self.data[0][j]
                + v.y * self.data[1][j]
                + v.z * self.data[2][j]
                + w * self.data[3][j];
        }
        out
    }
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Index<usize> for Mat4<T> {
    type Output = [T; 4];

    fn index(&self, row: usize) -> &Self::Output {
        &self.data[row]
    }
}

impl<T: Scalar> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.data[row]
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = Self::zero();

        for i in 0..4 {
            for j in 0..4 {
                result.data[i][j] = self.data[i][0] * other.data[0][j]
                    + self.data[i][1] * other.data[1][j]
                    + self.data[i][2] * other.data[2][j]
                    + self.data[i][3] * other.data[3][j];
            }
        }

        result
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "({} {} {} {})", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

impl<T: Scalar> From<Mat4<T>> for [[T; 4]; 4] {
    fn from(mat: Mat4<T>) -> Self {
        mat.data
    }
}

impl<T: Scalar> From<[[T; 4]; 4]> for Mat4<T> {
    fn from(data: [[T; 4]; 4]) -> Self {
        Self { data }
    }
}

unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Mat4<T> {}
