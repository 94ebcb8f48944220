use std::ops::{Index, IndexMut, Mul, MulAssign};

use log::debug;

use crate::{
    angle::Angle,
    error::{Error, Result},
    quaternion::Quaternion,
    scalar::{One, Zero},
    vector::{Vec3, Vec4},
};

/// Column-major 4x4 matrix, `m[col][row]`.
///
/// Read as 16 consecutive floats the element at (`col`, `row`) sits at
/// `col * 4 + row`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    /// Builds a matrix from its elements written row by row, the way it is
    /// printed on paper.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        c0r0: f32, c1r0: f32, c2r0: f32, c3r0: f32,
        c0r1: f32, c1r1: f32, c2r1: f32, c3r1: f32,
        c0r2: f32, c1r2: f32, c2r2: f32, c3r2: f32,
        c0r3: f32, c1r3: f32, c2r3: f32, c3r3: f32,
    ) -> Self {
        Self::from_cols(
            Vec4::new(c0r0, c0r1, c0r2, c0r3),
            Vec4::new(c1r0, c1r1, c1r2, c1r3),
            Vec4::new(c2r0, c2r1, c2r2, c2r3),
            Vec4::new(c3r0, c3r1, c3r2, c3r3),
        )
    }

    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Sets the four diagonal elements to `s`, everything else is zero.
    pub fn from_diagonal(s: f32) -> Self {
        let mut matrix = Self::zero();
        for idx in 0..4 {
            matrix.cols[idx][idx] = s;
        }
        matrix
    }

    pub fn identity() -> Self {
        Self::from_diagonal(1.0)
    }

    pub fn translate(direction: Vec3) -> Self {
        let mut matrix = Self::identity();
        matrix.cols[3] = direction.into();
        matrix
    }

    pub fn scale(factor: Vec3) -> Self {
        let mut matrix = Self::zero();
        for idx in 0..3 {
            matrix.cols[idx][idx] = factor[idx];
        }
        matrix.cols[3].w = 1.0;
        matrix
    }

    /// Rotation matrix of a unit quaternion. Accepts a [`Vec4`] holding the
    /// quaternion components as well.
    pub fn quat_rotate<Q: Into<Quaternion>>(rotation: Q) -> Self {
        let Quaternion { x, y, z, w } = rotation.into();

        Self::from_cols(
            Vec4::new(
                2.0 * (x * x + w * w) - 1.0,
                2.0 * (x * y + w * z),
                2.0 * (x * z - w * y),
                0.0,
            ),
            Vec4::new(
                2.0 * (y * x - w * z),
                2.0 * (y * y + w * w) - 1.0,
                2.0 * (y * z + w * x),
                0.0,
            ),
            Vec4::new(
                2.0 * (z * x + w * y),
                2.0 * (z * y - w * x),
                2.0 * (z * z + w * w) - 1.0,
                0.0,
            ),
            Vec4::unit_w(),
        )
    }

    /// OpenGL style orthographic projection of the box spanned by `min` and
    /// `max`.
    ///
    /// `max` has to be greater than `min` on every axis, equal bounds produce
    /// infinite elements.
    pub fn orthographic(min: Vec3, max: Vec3) -> Self {
        let diff = max - min;
        let sum = min + max;

        Self::from_cols(
            Vec4::new(2.0 / diff.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / diff.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / diff.z, 0.0),
            Vec4::new(-sum.x / diff.x, -sum.y / diff.y, -sum.z / diff.z, 1.0),
        )
    }

    /// Right handed perspective projection, `fov` is the full horizontal
    /// field of view.
    ///
    /// # Panics
    ///
    /// Panics if `near` is zero, see [`Mat4::try_perspective`].
    pub fn perspective(fov: Angle, width: f32, height: f32, near: f32, far: f32) -> Self {
        match Self::try_perspective(fov, width, height, near, far) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_perspective(
        fov: Angle,
        width: f32,
        height: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        if near == 0.0 {
            return Err(Error::ZeroNearPlane);
        }

        let tan_fov = fov.half().tan();

        Ok(Self::from_cols(
            Vec4::new(1.0 / tan_fov, 0.0, 0.0, 0.0),
            Vec4::new(0.0, width / (height * tan_fov), 0.0, 0.0),
            Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
        ))
    }

    /// # Panics
    ///
    /// Panics if `idx` is 4 or more, see [`Mat4::try_col`].
    pub fn col(&self, idx: usize) -> Vec4 {
        self[idx]
    }

    /// # Panics
    ///
    /// Panics if `idx` is 4 or more.
    pub fn row(&self, idx: usize) -> Vec4 {
        Vec4::new(
            self.cols[0][idx],
            self.cols[1][idx],
            self.cols[2][idx],
            self.cols[3][idx],
        )
    }

    pub fn get(&self, idx: usize) -> Option<&Vec4> {
        self.cols.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Vec4> {
        self.cols.get_mut(idx)
    }

    pub fn try_col(&self, idx: usize) -> Result<Vec4> {
        self.get(idx)
            .copied()
            .ok_or(Error::IndexOutOfBounds { index: idx, len: 4 })
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let data: &[f32; 16] = self.as_ref();
        *data
    }

    pub fn determinant(&self) -> f32 {
        let (s, c) = self.sub_determinants();

        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverse by cofactor expansion, `None` if the determinant is exactly
    /// zero.
    #[rustfmt::skip]
    pub fn try_inverse(&self) -> Option<Self> {
        let (s, c) = self.sub_determinants();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];

        if det == 0.0 {
            return None;
        }

        let a = |row: usize, col: usize| self.cols[col][row];

        // adjugate, written row by row
        let adjugate = Self::new(
             a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
            -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
             a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
            -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],

            -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
             a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
            -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
             a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],

             a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
            -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
             a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
            -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],

            -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
             a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
            -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
             a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
        );

        Some(adjugate * (1.0 / det))
    }

    /// Like [`Mat4::try_inverse`] but falls back to the identity for a
    /// singular matrix.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            debug!("Matrix is not invertible, using identity: {:?}", self);
            Self::identity()
        })
    }

    // 2x2 determinants of the top two (`s`) and bottom two (`c`) rows
    #[rustfmt::skip]
    fn sub_determinants(&self) -> ([f32; 6], [f32; 6]) {
        let a = |row: usize, col: usize| self.cols[col][row];

        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];

        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];

        (s, c)
    }
}

impl Zero for Mat4 {
    fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }
}

impl One for Mat4 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    fn index(&self, idx: usize) -> &Self::Output {
        match self.get(idx) {
            Some(col) => col,
            None => panic!(
                "index out of bounds: Mat4 has 4 columns but the index is {}",
                idx
            ),
        }
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match self.get_mut(idx) {
            Some(col) => col,
            None => panic!(
                "index out of bounds: Mat4 has 4 columns but the index is {}",
                idx
            ),
        }
    }
}

impl From<[Vec4; 4]> for Mat4 {
    fn from(cols: [Vec4; 4]) -> Self {
        Self { cols }
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(data: [[f32; 4]; 4]) -> Self {
        Self::from_cols(
            data[0].into(),
            data[1].into(),
            data[2].into(),
            data[3].into(),
        )
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Self {
        let mut matrix = Self::zero();
        let raw: &mut [f32; 16] = matrix.as_mut();
        *raw = data;
        matrix
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.to_cols_array()
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = Error;

    fn try_from(data: &[f32]) -> Result<Self> {
        if data.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                got: data.len(),
            });
        }

        let mut matrix = Self::zero();
        for (idx, value) in data.iter().enumerate() {
            matrix.cols[idx / 4][idx % 4] = *value;
        }
        Ok(matrix)
    }
}

// Four `repr(C)` columns of four `f32` each are laid out like `[f32; 16]`.
impl AsRef<[f32; 16]> for Mat4 {
    fn as_ref(&self) -> &[f32; 16] {
        unsafe { &*(self as *const Self as *const [f32; 16]) }
    }
}

impl AsMut<[f32; 16]> for Mat4 {
    fn as_mut(&mut self) -> &mut [f32; 16] {
        unsafe { &mut *(self as *mut Self as *mut [f32; 16]) }
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut matrix = Self::zero();

        for col_idx in 0..4 {
            for row_idx in 0..4 {
                let mut value = 0.0;
                for idx in 0..4 {
                    value += self.cols[idx][row_idx] * rhs.cols[col_idx][idx];
                }

                matrix.cols[col_idx][row_idx] = value;
            }
        }

        matrix
    }
}

impl MulAssign<Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        // the product reads every element of `self`, so it can't be done in place
        *self = *self * rhs;
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        let mut vector = Vec4::zero();

        for row_idx in 0..4 {
            for col_idx in 0..4 {
                vector[row_idx] += self.cols[col_idx][row_idx] * rhs[col_idx];
            }
        }

        vector
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self::Output {
        self *= rhs;
        self
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        for col in self.cols.iter_mut() {
            *col *= rhs;
        }
    }
}
