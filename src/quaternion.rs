use std::ops::{Mul, MulAssign};

use log::trace;

use crate::{
    angle::Angle,
    norm::Normed,
    scalar::{Cross, One},
    vector::{impl_components, Vec3, Vec4},
};

/// Rotation quaternion with the scalar part stored last.
///
/// Only a unit quaternion represents a pure rotation. Nothing keeps the value
/// normalized; [`Quaternion::apply`] normalizes a copy when needed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_components! {
    Quaternion [4] { x: 0, y: 1, z: 2, w: 3 }
}

impl Quaternion {
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation of `angle` around `axis`. The axis does not need to be
    /// normalized.
    pub fn from_axis_angle(axis: Vec3, angle: Angle) -> Self {
        // the sandwich product applies the half angle twice
        let (sin, cos) = angle.half().sin_cos();
        let scaled = axis.normalized() * sin;

        Self::new(scaled.x, scaled.y, scaled.z, cos)
    }

    pub const fn from_parts(vector: Vec3, scalar: f32) -> Self {
        Self::new(vector.x, vector.y, vector.z, scalar)
    }

    pub const fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn conjugated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn inverse(&self) -> Self {
        self.conjugated() / self.magnitude_squared()
    }

    /// Rotates `v`, normalizing a copy of `self` first if it is not a unit
    /// quaternion.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        if self.is_normalized() {
            self.rotate(v)
        } else {
            trace!("Rotating by non unit quaternion {:?}, normalizing", self);
            self.normalized().rotate(v)
        }
    }

    /// Rotates the `xyz` part of `v`, `w` is kept.
    pub fn apply_vec4(&self, v: Vec4) -> Vec4 {
        self.apply(v.truncate()).extend(v.w)
    }

    pub fn forward(&self) -> Vec3 {
        self.apply(Vec3::unit_z())
    }

    pub fn right(&self) -> Vec3 {
        self.apply(Vec3::unit_x())
    }

    pub fn up(&self) -> Vec3 {
        self.apply(Vec3::unit_y())
    }

    // q * p * q^-1, the conjugate is the inverse of a unit quaternion
    fn rotate(&self, v: Vec3) -> Vec3 {
        (*self * Self::from_parts(v, 0.0) * self.conjugated()).vector_part()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Self::identity()
    }
}

impl From<Vec4> for Quaternion {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Vec4 {
    fn from(q: Quaternion) -> Self {
        Vec4::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for Vec3 {
    fn from(q: Quaternion) -> Self {
        q.vector_part()
    }
}

/// Hamilton product, `self` is applied after `rhs` when rotating.
impl Mul<Quaternion> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        let va = self.vector_part();
        let vb = rhs.vector_part();

        Self::from_parts(
            vb * self.w + va * rhs.w + va.cross(vb),
            self.w * rhs.w - va.dot(&vb),
        )
    }
}

impl MulAssign<Quaternion> for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.apply(rhs)
    }
}

impl Mul<Vec4> for Quaternion {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        self.apply_vec4(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::angle::IntoAngle;
    use crate::error::Error;
    use crate::scalar::Zero;
    use crate::test_util::{init_logger, ApproxCmp};

    use super::*;

    #[test]
    fn quat_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::one(), Quaternion::identity());
        assert!(Quaternion::identity().is_normalized());
    }

    #[test]
    fn quat_from_axis_angle() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), FRAC_PI_2.rad());
        let half = std::f32::consts::FRAC_1_SQRT_2;

        ApproxCmp::DEFAULT.eq(q.to_array(), [0.0, 0.0, half, half]);
        assert!(q.is_normalized());
    }

    #[test]
    fn quat_zero_angle_is_identity_rotation() {
        let v = Vec3::new(1.5, -2.0, 7.25);

        for axis in [Vec3::unit_x(), Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 0.0)] {
            let q = Quaternion::from_axis_angle(axis, 0.0f32.rad());
            assert_eq!(q.apply(v), v);
        }
    }

    #[test]
    fn quat_apply_rotates() {
        let q = Quaternion::from_axis_angle(Vec3::unit_z(), 90.0f32.deg());

        ApproxCmp::DEFAULT.eq(q.apply(Vec3::unit_x()).to_array(), [0.0, 1.0, 0.0]);
        ApproxCmp::DEFAULT.eq((q * Vec3::unit_y()).to_array(), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn quat_apply_normalizes() {
        init_logger();

        let unit = Quaternion::from_axis_angle(Vec3::unit_y(), 90.0f32.deg());
        let scaled = unit * 3.0;
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert!(!scaled.is_normalized());
        ApproxCmp::DEFAULT.eq(scaled.apply(v).to_array(), unit.apply(v).to_array());
    }

    #[test]
    fn quat_apply_vec4_keeps_w() {
        let q = Quaternion::from_axis_angle(Vec3::unit_x(), 180.0f32.deg());
        let rotated = q * Vec4::new(0.0, 1.0, 0.0, 0.25);

        ApproxCmp::DEFAULT.eq(rotated.to_array(), [0.0, -1.0, 0.0, 0.25]);
    }

    #[test]
    fn quat_directions() {
        let q = Quaternion::from_axis_angle(Vec3::unit_y(), 90.0f32.deg());

        ApproxCmp::DEFAULT.eq(q.forward().to_array(), [1.0, 0.0, 0.0]);
        ApproxCmp::DEFAULT.eq(q.right().to_array(), [0.0, 0.0, -1.0]);
        ApproxCmp::DEFAULT.eq(q.up().to_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn quat_hamilton_product() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);

        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));

        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        q *= Quaternion::identity();
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn quat_composition_matches_sequential_apply() {
        let a = Quaternion::from_axis_angle(Vec3::unit_z(), 90.0f32.deg());
        let b = Quaternion::from_axis_angle(Vec3::unit_x(), 90.0f32.deg());
        let v = Vec3::new(1.0, 2.0, 3.0);

        ApproxCmp::DEFAULT.eq((a * b).apply(v).to_array(), a.apply(b.apply(v)).to_array());
    }

    #[test]
    fn quat_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

        ApproxCmp::DEFAULT.eq((q * q.inverse()).to_array(), Quaternion::identity().to_array());
    }

    #[test]
    fn quat_magnitude_and_dot() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);

        assert_eq!(q.magnitude_squared(), 25.0);
        assert_eq!(q.magnitude(), 5.0);
        assert_eq!(q.dot(&q), q.magnitude_squared());
        assert_eq!(q.normalized(), Quaternion::new(0.2, 0.4, 0.4, 0.8));
    }

    #[test]
    fn quat_componentwise() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(q + q, q * 2.0);
        assert_eq!(q - q, Quaternion::zero());
        assert_eq!(q / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));

        q += Quaternion::new(1.0, 1.0, 1.0, 1.0);
        q -= Quaternion::new(0.0, 0.0, 0.0, 1.0);
        q /= 2.0;
        q *= 4.0;
        assert_eq!(q, Quaternion::new(4.0, 6.0, 8.0, 8.0));
    }

    #[test]
    fn quat_index() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        q[3] = 5.0;

        assert_eq!([q[0], q[1], q[2], q[3]], [1.0, 2.0, 3.0, 5.0]);
        assert_eq!(
            q.try_index(4),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn quat_index_out_of_bounds() {
        let q = Quaternion::identity();
        let _ = q[4];
    }

    #[test]
    fn quat_vec4_conversion() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(Vec4::from(Quaternion::from(v)), v);
        assert_eq!(Vec3::from(Quaternion::from(v)), Vec3::new(1.0, 2.0, 3.0));
    }
}
