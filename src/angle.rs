use std::ops::{Add, Mul, Neg, Sub};

/// Builds an [`Angle`] from a plain float.
pub trait IntoAngle {
    fn rad(self) -> Angle;
    fn deg(self) -> Angle;
}

impl IntoAngle for f32 {
    fn rad(self) -> Angle {
        Angle::from_rad(self)
    }

    fn deg(self) -> Angle {
        Angle::from_deg(self)
    }
}

/// Rotation or field of view angle, kept in radians.
///
/// Quaternions and projections only ever need the half angle and its
/// trigonometric values, so those are provided directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const fn from_rad(radians: f32) -> Self {
        Self { radians }
    }

    pub fn from_deg(degrees: f32) -> Self {
        Self::from_rad(degrees.to_radians())
    }

    pub const fn to_rad(&self) -> f32 {
        self.radians
    }

    pub fn to_deg(&self) -> f32 {
        self.radians.to_degrees()
    }

    pub fn half(&self) -> Self {
        Self::from_rad(self.radians * 0.5)
    }

    /// `(sin, cos)` of the angle.
    pub fn sin_cos(&self) -> (f32, f32) {
        self.radians.sin_cos()
    }

    pub fn tan(&self) -> f32 {
        self.radians.tan()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_rad(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_rad(self.radians - rhs.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_rad(self.radians * rhs)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_rad(-self.radians)
    }
}
