//! Single precision vectors, quaternions and 4x4 matrices for building
//! model, view and projection transforms.

mod angle;
mod error;
mod mat4;
mod norm;
mod quaternion;
mod scalar;
mod vector;

#[cfg(feature = "serde-serialize")]
mod serde;

#[cfg(test)]
mod test_util;

pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::angle::{Angle, IntoAngle};
    pub use crate::mat4::Mat4;
    pub use crate::norm::Normed;
    pub use crate::quaternion::Quaternion;
    pub use crate::scalar::{Cross, One, Zero, EPSILON};
    pub use crate::vector::{Vec2, Vec3, Vec4};
}
