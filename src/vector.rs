use crate::scalar::Cross;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Homogeneous 4D vector.
///
/// `Default` is all zeros. The widening conversions from [`Vec2`] and [`Vec3`]
/// set `w` to one so the result transforms as a point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Componentwise behaviour shared by every `f32` tuple type of the crate:
/// construction, indexing, array and slice conversions, arithmetic and the
/// [`Normed`](crate::norm::Normed) contract.
macro_rules! impl_components {
    ( $( $vec:ident [$len:literal] { $( $field:ident : $idx:literal ),+ } )+ ) => {
        $(
            impl $vec {
                pub const fn new($( $field: f32 ),+) -> Self {
                    Self { $( $field ),+ }
                }

                pub const fn to_array(&self) -> [f32; $len] {
                    [$( self.$field ),+]
                }

                pub fn dot(&self, rhs: &Self) -> f32 {
                    0.0 $( + self.$field * rhs.$field )+
                }

                pub fn get(&self, index: usize) -> Option<&f32> {
                    match index {
                        $( $idx => Some(&self.$field), )+
                        _ => None,
                    }
                }

                pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
                    match index {
                        $( $idx => Some(&mut self.$field), )+
                        _ => None,
                    }
                }

                pub fn try_index(&self, index: usize) -> $crate::error::Result<f32> {
                    self.get(index)
                        .copied()
                        .ok_or($crate::error::Error::IndexOutOfBounds { index, len: $len })
                }
            }

            $crate::norm::impl_normed!($vec { $( $field ),+ });

            impl $crate::scalar::Zero for $vec {
                fn zero() -> Self {
                    Self { $( $field: 0.0 ),+ }
                }
            }

            impl ::std::ops::Index<usize> for $vec {
                type Output = f32;

                fn index(&self, index: usize) -> &Self::Output {
                    match self.get(index) {
                        Some(value) => value,
                        None => panic!(
                            "index out of bounds: {} has {} components but the index is {}",
                            stringify!($vec), $len, index
                        ),
                    }
                }
            }

            impl ::std::ops::IndexMut<usize> for $vec {
                fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                    match self.get_mut(index) {
                        Some(value) => value,
                        None => panic!(
                            "index out of bounds: {} has {} components but the index is {}",
                            stringify!($vec), $len, index
                        ),
                    }
                }
            }

            impl From<[f32; $len]> for $vec {
                fn from(data: [f32; $len]) -> Self {
                    Self { $( $field: data[$idx] ),+ }
                }
            }

            impl From<$vec> for [f32; $len] {
                fn from(value: $vec) -> Self {
                    value.to_array()
                }
            }

            impl ::std::convert::TryFrom<&[f32]> for $vec {
                type Error = $crate::error::Error;

                fn try_from(data: &[f32]) -> $crate::error::Result<Self> {
                    if data.len() != $len {
                        return Err($crate::error::Error::InvalidLength {
                            expected: $len,
                            got: data.len(),
                        });
                    }

                    Ok(Self { $( $field: data[$idx] ),+ })
                }
            }

            // The struct is `repr(C)` with only `f32` fields, which has the
            // same layout as the array.
            impl AsRef<[f32; $len]> for $vec {
                fn as_ref(&self) -> &[f32; $len] {
                    unsafe { &*(self as *const Self as *const [f32; $len]) }
                }
            }

            impl AsMut<[f32; $len]> for $vec {
                fn as_mut(&mut self) -> &mut [f32; $len] {
                    unsafe { &mut *(self as *mut Self as *mut [f32; $len]) }
                }
            }

            impl ::std::ops::Add<$vec> for $vec {
                type Output = Self;

                fn add(self, rhs: $vec) -> Self::Output {
                    Self { $( $field: self.$field + rhs.$field ),+ }
                }
            }

            impl ::std::ops::Sub<$vec> for $vec {
                type Output = Self;

                fn sub(self, rhs: $vec) -> Self::Output {
                    Self { $( $field: self.$field - rhs.$field ),+ }
                }
            }

            impl ::std::ops::AddAssign<$vec> for $vec {
                fn add_assign(&mut self, rhs: $vec) {
                    $( self.$field += rhs.$field; )+
                }
            }

            impl ::std::ops::SubAssign<$vec> for $vec {
                fn sub_assign(&mut self, rhs: $vec) {
                    $( self.$field -= rhs.$field; )+
                }
            }

            impl ::std::ops::Mul<f32> for $vec {
                type Output = Self;

                fn mul(self, rhs: f32) -> Self::Output {
                    Self { $( $field: self.$field * rhs ),+ }
                }
            }

            impl ::std::ops::Mul<$vec> for f32 {
                type Output = $vec;

                fn mul(self, rhs: $vec) -> Self::Output {
                    rhs * self
                }
            }

            impl ::std::ops::Div<f32> for $vec {
                type Output = Self;

                fn div(self, rhs: f32) -> Self::Output {
                    Self { $( $field: self.$field / rhs ),+ }
                }
            }

            impl ::std::ops::MulAssign<f32> for $vec {
                fn mul_assign(&mut self, rhs: f32) {
                    $( self.$field *= rhs; )+
                }
            }

            impl ::std::ops::DivAssign<f32> for $vec {
                fn div_assign(&mut self, rhs: f32) {
                    $( self.$field /= rhs; )+
                }
            }

            impl ::std::ops::Neg for $vec {
                type Output = Self;

                fn neg(self) -> Self::Output {
                    Self { $( $field: -self.$field ),+ }
                }
            }
        )+
    };
}

pub(crate) use impl_components;

impl_components! {
    Vec2 [2] { x: 0, y: 1 }
    Vec3 [3] { x: 0, y: 1, z: 2 }
    Vec4 [4] { x: 0, y: 1, z: 2, w: 3 }
}

macro_rules! impl_length {
    ( $( $vec:ident )+ ) => {
        $(
            impl $vec {
                pub fn length(&self) -> f32 {
                    self.length_squared().sqrt()
                }

                /// Sum of the squared components, cheaper than [`Self::length`].
                pub fn length_squared(&self) -> f32 {
                    self.dot(self)
                }
            }
        )+
    };
}

impl_length! { Vec2 Vec3 Vec4 }

impl Vec2 {
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Vec4 {
    /// A point at the given position, `w` is one.
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        v.extend(w)
    }

    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Vec2 {
    fn from(v: Vec3) -> Self {
        v.truncate()
    }
}

impl From<Vec4> for Vec2 {
    fn from(v: Vec4) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec4> for Vec3 {
    fn from(v: Vec4) -> Self {
        v.truncate()
    }
}

impl From<Vec2> for Vec3 {
    fn from(v: Vec2) -> Self {
        v.extend(0.0)
    }
}

impl From<Vec2> for Vec4 {
    fn from(v: Vec2) -> Self {
        Vec4::new(v.x, v.y, 0.0, 1.0)
    }
}

impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        v.extend(1.0)
    }
}

impl<'a, 'b> Cross<&'a Vec3> for &'b Vec3 {
    type Output = Vec3;

    fn cross(self, rhs: &'a Vec3) -> Self::Output {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Cross<Vec3> for Vec3 {
    type Output = Self;

    fn cross(self, rhs: Vec3) -> Self::Output {
        Cross::cross(&self, &rhs)
    }
}

/// Cross product of the `xyz` parts, `w` of the result is zero.
impl<'a, 'b> Cross<&'a Vec4> for &'b Vec4 {
    type Output = Vec4;

    fn cross(self, rhs: &'a Vec4) -> Self::Output {
        Cross::cross(self.truncate(), rhs.truncate()).extend(0.0)
    }
}

impl Cross<Vec4> for Vec4 {
    type Output = Self;

    fn cross(self, rhs: Vec4) -> Self::Output {
        Cross::cross(&self, &rhs)
    }
}
