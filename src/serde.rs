use std::fmt;

use serde::{
    de::{Error, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{
    mat4::Mat4,
    quaternion::Quaternion,
    vector::{Vec2, Vec3, Vec4},
};

/// Reads exactly `N` floats.
struct ComponentsVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for ComponentsVisitor<N> {
    type Value = [f32; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} floats", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if let Some(size_hint) = seq.size_hint() {
            if size_hint != N {
                return Err(A::Error::invalid_length(size_hint, &self));
            }
        }

        let mut data = [0.0; N];
        for (idx, value) in data.iter_mut().enumerate() {
            *value = seq
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(idx, &self))?;
        }

        if seq.next_element::<f32>()?.is_some() {
            return Err(A::Error::invalid_length(N + 1, &self));
        }

        Ok(data)
    }
}

macro_rules! impl_serde {
    ( $( $ty:ty [$len:literal] => $to_array:ident; )+ ) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    let mut seq = serializer.serialize_seq(Some($len))?;
                    for element in self.$to_array().iter() {
                        seq.serialize_element(element)?;
                    }
                    seq.end()
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let data = deserializer.deserialize_seq(ComponentsVisitor::<$len>)?;
                    Ok(data.into())
                }
            }
        )+
    };
}

impl_serde! {
    Vec2 [2] => to_array;
    Vec3 [3] => to_array;
    Vec4 [4] => to_array;
    Quaternion [4] => to_array;
    Mat4 [16] => to_cols_array;
}

#[cfg(test)]
mod tests {
    use crate::angle::Angle;
    use crate::scalar::One;

    use super::*;

    #[test]
    fn mat4_serde_ident() -> Result<(), Box<dyn std::error::Error>> {
        let mat4 = Mat4::translate(Vec3::new(1.0, -2.0, 0.5));

        let encoded = bincode::serialize(&mat4)?;
        let decoded: Mat4 = bincode::deserialize(&encoded[..])?;

        assert_eq!(mat4, decoded);

        Ok(())
    }

    #[test]
    fn vec3_serde_ident() -> Result<(), Box<dyn std::error::Error>> {
        let vec3 = Vec3::unit_x();

        let encoded = bincode::serialize(&vec3)?;
        let decoded: Vec3 = bincode::deserialize(&encoded[..])?;

        assert_eq!(vec3, decoded);

        Ok(())
    }

    #[test]
    fn quat_serde_order() -> Result<(), Box<dyn std::error::Error>> {
        let quat = Quaternion::from_axis_angle(Vec3::unit_y(), Angle::from_rad(0.5));

        let encoded = bincode::serialize(&quat)?;
        let as_vec4: Vec4 = bincode::deserialize(&encoded[..])?;

        assert_eq!(as_vec4, Vec4::from(quat));
        assert_ne!(quat, Quaternion::one());

        Ok(())
    }

    #[test]
    fn serde_wrong_length() -> Result<(), Box<dyn std::error::Error>> {
        let encoded = bincode::serialize(&Vec2::new(1.0, 2.0))?;

        assert!(bincode::deserialize::<Vec3>(&encoded[..]).is_err());

        Ok(())
    }
}
