/// Tolerance used by [`Normed::is_normalized`](crate::norm::Normed::is_normalized).
pub const EPSILON: f32 = f32::EPSILON;

pub trait Zero {
    fn zero() -> Self;
}

/// Multiplicative identity.
pub trait One {
    fn one() -> Self;
}

pub trait Cross<Rhs = Self> {
    type Output;

    fn cross(self, rhs: Rhs) -> Self::Output;
}

macro_rules! impl_float_zero_one {
    ( $( $float:ty )+ ) => {
        $(
            impl Zero for $float {
                fn zero() -> Self {
                    0.0
                }
            }

            impl One for $float {
                fn one() -> Self {
                    1.0
                }
            }
        )+
    };
}

impl_float_zero_one! { f32 f64 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_zero_one() {
        assert_eq!(f32::zero(), 0.0);
        assert_eq!(f32::one(), 1.0);
        assert_eq!(f64::zero() + f64::one(), 1.0);
    }
}
