use crate::scalar::EPSILON;

/// Length based operations shared by the vectors and [`Quaternion`](crate::quaternion::Quaternion).
///
/// Implementors provide the raw magnitude and in-place scaling; the
/// normalization helpers are built on top of those.
pub trait Normed: Sized + Copy {
    fn magnitude(&self) -> f32;
    fn magnitude_squared(&self) -> f32;
    fn scale_mut(&mut self, n: f32);
    fn unscale_mut(&mut self, n: f32);

    /// True when the squared magnitude is within [`EPSILON`] of one.
    fn is_normalized(&self) -> bool {
        (self.magnitude_squared() - 1.0).abs() <= EPSILON
    }

    /// Divides every component by the magnitude unless the value is already
    /// normalized.
    ///
    /// A zero magnitude is not guarded against and leaves NaN components.
    fn normalize(&mut self) -> &mut Self {
        if !self.is_normalized() {
            let n = self.magnitude();
            self.unscale_mut(n);
        }
        self
    }

    fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }
}

/// Implements [`Normed`] for a struct of `f32` fields.
macro_rules! impl_normed {
    ( $ty:ty { $( $field:ident ),+ } ) => {
        impl $crate::norm::Normed for $ty {
            fn magnitude(&self) -> f32 {
                self.magnitude_squared().sqrt()
            }

            fn magnitude_squared(&self) -> f32 {
                0.0 $( + self.$field * self.$field )+
            }

            fn scale_mut(&mut self, n: f32) {
                $( self.$field *= n; )+
            }

            fn unscale_mut(&mut self, n: f32) {
                $( self.$field /= n; )+
            }
        }
    };
}

pub(crate) use impl_normed;
