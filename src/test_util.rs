#[derive(Debug, Clone)]
pub struct ApproxCmp {
    error_margin: f32,
}

impl ApproxCmp {
    pub const DEFAULT: Self = Self { error_margin: 1e-5 };

    pub fn eq_margin<const N: usize>(&self, is: [f32; N], should: [f32; N], error_margin: f32) {
        for (idx, (v1, v2)) in is.iter().zip(should.iter()).enumerate() {
            let diff_abs = (v1 - v2).abs();

            assert!(
                diff_abs <= error_margin,
                "is: {:?} should: {:?} (+- {:?}) @ {}\n  is: {:?}\n  should: {:?}",
                v1,
                v2,
                error_margin,
                idx,
                is,
                should,
            );
        }
    }

    pub fn eq<const N: usize>(&self, is: [f32; N], should: [f32; N]) {
        self.eq_margin(is, should, self.error_margin)
    }
}

impl Default for ApproxCmp {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
