use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid length (expected: {expected}, got: {got})")]
    InvalidLength { expected: usize, got: usize },
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Near plane of a perspective projection must not be zero")]
    ZeroNearPlane,
}
