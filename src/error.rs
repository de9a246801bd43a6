//! Errors returned by the group API in [`crate::sm9`].

use thiserror::Error;

/// Failures detected while validating caller input. Arithmetic itself never
/// fails; these only come out of the decoding and sampling boundaries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid scalar length: expected 32 bytes, got {0}")]
    InvalidScalarLength(usize),
    #[error("not enough data: expected {expected} bytes, got {actual}")]
    NotEnoughData { expected: usize, actual: usize },
    #[error("invalid compressed point prefix {0:#04x}")]
    InvalidPointCompressByte(u8),
    #[error("invalid uncompressed point prefix {0:#04x}")]
    InvalidPointEncodeByte(u8),
    /// Off-curve coordinates, a non-canonical field element, or an
    /// x-coordinate with no matching y.
    #[error("malformed point")]
    MalformedPoint,
    #[error("random source failure")]
    RandomSourceFailure,
}

pub type Result<T> = core::result::Result<T, Error>;
