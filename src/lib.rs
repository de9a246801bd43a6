//! Pairing-friendly SM9 Barreto-Naehrig curve.
//!
//! The crate provides the base field tower `Fq -> Fq2 -> Fq6 -> Fq12`, the
//! groups `G1` (over `Fq`) and `G2` (over `Fq2`, on the sextic twist), the
//! target group `Gt` and the optimal Ate pairing between them.

#[macro_use]
mod macros;
mod derive;

mod arithmetic;
pub mod error;
pub mod ff_ext;
pub mod sm9;

#[cfg(test)]
pub mod tests;

pub use arithmetic::{Coordinates, CurveAffine, CurveExt};
pub use error::{Error, Result};

// Re-export ff, group and pairing to simplify down stream dependencies
pub use ff;
pub use group;
pub use pairing;
