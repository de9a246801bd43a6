//! Byte-level group API: length-checked scalar multiplication, point and
//! `Gt` encodings, random sampling and the pairing on projective inputs.
//!
//! Scalars are exactly 32 big-endian bytes; [`normalize_scalar`] brings
//! other lengths into that shape.

use crate::derive::curve::{COMPRESSED_EVEN, COMPRESSED_ODD, UNCOMPRESSED};
use crate::error::{Error, Result};
use crate::ff::{Field, FromUniformBytes, PrimeField};
use crate::group::{Curve, GroupEncoding, UncompressedEncoding};
use crate::sm9::curve::{G1Affine, G1Compressed, G1Uncompressed, G2Affine, G2Compressed, G2Uncompressed, G1, G2};
use crate::sm9::engine::{pairing, Gt};
use crate::sm9::fq::Fq;
use crate::sm9::fq2::Fq2;
use crate::sm9::fr::{Fr, MODULUS};
use crate::sm9::table;
use log::trace;
use num_bigint::BigUint;
use rand_core::RngCore;

/// Width of a `Gt` encoding.
pub const GT_SIZE: usize = 384;

lazy_static::lazy_static! {
    static ref ORDER: BigUint = BigUint::from_bytes_be(
        &MODULUS.0.iter().rev().flat_map(|limb| limb.to_be_bytes()).collect::<Vec<_>>(),
    );
}

fn scalar_bytes(scalar: &[u8]) -> Result<&[u8; 32]> {
    scalar.try_into().map_err(|_| {
        trace!("rejected scalar of {} bytes", scalar.len());
        Error::InvalidScalarLength(scalar.len())
    })
}

fn check_len(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() < expected {
        trace!("rejected {} byte buffer, need {}", bytes.len(), expected);
        return Err(Error::NotEnoughData {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn malformed(what: &str) -> Error {
    trace!("rejected {}", what);
    Error::MalformedPoint
}

macro_rules! impl_group_api {
    ($name:ident, $name_affine:ident, $base:ident, $compressed:ident, $uncompressed:ident, $base_mult:path) => {
        impl $name {
            /// Width of the bare `X || Y` encoding.
            pub const MARSHAL_SIZE: usize = 2 * $base::size();
            /// Width of the `0x04 || X || Y` encoding.
            pub const UNCOMPRESSED_SIZE: usize = 1 + 2 * $base::size();
            /// Width of the `(0x02 | parity) || X` encoding.
            pub const COMPRESSED_SIZE: usize = 1 + $base::size();

            /// `scalar * generator` through the lazily built fixed-base table.
            pub fn scalar_base_mult(scalar: &[u8]) -> Result<Self> {
                Ok($base_mult(scalar_bytes(scalar)?))
            }

            /// `scalar * self` with a fixed 4-bit window.
            pub fn scalar_mult(&self, scalar: &[u8]) -> Result<Self> {
                Ok(self.mul_be_bytes(scalar_bytes(scalar)?))
            }

            /// `X || Y` without a prefix. The identity is all zeros.
            pub fn marshal(&self) -> Vec<u8> {
                self.to_affine().to_uncompressed().as_ref()[1..].to_vec()
            }

            /// `0x04 || X || Y`. The identity has zero coordinates.
            pub fn marshal_uncompressed(&self) -> Vec<u8> {
                self.to_affine().to_uncompressed().as_ref().to_vec()
            }

            /// `(0x02 | parity(Y)) || X`. The identity is `0x03` followed by zeros.
            pub fn marshal_compressed(&self) -> Vec<u8> {
                self.to_affine().to_bytes().as_ref().to_vec()
            }

            /// Decodes the bare form written by `marshal`. Bytes past the
            /// encoding are ignored.
            pub fn unmarshal(bytes: &[u8]) -> Result<Self> {
                check_len(bytes, Self::MARSHAL_SIZE)?;
                let mut repr = $uncompressed::default();
                repr.as_mut()[0] = UNCOMPRESSED;
                repr.as_mut()[1..].copy_from_slice(&bytes[..Self::MARSHAL_SIZE]);
                Self::decode_uncompressed(&repr)
            }

            /// Decodes the prefixed form written by `marshal_uncompressed`.
            pub fn unmarshal_uncompressed(bytes: &[u8]) -> Result<Self> {
                check_len(bytes, Self::UNCOMPRESSED_SIZE)?;
                if bytes[0] != UNCOMPRESSED {
                    trace!("rejected uncompressed prefix {:#04x}", bytes[0]);
                    return Err(Error::InvalidPointEncodeByte(bytes[0]));
                }
                let mut repr = $uncompressed::default();
                repr.as_mut()
                    .copy_from_slice(&bytes[..Self::UNCOMPRESSED_SIZE]);
                Self::decode_uncompressed(&repr)
            }

            /// Decodes the form written by `marshal_compressed`, recovering
            /// `Y` from the curve equation and the parity bit.
            pub fn unmarshal_compressed(bytes: &[u8]) -> Result<Self> {
                check_len(bytes, Self::COMPRESSED_SIZE)?;
                match bytes[0] {
                    COMPRESSED_EVEN | COMPRESSED_ODD => {}
                    prefix => {
                        trace!("rejected compressed prefix {:#04x}", prefix);
                        return Err(Error::InvalidPointCompressByte(prefix));
                    }
                }
                let mut repr = $compressed::default();
                repr.as_mut().copy_from_slice(&bytes[..Self::COMPRESSED_SIZE]);
                Option::<$name_affine>::from($name_affine::from_bytes(&repr))
                    .map(Self::from)
                    .ok_or_else(|| malformed(concat!(stringify!($name), " compressed point")))
            }

            fn decode_uncompressed(repr: &$uncompressed) -> Result<Self> {
                Option::<$name_affine>::from($name_affine::from_uncompressed(repr))
                    .map(Self::from)
                    .ok_or_else(|| malformed(concat!(stringify!($name), " uncompressed point")))
            }
        }
    };
}

impl_group_api!(G1, G1Affine, Fq, G1Compressed, G1Uncompressed, table::g1_base_mult);
impl_group_api!(G2, G2Affine, Fq2, G2Compressed, G2Uncompressed, table::g2_base_mult);

impl Gt {
    /// `e(P1, P2)^scalar` through the lazily built fixed-base table.
    pub fn scalar_base_mult(scalar: &[u8]) -> Result<Gt> {
        Ok(table::gt_base_mult(scalar_bytes(scalar)?))
    }

    /// `self^scalar` with a fixed 4-bit window.
    pub fn scalar_mult(&self, scalar: &[u8]) -> Result<Gt> {
        Ok(self.mul_be_bytes(scalar_bytes(scalar)?))
    }

    /// Twelve big-endian `Fq` values, highest tower coefficient first.
    pub fn marshal(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    /// Decodes the form written by [`Gt::marshal`]. Bytes past the encoding
    /// are ignored and subgroup membership is not checked.
    pub fn unmarshal(bytes: &[u8]) -> Result<Gt> {
        check_len(bytes, GT_SIZE)?;
        let mut repr = [0u8; GT_SIZE];
        repr.copy_from_slice(&bytes[..GT_SIZE]);
        Option::<Gt>::from(Gt::from_bytes(&repr)).ok_or_else(|| malformed("Gt element"))
    }
}

/// Optimal Ate pairing on projective inputs.
pub fn pair(g1: &G1, g2: &G2) -> Gt {
    pairing(&g1.to_affine(), &g2.to_affine())
}

/// Left-pads short scalars to 32 bytes and reduces longer ones modulo `N`.
/// A 32-byte input is returned unchanged.
pub fn normalize_scalar(scalar: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    if scalar.len() > 32 {
        let reduced = (BigUint::from_bytes_be(scalar) % &*ORDER).to_bytes_be();
        out[32 - reduced.len()..].copy_from_slice(&reduced);
    } else {
        out[32 - scalar.len()..].copy_from_slice(scalar);
    }
    out
}

/// Draws a uniform non-zero scalar from `rng`.
fn random_scalar(rng: &mut impl RngCore) -> Result<Fr> {
    loop {
        let mut buf = [0u8; 64];
        rng.try_fill_bytes(&mut buf).map_err(|err| {
            trace!("random source failed: {}", err);
            Error::RandomSourceFailure
        })?;
        let k = Fr::from_uniform_bytes(&buf);
        if !bool::from(k.is_zero()) {
            return Ok(k);
        }
    }
}

/// Returns `(k, k * P1)` for a fresh random `k`.
pub fn random_g1(mut rng: impl RngCore) -> Result<(Fr, G1)> {
    let k = random_scalar(&mut rng)?;
    Ok((k, table::g1_base_mult(&k.to_repr())))
}

/// Returns `(k, k * P2)` for a fresh random `k`.
pub fn random_g2(mut rng: impl RngCore) -> Result<(Fr, G2)> {
    let k = random_scalar(&mut rng)?;
    Ok((k, table::g2_base_mult(&k.to_repr())))
}

/// Returns `(k, e(P1, P2)^k)` for a fresh random `k`.
pub fn random_gt(mut rng: impl RngCore) -> Result<(Fr, Gt)> {
    let k = random_scalar(&mut rng)?;
    Ok((k, table::gt_base_mult(&k.to_repr())))
}
