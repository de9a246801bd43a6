use crate::arithmetic::{adc, mac, macx, sbb};
use crate::extend_field_legendre;
use crate::ff::{Field, FromUniformBytes, PrimeField};
use crate::{
    field_arithmetic, field_bits, field_common, field_prime, field_specific,
    impl_add_binop_specify_output, impl_binops_additive, impl_binops_additive_specify_output,
    impl_binops_multiplicative, impl_binops_multiplicative_mixed, impl_from_u64,
    impl_sub_binop_specify_output, impl_sum_prod,
};
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// This represents an element of $\mathbb{F}_r$ where
///
/// `r = 0xb640000002a3a6f1d603ab4ff58ec74449f2934b18ea8beee56ee19cd69ecf25`
///
/// is the scalar field of the SM9 curve, i.e. the order `N` of G1, G2 and GT.
// The internal representation of this type is four 64-bit unsigned
// integers in little-endian order. `Fr` values are always in
// Montgomery form; i.e., Fr(a) = aR mod r, with R = 2^256.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fr(pub(crate) [u64; 4]);

#[cfg(feature = "derive_serde")]
crate::serialize_deserialize_32_byte_primefield!(Fr);

/// Constant representing the modulus
/// r = 0xb640000002a3a6f1d603ab4ff58ec74449f2934b18ea8beee56ee19cd69ecf25
pub(crate) const MODULUS: Fr = Fr([
    0xe56ee19cd69ecf25,
    0x49f2934b18ea8bee,
    0xd603ab4ff58ec744,
    0xb640000002a3a6f1,
]);

/// INV = -(r^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x1d02662351974b53;

/// R = 2^256 mod r
const R: Fr = Fr([
    0x1a911e63296130db,
    0xb60d6cb4e7157411,
    0x29fc54b00a7138bb,
    0x49bffffffd5c590e,
]);

/// R^2 = 2^512 mod r
const R2: Fr = Fr([
    0x7598cd79cd750c35,
    0xe4a08110bb6daeab,
    0xbfee4bae7d78a1f9,
    0x8894f5d163695d0e,
]);

/// R^3 = 2^768 mod r
const R3: Fr = Fr([
    0xa8ea85210ce29ef9,
    0x8bd11806993e3a54,
    0x0db935b5f51a6da4,
    0x85cb2b73f249e8ec,
]);

pub(crate) const MODULUS_STR: &str =
    "0xb640000002a3a6f1d603ab4ff58ec74449f2934b18ea8beee56ee19cd69ecf25";

const MULTIPLICATIVE_GENERATOR: Fr = Fr::from_raw([0x02, 0x0, 0x0, 0x0]);

const TWO_INV: Fr = Fr::from_raw([
    0x72b770ce6b4f6793,
    0x24f949a58c7545f7,
    0xeb01d5a7fac763a2,
    0x5b2000000151d378,
]);

/// `2^((r - 1) / 4)`
const ROOT_OF_UNITY: Fr = Fr::from_raw([
    0x6bf6b016dc51e07b,
    0x4004e46a9bf62c0d,
    0xe600000005474de3,
    0x0000000000000001,
]);

const ROOT_OF_UNITY_INV: Fr = Fr::from_raw([
    0x79783185fa4ceeaa,
    0x09edaee07cf45fe1,
    0xf003ab4ff0477961,
    0xb640000002a3a6ef,
]);

const DELTA: Fr = Fr::from_raw([0x10, 0, 0, 0]);

const S: u32 = 2;

/// `2^((r - 5) / 8)`
const TWO_EXP_R_MINUS_5_OVER_8: Fr = Fr::from_raw([
    0xb5fb580b6e28f03e,
    0xa00272354dfb1606,
    0xf300000002a3a6f1,
    0x0000000000000000,
]);

const R_MINUS_2: [u64; 4] = [
    0xe56ee19cd69ecf23,
    0x49f2934b18ea8bee,
    0xd603ab4ff58ec744,
    0xb640000002a3a6f1,
];

const R_MINUS_5_OVER_8: [u64; 4] = [
    0xdcaddc339ad3d9e4,
    0x893e5269631d517d,
    0x3ac07569feb1d8e8,
    0x16c80000005474de,
];

const LEGENDRE_EXP: [u64; 4] = [
    0x72b770ce6b4f6792,
    0x24f949a58c7545f7,
    0xeb01d5a7fac763a2,
    0x5b2000000151d378,
];

impl_binops_additive!(Fr, Fr);
impl_binops_multiplicative!(Fr, Fr);
field_common!(Fr, MODULUS, R, R2, R3);
impl_sum_prod!(Fr);
impl_from_u64!(Fr, R2);
field_arithmetic!(Fr, MODULUS, INV, dense);
field_prime!(
    Fr,
    MODULUS,
    MODULUS_STR,
    TWO_INV,
    MULTIPLICATIVE_GENERATOR,
    S,
    ROOT_OF_UNITY,
    ROOT_OF_UNITY_INV,
    DELTA,
    R2
);
field_bits!(Fr, MODULUS);
extend_field_legendre!(Fr, &LEGENDRE_EXP);

impl Fr {
    pub const fn size() -> usize {
        32
    }

    /// Returns the multiplicative inverse of the
    /// element. If it is zero, the method fails.
    pub fn invert(&self) -> CtOption<Self> {
        let tmp = self.pow(R_MINUS_2);

        CtOption::new(tmp, !self.ct_eq(&Self::zero()))
    }

    /// Atkin's square root, `r = 5 mod 8`.
    pub fn sqrt(&self) -> CtOption<Self> {
        let b = TWO_EXP_R_MINUS_5_OVER_8 * self.pow(R_MINUS_5_OVER_8);
        let ab = self * b;
        let i = ab.double() * b;
        let root = ab * (i - Self::one());

        CtOption::new(root, root.square().ct_eq(self))
    }
}

impl ff::Field for Fr {
    const ZERO: Self = Self::zero();
    const ONE: Self = Self::one();

    fn random(mut rng: impl RngCore) -> Self {
        let mut random_bytes = [0; 64];
        rng.fill_bytes(&mut random_bytes[..]);

        Self::from_uniform_bytes(&random_bytes)
    }

    fn double(&self) -> Self {
        self.double()
    }

    #[inline(always)]
    fn square(&self) -> Self {
        self.square()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }

    /// Computes the multiplicative inverse of this element,
    /// failing if the element is zero.
    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}
