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
use num_bigint::BigUint;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// This represents an element of $\mathbb{F}_q$ where
///
/// `p = 0xb640000002a3a6f1d603ab4ff58ec74521f2934b1a7aeedbe56f9b27e351457d`
///
/// is the base field of the SM9 curve.
// The internal representation of this type is four 64-bit unsigned
// integers in little-endian order. `Fq` values are always in
// Montgomery form; i.e., Fq(a) = aR mod q, with R = 2^256.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fq(pub(crate) [u64; 4]);

#[cfg(feature = "derive_serde")]
crate::serialize_deserialize_32_byte_primefield!(Fq);

/// Constant representing the modulus
/// q = 0xb640000002a3a6f1d603ab4ff58ec74521f2934b1a7aeedbe56f9b27e351457d
const MODULUS: Fq = Fq([
    0xe56f9b27e351457d,
    0x21f2934b1a7aeedb,
    0xd603ab4ff58ec745,
    0xb640000002a3a6f1,
]);

/// INV = -(q^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x892bc42c2f2ee42b;

/// R = 2^256 mod q
const R: Fq = Fq([
    0x1a9064d81caeba83,
    0xde0d6cb4e5851124,
    0x29fc54b00a7138ba,
    0x49bffffffd5c590e,
]);

/// R^2 = 2^512 mod q
const R2: Fq = Fq([
    0x27dea312b417e2d2,
    0x88f8105fae1a5d3f,
    0xe479b522d6706e7b,
    0x2ea795a656f62fbd,
]);

/// R^3 = 2^768 mod q
const R3: Fq = Fq([
    0x130257769df5827e,
    0x36920fc0837ec76e,
    0xcbec24519c22a142,
    0x219be84a7c687090,
]);

pub const NEGATIVE_ONE: Fq = Fq([
    0xcadf364fc6a28afa,
    0x43e5269634f5ddb7,
    0xac07569feb1d8e8a,
    0x6c80000005474de3,
]);

const MODULUS_STR: &str = "0xb640000002a3a6f1d603ab4ff58ec74521f2934b1a7aeedbe56f9b27e351457d";

/// `2` is a quadratic non-residue modulo q.
const MULTIPLICATIVE_GENERATOR: Fq = Fq::from_raw([0x02, 0x0, 0x0, 0x0]);

const TWO_INV: Fq = Fq::from_raw([
    0xf2b7cd93f1a8a2bf,
    0x90f949a58d3d776d,
    0xeb01d5a7fac763a2,
    0x5b2000000151d378,
]);

/// `2^((q - 1) / 4)`, a primitive fourth root of unity.
const ROOT_OF_UNITY: Fq = Fq::from_raw([
    0xefbd7b54092c756c,
    0x82555233139e9d63,
    0xe0a8debc0783182f,
    0x49db721a269967c4,
]);

const ROOT_OF_UNITY_INV: Fq = Fq::from_raw([
    0xf5b21fd3da24d011,
    0x9f9d411806dc5177,
    0xf55acc93ee0baf15,
    0x6c648de5dc0a3f2c,
]);

/// `2^(2^S) = 16`
const DELTA: Fq = Fq::from_raw([0x10, 0, 0, 0]);

const S: u32 = 2;

/// `2^((q - 5) / 8)`
const TWO_EXP_P_MINUS_5_OVER_8: Fq = Fq([
    0xd5dd560c5235102a,
    0xa3772bab091163ac,
    0x0ed7304fd0711ab0,
    0x8efb889ed7056e1e,
]);

/// `(q - 1) / 2`
const LEGENDRE_EXP: [u64; 4] = [
    0xf2b7cd93f1a8a2be,
    0x90f949a58d3d776d,
    0xeb01d5a7fac763a2,
    0x5b2000000151d378,
];

impl_binops_additive!(Fq, Fq);
impl_binops_multiplicative!(Fq, Fq);
field_common!(Fq, MODULUS, R, R2, R3);
impl_sum_prod!(Fq);
impl_from_u64!(Fq, R2);
field_arithmetic!(Fq, MODULUS, INV, dense);
field_prime!(
    Fq,
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
field_bits!(Fq, MODULUS);
extend_field_legendre!(Fq, &LEGENDRE_EXP);

/// Raises `x1` to `(q - 5) / 8` with a fixed addition chain of 53
/// multiplications and 250 squarings. Shared by every level of the tower
/// that needs a power of that shape.
pub(crate) fn pow_p_minus_5_over_8<F: Field>(x1: &F) -> F {
    let square_n = |x: F, n: usize| (0..n).fold(x, |acc, _| acc.square());

    let x1 = *x1;
    let x2 = x1.square();
    let x3 = x1 * x2;
    let x5 = x3 * x2;
    let x7 = x5 * x2;
    let x9 = x7 * x2;
    let x11 = x9 * x2;
    let x13 = x11 * x2;
    let x15 = x13 * x2;

    let mut t = x11;
    t = square_n(t, 3) * x3;
    t = square_n(t, 3) * x1;
    t = square_n(t, 31) * x5;
    t = square_n(t, 2) * x1;
    t = square_n(t, 6) * x7;
    t = square_n(t, 5) * x9;
    t = square_n(t, 4) * x11;
    t = square_n(t, 2) * x3;
    t = square_n(t, 6) * x7;
    t = square_n(t, 5) * x11;
    t = square_n(t, 10) * x7;
    t = square_n(t, 4) * x5;
    t = square_n(t, 5) * x13;
    t = square_n(t, 6) * x15;
    t = square_n(t, 4) * x15;
    t = square_n(t, 5) * x11;
    t = square_n(t, 6) * x7;
    t = square_n(t, 3) * x3;
    t = square_n(t, 6) * x7;
    t = square_n(t, 2) * x1;
    t = square_n(t, 6) * x5;
    t = square_n(t, 3) * x1;
    t = square_n(t, 8) * x15;
    t = square_n(t, 4) * x9;
    t = square_n(t, 5) * x9;
    t = square_n(t, 6) * x13;
    t = square_n(t, 6) * x11;
    t = square_n(t, 7) * x13;
    t = square_n(t, 6) * x15;
    t = square_n(t, 5) * x11;
    t = square_n(t, 4) * x11;
    t = square_n(t, 4) * x11;
    t = square_n(t, 5) * x13;
    t = square_n(t, 4) * x15;
    t = square_n(t, 5) * x5;
    t = square_n(t, 5) * x13;
    t = square_n(t, 4) * x15;
    t = square_n(t, 6) * x13;
    t = square_n(t, 4) * x9;
    t = square_n(t, 6) * x15;
    t = square_n(t, 2) * x3;
    t = square_n(t, 7) * x13;
    t = square_n(t, 2) * x1;
    t = square_n(t, 6) * x5;
    t = square_n(t, 6) * x5;
    square_n(t, 5) * x15
}

/// Raises `x` to `(q - 1) / 4`, which is `2 * (q - 5) / 8 + 1`.
pub(crate) fn pow_p_minus_1_over_4<F: Field>(x: &F) -> F {
    pow_p_minus_5_over_8(x).square() * x
}

/// Tonelli-Shanks parameters for the degree `k` extension of `Fq`: the
/// two-adicity `s` of `q^k - 1`, `(t - 1) / 2` as little-endian limbs, and
/// `non_residue^t`, a primitive `2^s`-th root of unity.
pub(crate) fn extension_sqrt_params<F: Field>(k: u32, non_residue: &F) -> (u32, Vec<u64>, F) {
    let q = BigUint::new(
        MODULUS
            .0
            .iter()
            .flat_map(|limb| [*limb as u32, (limb >> 32) as u32])
            .collect(),
    );
    let order_minus_one = q.pow(k) - 1u32;
    let s = order_minus_one.trailing_zeros().unwrap_or(0);
    let t = &order_minus_one >> s;
    let tm1d2: BigUint = (&t - 1u32) >> 1;

    let root_of_unity = non_residue.pow_vartime(t.to_u64_digits());
    (s as u32, tm1d2.to_u64_digits(), root_of_unity)
}

impl Fq {
    pub const fn size() -> usize {
        32
    }

    /// Returns the multiplicative inverse of the
    /// element. If it is zero, the method fails.
    ///
    /// Computes `self^(q - 2)` as `(self^((q - 5) / 8))^8 * self^3`.
    pub fn invert(&self) -> CtOption<Self> {
        let x3 = self.square() * self;
        let t = pow_p_minus_5_over_8(self).square_n(3) * x3;

        CtOption::new(t, !self.ct_eq(&Self::zero()))
    }

    /// Atkin's square root for `q = 5 mod 8`.
    pub fn sqrt(&self) -> CtOption<Self> {
        // b = (2a)^((q - 5) / 8)
        let b = TWO_EXP_P_MINUS_5_OVER_8 * pow_p_minus_5_over_8(self);
        let ab = self * b;
        // i = 2ab^2 is a square root of -1 whenever a is a square
        let i = ab.double() * b;
        let root = ab * (i - Self::one());

        CtOption::new(root, root.square().ct_eq(self))
    }
}

impl ff::Field for Fq {
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

    /// Computes the square root of this element, if it exists.
    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }

    /// Returns the multiplicative inverse of the
    /// element. If it is zero, the method fails.
    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}
