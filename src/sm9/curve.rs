use crate::ff::{Field, PrimeField};
use crate::group::Curve;
use crate::group::{prime::PrimeCurveAffine, Group, GroupEncoding};
use crate::sm9::{Fq, Fq2, Fr};
use crate::{
    impl_add_binop_specify_output, impl_binops_additive, impl_binops_additive_specify_output,
    impl_binops_multiplicative, impl_binops_multiplicative_mixed, impl_sub_binop_specify_output,
    new_curve_impl,
};
use crate::{Coordinates, CurveAffine, CurveExt};
use core::cmp;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

new_curve_impl!(
    (pub),
    G1,
    G1Affine,
    Fq,
    Fr,
    (G1_GENERATOR_X, G1_GENERATOR_Y),
    G1_B,
    "sm9_g1",
);

new_curve_impl!(
    (pub),
    G2,
    G2Affine,
    Fq2,
    Fr,
    (G2_GENERATOR_X, G2_GENERATOR_Y),
    G2_B,
    "sm9_g2",
);

const G1_GENERATOR_X: Fq = Fq::from_raw([
    0xe8c4e4817c66dddd,
    0xe1e4086909dc3280,
    0xf5ed0704487d01d6,
    0x93de051d62bf718f,
]);
const G1_GENERATOR_Y: Fq = Fq::from_raw([
    0x0c464cd70a3ea616,
    0x1c1c00cbfa602435,
    0x631065125c395bbc,
    0x21fe8dda4f21e607,
]);
/// `y^2 = x^3 + 5`
const G1_B: Fq = Fq::from_raw([5, 0, 0, 0]);

/// `y^2 = x^3 + 5u` on the sextic twist.
const G2_B: Fq2 = Fq2 {
    c0: Fq::zero(),
    c1: Fq::from_raw([5, 0, 0, 0]),
};

const G2_GENERATOR_X: Fq2 = Fq2 {
    c0: Fq::from_raw([
        0xf9b7213baf82d65b,
        0xee265948d19c17ab,
        0xd2aab97fd34ec120,
        0x3722755292130b08,
    ]),
    c1: Fq::from_raw([
        0x54806c11d8806141,
        0xf1dd2c190f5e93c4,
        0x597b6027b441a01f,
        0x85aef3d078640c98,
    ]),
};

const G2_GENERATOR_Y: Fq2 = Fq2 {
    c0: Fq::from_raw([
        0x6215bba5c999a7c7,
        0x47efba98a71a0811,
        0x5f3170153d278ff2,
        0xa7cf28d519be3da6,
    ]),
    c1: Fq::from_raw([
        0x856dc76b84ebeb96,
        0x0736a96fa347c8bd,
        0x66ba0d262cbee6ed,
        0x17509b092e845c12,
    ]),
};
