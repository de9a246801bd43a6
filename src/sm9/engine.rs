#![allow(clippy::suspicious_arithmetic_impl)]
use crate::arithmetic::mul_be_bytes;
use crate::ff::{Field, PrimeField};
use crate::group::prime::PrimeCurveAffine;
use crate::group::Group;
use crate::sm9::curve::{G1Affine, G2Affine, G1, G2};
use crate::sm9::fq::Fq;
use crate::sm9::fq12::Fq12;
use crate::sm9::fq2::Fq2;
use crate::sm9::fq6::Fq6;
use crate::sm9::fr::Fr;
use core::borrow::Borrow;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};
use pairing::{Engine, MillerLoopResult, MultiMillerLoop, PairingCurveAffine};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The BN parameter `u`.
pub const BN_X: u64 = 0x600000000058F98A;

// 6U+2 in NAF form, least significant digit first
pub const SIX_U_PLUS_2_NAF: [i8; 66] = [
    0, -1, 0, 0, 0, 0, 1, 0, 1, 0, 0, -1, 0, -1, 0, 0, 0, -1, 0, -1, 0, 1,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1,
];

/// `u^(-(q - 1) / 3)`
pub(crate) const TWIST_FROB_X: Fq2 = Fq2 {
    c0: Fq([
        0x646a4b5a4e6783b9,
        0xd5e4017f8d980f9d,
        0x8d8bf6fd0cdfe790,
        0x2d4ac18b775a8f7b,
    ]),
    c1: Fq([0x0, 0x0, 0x0, 0x0]),
};

/// `u^(-(q - 1) / 2)`
pub(crate) const TWIST_FROB_Y: Fq2 = Fq2 {
    c0: Fq([
        0xabbaac18a46a2054,
        0x46ee57561222c759,
        0x1dae609fa0e23561,
        0x1df7113dae0adc3c,
    ]),
    c1: Fq([0x0, 0x0, 0x0, 0x0]),
};

/// `u^(-(q^2 - 1) / 3)`
pub(crate) const TWIST_FROB_X2: Fq2 = Fq2 {
    c0: Fq([
        0x2f4981aa150a0eb3,
        0x19c92815c28ded55,
        0x39934d9cf7fd761b,
        0x99cac18b7ca1dd5f,
    ]),
    c1: Fq([0x0, 0x0, 0x0, 0x0]),
};

/// `e(P1, P2)`, the generator of `Gt`.
const GT_GENERATOR: Fq12 = Fq12 {
    c0: Fq6 {
        c0: Fq2 {
            c0: Fq([
                0xb55d63ee8d7a8468,
                0x9ef5d413e3176666,
                0x796c802ec3f1370b,
                0xa0f422c35d7b6262,
            ]),
            c1: Fq([
                0xbe7381e2bce90a00,
                0x2a72158dbf514e31,
                0x44e199bee3498d4d,
                0x6a5fed210720de58,
            ]),
        },
        c1: Fq2 {
            c0: Fq([
                0x0e06727b47ee6118,
                0xb01ab631f2f10a18,
                0xb0ebd9852fc780ef,
                0xaa07010f9d42787c,
            ]),
            c1: Fq([
                0xfea0bce10965b32b,
                0x441e074b4573390c,
                0xe9d6067a4cf3c571,
                0x9ee43c7e3740bcd8,
            ]),
        },
        c2: Fq2 {
            c0: Fq([
                0x346965f4dc5b5813,
                0xed43ed38c0ce33e6,
                0x9ba7630e295a5ce7,
                0xa6db7142e0ca24ae,
            ]),
            c1: Fq([
                0x487ab1a6229d91f3,
                0x7e2a3e36c6c822c7,
                0x282c24f00c10930f,
                0x2efe33f18332bb77,
            ]),
        },
    },
    c1: Fq6 {
        c0: Fq2 {
            c0: Fq([
                0x7b9c733c1f964b52,
                0x9b988c0c238fb05e,
                0xe546ccb8d6e1f9b8,
                0xb101d668bfbf8ac8,
            ]),
            c1: Fq([
                0x24fb5abe38626c9c,
                0xd32d71f71d7bd3de,
                0x671d686fd9c9271d,
                0xa3eec3cd6a795be8,
            ]),
        },
        c1: Fq2 {
            c0: Fq([
                0x290e1c8bdb9441aa,
                0x074e1694c800c130,
                0xfa196a2583564700,
                0x254eb32dea84e64d,
            ]),
            c1: Fq([
                0xc219536a54552cae,
                0xc4e4ad66027f8f55,
                0xff31b23d5bc78184,
                0x3b0fc03d5711c93d,
            ]),
        },
        c2: Fq2 {
            c0: Fq([
                0x065c1ad6d376db4f,
                0xe2447d6d5edfdda6,
                0x0d4eba5c8c017781,
                0x61ebca2110d736bf,
            ]),
            c1: Fq([
                0xeb2aeaa2823d010c,
                0xe192c39d7c3e6440,
                0x68411e843fea2a9b,
                0x5f23b1ce3ac438e7,
            ]),
        },
    },
};

impl PairingCurveAffine for G1Affine {
    type Pair = G2Affine;
    type PairingResult = Gt;

    fn pairing_with(&self, other: &Self::Pair) -> Self::PairingResult {
        pairing(self, other)
    }
}

impl PairingCurveAffine for G2Affine {
    type Pair = G1Affine;
    type PairingResult = Gt;

    fn pairing_with(&self, other: &Self::Pair) -> Self::PairingResult {
        pairing(other, self)
    }
}

/// An element of the order-`N` subgroup of `Fq12^*`, written additively.
/// `Gt::default()` is the zero placeholder and not a group element.
#[derive(Copy, Clone, Debug, Default)]
pub struct Gt(pub(crate) Fq12);

impl std::fmt::Display for Gt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fq12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Gt {
    /// Returns the group identity, which is $1$.
    pub fn identity() -> Gt {
        Gt(Fq12::one())
    }

    /// Doubles this group element.
    pub fn double(&self) -> Gt {
        Gt(self.0.square())
    }

    /// Raises to a 32-byte big-endian exponent with a fixed 4-bit window.
    pub fn mul_be_bytes(&self, scalar: &[u8; 32]) -> Gt {
        mul_be_bytes(self, scalar)
    }

    /// 384-byte big-endian encoding of the underlying `Fq12`.
    pub fn to_bytes(&self) -> [u8; 384] {
        self.0.to_bytes()
    }

    /// Decodes an `Fq12` written by [`Gt::to_bytes`]. Subgroup membership is
    /// not checked.
    pub fn from_bytes(bytes: &[u8; 384]) -> subtle::CtOption<Gt> {
        Fq12::from_bytes(bytes).map(Gt)
    }
}

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        // The element is unitary, so we just conjugate.
        let mut u = self.0;
        u.conjugate();
        Gt(u)
    }
}

impl Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl<'a, 'b> Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        self + (-rhs)
    }
}

impl<'a, 'b> Mul<&'b Fr> for &'a Gt {
    type Output = Gt;

    fn mul(self, other: &'b Fr) -> Self::Output {
        self.mul_be_bytes(&other.to_repr())
    }
}

use crate::{
    impl_add_binop_specify_output, impl_binops_additive, impl_binops_additive_specify_output,
    impl_binops_multiplicative, impl_binops_multiplicative_mixed, impl_sub_binop_specify_output,
};
impl_binops_additive!(Gt, Gt);
impl_binops_multiplicative!(Gt, Fr);

impl<T> Sum<T> for Gt
where
    T: Borrow<Gt>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl Group for Gt {
    type Scalar = Fr;

    fn random(rng: impl RngCore) -> Self {
        Self::generator() * Fr::random(rng)
    }

    fn identity() -> Self {
        Self::identity()
    }

    fn generator() -> Self {
        Gt(GT_GENERATOR)
    }

    fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::identity())
    }

    fn double(&self) -> Self {
        self.double()
    }
}

/// Line coefficients of the Miller loop for a fixed `G2` point, in the
/// order they are consumed.
#[derive(Clone, Debug)]
pub struct G2Prepared {
    pub(crate) coeffs: Vec<(Fq2, Fq2, Fq2)>,
    pub(crate) infinity: bool,
}

impl G2Prepared {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }

    pub fn from_affine(q: G2Affine) -> Self {
        if bool::from(q.is_identity()) {
            return G2Prepared {
                coeffs: vec![],
                infinity: true,
            };
        }

        fn doubling_step(r: &mut G2) -> (Fq2, Fq2, Fq2) {
            // Adaptation of Algorithm 26, https://eprint.iacr.org/2010/354.pdf
            let zsquared = r.t;

            let mut tmp0 = r.x;
            tmp0.square_assign();

            let mut tmp1 = r.y;
            tmp1.square_assign();

            let mut tmp2 = tmp1;
            tmp2.square_assign();

            let mut tmp3 = tmp1;
            tmp3 += &r.x;
            tmp3.square_assign();
            tmp3 -= &tmp0;
            tmp3 -= &tmp2;
            tmp3.double_assign();

            let mut tmp4 = tmp0;
            tmp4.double_assign();
            tmp4 += &tmp0;

            let mut tmp6 = r.x;
            tmp6 += &tmp4;

            let mut tmp5 = tmp4;
            tmp5.square_assign();

            r.x = tmp5;
            r.x -= &tmp3;
            r.x -= &tmp3;

            r.z += &r.y;
            r.z.square_assign();
            r.z -= &tmp1;
            r.z -= &zsquared;

            r.y = tmp3;
            r.y -= &r.x;
            r.y.mul_assign(&tmp4);

            tmp2.double_assign();
            tmp2.double_assign();
            tmp2.double_assign();

            r.y -= &tmp2;

            r.t = r.z;
            r.t.square_assign();

            // tmp3 is the xP coefficient, -2 * 3X^2 * Z^2
            tmp3 = tmp4;
            tmp3.mul_assign(&zsquared);
            tmp3.double_assign();
            tmp3 = tmp3.neg();

            // tmp6 is the constant term, from line 14
            tmp6.square_assign();
            tmp6 -= &tmp0;
            tmp6 -= &tmp5;

            tmp1.double_assign();
            tmp1.double_assign();

            tmp6 -= &tmp1;

            // tmp0 is the yP coefficient, 2 * Z' * Z^2
            tmp0 = r.z;
            tmp0.mul_assign(&zsquared);
            tmp0.double_assign();

            (tmp0, tmp3, tmp6)
        }

        fn addition_step(r: &mut G2, q: &G2Affine) -> (Fq2, Fq2, Fq2) {
            // Adaptation of Algorithm 27, https://eprint.iacr.org/2010/354.pdf
            let zsquared = r.t;

            let mut ysquared = q.y;
            ysquared.square_assign();

            // t0 corresponds to line 1
            let mut t0 = zsquared;
            t0.mul_assign(&q.x);

            // t1 corresponds to lines 2 and 3
            let mut t1 = q.y;
            t1 += &r.z;
            t1.square_assign();
            t1 -= &ysquared;
            t1 -= &zsquared;
            t1.mul_assign(&zsquared);

            // t2 corresponds to line 4
            let mut t2 = t0;
            t2 -= &r.x;

            // t3 corresponds to line 5
            let mut t3 = t2;
            t3.square_assign();

            // t4 corresponds to line 6
            let mut t4 = t3;
            t4.double_assign();
            t4.double_assign();

            // t5 corresponds to line 7
            let mut t5 = t4;
            t5.mul_assign(&t2);

            // t6 corresponds to line 8
            let mut t6 = t1;
            t6 -= &r.y;
            t6 -= &r.y;

            // t9 corresponds to line 9
            let mut t9 = t6;
            t9.mul_assign(&q.x);

            // corresponds to line 10
            let mut t7 = t4;
            t7.mul_assign(&r.x);

            // corresponds to line 11, but assigns to r.x instead of T.x
            r.x = t6;
            r.x.square_assign();
            r.x -= &t5;
            r.x -= &t7;
            r.x -= &t7;

            // corresponds to line 12, but assigns to r.z instead of T.z
            r.z += &t2;
            r.z.square_assign();
            r.z -= &zsquared;
            r.z -= &t3;

            // corresponds to line 13
            let mut t10 = q.y;
            t10 += &r.z;

            // corresponds to line 14
            let mut t8 = t7;
            t8 -= &r.x;
            t8.mul_assign(&t6);

            // corresponds to line 15
            t0 = r.y;
            t0.mul_assign(&t5);
            t0.double_assign();

            // corresponds to line 12, but assigns to r.y instead of T.y
            r.y = t8;
            r.y -= &t0;

            r.t = r.z;
            r.t.square_assign();

            // corresponds to line 17
            t10.square_assign();
            t10 -= &ysquared;
            t10 -= &r.t;

            // corresponds to line 18
            t9.double_assign();
            t9 -= &t10;

            // t10 = 2*Zt from Algo 27, line 19
            t10 = r.z;
            t10.double_assign();

            // t1 = first multiplicator of line 21
            t6 = t6.neg();

            t1 = t6;
            t1.double_assign();

            // t9 corresponds to t9 from Algo 27
            (t10, t1, t9)
        }

        let mut coeffs = vec![];
        let mut r: G2 = q.into();

        let negq = -q;

        for i in (1..SIX_U_PLUS_2_NAF.len()).rev() {
            coeffs.push(doubling_step(&mut r));
            let x = SIX_U_PLUS_2_NAF[i - 1];
            match x {
                1 => {
                    coeffs.push(addition_step(&mut r, &q));
                }
                -1 => {
                    coeffs.push(addition_step(&mut r, &negq));
                }
                _ => continue,
            }
        }

        // q1 = pi(Q)
        let mut q1 = q;
        q1.x.conjugate();
        q1.x.mul_assign(&TWIST_FROB_X);
        q1.y.conjugate();
        q1.y.mul_assign(&TWIST_FROB_Y);

        coeffs.push(addition_step(&mut r, &q1));

        // -pi^2(Q); the y coordinate is fixed by the second Frobenius
        let mut minusq2 = q;
        minusq2.x.mul_assign(&TWIST_FROB_X2);

        coeffs.push(addition_step(&mut r, &minusq2));

        G2Prepared {
            coeffs,
            infinity: false,
        }
    }
}

impl From<G2Affine> for G2Prepared {
    fn from(q: G2Affine) -> G2Prepared {
        G2Prepared::from_affine(q)
    }
}

impl MillerLoopResult for Gt {
    type Gt = Self;

    fn final_exponentiation(&self) -> Gt {
        fn exp_by_x(f: &mut Fq12) {
            let x = BN_X;
            let mut res = Fq12::one();
            for i in (0..64).rev() {
                res.cyclotomic_square();
                if ((x >> i) & 1) == 1 {
                    res.mul_assign(f);
                }
            }
            *f = res;
        }

        let r = self.0;
        let mut f1 = self.0;
        f1.conjugate();

        // The Miller loop never yields zero; the zero fallback only keeps
        // this total.
        Gt(r.invert()
            .map(|mut f2| {
                let mut r = f1;
                r.mul_assign(&f2);
                f2 = r;
                r.frobenius_map(2);
                r.mul_assign(&f2);

                let mut fp = r;
                fp.frobenius_map(1);

                let mut fp2 = r;
                fp2.frobenius_map(2);
                let mut fp3 = fp2;
                fp3.frobenius_map(1);

                let mut fu = r;
                exp_by_x(&mut fu);

                let mut fu2 = fu;
                exp_by_x(&mut fu2);

                let mut fu3 = fu2;
                exp_by_x(&mut fu3);

                let mut y3 = fu;
                y3.frobenius_map(1);

                let mut fu2p = fu2;
                fu2p.frobenius_map(1);

                let mut fu3p = fu3;
                fu3p.frobenius_map(1);

                let mut y2 = fu2;
                y2.frobenius_map(2);

                let mut y0 = fp;
                y0.mul_assign(&fp2);
                y0.mul_assign(&fp3);

                let mut y1 = r;
                y1.conjugate();

                let mut y5 = fu2;
                y5.conjugate();

                y3.conjugate();

                let mut y4 = fu;
                y4.mul_assign(&fu2p);
                y4.conjugate();

                let mut y6 = fu3;
                y6.mul_assign(&fu3p);
                y6.conjugate();

                y6.cyclotomic_square();
                y6.mul_assign(&y4);
                y6.mul_assign(&y5);

                let mut t1 = y3;
                t1.mul_assign(&y5);
                t1.mul_assign(&y6);

                y6.mul_assign(&y2);

                t1.cyclotomic_square();
                t1.mul_assign(&y6);
                t1.cyclotomic_square();

                let mut t0 = t1;
                t0.mul_assign(&y1);

                t1.mul_assign(&y0);

                t0.cyclotomic_square();
                t0.mul_assign(&t1);

                t0
            })
            .unwrap_or(Fq12::zero()))
    }
}

type LineIter<'a> = core::slice::Iter<'a, (Fq2, Fq2, Fq2)>;

pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Prepared)]) -> Gt {
    let mut pairs = vec![];
    for &(p, q) in terms {
        if !bool::from(p.is_identity()) && !q.is_zero() {
            pairs.push((p, q.coeffs.iter()));
        }
    }

    // Evaluates the next line of every pair at its G1 point and folds the
    // sparse result `c + b v + a v w` into f
    fn ell(f: &mut Fq12, pairs: &mut [(&G1Affine, LineIter<'_>)]) {
        for (p, coeffs) in pairs.iter_mut() {
            if let Some((c0, c1, c2)) = coeffs.next() {
                let c0 = c0.mul_by_base(&p.y);
                let c1 = c1.mul_by_base(&p.x);
                f.mul_by_014(c2, &c1, &c0);
            }
        }
    }

    let mut f = Fq12::one();

    for i in (1..SIX_U_PLUS_2_NAF.len()).rev() {
        if i != SIX_U_PLUS_2_NAF.len() - 1 {
            f.square_assign();
        }
        ell(&mut f, &mut pairs);
        if SIX_U_PLUS_2_NAF[i - 1] != 0 {
            ell(&mut f, &mut pairs);
        }
    }

    // Frobenius corrections with q1 and -q2
    ell(&mut f, &mut pairs);
    ell(&mut f, &mut pairs);

    debug_assert!(pairs.iter_mut().all(|(_, coeffs)| coeffs.next().is_none()));

    Gt(f)
}

pub fn pairing(g1: &G1Affine, g2: &G2Affine) -> Gt {
    let g2 = G2Prepared::from_affine(*g2);
    let terms: &[(&G1Affine, &G2Prepared)] = &[(g1, &g2)];
    let u = multi_miller_loop(terms);
    u.final_exponentiation()
}

#[derive(Clone, Debug)]
pub struct Sm9;

impl Engine for Sm9 {
    type Fr = Fr;
    type G1 = G1;
    type G1Affine = G1Affine;
    type G2 = G2;
    type G2Affine = G2Affine;
    type Gt = Gt;

    fn pairing(p: &Self::G1Affine, q: &Self::G2Affine) -> Self::Gt {
        pairing(p, q)
    }
}

impl MultiMillerLoop for Sm9 {
    type G2Prepared = G2Prepared;
    type Result = Gt;

    fn multi_miller_loop(terms: &[(&Self::G1Affine, &Self::G2Prepared)]) -> Self::Result {
        multi_miller_loop(terms)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::SEED;
    use rand_core::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn order_be_bytes() -> [u8; 32] {
        let n = num_bigint::BigUint::parse_bytes(&Fr::MODULUS.as_bytes()[2..], 16).unwrap();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&n.to_bytes_be());
        bytes
    }

    #[test]
    fn test_gt_generator() {
        let g = pairing(&G1Affine::generator(), &G2Affine::generator());
        assert_eq!(g, Gt::generator());
        assert!(!bool::from(g.is_identity()));
        assert!(bool::from(g.mul_be_bytes(&order_be_bytes()).is_identity()));

        let mut conj = g;
        conj.0.conjugate();
        assert_eq!(g + conj, Gt::identity());
        assert_eq!(-g, conj);
    }

    #[test]
    fn test_gt_group_law() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..10 {
            let a = Fr::random(&mut rng);
            let b = Fr::random(&mut rng);
            let g = Gt::generator();

            assert_eq!(g * a + g * b, g * (a + b));
            assert_eq!((g * a) * b, g * (a * b));
            assert_eq!(g * a - g * a, Gt::identity());
            assert_eq!([g * a, g * b].iter().sum::<Gt>(), g * (a + b));
        }
        assert_eq!(Gt::generator() * Fr::zero(), Gt::identity());
        assert_eq!(Gt::generator().double(), Gt::generator() * Fr::from(2));
    }

    #[test]
    fn test_pairing() {
        let g1 = G1::generator();
        let mut g2 = G2::generator();
        g2 = g2.double();
        let pair12 = Sm9::pairing(&G1Affine::from(g1), &G2Affine::from(g2));

        let mut g1 = G1::generator();
        let g2 = G2::generator();
        g1 = g1.double();
        let pair21 = Sm9::pairing(&G1Affine::from(g1), &G2Affine::from(g2));

        assert_eq!(pair12, pair21);

        let g1 = G1::generator();
        let mut g2 = G2::generator();
        g2 = g2.double().double();
        let pair12 = Sm9::pairing(&G1Affine::from(g1), &G2Affine::from(g2));

        let mut g1 = G1::generator();
        let mut g2 = G2::generator();
        g1 = g1.double();
        g2 = g2.double();
        let pair21 = Sm9::pairing(&G1Affine::from(g1), &G2Affine::from(g2));

        assert_eq!(pair12, pair21);

        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..10 {
            let a = Fr::random(&mut rng);
            let b = Fr::random(&mut rng);

            let g1 = G1::generator() * a;
            let g2 = G2::generator() * b;
            let pair_ab = Sm9::pairing(&G1Affine::from(g1), &G2Affine::from(g2));

            let g1 = G1::generator() * b;
            let g2 = G2::generator() * a;
            let pair_ba = Sm9::pairing(&G1Affine::from(g1), &G2Affine::from(g2));

            assert_eq!(pair_ab, pair_ba);
        }
    }

    #[test]
    fn random_bilinearity_tests() {
        let mut rng = XorShiftRng::from_seed(SEED);

        for _ in 0..10 {
            let a = G1::generator() * Fr::random(&mut rng);
            let b = G2::generator() * Fr::random(&mut rng);

            let c = Fr::random(&mut rng);
            let d = Fr::random(&mut rng);

            let acbd = Sm9::pairing(&G1Affine::from(a * c), &G2Affine::from(b * d));
            let adbc = Sm9::pairing(&G1Affine::from(a * d), &G2Affine::from(b * c));

            let cd = c * d;
            let limbs: [u64; 4] = cd.into();
            let abcd = Gt(Sm9::pairing(&G1Affine::from(a), &G2Affine::from(b))
                .0
                .pow_vartime(limbs));

            assert_eq!(acbd, adbc);
            assert_eq!(acbd, abcd);
            assert_eq!(
                acbd,
                Sm9::pairing(&G1Affine::from(a), &G2Affine::from(b)) * cd
            );
        }
    }

    #[test]
    fn engine_tests() {
        let mut rng = XorShiftRng::from_seed(SEED);

        for _ in 0..5 {
            let a = G1Affine::from(G1::random(&mut rng));
            let b = G2Affine::from(G2::random(&mut rng));

            assert!(a.pairing_with(&b) == b.pairing_with(&a));
            assert!(a.pairing_with(&b) == pairing(&a, &b));
        }

        for _ in 0..5 {
            let z1 = G1Affine::identity();
            let z2 = G2Prepared::from(G2Affine::identity());

            let a = G1Affine::from(G1::random(&mut rng));
            let b = G2Prepared::from(G2Affine::from(G2::random(&mut rng)));
            let c = G1Affine::from(G1::random(&mut rng));
            let d = G2Prepared::from(G2Affine::from(G2::random(&mut rng)));

            assert_eq!(
                Fq12::ONE,
                multi_miller_loop(&[(&z1, &b)]).final_exponentiation().0,
            );

            assert_eq!(
                Fq12::ONE,
                multi_miller_loop(&[(&a, &z2)]).final_exponentiation().0,
            );

            assert_eq!(
                multi_miller_loop(&[(&z1, &b), (&c, &d)]).final_exponentiation(),
                multi_miller_loop(&[(&a, &z2), (&c, &d)]).final_exponentiation(),
            );

            assert_eq!(
                multi_miller_loop(&[(&a, &b), (&z1, &d)]).final_exponentiation(),
                multi_miller_loop(&[(&a, &b), (&c, &z2)]).final_exponentiation(),
            );
        }
    }

    #[test]
    fn random_miller_loop_tests() {
        let mut rng = XorShiftRng::from_seed(SEED);

        // Exercise a double miller loop
        for _ in 0..5 {
            let a = G1Affine::from(G1::random(&mut rng));
            let b = G2Affine::from(G2::random(&mut rng));
            let c = G1Affine::from(G1::random(&mut rng));
            let d = G2Affine::from(G2::random(&mut rng));

            let ab = pairing(&a, &b);
            let cd = pairing(&c, &d);

            let abcd = ab + cd;

            let b = G2Prepared::from(b);
            let d = G2Prepared::from(d);

            let abcd_with_double_loop =
                multi_miller_loop(&[(&a, &b), (&c, &d)]).final_exponentiation();

            assert_eq!(abcd, abcd_with_double_loop);
        }
    }

    #[test]
    fn test_prepared_line_count() {
        let nonzero = SIX_U_PLUS_2_NAF[..SIX_U_PLUS_2_NAF.len() - 1]
            .iter()
            .filter(|d| **d != 0)
            .count();
        let prepared = G2Prepared::from(G2Affine::generator());
        assert!(!prepared.is_zero());
        assert_eq!(
            prepared.coeffs.len(),
            SIX_U_PLUS_2_NAF.len() - 1 + nonzero + 2
        );
        assert!(G2Prepared::from(G2Affine::identity()).is_zero());
    }

    #[test]
    fn test_naf_value() {
        let value: i128 = SIX_U_PLUS_2_NAF
            .iter()
            .rev()
            .fold(0, |acc, d| 2 * acc + *d as i128);
        assert_eq!(value, 6 * BN_X as i128 + 2);
    }
}
