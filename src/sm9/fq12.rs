use super::fq::{extension_sqrt_params, Fq};
use crate::ff_ext::{sqrt_ratio_by_division, sqrt_tonelli_shanks};
use super::fq2::Fq2;
use super::fq6::Fq6;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// An element of Fq12, represented by c0 + c1 * w, where w^2 = v.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Fq12 {
    pub c0: Fq6,
    pub c1: Fq6,
}

impl ConditionallySelectable for Fq12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq12 {
            c0: Fq6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fq6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl ConstantTimeEq for Fq12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<'a> Neg for &'a Fq12 {
    type Output = Fq12;

    #[inline]
    fn neg(self) -> Fq12 {
        self.neg()
    }
}

impl Neg for Fq12 {
    type Output = Fq12;

    #[inline]
    fn neg(self) -> Fq12 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fq12> for &'a Fq12 {
    type Output = Fq12;

    #[inline]
    fn sub(self, rhs: &'b Fq12) -> Fq12 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fq12> for &'a Fq12 {
    type Output = Fq12;

    #[inline]
    fn add(self, rhs: &'b Fq12) -> Fq12 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fq12> for &'a Fq12 {
    type Output = Fq12;

    #[inline]
    fn mul(self, rhs: &'b Fq12) -> Fq12 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fq12, Fq12);
impl_binops_multiplicative!(Fq12, Fq12);
impl_sum_prod!(Fq12);
impl_frobenius_shorthands!(Fq12);

impl Fq12 {
    #[inline]
    pub const fn zero() -> Self {
        Fq12 {
            c0: Fq6::zero(),
            c1: Fq6::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Self {
        Fq12 {
            c0: Fq6::one(),
            c1: Fq6::zero(),
        }
    }

    pub const fn new(c0: Fq6, c1: Fq6) -> Self {
        Fq12 { c0, c1 }
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Fq12 {
            c0: Fq6::random(&mut rng),
            c1: Fq6::random(&mut rng),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    pub fn add(&self, other: &Self) -> Self {
        Fq12 {
            c0: self.c0 + other.c0,
            c1: self.c1 + other.c1,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Fq12 {
            c0: self.c0 - other.c0,
            c1: self.c1 - other.c1,
        }
    }

    pub fn neg(&self) -> Self {
        Fq12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    pub fn double(&self) -> Self {
        Fq12 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut t = *self;
        t.mul_assign(other);
        t
    }

    pub fn mul_assign(&mut self, other: &Self) {
        let t0 = self.c0 * other.c0;
        let mut t1 = self.c1 * other.c1;
        let t2 = other.c0 + other.c1;

        self.c1 += &self.c0;
        self.c1 *= &t2;
        self.c1 -= &t0;
        self.c1 -= &t1;

        t1.mul_by_nonresidue();
        self.c0 = t0 + t1;
    }

    pub fn square(&self) -> Self {
        let mut t = *self;
        t.square_assign();
        t
    }

    pub fn square_assign(&mut self) {
        let mut ab = self.c0 * self.c1;

        let c0c1 = self.c0 + self.c1;

        let mut c0 = self.c1;
        c0.mul_by_nonresidue();
        c0 += &self.c0;
        c0 *= &c0c1;
        c0 -= &ab;
        self.c1 = ab;
        self.c1 += &ab;
        ab.mul_by_nonresidue();
        c0 -= &ab;
        self.c0 = c0;
    }

    /// Raising to the power `q^6` negates the `w` coefficient. On the
    /// cyclotomic subgroup this is the inverse.
    #[inline(always)]
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    pub fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);

        self.c1.c0.mul_assign(&FROBENIUS_COEFF_FQ12_C1[power % 12]);
        self.c1.c1.mul_assign(&FROBENIUS_COEFF_FQ12_C1[power % 12]);
        self.c1.c2.mul_assign(&FROBENIUS_COEFF_FQ12_C1[power % 12]);
    }

    /// Multiply by the sparse line value `c0 + c1 v + c4 v w`.
    pub fn mul_by_014(&mut self, c0: &Fq2, c1: &Fq2, c4: &Fq2) {
        let mut aa = self.c0;
        aa.mul_by_01(c0, c1);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let o = c1 + c4;
        self.c1 += &self.c0;
        self.c1.mul_by_01(c0, &o);
        self.c1 -= &aa;
        self.c1 -= &bb;
        self.c0 = bb;
        self.c0.mul_by_nonresidue();
        self.c0 += &aa;
    }

    pub fn invert(&self) -> CtOption<Self> {
        let mut c0s = self.c0;
        c0s.square_assign();
        let mut c1s = self.c1;
        c1s.square_assign();
        c1s.mul_by_nonresidue();
        c0s -= &c1s;

        c0s.invert().map(|t| {
            let mut tmp = Fq12 { c0: t, c1: t };
            tmp.c0.mul_assign(&self.c0);
            tmp.c1.mul_assign(&self.c1);
            tmp.c1 = tmp.c1.neg();

            tmp
        })
    }

    /// Squaring in the cyclotomic subgroup (Granger-Scott). Only valid on
    /// elements whose order divides `q^4 - q^2 + 1`.
    pub fn cyclotomic_square(&mut self) {
        fn fp4_square(c0: &mut Fq2, c1: &mut Fq2, a0: &Fq2, a1: &Fq2) {
            let t0 = a0.square();
            let t1 = a1.square();
            let mut t2 = t1;
            t2.mul_by_nonresidue();
            *c0 = t2 + t0;
            t2 = a0 + a1;
            t2.square_assign();
            t2 -= t0;
            *c1 = t2 - t1;
        }

        let mut t3 = Fq2::zero();
        let mut t4 = Fq2::zero();
        let mut t5 = Fq2::zero();
        let mut t6 = Fq2::zero();

        fp4_square(&mut t3, &mut t4, &self.c0.c0, &self.c1.c1);
        let mut t2 = t3 - self.c0.c0;
        t2.double_assign();
        self.c0.c0 = t2 + t3;

        t2 = t4 + self.c1.c1;
        t2.double_assign();
        self.c1.c1 = t2 + t4;

        fp4_square(&mut t3, &mut t4, &self.c1.c0, &self.c0.c2);
        fp4_square(&mut t5, &mut t6, &self.c0.c1, &self.c1.c2);

        t2 = t3 - self.c0.c1;
        t2.double_assign();
        self.c0.c1 = t2 + t3;
        t2 = t4 + self.c1.c2;
        t2.double_assign();
        self.c1.c2 = t2 + t4;
        t3 = t6;
        t3.mul_by_nonresidue();
        t2 = t3 + self.c1.c0;
        t2.double_assign();
        self.c1.c0 = t2 + t3;
        t2 = t5 - self.c0.c2;
        t2.double_assign();
        self.c0.c2 = t2 + t5;
    }

    fn coeffs_high_to_low(&self) -> [&Fq2; 6] {
        [
            &self.c1.c2,
            &self.c1.c1,
            &self.c1.c0,
            &self.c0.c2,
            &self.c0.c1,
            &self.c0.c0,
        ]
    }

    /// Big-endian encoding, highest coefficient first: `c1.c2 || c1.c1 ||
    /// c1.c0 || c0.c2 || c0.c1 || c0.c0`, each `Fq2` as `c1 || c0`.
    pub fn to_bytes(&self) -> [u8; 384] {
        let mut res = [0u8; 384];
        for (chunk, coeff) in res.chunks_exact_mut(64).zip(self.coeffs_high_to_low()) {
            chunk.copy_from_slice(&coeff.to_bytes());
        }
        res
    }

    /// Inverse of [`Fq12::to_bytes`]; fails on any non-canonical `Fq` limb.
    pub fn from_bytes(bytes: &[u8; 384]) -> CtOption<Fq12> {
        let coeff = |i: usize| {
            let mut buf = [0u8; 64];
            buf.copy_from_slice(&bytes[i * 64..(i + 1) * 64]);
            Fq2::from_bytes(&buf)
        };

        coeff(0).and_then(|c12| {
            coeff(1).and_then(|c11| {
                coeff(2).and_then(|c10| {
                    coeff(3).and_then(|c02| {
                        coeff(4).and_then(|c01| {
                            coeff(5).map(|c00| Fq12 {
                                c0: Fq6::new(c00, c01, c02),
                                c1: Fq6::new(c10, c11, c12),
                            })
                        })
                    })
                })
            })
        })
    }
}

/// `w` is a non-square: its norm `-v` is not a square in `Fq6`.
const SQRT_NON_RESIDUE: Fq12 = Fq12 {
    c0: Fq6::zero(),
    c1: Fq6::one(),
};

lazy_static::lazy_static! {
    static ref SQRT_PARAMS: (u32, Vec<u64>, Fq12) =
        extension_sqrt_params(12, &SQRT_NON_RESIDUE);
}

impl ff::Field for Fq12 {
    const ZERO: Self = Self::zero();
    const ONE: Self = Self::one();

    fn random(rng: impl RngCore) -> Self {
        Fq12::random(rng)
    }

    fn is_zero(&self) -> Choice {
        self.is_zero()
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn sqrt(&self) -> CtOption<Self> {
        let (s, tm1d2, root_of_unity) = &*SQRT_PARAMS;
        sqrt_tonelli_shanks(self, tm1d2, *s, *root_of_unity)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        sqrt_ratio_by_division(num, div)
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}

// u^((q^k - 1) / 6) for k = 0, ..., 11
pub(crate) const FROBENIUS_COEFF_FQ12_C1: [Fq2; 12] = [
    // u^((q^0 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x1a9064d81caeba83,
            0xde0d6cb4e5851124,
            0x29fc54b00a7138ba,
            0x49bffffffd5c590e,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^1 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x1a98dfbd4575299f,
            0x9ec8547b245c54fd,
            0xf51f5eac13df846c,
            0x9ef74015d5a16393,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^2 - 1) / 6)
    Fq2 {
        c0: Fq([
            0xb626197dce4736ca,
            0x08296b3557ed0186,
            0x9c705db2fd91512a,
            0x1c753e748601c992,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^3 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x39b4ef0f3ee72529,
            0xdb043bf508582782,
            0xb8554ab054ac91e3,
            0x9848eec25498cab5,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^4 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x81054fcd94e9c1c4,
            0x4c0e91cb8ce2df3e,
            0x4877b452e8aedfb4,
            0x88f53e748b491776,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^5 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x048baa79dcc34107,
            0x5e2e7ac4fe76c161,
            0x99399754365bd4bc,
            0xaf91aeac819b0e13,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^6 - 1) / 6)
    Fq2 {
        c0: Fq([
            0xcadf364fc6a28afa,
            0x43e5269634f5ddb7,
            0xac07569feb1d8e8a,
            0x6c80000005474de3,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^7 - 1) / 6)
    Fq2 {
        c0: Fq([
            0xcad6bb6a9ddc1bde,
            0x832a3ecff61e99de,
            0xe0e44ca3e1af42d8,
            0x1748bfea2d02435d,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^8 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x2f4981aa150a0eb3,
            0x19c92815c28ded55,
            0x39934d9cf7fd761b,
            0x99cac18b7ca1dd5f,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^9 - 1) / 6)
    Fq2 {
        c0: Fq([
            0xabbaac18a46a2054,
            0x46ee57561222c759,
            0x1dae609fa0e23561,
            0x1df7113dae0adc3c,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^10 - 1) / 6)
    Fq2 {
        c0: Fq([
            0x646a4b5a4e6783b9,
            0xd5e4017f8d980f9d,
            0x8d8bf6fd0cdfe790,
            0x2d4ac18b775a8f7b,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^11 - 1) / 6)
    Fq2 {
        c0: Fq([
            0xe0e3f0ae068e0476,
            0xc3c418861c042d7a,
            0x3cca13fbbf32f288,
            0x06ae5153810898de,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::SEED;
    use ff::{Field, PrimeField};
    use rand_core::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn w() -> Fq12 {
        Fq12::new(Fq6::zero(), Fq6::one())
    }

    #[test]
    fn test_sqrt() {
        let (s, _, root_of_unity) = &*SQRT_PARAMS;
        assert_eq!(*s, 4);
        assert_eq!(root_of_unity.pow_vartime([1u64 << (s - 1)]), -Fq12::one());

        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..20 {
            let a = Fq12::random(&mut rng);
            let root = a.square().sqrt().unwrap();
            assert!(root == a || root == -a);

            let non_square = SQRT_NON_RESIDUE * a.square();
            assert!(bool::from(non_square.sqrt().is_none()));

            let b = Fq12::random(&mut rng);
            let (is_square, root) = Fq12::sqrt_ratio(&(a.square() * b), &b);
            assert!(bool::from(is_square));
            assert!(root == a || root == -a);

            let (is_square, root) = Fq12::sqrt_ratio(&(non_square * b), &b);
            assert!(!bool::from(is_square));
            assert_eq!(root, Fq12::zero());
        }

        assert_eq!(Fq12::zero().sqrt().unwrap(), Fq12::zero());
        assert_eq!(Fq12::one().sqrt().unwrap().square(), Fq12::one());
    }

    #[test]
    fn test_w_squared_is_v() {
        let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
        assert_eq!(w().square(), Fq12::new(v, Fq6::zero()));
    }

    #[test]
    fn test_fq12_mul_by_014() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..1000 {
            let c0 = Fq2::random(&mut rng);
            let c1 = Fq2::random(&mut rng);
            let c4 = Fq2::random(&mut rng);
            let mut a = Fq12::random(&mut rng);
            let b = a * Fq12::new(
                Fq6::new(c0, c1, Fq2::zero()),
                Fq6::new(Fq2::zero(), c4, Fq2::zero()),
            );
            a.mul_by_014(&c0, &c1, &c4);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_cyclotomic_square() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..100 {
            // f^((q^6 - 1)(q^2 + 1)) lands in the cyclotomic subgroup
            let f = Fq12::random(&mut rng);
            let mut g = f;
            g.conjugate();
            let mut g = g * f.invert().unwrap();
            let mut h = g;
            h.frobenius_map(2);
            g *= h;

            let mut c = g;
            c.cyclotomic_square();
            assert_eq!(c, g.square());

            let mut conj = g;
            conj.conjugate();
            assert_eq!(conj * g, Fq12::one());
        }
    }

    #[test]
    fn test_frobenius() {
        let mut rng = XorShiftRng::from_seed(SEED);
        let modulus = num_bigint::BigUint::parse_bytes(&Fq::MODULUS.as_bytes()[2..], 16)
            .unwrap()
            .to_u64_digits();

        for _ in 0..5 {
            for i in 0..13 {
                let mut a = Fq12::random(&mut rng);
                let mut b = a;

                for _ in 0..i {
                    a = a.pow_vartime(&modulus);
                }
                b.frobenius_map(i);

                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_frobenius_shorthands() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..10 {
            let a = Fq12::random(&mut rng);
            let mut conj = a;
            conj.conjugate();

            assert_eq!(a.frobenius().frobenius(), a.frobenius_p2());
            assert_eq!(a.frobenius_p2().frobenius_p2(), a.frobenius_p4());
            assert_eq!(a.frobenius_p6(), conj);
            assert_eq!(a.frobenius_p6().frobenius_p6(), a);
            assert_eq!(a.c0.frobenius_p6().frobenius_p2().frobenius_p4(), a.c0);
            assert_eq!(a.c0.c0.frobenius_p2(), a.c0.c0);
        }
    }

    #[test]
    fn test_bytes_layout() {
        let mut rng = XorShiftRng::from_seed(SEED);
        let a = Fq12::random(&mut rng);
        let bytes = a.to_bytes();

        assert_eq!(bytes[..32], a.c1.c2.c1.to_repr());
        assert_eq!(bytes[32..64], a.c1.c2.c0.to_repr());
        assert_eq!(bytes[320..352], a.c0.c0.c1.to_repr());
        assert_eq!(bytes[352..], a.c0.c0.c0.to_repr());
        assert_eq!(Fq12::from_bytes(&bytes).unwrap(), a);

        let mut bad = bytes;
        bad[64..96].copy_from_slice(&[0xff; 32]);
        assert!(bool::from(Fq12::from_bytes(&bad).is_none()));
    }

    #[test]
    fn test_field() {
        crate::tests::field::random_field_tests::<Fq12>("fq12".to_string());
    }
}
