use super::fq::{extension_sqrt_params, Fq};
use crate::ff_ext::{sqrt_ratio_by_division, sqrt_tonelli_shanks};
use super::fq2::Fq2;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// An element of Fq6, represented by c0 + c1 * v + c2 * v^2, where v^3 = u.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Fq6 {
    pub c0: Fq2,
    pub c1: Fq2,
    pub c2: Fq2,
}

impl ConditionallySelectable for Fq6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq6 {
            c0: Fq2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fq2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fq2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl ConstantTimeEq for Fq6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl<'a> Neg for &'a Fq6 {
    type Output = Fq6;

    #[inline]
    fn neg(self) -> Fq6 {
        self.neg()
    }
}

impl Neg for Fq6 {
    type Output = Fq6;

    #[inline]
    fn neg(self) -> Fq6 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fq6> for &'a Fq6 {
    type Output = Fq6;

    #[inline]
    fn sub(self, rhs: &'b Fq6) -> Fq6 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fq6> for &'a Fq6 {
    type Output = Fq6;

    #[inline]
    fn add(self, rhs: &'b Fq6) -> Fq6 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fq6> for &'a Fq6 {
    type Output = Fq6;

    #[inline]
    fn mul(self, rhs: &'b Fq6) -> Fq6 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fq6, Fq6);
impl_binops_multiplicative!(Fq6, Fq6);
impl_sum_prod!(Fq6);
impl_frobenius_shorthands!(Fq6);

impl Fq6 {
    #[inline]
    pub const fn zero() -> Self {
        Fq6 {
            c0: Fq2::zero(),
            c1: Fq2::zero(),
            c2: Fq2::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Self {
        Fq6 {
            c0: Fq2::one(),
            c1: Fq2::zero(),
            c2: Fq2::zero(),
        }
    }

    pub const fn new(c0: Fq2, c1: Fq2, c2: Fq2) -> Self {
        Fq6 { c0, c1, c2 }
    }

    pub fn random(mut rng: impl RngCore) -> Self {
        Fq6 {
            c0: <Fq2 as ff::Field>::random(&mut rng),
            c1: <Fq2 as ff::Field>::random(&mut rng),
            c2: <Fq2 as ff::Field>::random(&mut rng),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    pub fn add(&self, other: &Self) -> Self {
        Fq6 {
            c0: self.c0 + other.c0,
            c1: self.c1 + other.c1,
            c2: self.c2 + other.c2,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Fq6 {
            c0: self.c0 - other.c0,
            c1: self.c1 - other.c1,
            c2: self.c2 - other.c2,
        }
    }

    pub fn neg(&self) -> Self {
        Fq6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    pub fn double(&self) -> Self {
        Fq6 {
            c0: self.c0.double(),
            c1: self.c1.double(),
            c2: self.c2.double(),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut t = *self;
        t.mul_assign(other);
        t
    }

    pub fn mul_assign(&mut self, other: &Self) {
        let a_a = self.c0 * other.c0;
        let b_b = self.c1 * other.c1;
        let c_c = self.c2 * other.c2;

        let mut t1 = (other.c1 + other.c2) * (self.c1 + self.c2) - (c_c + b_b);
        t1.mul_by_nonresidue();
        let t1 = t1 + a_a;

        let t3 = (other.c0 + other.c2) * (self.c0 + self.c2) - (a_a - b_b + c_c);

        let mut cc = c_c;
        cc.mul_by_nonresidue();
        let t2 = (other.c0 + other.c1) * (self.c0 + self.c1) - (a_a + b_b) + cc;

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    pub fn square(&self) -> Self {
        let mut t = *self;
        t.square_assign();
        t
    }

    pub fn square_assign(&mut self) {
        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        let mut t3 = s3;
        t3.mul_by_nonresidue();
        let mut t4 = s4;
        t4.mul_by_nonresidue();

        self.c0 = t3 + s0;
        self.c1 = t4 + s1;
        self.c2 = s1 + s2 + s3 - s0 - s4;
    }

    pub fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c2.frobenius_map(power);

        self.c1.mul_assign(&FROBENIUS_COEFF_FQ6_C1[power % 6]);
        self.c2.mul_assign(&FROBENIUS_COEFF_FQ6_C2[power % 6]);
    }

    /// Multiply by the cubic non-residue `v`:
    /// `(c0 + c1 v + c2 v^2) v = c2 u + c0 v + c1 v^2`.
    pub fn mul_by_nonresidue(&mut self) {
        let mut c2 = self.c2;
        c2.mul_by_nonresidue();
        self.c2 = self.c1;
        self.c1 = self.c0;
        self.c0 = c2;
    }

    /// Multiply by the sparse element `c1 v`.
    pub fn mul_by_1(&mut self, c1: &Fq2) {
        let mut t0 = self.c2 * c1;
        t0.mul_by_nonresidue();

        let t1 = self.c0 * c1;
        let t2 = self.c1 * c1;

        self.c0 = t0;
        self.c1 = t1;
        self.c2 = t2;
    }

    /// Multiply by the sparse element `c0 + c1 v`.
    pub fn mul_by_01(&mut self, c0: &Fq2, c1: &Fq2) {
        let a_a = self.c0 * c0;
        let b_b = self.c1 * c1;

        let mut t1 = self.c2 * c1;
        t1.mul_by_nonresidue();
        t1 += &a_a;

        let t2 = (c0 + c1) * (self.c0 + self.c1) - a_a - b_b;

        let t3 = self.c2 * c0 + b_b;

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    pub fn invert(&self) -> CtOption<Self> {
        let mut c0 = self.c2;
        c0.mul_by_nonresidue();
        c0.mul_assign(&self.c1);
        c0 = -c0;
        {
            let c0s = self.c0.square();
            c0 += &c0s;
        }
        let mut c1 = self.c2.square();
        c1.mul_by_nonresidue();
        {
            let c01 = self.c0 * self.c1;
            c1 -= &c01;
        }
        let mut c2 = self.c1.square();
        {
            let c02 = self.c0 * self.c2;
            c2 -= &c02;
        }

        let mut tmp1 = self.c2 * c1;
        let tmp2 = self.c1 * c2;
        tmp1 += &tmp2;
        tmp1.mul_by_nonresidue();
        let tmp2 = self.c0 * c0;
        tmp1 += &tmp2;

        tmp1.invert().map(|t| Fq6 {
            c0: t * c0,
            c1: t * c1,
            c2: t * c2,
        })
    }
}

/// `u` stays a non-square in the cubic extension.
const SQRT_NON_RESIDUE: Fq6 = Fq6 {
    c0: Fq2::new(Fq::zero(), Fq::one()),
    c1: Fq2::zero(),
    c2: Fq2::zero(),
};

lazy_static::lazy_static! {
    static ref SQRT_PARAMS: (u32, Vec<u64>, Fq6) = extension_sqrt_params(6, &SQRT_NON_RESIDUE);
}

impl ff::Field for Fq6 {
    const ZERO: Self = Self::zero();
    const ONE: Self = Self::one();

    fn random(rng: impl RngCore) -> Self {
        Fq6::random(rng)
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

pub(crate) const FROBENIUS_COEFF_FQ6_C1: [Fq2; 6] = [
    // u^((q^0 - 1) / 3)
    Fq2 {
        c0: Fq([
            0x1a9064d81caeba83,
            0xde0d6cb4e5851124,
            0x29fc54b00a7138ba,
            0x49bffffffd5c590e,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^1 - 1) / 3)
    Fq2 {
        c0: Fq([
            0xb626197dce4736ca,
            0x08296b3557ed0186,
            0x9c705db2fd91512a,
            0x1c753e748601c992,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^2 - 1) / 3)
    Fq2 {
        c0: Fq([
            0x81054fcd94e9c1c4,
            0x4c0e91cb8ce2df3e,
            0x4877b452e8aedfb4,
            0x88f53e748b491776,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^3 - 1) / 3)
    Fq2 {
        c0: Fq([
            0xcadf364fc6a28afa,
            0x43e5269634f5ddb7,
            0xac07569feb1d8e8a,
            0x6c80000005474de3,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^4 - 1) / 3)
    Fq2 {
        c0: Fq([
            0x2f4981aa150a0eb3,
            0x19c92815c28ded55,
            0x39934d9cf7fd761b,
            0x99cac18b7ca1dd5f,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((q^5 - 1) / 3)
    Fq2 {
        c0: Fq([
            0x646a4b5a4e6783b9,
            0xd5e4017f8d980f9d,
            0x8d8bf6fd0cdfe790,
            0x2d4ac18b775a8f7b,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
];

pub(crate) const FROBENIUS_COEFF_FQ6_C2: [Fq2; 6] = [
    // u^((2q^0 - 2) / 3)
    Fq2 {
        c0: Fq([
            0x1a9064d81caeba83,
            0xde0d6cb4e5851124,
            0x29fc54b00a7138ba,
            0x49bffffffd5c590e,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((2q^1 - 2) / 3)
    Fq2 {
        c0: Fq([
            0x81054fcd94e9c1c4,
            0x4c0e91cb8ce2df3e,
            0x4877b452e8aedfb4,
            0x88f53e748b491776,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((2q^2 - 2) / 3)
    Fq2 {
        c0: Fq([
            0x2f4981aa150a0eb3,
            0x19c92815c28ded55,
            0x39934d9cf7fd761b,
            0x99cac18b7ca1dd5f,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((2q^3 - 2) / 3)
    Fq2 {
        c0: Fq([
            0x1a9064d81caeba83,
            0xde0d6cb4e5851124,
            0x29fc54b00a7138ba,
            0x49bffffffd5c590e,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((2q^4 - 2) / 3)
    Fq2 {
        c0: Fq([
            0x81054fcd94e9c1c4,
            0x4c0e91cb8ce2df3e,
            0x4877b452e8aedfb4,
            0x88f53e748b491776,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
    // u^((2q^5 - 2) / 3)
    Fq2 {
        c0: Fq([
            0x2f4981aa150a0eb3,
            0x19c92815c28ded55,
            0x39934d9cf7fd761b,
            0x99cac18b7ca1dd5f,
        ]),
        c1: Fq([0x0, 0x0, 0x0, 0x0]),
    },
];

#[cfg(test)]
mod test {
    use super::*;
    use ff::{Field, PrimeField};
    use rand_core::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed(crate::tests::SEED)
    }

    fn v() -> Fq6 {
        Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero())
    }

    #[test]
    fn test_sqrt() {
        let (s, _, root_of_unity) = &*SQRT_PARAMS;
        assert_eq!(*s, 3);
        assert_eq!(root_of_unity.pow_vartime([1u64 << (s - 1)]), -Fq6::one());

        let mut rng = rng();
        for _ in 0..20 {
            let a = Fq6::random(&mut rng);
            let root = a.square().sqrt().unwrap();
            assert!(root == a || root == -a);

            let non_square = SQRT_NON_RESIDUE * a.square();
            assert!(bool::from(non_square.sqrt().is_none()));

            let b = Fq6::random(&mut rng);
            let (is_square, root) = Fq6::sqrt_ratio(&(a.square() * b), &b);
            assert!(bool::from(is_square));
            assert!(root == a || root == -a);

            let (is_square, root) = Fq6::sqrt_ratio(&(non_square * b), &b);
            assert!(!bool::from(is_square));
            assert_eq!(root, Fq6::zero());
        }

        assert_eq!(Fq6::zero().sqrt().unwrap(), Fq6::zero());
        assert_eq!(Fq6::one().sqrt().unwrap().square(), Fq6::one());
    }

    #[test]
    fn test_v_cubed_is_u() {
        let u = Fq2::new(Fq::zero(), Fq::one());
        assert_eq!(v().square() * v(), Fq6::new(u, Fq2::zero(), Fq2::zero()));
    }

    #[test]
    fn test_fq6_mul_nonresidue() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = Fq6::random(&mut rng);
            let mut b = a;
            b.mul_by_nonresidue();
            assert_eq!(b, a * v());
        }
    }

    #[test]
    fn test_fq6_mul_by_1() {
        let mut rng = rng();
        for _ in 0..1000 {
            let c1 = Fq2::random(&mut rng);
            let mut a = Fq6::random(&mut rng);
            let b = a * Fq6::new(Fq2::zero(), c1, Fq2::zero());
            a.mul_by_1(&c1);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fq6_mul_by_01() {
        let mut rng = rng();
        for _ in 0..1000 {
            let c0 = Fq2::random(&mut rng);
            let c1 = Fq2::random(&mut rng);
            let mut a = Fq6::random(&mut rng);
            let b = a * Fq6::new(c0, c1, Fq2::zero());
            a.mul_by_01(&c0, &c1);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fq6_square_and_invert() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = Fq6::random(&mut rng);
            assert_eq!(a.square(), a * a);
            assert_eq!(a * a.invert().unwrap(), Fq6::one());
        }
        assert!(bool::from(Fq6::zero().invert().is_none()));
    }

    #[test]
    fn test_frobenius() {
        let mut rng = rng();
        let modulus = num_bigint::BigUint::parse_bytes(&Fq::MODULUS.as_bytes()[2..], 16)
            .unwrap()
            .to_u64_digits();

        for _ in 0..10 {
            for i in 0..7 {
                let mut a = Fq6::random(&mut rng);
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
    fn test_field() {
        crate::tests::field::random_field_tests::<Fq6>("fq6".to_string());
    }
}
