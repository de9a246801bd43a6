use super::fq::{pow_p_minus_1_over_4, Fq};
use crate::ff::{Field, PrimeField};
use crate::ff_ext::{sqrt_ratio_by_division, Legendre};
use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// An element of Fq2, represented by c0 + c1 * u, where u^2 = -2.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Fq2 {
    pub c0: Fq,
    pub c1: Fq,
}

/// `u * (-2)^((q - 1) / 4) / 2`, used to fix up the square root of an
/// element whose `(q - 1) / 4` power has norm `-1`.
const SQRT_ADJ: Fq2 = Fq2 {
    c0: Fq::zero(),
    c1: Fq([
        0x0f92451b911c3553,
        0x7e7b67a011698b2f,
        0xc72c7b00251dac94,
        0xa74477612b9e38d3,
    ]),
};

/// `Fq2` elements are ordered lexicographically.
impl Ord for Fq2 {
    #[inline(always)]
    fn cmp(&self, other: &Fq2) -> Ordering {
        match self.c1.cmp(&other.c1) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            Ordering::Equal => self.c0.cmp(&other.c0),
        }
    }
}

impl PartialOrd for Fq2 {
    #[inline(always)]
    fn partial_cmp(&self, other: &Fq2) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ConditionallySelectable for Fq2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fq2 {
            c0: Fq::conditional_select(&a.c0, &b.c0, choice),
            c1: Fq::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl ConstantTimeEq for Fq2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<'a> Neg for &'a Fq2 {
    type Output = Fq2;

    #[inline]
    fn neg(self) -> Fq2 {
        self.neg()
    }
}

impl Neg for Fq2 {
    type Output = Fq2;

    #[inline]
    fn neg(self) -> Fq2 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fq2> for &'a Fq2 {
    type Output = Fq2;

    #[inline]
    fn sub(self, rhs: &'b Fq2) -> Fq2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fq2> for &'a Fq2 {
    type Output = Fq2;

    #[inline]
    fn add(self, rhs: &'b Fq2) -> Fq2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fq2> for &'a Fq2 {
    type Output = Fq2;

    #[inline]
    fn mul(self, rhs: &'b Fq2) -> Fq2 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fq2, Fq2);
impl_binops_multiplicative!(Fq2, Fq2);
impl_sum_prod!(Fq2);
impl_frobenius_shorthands!(Fq2);

impl Fq2 {
    #[inline]
    pub const fn zero() -> Fq2 {
        Fq2 {
            c0: Fq::zero(),
            c1: Fq::zero(),
        }
    }

    #[inline]
    pub const fn one() -> Fq2 {
        Fq2 {
            c0: Fq::one(),
            c1: Fq::zero(),
        }
    }

    pub const fn new(c0: Fq, c1: Fq) -> Self {
        Fq2 { c0, c1 }
    }

    pub const fn size() -> usize {
        64
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.add(&other.c0),
            c1: self.c1.add(&other.c1),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.sub(&other.c0),
            c1: self.c1.sub(&other.c1),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    pub fn mul_assign(&mut self, other: &Self) {
        // (a0 + a1 u)(b0 + b1 u) = (a0 b0 - 2 a1 b1) + ((a0 + a1)(b0 + b1) - a0 b0 - a1 b1) u
        let t0 = self.c0 * other.c0;
        let t1 = self.c1 * other.c1;
        let s = (self.c0 + self.c1) * (other.c0 + other.c1);

        self.c1 = s - t0 - t1;
        self.c0 = t0 - t1.double();
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut t = *other;
        t.mul_assign(self);
        t
    }

    pub fn square_assign(&mut self) {
        // c0 = (a0 + a1)(a0 - 2 a1) + a0 a1
        // c1 = 2 a0 a1
        let ab = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 - self.c1.double()) + ab;

        self.c1 = ab.double();
        self.c0 = c0;
    }

    pub fn square(&self) -> Self {
        let mut t = *self;
        t.square_assign();
        t
    }

    /// Squares `self` `n` times in a row.
    pub fn square_n(&self, n: usize) -> Self {
        (0..n).fold(*self, |acc, _| acc.square())
    }

    pub fn double(&self) -> Self {
        Fq2 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    pub fn double_assign(&mut self) {
        self.c0 = self.c0.double();
        self.c1 = self.c1.double();
    }

    /// Multiplies both coefficients by an element of the base field.
    #[inline]
    pub fn mul_by_base(&self, k: &Fq) -> Self {
        Fq2 {
            c0: self.c0 * k,
            c1: self.c1 * k,
        }
    }

    /// Raising to `q^power` conjugates on odd powers and is the identity on
    /// even ones.
    pub fn frobenius_map(&mut self, power: usize) {
        if power % 2 != 0 {
            self.conjugate();
        }
    }

    /// Multiply this element by the quadratic non-residue `u`:
    /// `(c0 + c1 u) u = -2 c1 + c0 u`.
    pub fn mul_by_nonresidue(&mut self) {
        let c0 = self.c0;
        self.c0 = -self.c1.double();
        self.c1 = c0;
    }

    /// Norm of Fq2 as extension field in u over Fq,
    /// `(c0 + c1 u)(c0 - c1 u) = c0^2 + 2 c1^2`.
    pub fn norm(&self) -> Fq {
        self.c0.square() + self.c1.square().double()
    }

    /// Conjugate by negating c1.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    pub fn invert(&self) -> CtOption<Self> {
        self.norm().invert().map(|t| Fq2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Square root over `Fq2` for `q = 5 mod 8`, reducing to a single
    /// square root in `Fq`.
    pub fn sqrt(&self) -> CtOption<Self> {
        let b = pow_p_minus_1_over_4(self);
        let mut bq = b;
        bq.frobenius_map(1);
        let b2 = b.square();

        // b^(q + 1) lies in Fq and is either 1 or -1 for a square
        let is_one = (bq * b).ct_eq(&Self::one());

        let e = b2 * self;
        let e = Fq2::conditional_select(&e.double(), &e, is_one);
        let x0 = e.c0.sqrt().unwrap_or(Fq::zero());

        let x = bq.mul_by_base(&x0);
        let x = Fq2::conditional_select(&(x * SQRT_ADJ), &x, is_one);

        CtOption::new(x, x.square().ct_eq(self))
    }

    /// `sgn0` style parity: the parity of `c0`, or of `c1` when `c0` is zero.
    pub fn is_odd(&self) -> Choice {
        let c0_zero = self.c0.ct_eq(&Fq::zero());
        Choice::conditional_select(&self.c0.is_odd(), &self.c1.is_odd(), c0_zero)
    }

    /// Big-endian encoding `c1 || c0`.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut res = [0u8; 64];
        res[..32].copy_from_slice(&self.c1.to_repr());
        res[32..].copy_from_slice(&self.c0.to_repr());
        res
    }

    /// Decodes `c1 || c0`, failing if either half is not canonical.
    pub fn from_bytes(bytes: &[u8; 64]) -> CtOption<Fq2> {
        let mut c1 = [0u8; 32];
        let mut c0 = [0u8; 32];
        c1.copy_from_slice(&bytes[..32]);
        c0.copy_from_slice(&bytes[32..]);

        Fq::from_repr(c0).and_then(|c0| Fq::from_repr(c1).map(|c1| Fq2 { c0, c1 }))
    }
}

impl Legendre for Fq2 {
    /// An element of `Fq2` is a square exactly when its norm is a square in `Fq`.
    fn legendre(&self) -> i64 {
        self.norm().legendre()
    }
}

impl Field for Fq2 {
    const ZERO: Self = Self::zero();
    const ONE: Self = Self::one();

    fn random(mut rng: impl RngCore) -> Self {
        Fq2 {
            c0: Fq::random(&mut rng),
            c1: Fq::random(&mut rng),
        }
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        sqrt_ratio_by_division(num, div)
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::{OsRng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    use crate::tests::SEED;

    fn u() -> Fq2 {
        Fq2::new(Fq::zero(), Fq::one())
    }

    #[test]
    fn test_u_squared() {
        assert_eq!(u().square(), -Fq2::new(Fq::from(2u64), Fq::zero()));
    }

    #[test]
    fn test_ser() {
        let mut rng = XorShiftRng::from_seed(SEED);

        let a0 = Fq2::random(&mut rng);
        let a_bytes = a0.to_bytes();
        let a1 = Fq2::from_bytes(&a_bytes).unwrap();
        assert_eq!(a0, a1);
        assert_eq!(&a_bytes[..32], &a0.c1.to_repr()[..]);

        let bad = [0xffu8; 64];
        assert!(bool::from(Fq2::from_bytes(&bad).is_none()));
    }

    #[test]
    fn test_fq2_ordering() {
        let mut a = Fq2::new(Fq::zero(), Fq::zero());
        let mut b = a;

        assert!(a.cmp(&b) == Ordering::Equal);
        b.c0 += &Fq::one();
        assert!(a.cmp(&b) == Ordering::Less);
        a.c0 += &Fq::one();
        assert!(a.cmp(&b) == Ordering::Equal);
        b.c1 += &Fq::one();
        assert!(a.cmp(&b) == Ordering::Less);
        a.c0 += &Fq::one();
        assert!(a.cmp(&b) == Ordering::Less);
        a.c1 += &Fq::one();
        assert!(a.cmp(&b) == Ordering::Greater);
        b.c0 += &Fq::one();
        assert!(a.cmp(&b) == Ordering::Equal);
    }

    #[test]
    fn test_fq2_basics() {
        assert_eq!(Fq2::new(Fq::zero(), Fq::zero()), Fq2::ZERO);
        assert_eq!(Fq2::new(Fq::one(), Fq::zero()), Fq2::ONE);
        assert_eq!(Fq2::ZERO.is_zero().unwrap_u8(), 1);
        assert_eq!(Fq2::ONE.is_zero().unwrap_u8(), 0);
        assert_eq!(u().is_zero().unwrap_u8(), 0);
    }

    #[test]
    fn test_fq2_mul_matches_schoolbook() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..1000 {
            let a = Fq2::random(&mut rng);
            let b = Fq2::random(&mut rng);
            let expected = Fq2::new(
                a.c0 * b.c0 - (a.c1 * b.c1).double(),
                a.c0 * b.c1 + a.c1 * b.c0,
            );
            assert_eq!(a * b, expected);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn test_fq2_mul_nonresidue() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..1000 {
            let mut a = Fq2::random(&mut rng);
            let b = a * u();
            a.mul_by_nonresidue();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fq2_legendre() {
        assert_eq!(Fq2::ZERO.legendre(), 0);
        // u is not a square in Fq2 since -2 is a non-square modulo q.
        assert_eq!(u().legendre(), -1);

        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..100 {
            let a = Fq2::random(&mut rng);
            assert_eq!(a.square().legendre(), 1);
        }
    }

    #[test]
    fn test_fq2_sqrt_ratio() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..100 {
            let a = Fq2::random(&mut rng);
            let b = Fq2::random(&mut rng);

            let (is_square, root) = <Fq2 as Field>::sqrt_ratio(&(a.square() * b), &b);
            assert!(bool::from(is_square));
            assert!(root == a || root == -a);

            let (is_square, root) = <Fq2 as Field>::sqrt_ratio(&(u() * a.square() * b), &b);
            assert!(!bool::from(is_square));
            assert_eq!(root, Fq2::ZERO);
        }

        let (is_square, root) = <Fq2 as Field>::sqrt_ratio(&Fq2::ZERO, &Fq2::ZERO);
        assert!(bool::from(is_square));
        assert_eq!(root, Fq2::ZERO);

        let (is_square, root) = <Fq2 as Field>::sqrt_ratio(&Fq2::ONE, &Fq2::ZERO);
        assert!(!bool::from(is_square));
        assert_eq!(root, Fq2::ZERO);
    }

    #[test]
    fn test_fq2_sqrt() {
        let mut rng = XorShiftRng::from_seed(SEED);
        for _ in 0..1000 {
            let a = Fq2::random(&mut rng);
            let b = a.square();
            let root = b.sqrt().unwrap();
            assert!(root == a || root == -a);

            let c = a * u().square() * a;
            assert_eq!(c.sqrt().unwrap().square(), c);

            if a.legendre() == -1 {
                assert!(bool::from(a.sqrt().is_none()));
            }
        }

        assert_eq!(Fq2::ZERO.sqrt().unwrap(), Fq2::ZERO);
        assert!(bool::from(u().sqrt().is_none()));
    }

    #[test]
    fn test_fq2_is_odd() {
        let one = Fq2::one();
        assert!(bool::from(one.is_odd()));
        assert!(!bool::from((-one).is_odd()));
        assert!(bool::from(u().is_odd()));
        assert!(!bool::from(Fq2::ZERO.is_odd()));
    }

    #[test]
    fn test_frobenius() {
        let mut rng = XorShiftRng::from_seed(SEED);
        let modulus = num_bigint::BigUint::parse_bytes(&Fq::MODULUS.as_bytes()[2..], 16)
            .unwrap()
            .to_u64_digits();

        for _ in 0..50 {
            for i in 0..4 {
                let mut a = Fq2::random(&mut rng);
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
        crate::tests::field::random_field_tests::<Fq2>("fq2".to_string());
    }

    #[test]
    fn test_random_invert() {
        for _ in 0..100 {
            let a = Fq2::random(OsRng);
            assert_eq!(a * a.invert().unwrap(), Fq2::one());
        }
        assert!(bool::from(Fq2::zero().invert().is_none()));
    }
}
