use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Quadratic character of a field element.
pub trait Legendre {
    /// Returns `1` for a non-zero square, `-1` for a non-square and `0`
    /// for zero.
    fn legendre(&self) -> i64;

    #[inline(always)]
    fn ct_quadratic_non_residue(&self) -> Choice {
        self.legendre().ct_eq(&-1)
    }

    #[inline(always)]
    fn ct_quadratic_residue(&self) -> Choice {
        // The legendre symbol returns 0 for 0
        // and 1 for quadratic residues,
        // we consider 0 a square hence quadratic residue.
        self.legendre().ct_ne(&-1)
    }
}

/// Implements [`Legendre`] for a prime field through Euler's criterion,
/// `a^((q - 1) / 2)`, given the exponent as little-endian limbs.
#[macro_export]
macro_rules! extend_field_legendre {
    ($field:ident, $exp:expr) => {
        impl $crate::ff_ext::Legendre for $field {
            #[inline(always)]
            fn legendre(&self) -> i64 {
                let e = <Self as ::ff::Field>::pow_vartime(self, $exp);
                if bool::from(<Self as ::ff::Field>::is_zero(&e)) {
                    0
                } else if e == Self::one() {
                    1
                } else {
                    -1
                }
            }
        }
    };
}

/// Constant-time Tonelli-Shanks for a field of order `q = 2^s * t + 1`,
/// given `(t - 1) / 2` as little-endian limbs and a primitive `2^s`-th root
/// of unity. Runs the same number of field operations for every input.
pub(crate) fn sqrt_tonelli_shanks<F: Field>(
    f: &F,
    tm1d2: &[u64],
    s: u32,
    root_of_unity: F,
) -> CtOption<F> {
    let w = f.pow_vartime(tm1d2);

    let mut v = s;
    let mut x = w * f;
    let mut b = x * w;
    let mut z = root_of_unity;

    for max_v in (1..=s).rev() {
        let mut k = 1;
        let mut tmp = b.square();
        let mut j_less_than_v: Choice = 1.into();

        for j in 2..max_v {
            let tmp_is_one = tmp.ct_eq(&F::ONE);
            let squared = F::conditional_select(&tmp, &z, tmp_is_one).square();
            tmp = F::conditional_select(&squared, &tmp, tmp_is_one);
            let new_z = F::conditional_select(&z, &squared, tmp_is_one);
            j_less_than_v &= !j.ct_eq(&v);
            k = u32::conditional_select(&j, &k, tmp_is_one);
            z = F::conditional_select(&z, &new_z, j_less_than_v);
        }

        let result = x * z;
        x = F::conditional_select(&result, &x, b.ct_eq(&F::ONE));
        z = z.square();
        b *= z;
        v = k;
    }

    CtOption::new(x, x.square().ct_eq(f))
}

/// `sqrt(num / div)` for fields without a dedicated ratio routine. A zero
/// `div` only succeeds for a zero `num`; every failure returns zero.
pub(crate) fn sqrt_ratio_by_division<F: Field>(num: &F, div: &F) -> (Choice, F) {
    let root = (*num * div.invert().unwrap_or(F::ZERO)).sqrt();
    let is_square = root.is_some() & (!div.is_zero() | num.is_zero());
    let root = root.unwrap_or(F::ZERO);

    (is_square, F::conditional_select(&F::ZERO, &root, is_square))
}
