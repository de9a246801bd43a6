// Prefix bytes of the SEC1-style point encodings.
pub(crate) const COMPRESSED_EVEN: u8 = 0x02;
pub(crate) const COMPRESSED_ODD: u8 = 0x03;
pub(crate) const UNCOMPRESSED: u8 = 0x04;

#[macro_export]
macro_rules! new_curve_impl {
    (($($privacy:tt)*),
    $name:ident,
    $name_affine:ident,
    $base:ident,
    $scalar:ident,
    $generator:expr,
    $constant_b:expr,
    $curve_id:literal,
    ) => {

        // **Compressed format**
        //
        //     |                  | prefix               | x-coordinate |
        //     | Byte pos.        | 0                    | 1  ..     BS |
        //     | ---------------- | -------------------- | ------------ |
        //     | Identity         | 0x03                 | 0            |
        //     | Non-identity $P$ | 0x02 + parity($P.y$) | $P.x$        |
        //
        // No curve point has `x = 0` since `b` is not a square, so `0x03 || 0`
        // is free to mark the identity. `BS` is the base size. Coordinates are big-endian; an `Fq2`
        // coordinate is written `c1 || c0`.
        paste::paste! {

        #[allow(non_upper_case_globals)]
        const [< $name _COMPRESSED_SIZE >]: usize = 1 + $base::size();

        #[derive(Copy, Clone, PartialEq, Eq)]
        pub struct [< $name Compressed >]([u8; [< $name _COMPRESSED_SIZE >]]);

        impl std::fmt::Debug for [< $name Compressed >] {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0[..].fmt(f)
            }
        }

        impl Default for [< $name Compressed >] {
            fn default() -> Self {
                [< $name Compressed >]([0; [< $name _COMPRESSED_SIZE >]])
            }
        }

        impl AsRef<[u8]> for [< $name Compressed >] {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsMut<[u8]> for [< $name Compressed >] {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }

        impl GroupEncoding for $name {
            type Repr = [< $name Compressed >];

            fn from_bytes(bytes: &Self::Repr) -> CtOption<Self> {
                $name_affine::from_bytes(bytes).map(Self::from)
            }

            fn from_bytes_unchecked(bytes: &Self::Repr) -> CtOption<Self> {
                $name_affine::from_bytes_unchecked(bytes).map(Self::from)
            }

            fn to_bytes(&self) -> Self::Repr {
                $name_affine::from(self).to_bytes()
            }
        }

        impl GroupEncoding for $name_affine {
            type Repr = [< $name Compressed >];

            fn from_bytes(bytes: &Self::Repr) -> CtOption<Self> {
                let prefix = bytes.0[0];
                let mut xbytes = [0u8; $base::size()];
                xbytes.copy_from_slice(&bytes.0[1..]);

                let sign = Choice::from(prefix & 1);
                let valid_prefix =
                    prefix.ct_eq(&$crate::derive::curve::COMPRESSED_EVEN)
                        | prefix.ct_eq(&$crate::derive::curve::COMPRESSED_ODD);

                $base::from_bytes(&xbytes).and_then(|x| {
                    let is_identity = valid_prefix & sign & x.is_zero();
                    CtOption::new(Self::identity(), is_identity).or_else(|| {
                        $name_affine::y2(x).sqrt().and_then(|y| {
                            let y = $base::conditional_select(&y, &-y, y.is_odd() ^ sign);
                            CtOption::new($name_affine { x, y }, valid_prefix)
                        })
                    })
                })
            }

            fn from_bytes_unchecked(bytes: &Self::Repr) -> CtOption<Self> {
                // The square root already puts the point on the curve.
                Self::from_bytes(bytes)
            }

            fn to_bytes(&self) -> Self::Repr {
                let mut res = [0; [< $name _COMPRESSED_SIZE >]];
                let identity = self.is_identity();

                let prefix = $crate::derive::curve::COMPRESSED_EVEN | self.y.is_odd().unwrap_u8();
                res[0] = u8::conditional_select(
                    &prefix,
                    &$crate::derive::curve::COMPRESSED_ODD,
                    identity,
                );

                let x = $base::conditional_select(&self.x, &$base::zero(), identity);
                res[1..].copy_from_slice(&x.to_bytes());

                [< $name Compressed >](res)
            }
        }

        // **Uncompressed format**
        //
        //     |                  | prefix | x-coordinate | y-coordinate |
        //     | Byte pos.        | 0      | 1  ..     BS | BS+1 .. 2*BS |
        //     | ---------------- | ------ | ------------ | ------------ |
        //     | Identity         | 0x04   | 0            | 0            |
        //     | Non-identity $P$ | 0x04   | $P.x$        | $P.y$        |

        #[allow(non_upper_case_globals)]
        const [< $name _UNCOMPRESSED_SIZE >]: usize = 1 + 2 * $base::size();

        #[derive(Copy, Clone)]
        pub struct [< $name Uncompressed >]([u8; [< $name _UNCOMPRESSED_SIZE >]]);

        impl std::fmt::Debug for [< $name Uncompressed >] {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0[..].fmt(f)
            }
        }

        impl Default for [< $name Uncompressed >] {
            fn default() -> Self {
                [< $name Uncompressed >]([0; [< $name _UNCOMPRESSED_SIZE >]])
            }
        }

        impl AsRef<[u8]> for [< $name Uncompressed >] {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsMut<[u8]> for [< $name Uncompressed >] {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }

        impl ConstantTimeEq for [< $name Uncompressed >] {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl Eq for [< $name Uncompressed >] {}

        impl PartialEq for [< $name Uncompressed >] {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(self.ct_eq(other))
            }
        }

        impl group::UncompressedEncoding for $name_affine {
            type Uncompressed = [< $name Uncompressed >];

            fn from_uncompressed(bytes: &Self::Uncompressed) -> CtOption<Self> {
                Self::from_uncompressed_unchecked(bytes).and_then(|p| CtOption::new(p, p.is_on_curve()))
            }

            fn from_uncompressed_unchecked(bytes: &Self::Uncompressed) -> CtOption<Self> {
                let valid_prefix = bytes.0[0].ct_eq(&$crate::derive::curve::UNCOMPRESSED);

                let mut repr = [0u8; $base::size()];
                let x = {
                    repr.copy_from_slice(&bytes.0[1..1 + $base::size()]);
                    $base::from_bytes(&repr)
                };
                let y = {
                    repr.copy_from_slice(&bytes.0[1 + $base::size()..]);
                    $base::from_bytes(&repr)
                };

                x.and_then(|x| {
                    y.and_then(|y| {
                        // All-zero coordinates are the identity, which is
                        // already what `(0, 0)` means in affine form.
                        CtOption::new($name_affine { x, y }, valid_prefix)
                    })
                })
            }

            fn to_uncompressed(&self) -> Self::Uncompressed {
                let mut res = [0; [< $name _UNCOMPRESSED_SIZE >]];
                let identity = self.is_identity();

                res[0] = $crate::derive::curve::UNCOMPRESSED;
                res[1..1 + $base::size()].copy_from_slice(
                    &$base::conditional_select(&self.x, &$base::zero(), identity).to_bytes()[..],
                );
                res[1 + $base::size()..].copy_from_slice(
                    &$base::conditional_select(&self.y, &$base::zero(), identity).to_bytes()[..],
                );

                [< $name Uncompressed >](res)
            }
        }
        }

        /// A macro to help define point serialization using the [`group::GroupEncoding`] trait
        /// This assumes both point types ($name, $nameaffine) implement [`group::GroupEncoding`].
        #[cfg(feature = "derive_serde")]
        macro_rules! serialize_deserialize_to_from_bytes {
            ($point:ident) => {
                impl ::serde::Serialize for $point {
                    fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                        let bytes = &self.to_bytes();
                        if serializer.is_human_readable() {
                            ::hex::serde::serialize(&bytes.0, serializer)
                        } else {
                            ::serde_arrays::serialize(&bytes.0, serializer)
                        }
                    }
                }

                paste::paste! {
                    impl<'de> ::serde::Deserialize<'de> for $point {
                        fn deserialize<D: ::serde::Deserializer<'de>>(
                            deserializer: D,
                        ) -> Result<Self, D::Error> {
                            use ::serde::de::Error as _;
                            let bytes = if deserializer.is_human_readable() {
                                ::hex::serde::deserialize(deserializer)?
                            } else {
                                ::serde_arrays::deserialize::<_, u8, [< $name _COMPRESSED_SIZE >]>(deserializer)?
                            };
                            Option::from(Self::from_bytes(&[< $name Compressed >](bytes))).ok_or_else(|| {
                                D::Error::custom("deserialized bytes don't encode a valid curve point")
                            })
                        }
                    }
                }
            };
        }

        /// A point in Jacobian coordinates `(X, Y, Z)` standing for the affine
        /// point `(X/Z^2, Y/Z^3)`, together with the cached `T = Z^2`.
        #[derive(Copy, Clone, Debug)]
        $($privacy)* struct $name {
            pub x: $base,
            pub y: $base,
            pub z: $base,
            pub t: $base,
        }

        #[derive(Copy, Clone, PartialEq)]
        $($privacy)* struct $name_affine {
            pub x: $base,
            pub y: $base,
        }

        #[cfg(feature = "derive_serde")]
        serialize_deserialize_to_from_bytes!($name);
        #[cfg(feature = "derive_serde")]
        serialize_deserialize_to_from_bytes!($name_affine);

        impl $name {
            pub fn generator() -> Self {
                let generator = $name_affine::generator();
                Self {
                    x: generator.x,
                    y: generator.y,
                    z: $base::one(),
                    t: $base::one(),
                }
            }

            /// Multiplies by a 32-byte big-endian scalar with a fixed 4-bit
            /// window. Scalars are not reduced modulo the group order.
            pub fn mul_be_bytes(&self, scalar: &[u8; 32]) -> Self {
                $crate::arithmetic::mul_be_bytes(self, scalar)
            }
        }

        impl $name_affine {
            pub fn generator() -> Self {
                Self {
                    x: $generator.0,
                    y: $generator.1,
                }
            }

            #[inline(always)]
            fn y2(x: $base) -> $base {
                x.square() * x + $constant_b
            }

            pub fn random(rng: impl RngCore) -> Self {
                $name::random(rng).to_affine()
            }
        }

        // Jacobian implementations

        impl<'a> From<&'a $name_affine> for $name {
            fn from(p: &'a $name_affine) -> $name {
                p.to_curve()
            }
        }

        impl From<$name_affine> for $name {
            fn from(p: $name_affine) -> $name {
                p.to_curve()
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::identity()
            }
        }

        impl subtle::ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                // (X/Z^2, Y/Z^3) == (X'/Z'^2, Y'/Z'^3)
                // <=> X T' == X' T and Y Z' T' == Y' Z T

                let x1 = self.x * other.t;
                let y1 = self.y * other.z * other.t;

                let x2 = other.x * self.t;
                let y2 = other.y * self.z * self.t;

                let self_is_zero = self.is_identity();
                let other_is_zero = other.is_identity();

                (self_is_zero & other_is_zero) // Both point at infinity
                            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
                // Neither point at infinity, coordinates are the same
            }
        }

        impl subtle::ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                $name {
                    x: $base::conditional_select(&a.x, &b.x, choice),
                    y: $base::conditional_select(&a.y, &b.y, choice),
                    z: $base::conditional_select(&a.z, &b.z, choice),
                    t: $base::conditional_select(&a.t, &b.t, choice),
                }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl cmp::Eq for $name {}

        impl CurveExt for $name {
            type ScalarExt = $scalar;
            type Base = $base;
            type AffineExt = $name_affine;

            const CURVE_ID: &'static str = $curve_id;

            fn jacobian_coordinates(&self) -> ($base, $base, $base) {
                (self.x, self.y, self.z)
            }

            fn is_on_curve(&self) -> Choice {
                // Y^2 = X^3 + b Z^6, with Z^6 = T^3
                let t3 = self.t.square() * self.t;
                let on_curve = (self.y.square() - self.x.square() * self.x)
                    .ct_eq(&(t3 * $constant_b));

                (on_curve & self.t.ct_eq(&self.z.square())) | self.z.is_zero()
            }

            fn b() -> Self::Base {
                $constant_b
            }

            fn new_jacobian(x: Self::Base, y: Self::Base, z: Self::Base) -> CtOption<Self> {
                let p = $name::conditional_select(
                    &$name { x, y, z, t: z.square() },
                    &$name::identity(),
                    z.is_zero(),
                );
                CtOption::new(p, p.is_on_curve())
            }
        }

        impl group::Curve for $name {
            type AffineRepr = $name_affine;

            fn batch_normalize(p: &[Self], q: &mut [Self::AffineRepr]) {
                assert_eq!(p.len(), q.len());

                let mut acc = $base::one();
                for (p, q) in p.iter().zip(q.iter_mut()) {
                    // We use the `x` field of $name_affine to store the product
                    // of previous z-coordinates seen.
                    q.x = acc;

                    // We will end up skipping all identities in p
                    acc = $base::conditional_select(&(acc * p.z), &acc, p.is_identity());
                }

                // All z-coordinates multiplied into `acc` are nonzero.
                acc = acc.invert().unwrap_or($base::zero());

                for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
                    let skip = p.is_identity();

                    // Compute tmp = 1/z
                    let tmp = q.x * acc;

                    // Cancel out z-coordinate in denominator of `acc`
                    acc = $base::conditional_select(&(acc * p.z), &acc, skip);

                    let tmp2 = tmp.square();
                    q.x = p.x * tmp2;
                    q.y = p.y * tmp2 * tmp;

                    *q = $name_affine::conditional_select(&q, &$name_affine::identity(), skip);
                }
            }

            fn to_affine(&self) -> Self::AffineRepr {
                let zinv = self.z.invert().unwrap_or($base::zero());
                let zinv2 = zinv.square();
                let x = self.x * zinv2;
                let y = self.y * zinv2 * zinv;
                let tmp = $name_affine {
                    x,
                    y,
                };
                $name_affine::conditional_select(&tmp, &$name_affine::identity(), zinv.is_zero())
            }
        }

        impl group::Group for $name {
            type Scalar = $scalar;

            fn random(mut rng: impl RngCore) -> Self {
                $name::generator() * $scalar::random(&mut rng)
            }

            fn double(&self) -> Self {
                // dbl-2009-l, https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html
                let a = self.x.square();
                let b = self.y.square();
                let c = b.square();
                let d = ((self.x + b).square() - a - c).double();
                let e = a.double() + a;
                let f = e.square();
                let x3 = f - d.double();
                let y3 = e * (d - x3) - c.double().double().double();
                let z3 = (self.y * self.z).double();

                let tmp = $name {
                    x: x3,
                    y: y3,
                    z: z3,
                    t: z3.square(),
                };

                $name::conditional_select(&tmp, &$name::identity(), self.is_identity())
            }

            fn generator() -> Self {
                $name::generator()
            }

            fn identity() -> Self {
                Self {
                    x: $base::zero(),
                    y: $base::one(),
                    z: $base::zero(),
                    t: $base::zero(),
                }
            }

            fn is_identity(&self) -> Choice {
                self.z.is_zero()
            }
        }

        impl group::prime::PrimeGroup for $name {}

        impl group::prime::PrimeCurve for $name {
            type Affine = $name_affine;
        }

        // Affine implementations

        impl std::fmt::Debug for $name_affine {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                if self.is_identity().into() {
                    write!(f, "Infinity")
                } else {
                    write!(f, "({:?}, {:?})", self.x, self.y)
                }
            }
        }

        impl<'a> From<&'a $name> for $name_affine {
            fn from(p: &'a $name) -> $name_affine {
                p.to_affine()
            }
        }

        impl From<$name> for $name_affine {
            fn from(p: $name) -> $name_affine {
                p.to_affine()
            }
        }

        impl Default for $name_affine {
            fn default() -> $name_affine {
                $name_affine::identity()
            }
        }

        impl subtle::ConstantTimeEq for $name_affine {
            fn ct_eq(&self, other: &Self) -> Choice {
                let z1 = self.is_identity();
                let z2 = other.is_identity();

                (z1 & z2) | ((!z1) & (!z2) & (self.x.ct_eq(&other.x)) & (self.y.ct_eq(&other.y)))
            }
        }

        impl subtle::ConditionallySelectable for $name_affine {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                $name_affine {
                    x: $base::conditional_select(&a.x, &b.x, choice),
                    y: $base::conditional_select(&a.y, &b.y, choice),
                }
            }
        }

        impl cmp::Eq for $name_affine {}

        impl group::prime::PrimeCurveAffine for $name_affine {
            type Curve = $name;
            type Scalar = $scalar;

            fn generator() -> Self {
                $name_affine::generator()
            }

            fn identity() -> Self {
                Self {
                    x: $base::zero(),
                    y: $base::zero(),
                }
            }

            fn is_identity(&self) -> Choice {
                self.x.is_zero() & self.y.is_zero()
            }

            fn to_curve(&self) -> Self::Curve {
                let tmp = $name {
                    x: self.x,
                    y: self.y,
                    z: $base::one(),
                    t: $base::one(),
                };
                $name::conditional_select(&tmp, &$name::identity(), self.is_identity())
            }
        }

        impl CurveAffine for $name_affine {
            type ScalarExt = $scalar;
            type Base = $base;
            type CurveExt = $name;

            fn is_on_curve(&self) -> Choice {
                // y^2 - x^3 ?= b
                (self.y.square() - self.x.square() * self.x).ct_eq(&$constant_b)
                    | self.is_identity()
            }

            fn coordinates(&self) -> CtOption<Coordinates<Self>> {
                Coordinates::from_xy(self.x, self.y).and_then(|c| CtOption::new(c, !self.is_identity()))
            }

            fn from_xy(x: Self::Base, y: Self::Base) -> CtOption<Self> {
                let p = $name_affine {
                    x, y
                };
                CtOption::new(p, p.is_on_curve())
            }

            fn b() -> Self::Base {
                $constant_b
            }
        }

        impl_binops_additive!($name, $name);
        impl_binops_additive!($name, $name_affine);
        impl_binops_additive_specify_output!($name_affine, $name_affine, $name);
        impl_binops_additive_specify_output!($name_affine, $name, $name);
        impl_binops_multiplicative!($name, $scalar);
        impl_binops_multiplicative_mixed!($name_affine, $scalar, $name);

        impl<'a> Neg for &'a $name {
            type Output = $name;

            fn neg(self) -> $name {
                $name {
                    x: self.x,
                    y: -self.y,
                    z: self.z,
                    t: self.t,
                }
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                -&self
            }
        }

        impl<T> Sum<T> for $name
        where
            T: core::borrow::Borrow<$name>,
        {
            fn sum<I>(iter: I) -> Self
            where
                I: Iterator<Item = T>,
            {
                iter.fold(Self::identity(), |acc, item| acc + item.borrow())
            }
        }

        impl<'a, 'b> Add<&'a $name> for &'b $name {
            type Output = $name;

            fn add(self, rhs: &'a $name) -> $name {
                // add-2007-bl, https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html
                let u1 = self.x * rhs.t;
                let u2 = rhs.x * self.t;
                let s1 = self.y * rhs.z * rhs.t;
                let s2 = rhs.y * self.z * self.t;

                let h = u2 - u1;
                let i = h.double().square();
                let j = h * i;
                let r = (s2 - s1).double();
                let v = u1 * i;

                let x3 = r.square() - j - v.double();
                let y3 = r * (v - x3) - (s1 * j).double();
                let z3 = ((self.z + rhs.z).square() - self.t - rhs.t) * h;

                let tmp = $name {
                    x: x3,
                    y: y3,
                    z: z3,
                    t: z3.square(),
                };

                // h = 0 means equal x: the same point doubles, the opposite
                // point cancels to infinity.
                let same_x = h.is_zero();
                let same_y = r.is_zero();
                let res = $name::conditional_select(&tmp, &$name::identity(), same_x);
                let res = $name::conditional_select(&res, &self.double(), same_x & same_y);
                let res = $name::conditional_select(&res, rhs, self.is_identity());
                $name::conditional_select(&res, self, rhs.is_identity())
            }
        }

        impl<'a, 'b> Add<&'a $name_affine> for &'b $name {
            type Output = $name;

            // Mixed addition
            fn add(self, rhs: &'a $name_affine) -> $name {
                // madd-2007-bl, https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html
                let u2 = rhs.x * self.t;
                let s2 = rhs.y * self.z * self.t;

                let h = u2 - self.x;
                let hh = h.square();
                let i = hh.double().double();
                let j = h * i;
                let r = (s2 - self.y).double();
                let v = self.x * i;

                let x3 = r.square() - j - v.double();
                let y3 = r * (v - x3) - (self.y * j).double();
                let z3 = (self.z + h).square() - self.t - hh;

                let tmp = $name {
                    x: x3,
                    y: y3,
                    z: z3,
                    t: z3.square(),
                };

                let same_x = h.is_zero();
                let same_y = r.is_zero();
                let res = $name::conditional_select(&tmp, &$name::identity(), same_x);
                let res = $name::conditional_select(&res, &self.double(), same_x & same_y);
                let res = $name::conditional_select(&res, &rhs.to_curve(), self.is_identity());
                $name::conditional_select(&res, self, rhs.is_identity())
            }
        }

        impl<'a, 'b> Sub<&'a $name> for &'b $name {
            type Output = $name;

            fn sub(self, other: &'a $name) -> $name {
                self + (-other)
            }
        }

        impl<'a, 'b> Sub<&'a $name_affine> for &'b $name {
            type Output = $name;

            fn sub(self, other: &'a $name_affine) -> $name {
                self + (-other)
            }
        }

        impl<'a, 'b> Mul<&'b $scalar> for &'a $name {
            type Output = $name;

            fn mul(self, other: &'b $scalar) -> Self::Output {
                self.mul_be_bytes(&other.to_repr())
            }
        }

        impl<'a> Neg for &'a $name_affine {
            type Output = $name_affine;

            fn neg(self) -> $name_affine {
                $name_affine {
                    x: self.x,
                    y: -self.y,
                }
            }
        }

        impl Neg for $name_affine {
            type Output = $name_affine;

            fn neg(self) -> $name_affine {
                -&self
            }
        }

        impl<'a, 'b> Add<&'a $name> for &'b $name_affine {
            type Output = $name;

            fn add(self, rhs: &'a $name) -> $name {
                rhs + self
            }
        }

        impl<'a, 'b> Add<&'a $name_affine> for &'b $name_affine {
            type Output = $name;

            fn add(self, rhs: &'a $name_affine) -> $name {
                rhs.to_curve() + self
            }
        }

        impl<'a, 'b> Sub<&'a $name_affine> for &'b $name_affine {
            type Output = $name;

            fn sub(self, other: &'a $name_affine) -> $name {
                self + (-other)
            }
        }

        impl<'a, 'b> Sub<&'a $name> for &'b $name_affine {
            type Output = $name;

            fn sub(self, other: &'a $name) -> $name {
                self + (-other)
            }
        }

        impl<'a, 'b> Mul<&'b $scalar> for &'a $name_affine {
            type Output = $name;

            fn mul(self, other: &'b $scalar) -> Self::Output {
                self.to_curve().mul_be_bytes(&other.to_repr())
            }
        }
    };
}
