use ff::{Field, PrimeField};
use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

pub fn random_field_tests<F: Field>(type_name: String) {
    let mut rng = XorShiftRng::from_seed(super::SEED);
    log::info!("field tests for {}", type_name);

    random_multiplication_tests::<F, _>(&mut rng);
    random_addition_tests::<F, _>(&mut rng);
    random_subtraction_tests::<F, _>(&mut rng);
    random_negation_tests::<F, _>(&mut rng);
    random_doubling_tests::<F, _>(&mut rng);
    random_squaring_tests::<F, _>(&mut rng);
    random_inversion_tests::<F, _>(&mut rng);
    random_expansion_tests::<F, _>(&mut rng);

    assert_eq!(F::ZERO.is_zero().unwrap_u8(), 1);
    {
        let z = -F::ZERO;
        assert_eq!(z.is_zero().unwrap_u8(), 1);
    }

    assert!(bool::from(F::ZERO.invert().is_none()));

    // Multiplication by zero
    {
        let mut a = F::random(&mut rng);
        a.mul_assign(&F::ZERO);
        assert_eq!(a.is_zero().unwrap_u8(), 1);
    }

    // Addition by zero
    {
        let mut a = F::random(&mut rng);
        let copy = a;
        a.add_assign(&F::ZERO);
        assert_eq!(a, copy);
    }
}

fn random_multiplication_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        let a = F::random(&mut rng);
        let b = F::random(&mut rng);
        let c = F::random(&mut rng);

        let mut t0 = a; // (a * b) * c
        t0.mul_assign(&b);
        t0.mul_assign(&c);

        let mut t1 = a; // (a * c) * b
        t1.mul_assign(&c);
        t1.mul_assign(&b);

        let mut t2 = b; // (b * c) * a
        t2.mul_assign(&c);
        t2.mul_assign(&a);

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_addition_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        let a = F::random(&mut rng);
        let b = F::random(&mut rng);
        let c = F::random(&mut rng);

        let mut t0 = a; // (a + b) + c
        t0.add_assign(&b);
        t0.add_assign(&c);

        let mut t1 = a; // (a + c) + b
        t1.add_assign(&c);
        t1.add_assign(&b);

        let mut t2 = b; // (b + c) + a
        t2.add_assign(&c);
        t2.add_assign(&a);

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_subtraction_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        let a = F::random(&mut rng);
        let b = F::random(&mut rng);

        let mut t0 = a; // (a - b)
        t0.sub_assign(&b);

        let mut t1 = b; // (b - a)
        t1.sub_assign(&a);

        let mut t2 = t0; // (a - b) + (b - a) = 0
        t2.add_assign(&t1);

        assert_eq!(t2.is_zero().unwrap_u8(), 1);
    }
}

fn random_negation_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        let a = F::random(&mut rng);
        let mut b = -a;
        b.add_assign(&a);

        assert_eq!(b.is_zero().unwrap_u8(), 1);
    }
}

fn random_doubling_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        let mut a = F::random(&mut rng);
        let mut b = a;
        a.add_assign(&b);
        b = b.double();

        assert_eq!(a, b);
    }
}

fn random_squaring_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        let mut a = F::random(&mut rng);
        let mut b = a;
        a.mul_assign(&b);
        b = b.square();

        assert_eq!(a, b);
    }
}

fn random_inversion_tests<F: Field, R: RngCore>(mut rng: R) {
    assert!(bool::from(F::ZERO.invert().is_none()));

    for _ in 0..1000 {
        let mut a = F::random(&mut rng);
        let b = a.invert().unwrap(); // probablistically nonzero
        a.mul_assign(&b);

        assert_eq!(a, F::ONE);
    }
}

fn random_expansion_tests<F: Field, R: RngCore>(mut rng: R) {
    for _ in 0..1000 {
        // Compare (a + b)(c + d) and (a*c + b*c + a*d + b*d)

        let a = F::random(&mut rng);
        let b = F::random(&mut rng);
        let c = F::random(&mut rng);
        let d = F::random(&mut rng);

        let mut t0 = a;
        t0.add_assign(&b);
        let mut t1 = c;
        t1.add_assign(&d);
        t0.mul_assign(&t1);

        let mut t2 = a;
        t2.mul_assign(&c);
        let mut t3 = b;
        t3.mul_assign(&c);
        let mut t4 = a;
        t4.mul_assign(&d);
        let mut t5 = b;
        t5.mul_assign(&d);

        t2.add_assign(&t3);
        t2.add_assign(&t4);
        t2.add_assign(&t5);

        assert_eq!(t0, t2);
    }
}

pub fn random_conversion_tests<F: PrimeField>(type_name: String) {
    let mut rng = XorShiftRng::from_seed(super::SEED);
    log::info!("conversion tests for {}", type_name);

    for _ in 0..10000 {
        let a = F::random(&mut rng);
        let bytes = a.to_repr();
        let b = F::from_repr(bytes).unwrap();
        assert_eq!(a, b);
    }
}

/// `to_le_bits` walks the integer from its least significant bit, while the
/// byte representation is big-endian.
#[cfg(feature = "bits")]
pub fn random_bits_tests<F: ff::PrimeFieldBits>(type_name: String) {
    let mut rng = XorShiftRng::from_seed(super::SEED);
    log::info!("bits tests for {}", type_name);

    for _ in 0..10000 {
        let a = F::random(&mut rng);
        let bytes = a.to_repr();
        let bytes = bytes.as_ref();
        let bits = a.to_le_bits();
        for idx in 0..F::NUM_BITS as usize {
            let byte = bytes[bytes.len() - 1 - idx / 8];
            assert_eq!(bits[idx], ((byte >> (idx % 8)) & 1) == 1);
        }
    }
}

#[cfg(feature = "derive_serde")]
pub fn random_serde_test<F>(type_name: String)
where
    F: Field + serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    let mut rng = XorShiftRng::from_seed(super::SEED);
    log::info!("serde tests for {}", type_name);

    for _ in 0..1000 {
        // byte serialization
        let a = F::random(&mut rng);
        let bytes = bincode::serialize(&a).unwrap();
        let reader = std::io::Cursor::new(bytes);
        let b = bincode::deserialize_from(reader).unwrap();
        assert_eq!(a, b);

        // json serialization
        let json = serde_json::to_string(&a).unwrap();
        let reader = std::io::Cursor::new(json);
        let b: F = serde_json::from_reader(reader).unwrap();
        assert_eq!(a, b);
    }
}
