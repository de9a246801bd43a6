//! This module provides common utilities, traits and structures for group and
//! field arithmetic.

mod curves;
mod window;
pub use curves::*;
pub(crate) use window::{mul_be_bytes, FixedBaseTable};

/// Compute a + b + carry, returning the result and the new carry over.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning the result and the new borrow.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning the result and the new carry over.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c), returning the result and the new carry over.
#[inline(always)]
pub(crate) const fn macx(a: u64, b: u64, c: u64) -> (u64, u64) {
    let res = (a as u128) + ((b as u128) * (c as u128));
    (res as u64, (res >> 64) as u64)
}

/// Splits a 32-byte big-endian scalar into its 64 nibbles, most significant first.
#[inline]
pub(crate) fn be_nibbles(scalar: &[u8; 32]) -> [u8; 64] {
    let mut nibbles = [0u8; 64];
    for (i, byte) in scalar.iter().enumerate() {
        nibbles[2 * i] = byte >> 4;
        nibbles[2 * i + 1] = byte & 0x0f;
    }
    nibbles
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_limb_helpers() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (u64::MAX, u64::MAX));
        assert_eq!(sbb(5, 3, u64::MAX), (1, 0));
        assert_eq!(mac(1, u64::MAX, u64::MAX, 1), (3, u64::MAX - 1));
        assert_eq!(macx(0, 1 << 32, 1 << 32), (0, 1));
    }

    #[test]
    fn test_be_nibbles() {
        let mut scalar = [0u8; 32];
        scalar[0] = 0xa5;
        scalar[31] = 0x3c;
        let nibbles = be_nibbles(&scalar);
        assert_eq!(&nibbles[..2], &[0xa, 0x5]);
        assert_eq!(&nibbles[62..], &[0x3, 0xc]);
        assert!(nibbles[2..62].iter().all(|n| *n == 0));
    }
}
