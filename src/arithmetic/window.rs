//! Fixed 4-bit window tables shared by point multiplication and `Gt`
//! exponentiation.

use super::be_nibbles;
use group::Group;
use static_assertions::const_assert_eq;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Number of 4-bit windows in a 256-bit scalar.
pub(crate) const WINDOWS: usize = 64;
const_assert_eq!(WINDOWS * 4, 256);

/// The multiples `1*P, 2*P, ..., 15*P` of a group element.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LookupTable<G>([G; 15]);

impl<G: Group + ConditionallySelectable> LookupTable<G> {
    pub(crate) fn new(base: &G) -> Self {
        let mut table = [*base; 15];
        for i in 1..15 {
            table[i] = table[i - 1] + base;
        }
        LookupTable(table)
    }

    /// Returns `n * P` scanning every entry; `n = 0` yields the identity.
    pub(crate) fn select(&self, n: u8) -> G {
        let mut acc = G::identity();
        for (i, entry) in self.0.iter().enumerate() {
            acc.conditional_assign(entry, (i as u8 + 1).ct_eq(&n));
        }
        acc
    }
}

/// Multiplies `base` by a 32-byte big-endian scalar, four bits at a time,
/// most significant nibble first. The scalar is not reduced.
pub(crate) fn mul_be_bytes<G: Group + ConditionallySelectable>(base: &G, scalar: &[u8; 32]) -> G {
    let table = LookupTable::new(base);

    let mut acc = G::identity();
    for (i, nibble) in be_nibbles(scalar).iter().enumerate() {
        if i != 0 {
            acc = acc.double().double().double().double();
        }
        acc += table.select(*nibble);
    }
    acc
}

/// Precomputed multiples of a fixed base: window `i` holds the
/// [`LookupTable`] of `16^i * P`, so evaluation needs no doublings.
#[derive(Clone, Debug)]
pub(crate) struct FixedBaseTable<G>(Vec<LookupTable<G>>);

impl<G: Group + ConditionallySelectable> FixedBaseTable<G> {
    pub(crate) fn new(base: &G) -> Self {
        let mut windows = Vec::with_capacity(WINDOWS);
        let mut base = *base;
        for _ in 0..WINDOWS {
            windows.push(LookupTable::new(&base));
            base = base.double().double().double().double();
        }
        FixedBaseTable(windows)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len() * 15
    }

    pub(crate) fn mul_be_bytes(&self, scalar: &[u8; 32]) -> G {
        let mut acc = G::identity();
        for (window, nibble) in self.0.iter().rev().zip(be_nibbles(scalar).iter()) {
            acc += window.select(*nibble);
        }
        acc
    }
}
