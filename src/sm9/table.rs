//! Fixed-base tables for the three generators, built on first use.

use crate::arithmetic::FixedBaseTable;
use crate::group::Group;
use crate::sm9::curve::{G1, G2};
use crate::sm9::engine::Gt;
use log::debug;

fn build<G: Group + subtle::ConditionallySelectable>(name: &str) -> FixedBaseTable<G> {
    let table = FixedBaseTable::new(&G::generator());
    debug!("built {} fixed-base table with {} entries", name, table.len());
    table
}

lazy_static::lazy_static! {
    static ref G1_TABLE: FixedBaseTable<G1> = build("G1");
    static ref G2_TABLE: FixedBaseTable<G2> = build("G2");
    static ref GT_TABLE: FixedBaseTable<Gt> = build("Gt");
}

/// `scalar * P1` for a 32-byte big-endian scalar.
pub(crate) fn g1_base_mult(scalar: &[u8; 32]) -> G1 {
    G1_TABLE.mul_be_bytes(scalar)
}

/// `scalar * P2` for a 32-byte big-endian scalar.
pub(crate) fn g2_base_mult(scalar: &[u8; 32]) -> G2 {
    G2_TABLE.mul_be_bytes(scalar)
}

/// `e(P1, P2)^scalar` for a 32-byte big-endian scalar.
pub(crate) fn gt_base_mult(scalar: &[u8; 32]) -> Gt {
    GT_TABLE.mul_be_bytes(scalar)
}
