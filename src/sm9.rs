mod curve;
mod engine;
mod fq;
mod fq12;
mod fq2;
mod fq6;
mod fr;
mod group;
mod table;

pub use curve::*;
pub use engine::*;
pub use fq::*;
pub use fq12::*;
pub use fq2::*;
pub use fq6::*;
pub use fr::*;
pub use group::{
    normalize_scalar, pair, random_g1, random_g2, random_gt, GT_SIZE,
};
