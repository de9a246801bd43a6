#[macro_use]
pub(crate) mod field;
#[macro_use]
pub(crate) mod curve;
