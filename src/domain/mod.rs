// Domain layer: core models and ports (interfaces). No external dependencies beyond std/serde/rust_decimal.

pub mod model;
pub mod ports;
