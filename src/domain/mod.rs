// Domain layer: schema shapes and the port to the sibling package. No dependencies beyond serde.

pub mod model;
pub mod ports;
