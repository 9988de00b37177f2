// Domain layer: core models, field schemas, and ports (interfaces).
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
pub mod schema;
