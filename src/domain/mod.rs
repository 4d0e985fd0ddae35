// Domain layer: record model, category tables and the ports the core is written against.

pub mod model;
pub mod ports;
