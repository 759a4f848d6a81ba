// Domain layer: request/answer models, ports, and the fixed filter vocabulary.

pub mod model;
pub mod ports;
pub mod taxonomy;
