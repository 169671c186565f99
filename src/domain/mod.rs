// Domain layer: request/price models and the ports the pricing core depends on.

pub mod model;
pub mod ports;
