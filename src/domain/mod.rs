// Domain layer: measurement model and the outbound gateway port.

pub mod model;
pub mod ports;
