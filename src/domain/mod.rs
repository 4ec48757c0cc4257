// Domain layer: customer model, ports and the pure sorting services.

pub mod model;
pub mod ports;

pub mod services;
