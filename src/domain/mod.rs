// Domain layer: meeting models and the ports host bindings implement.

pub mod model;
pub mod ports;
