// Domain layer: core models and ports (interfaces). No I/O beyond what the ports describe.

pub mod model;
pub mod ports;
