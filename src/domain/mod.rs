// Domain layer: estimate models and the environment port. No I/O.

pub mod model;
pub mod ports;
