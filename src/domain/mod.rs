// Domain layer: the dish model and the port menu sources implement.

pub mod model;
pub mod ports;
