// Domain layer: the movie records and the ports (interfaces) the core talks to.

pub mod model;
pub mod ports;
