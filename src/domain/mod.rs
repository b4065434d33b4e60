// Domain layer: page/layout/request models and the ports the resolver consumes.

pub mod model;
pub mod ports;
