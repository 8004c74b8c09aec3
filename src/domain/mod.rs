// Domain layer: service models and the catalog port. No HTTP here.

pub mod model;
pub mod ports;
