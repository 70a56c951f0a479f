// Domain layer: the rule contract and run statistics. No external dependencies.

pub mod model;
pub mod ports;
