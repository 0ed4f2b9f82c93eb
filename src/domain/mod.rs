// Domain layer: the fetched document model and the ports the engine talks through.

pub mod model;
pub mod ports;
