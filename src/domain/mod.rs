// Domain layer: the API port the cleaner depends on.

pub mod ports;
