// Domain layer: the ports the console engine is written against.

pub mod ports;
