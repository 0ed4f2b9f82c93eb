// Adapters layer: concrete implementations of the domain ports (network, console, output).

pub mod console;
pub mod http;
pub mod surface;
