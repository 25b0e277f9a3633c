pub mod http;
pub mod sinks;
