pub mod errors;
pub mod failure;
pub mod payload;
pub mod ports;
