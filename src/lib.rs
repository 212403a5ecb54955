pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod ports;
