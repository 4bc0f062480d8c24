pub mod store;
pub mod controller;
pub mod parser;
pub mod ports;
