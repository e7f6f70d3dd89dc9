// Utils compartidos

pub mod constants;
pub mod routes;
pub mod storage;
pub mod validation;

pub use constants::*;
