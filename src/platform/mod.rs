// Colaboradores del navegador con implementaciones por plataforma

pub mod traits;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use traits::*;
