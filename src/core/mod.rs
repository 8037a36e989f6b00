// src/core/mod.rs

pub mod entities;
pub mod net;

pub use entities::decode_entities;
