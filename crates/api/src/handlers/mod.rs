//! HTTP handlers, one module per resource.

pub mod combinations;
pub mod preferences;
pub mod statistics;
pub mod suggestions;
pub mod wardrobe;
pub mod weather;
