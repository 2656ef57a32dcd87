//! Domain logic for the wardrobe matching service.
//!
//! Everything in this crate is pure computation: category bucketing, the
//! outfit combination generator, color-harmony scoring, simulated weather,
//! and occasion/weather fit scoring. No I/O, no database -- callers pass in
//! wardrobe items and (where sampling is involved) an RNG.

pub mod category;
pub mod harmony;
pub mod occasion;
pub mod outfit;
pub mod types;
pub mod weather;
