//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Request DTOs use camelCase field names to match the JSON the original
//! clients send; entity structs serialize with their snake_case column
//! names.

pub mod combination;
pub mod preference;
pub mod statistics;
pub mod suggestion;
pub mod wardrobe_item;
pub mod wear_history;
