//! Domain entities - plain data owned by aggregates

pub mod equipment;

pub use equipment::{Armor, Weapon};
