//! Equipment entities - weapons and armor carried by characters
//!
//! # Simple Data Structs
//!
//! Neither type has invariants beyond its numeric field being non-negative,
//! which `u32` already guarantees, so all fields are public. Any combination
//! of values is valid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::prototype::Prototype;

/// A weapon owned by exactly one character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

impl Prototype for Weapon {
    fn try_clone(&self) -> Result<Self, DomainError> {
        Ok(Self::new(self.name.clone(), self.damage))
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (damage {})", self.name, self.damage)
    }
}

/// Armor owned by exactly one character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub defense: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: u32) -> Self {
        Self {
            name: name.into(),
            defense,
        }
    }
}

impl Prototype for Armor {
    fn try_clone(&self) -> Result<Self, DomainError> {
        Ok(Self::new(self.name.clone(), self.defense))
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (defense {})", self.name, self.defense)
    }
}
