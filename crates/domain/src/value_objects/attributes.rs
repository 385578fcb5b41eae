//! Character attribute block

use serde::{Deserialize, Serialize};

/// Core scalar stats of a character
///
/// Plain data with no invariants: any combination of values is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub health: i32,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
}

impl Attributes {
    pub fn new(health: i32, strength: i32, agility: i32, intelligence: i32) -> Self {
        Self {
            health,
            strength,
            agility,
            intelligence,
        }
    }
}
