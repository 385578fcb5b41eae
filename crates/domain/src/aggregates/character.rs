//! Character aggregate - a combatant that owns its equipment
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all fields are encapsulated
//! - **Exclusive ownership**: the weapon and armor are owned values, so no two
//!   characters can hold the same instance
//! - **Prototype**: cloning deep-copies the equipment through [`Prototype`]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Armor, Weapon};
use crate::error::DomainError;
use crate::prototype::Prototype;
use crate::value_objects::Attributes;

/// A character with stats, one weapon and one armor
///
/// # Invariants
///
/// - The weapon and armor belong to this character alone
/// - A clone owns its own weapon and armor, equal in value to the source's
///
/// # Example
///
/// ```
/// use patternsmith_domain::aggregates::Character;
/// use patternsmith_domain::entities::{Armor, Weapon};
/// use patternsmith_domain::value_objects::Attributes;
/// use patternsmith_domain::Prototype;
///
/// let knight = Character::new(
///     "Knight",
///     Attributes::new(100, 20, 15, 10),
///     Weapon::new("Sword", 50),
///     Armor::new("Shield", 30),
/// );
///
/// let mut copy = knight.try_clone().unwrap();
/// copy.weapon_mut().damage = 80;
///
/// assert_eq!(knight.weapon().damage, 50);
/// assert_eq!(copy.name(), "Knight");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    name: String,
    attributes: Attributes,
    weapon: Weapon,
    armor: Armor,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a character, taking ownership of its weapon and armor.
    pub fn new(
        name: impl Into<String>,
        attributes: Attributes,
        weapon: Weapon,
        armor: Armor,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            weapon,
            armor,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.attributes.health
    }

    #[inline]
    pub fn strength(&self) -> i32 {
        self.attributes.strength
    }

    #[inline]
    pub fn agility(&self) -> i32 {
        self.attributes.agility
    }

    #[inline]
    pub fn intelligence(&self) -> i32 {
        self.attributes.intelligence
    }

    #[inline]
    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    #[inline]
    pub fn weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapon
    }

    #[inline]
    pub fn armor(&self) -> &Armor {
        &self.armor
    }

    #[inline]
    pub fn armor_mut(&mut self) -> &mut Armor {
        &mut self.armor
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Equip a new weapon, returning the one previously held.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Weapon {
        std::mem::replace(&mut self.weapon, weapon)
    }

    /// Equip new armor, returning the armor previously worn.
    pub fn equip_armor(&mut self, armor: Armor) -> Armor {
        std::mem::replace(&mut self.armor, armor)
    }

    /// Consume the character and hand back its equipment.
    pub fn into_equipment(self) -> (Weapon, Armor) {
        (self.weapon, self.armor)
    }
}

impl Prototype for Character {
    fn try_clone(&self) -> Result<Self, DomainError> {
        Ok(Self {
            name: self.name.clone(),
            attributes: self.attributes,
            weapon: self.weapon.try_clone()?,
            armor: self.armor.try_clone()?,
        })
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [HP {}, STR {}, AGI {}, INT {}] wielding {}, wearing {}",
            self.name,
            self.attributes.health,
            self.attributes.strength,
            self.attributes.agility,
            self.attributes.intelligence,
            self.weapon,
            self.armor
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_knight() -> Character {
        Character::new(
            "Knight",
            Attributes::new(100, 20, 15, 10),
            Weapon::new("Sword", 50),
            Armor::new("Shield", 30),
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_sets_all_fields() {
            let knight = create_knight();
            assert_eq!(knight.name(), "Knight");
            assert_eq!(knight.health(), 100);
            assert_eq!(knight.strength(), 20);
            assert_eq!(knight.agility(), 15);
            assert_eq!(knight.intelligence(), 10);
            assert_eq!(knight.weapon(), &Weapon::new("Sword", 50));
            assert_eq!(knight.armor(), &Armor::new("Shield", 30));
        }

        #[test]
        fn builder_methods_work() {
            let rogue = create_knight()
                .with_name("Rogue")
                .with_attributes(Attributes::new(70, 10, 25, 12));
            assert_eq!(rogue.name(), "Rogue");
            assert_eq!(rogue.attributes(), Attributes::new(70, 10, 25, 12));
        }
    }

    mod equipment {
        use super::*;

        #[test]
        fn equip_weapon_returns_previous() {
            let mut knight = create_knight();
            let old = knight.equip_weapon(Weapon::new("Lance", 65));
            assert_eq!(old, Weapon::new("Sword", 50));
            assert_eq!(knight.weapon().name, "Lance");
        }

        #[test]
        fn equip_armor_returns_previous() {
            let mut knight = create_knight();
            let old = knight.equip_armor(Armor::new("Plate", 45));
            assert_eq!(old, Armor::new("Shield", 30));
            assert_eq!(knight.armor().defense, 45);
        }

        #[test]
        fn into_equipment_releases_items() {
            let (weapon, armor) = create_knight().into_equipment();
            assert_eq!(weapon.damage, 50);
            assert_eq!(armor.defense, 30);
        }
    }

    mod prototype {
        use super::*;

        #[test]
        fn try_clone_is_equal_by_value() {
            let knight = create_knight();
            let copy = knight.try_clone().unwrap();
            assert_eq!(copy, knight);
            assert_eq!(copy.weapon(), knight.weapon());
            assert_eq!(copy.armor(), knight.armor());
        }

        #[test]
        fn try_clone_does_not_share_equipment() {
            let knight = create_knight();
            let copy = knight.try_clone().unwrap();
            assert!(!std::ptr::eq(copy.weapon(), knight.weapon()));
            assert!(!std::ptr::eq(copy.armor(), knight.armor()));
            assert_ne!(copy.weapon().name.as_ptr(), knight.weapon().name.as_ptr());
            assert_ne!(copy.armor().name.as_ptr(), knight.armor().name.as_ptr());
        }

        #[test]
        fn mutating_clone_weapon_leaves_source_untouched() {
            let knight = create_knight();
            let mut copy = knight.try_clone().unwrap();
            copy.weapon_mut().damage = 99;
            copy.armor_mut().defense = 1;

            assert_eq!(knight.weapon().damage, 50);
            assert_eq!(knight.armor().defense, 30);
            assert_ne!(copy, knight);
        }

        #[test]
        fn mutating_source_leaves_clone_untouched() {
            let mut knight = create_knight();
            let copy = knight.try_clone().unwrap();
            knight.weapon_mut().name = "Broken Sword".to_string();
            knight.equip_armor(Armor::new("Rags", 1));

            assert_eq!(copy.weapon().name, "Sword");
            assert_eq!(copy.armor().name, "Shield");
        }

        #[test]
        fn clone_trait_matches_prototype() {
            let knight = create_knight();
            let via_clone = knight.clone();
            let via_prototype = knight.try_clone().unwrap();
            assert_eq!(via_clone, via_prototype);
            assert!(!std::ptr::eq(via_clone.weapon(), knight.weapon()));
        }

        #[test]
        fn clone_of_clone_stays_independent() {
            let knight = create_knight();
            let first = knight.try_clone().unwrap();
            let mut second = first.try_clone().unwrap();
            second.weapon_mut().damage = 0;
            assert_eq!(first.weapon().damage, 50);
            assert_eq!(knight.weapon().damage, 50);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn display_lists_stats_and_equipment() {
            assert_eq!(
                create_knight().to_string(),
                "Knight [HP 100, STR 20, AGI 15, INT 10] wielding Sword (damage 50), wearing Shield (defense 30)"
            );
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serialize_deserialize_roundtrip() {
            let knight = create_knight();
            let json = serde_json::to_string(&knight).unwrap();
            let restored: Character = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, knight);
        }

        #[test]
        fn serializes_nested_equipment() {
            let json = serde_json::to_value(create_knight()).unwrap();
            assert_eq!(json["name"], "Knight");
            assert_eq!(json["attributes"]["health"], 100);
            assert_eq!(json["weapon"]["damage"], 50);
            assert_eq!(json["armor"]["defense"], 30);
        }
    }
}
