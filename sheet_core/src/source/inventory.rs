//! Inventory items - only the armor-relevant slice of an item

use serde::{Deserialize, Serialize};

/// An inventory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Absent and null both mean "not equipped"
    #[serde(default)]
    pub equipped: Option<bool>,
    pub definition: ItemDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    #[serde(default)]
    pub armor_class: Option<i32>,
    /// Armor category ordinal: 1 light, 2 medium, 3 heavy, 4 shield
    #[serde(default)]
    pub armor_type_id: Option<i32>,
    pub name: String,
}

impl InventoryItem {
    pub fn is_equipped(&self) -> bool {
        self.equipped.unwrap_or(false)
    }

    /// AC this item contributes when worn; zero counts as none
    pub fn worn_armor_class(&self) -> Option<i32> {
        if !self.is_equipped() {
            return None;
        }
        self.definition.armor_class.filter(|ac| *ac != 0)
    }
}
