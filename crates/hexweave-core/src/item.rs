//! Wearable item model
//!
//! An `ItemBundle` names one wearable item by slot group and item name and
//! carries the optional cosmetic and crafting metadata the host needs to
//! reproduce it. An ordered list of bundles forms an [`Outfit`]; insertion
//! order is meaningful (it is the stable order before shuffling).

use serde::{Deserialize, Serialize};

/// One wearable item captured from an outfit code.
///
/// Fields serialize in the host's wire casing so codes produced here stay
/// interchangeable with codes produced by the host's own wardrobe tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBundle {
    /// Slot group identifier (e.g. "Cloth", "ItemArms", "ItemNeck")
    #[serde(rename = "Group")]
    pub group: String,
    /// Item identifier within the group
    #[serde(rename = "Name")]
    pub name: String,
    /// Color data; hosts accept a single color or a per-layer list
    #[serde(rename = "Color", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<serde_json::Value>,
    /// Difficulty override
    #[serde(rename = "Difficulty", default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,
    /// Crafted-item metadata
    #[serde(rename = "Craft", default, skip_serializing_if = "Option::is_none")]
    pub craft: Option<Craft>,
    /// Opaque property override, re-applied verbatim after wearing
    #[serde(rename = "Property", default, skip_serializing_if = "Option::is_none")]
    pub property: Option<serde_json::Value>,
}

impl ItemBundle {
    /// Create a bare item with no metadata
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            color: None,
            difficulty: None,
            craft: None,
            property: None,
        }
    }

    /// Attach color data
    pub fn with_color(mut self, color: serde_json::Value) -> Self {
        self.color = Some(color);
        self
    }

    /// Attach crafting metadata
    pub fn with_craft(mut self, craft: Craft) -> Self {
        self.craft = Some(craft);
        self
    }

    /// Attach a property override
    pub fn with_property(mut self, property: serde_json::Value) -> Self {
        self.property = Some(property);
        self
    }

    /// Display name, preferring the crafted name when one is set
    pub fn display_name(&self) -> &str {
        self.craft
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or(&self.name)
    }
}

/// Crafting metadata carried on an item bundle.
///
/// Only the name is interpreted here; everything else the host put on the
/// craft record is preserved verbatim for round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Craft {
    /// Crafted display name
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining craft fields, passed through untouched
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Craft {
    /// Create craft metadata with just a display name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            rest: serde_json::Map::new(),
        }
    }
}

/// An ordered outfit
pub type Outfit = Vec<ItemBundle>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let item = ItemBundle::new("ItemArms", "HempRope");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["Group"], "ItemArms");
        assert_eq!(json["Name"], "HempRope");
        assert!(json.get("Color").is_none());
    }

    #[test]
    fn test_round_trip_with_metadata() {
        let item = ItemBundle::new("Cloth", "Maid Dress")
            .with_color(serde_json::json!(["#202020", "Default"]))
            .with_property(serde_json::json!({"Type": "Strict"}));
        let json = serde_json::to_string(&item).unwrap();
        let back: ItemBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_display_name_prefers_craft() {
        let plain = ItemBundle::new("ItemNeck", "LeatherCollar");
        assert_eq!(plain.display_name(), "LeatherCollar");

        let crafted = plain.clone().with_craft(Craft::named("Pet Collar"));
        assert_eq!(crafted.display_name(), "Pet Collar");
    }

    #[test]
    fn test_craft_preserves_unknown_fields() {
        let json = r#"{"Name":"Pet Collar","Lock":"ExclusivePadlock","Private":true}"#;
        let craft: Craft = serde_json::from_str(json).unwrap();
        assert_eq!(craft.name.as_deref(), Some("Pet Collar"));
        assert_eq!(craft.rest["Lock"], "ExclusivePadlock");

        let back = serde_json::to_value(&craft).unwrap();
        assert_eq!(back["Private"], true);
    }
}
