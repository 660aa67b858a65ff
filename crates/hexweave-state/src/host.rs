//! Host collaborator contract
//!
//! The engine owns curse state and decisions; everything that touches the
//! target - asset classification, permission checks, the worn-appearance
//! list, settings persistence - belongs to the host. One implementation
//! per target character, handed in as `&mut impl Host` on every operation
//! so the machine stays instantiable per target and testable with a
//! scripted host.

use hexweave_core::{ActorId, ItemBundle};

/// A successfully worn item, as reported back by the host
#[derive(Debug, Clone, PartialEq)]
pub struct WornItem {
    /// Asset name of the worn item
    pub name: String,
    /// Crafted display name, when the item carries one
    pub crafted_name: Option<String>,
}

impl WornItem {
    /// Display name, preferring the crafted name
    pub fn display_name(&self) -> &str {
        self.crafted_name.as_deref().unwrap_or(&self.name)
    }
}

/// Collaborator contract the embedding application implements per target
pub trait Host {
    // --- classification oracle ---

    /// Whether the item's asset is classified as clothing
    fn is_cloth(&self, item: &ItemBundle) -> bool;

    /// Whether the item's asset is classified as a bind-type restraint.
    ///
    /// `exclusions` lists slot groups the caller has ruled out; an item
    /// whose group is excluded must never match.
    fn is_bind(&self, item: &ItemBundle, exclusions: &[&str]) -> bool;

    // --- permission / blocking oracle ---

    /// Whether the target's blocking rules forbid this sender applying
    /// the item
    fn is_blocked_for_sender(&self, sender: Option<ActorId>, item: &ItemBundle) -> bool;

    /// Whether the current room permits the item's category
    fn is_room_allowed(&self, item: &ItemBundle) -> bool;

    // --- global settings ---

    /// Whether the spreading outfit may change neck-slot items
    fn allow_neck_changes(&self) -> bool {
        false
    }

    // --- inventory mutator ---

    /// The target's currently worn items, in appearance order
    fn appearance(&self) -> Vec<ItemBundle>;

    /// Whether the named item is currently worn in `group`
    fn is_worn(&self, group: &str, name: &str) -> bool;

    /// Wear the item; `None` when the asset cannot be resolved or worn
    fn wear(&mut self, item: &ItemBundle) -> Option<WornItem>;

    /// Re-apply a captured property override onto the just-worn item
    fn apply_property(&mut self, group: &str, property: &serde_json::Value);

    /// Remove the worn item at `index` in the appearance list
    fn strip(&mut self, index: usize);

    /// Push the target's updated appearance to room observers
    fn sync_appearance(&mut self);

    // --- restrictions ---

    /// Lock or unlock the target's wardrobe while the curse runs
    fn set_wardrobe_lock(&mut self, locked: bool);

    // --- persistence trigger ---

    /// Flush settings storage. Best effort; must be read-after-write
    /// consistent within one tick.
    fn save(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worn_item_display_name() {
        let plain = WornItem {
            name: "HempRope".to_string(),
            crafted_name: None,
        };
        assert_eq!(plain.display_name(), "HempRope");

        let crafted = WornItem {
            name: "HempRope".to_string(),
            crafted_name: Some("Cursed Rope".to_string()),
        };
        assert_eq!(crafted.display_name(), "Cursed Rope");
    }
}
