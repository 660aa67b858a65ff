//! Scriptable host for unit tests
//!
//! Classification, blocking, and room rules are keyed by item name so a
//! test can declare its world in a couple of lines and assert against the
//! worn list and the recorded side-effect counters afterwards.

use crate::host::{Host, WornItem};
use hexweave_core::{ActorId, ItemBundle};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub(crate) struct MockHost {
    cloth: HashSet<String>,
    binds: HashSet<String>,
    blocked: HashSet<String>,
    room_banned: HashSet<String>,
    pub allow_neck: bool,
    pub worn: Vec<ItemBundle>,
    pub wardrobe_locked: bool,
    pub saves: usize,
    pub syncs: usize,
    pub properties_applied: Vec<(String, serde_json::Value)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify_cloth(&mut self, name: &str) {
        self.cloth.insert(name.to_string());
    }

    pub fn classify_bind(&mut self, name: &str) {
        self.binds.insert(name.to_string());
    }

    pub fn block(&mut self, name: &str) {
        self.blocked.insert(name.to_string());
    }

    pub fn ban_from_room(&mut self, name: &str) {
        self.room_banned.insert(name.to_string());
    }

    pub fn put_on(&mut self, item: &ItemBundle) {
        self.worn.push(item.clone());
    }

    pub fn worn_names(&self) -> Vec<&str> {
        self.worn.iter().map(|item| item.name.as_str()).collect()
    }
}

impl Host for MockHost {
    fn is_cloth(&self, item: &ItemBundle) -> bool {
        self.cloth.contains(&item.name)
    }

    fn is_bind(&self, item: &ItemBundle, exclusions: &[&str]) -> bool {
        self.binds.contains(&item.name) && !exclusions.contains(&item.group.as_str())
    }

    fn is_blocked_for_sender(&self, _sender: Option<ActorId>, item: &ItemBundle) -> bool {
        self.blocked.contains(&item.name)
    }

    fn is_room_allowed(&self, item: &ItemBundle) -> bool {
        !self.room_banned.contains(&item.name)
    }

    fn allow_neck_changes(&self) -> bool {
        self.allow_neck
    }

    fn appearance(&self) -> Vec<ItemBundle> {
        self.worn.clone()
    }

    fn is_worn(&self, group: &str, name: &str) -> bool {
        self.worn
            .iter()
            .any(|item| item.group == group && item.name == name)
    }

    fn wear(&mut self, item: &ItemBundle) -> Option<WornItem> {
        self.worn.push(item.clone());
        Some(WornItem {
            name: item.name.clone(),
            crafted_name: item.craft.as_ref().and_then(|c| c.name.clone()),
        })
    }

    fn apply_property(&mut self, group: &str, property: &serde_json::Value) {
        self.properties_applied
            .push((group.to_string(), property.clone()));
    }

    fn strip(&mut self, index: usize) {
        self.worn.remove(index);
    }

    fn sync_appearance(&mut self) {
        self.syncs += 1;
    }

    fn set_wardrobe_lock(&mut self, locked: bool) {
        self.wardrobe_locked = locked;
    }

    fn save(&mut self) {
        self.saves += 1;
    }
}
