//! Typed view over the persisted curse fields
//!
//! Five keys make up a curse's durable state. They are read through
//! fail-soft accessors (a value that does not decode reads as absent) and
//! are always cleared together; partial clearing is not a valid state.

use crate::bag::ExtensionBag;
use hexweave_core::{ActorId, Outfit, SpellDefinition, Timestamp};

pub(crate) const OUTFIT_KEY: &str = "stored-outfit";
pub(crate) const SPELL_KEY: &str = "stored-spell";
pub(crate) const SENDER_KEY: &str = "stored-sender-number";
pub(crate) const NEXT_ACTIVATION_KEY: &str = "stored-next-activation";
pub(crate) const LOOP_NUMBER_KEY: &str = "stored-loop-number";

const ALL_KEYS: [&str; 5] = [
    OUTFIT_KEY,
    SPELL_KEY,
    SENDER_KEY,
    NEXT_ACTIVATION_KEY,
    LOOP_NUMBER_KEY,
];

/// The five persisted fields of one curse, over a string-keyed bag
#[derive(Debug, Clone, Default)]
pub struct CurseStore {
    bag: ExtensionBag,
}

impl CurseStore {
    /// Create a store over an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a previously persisted bag
    pub fn from_bag(bag: ExtensionBag) -> Self {
        Self { bag }
    }

    /// The underlying bag, for the host to persist
    pub fn bag(&self) -> &ExtensionBag {
        &self.bag
    }

    pub(crate) fn bag_mut(&mut self) -> &mut ExtensionBag {
        &mut self.bag
    }

    /// The captured outfit, decoded lazily
    pub fn outfit(&self) -> Option<Outfit> {
        self.bag.get(OUTFIT_KEY)
    }

    /// The captured spell definition
    pub fn spell(&self) -> Option<SpellDefinition> {
        self.bag.get(SPELL_KEY)
    }

    /// The activator identity; absent means self or unknown
    pub fn sender(&self) -> Option<ActorId> {
        self.bag.get(SENDER_KEY)
    }

    /// When the next spreading phase should begin
    pub fn next_activation(&self) -> Option<Timestamp> {
        self.bag.get(NEXT_ACTIVATION_KEY)
    }

    /// Loops begun so far; 0 before the first loop
    pub fn loops_done(&self) -> u32 {
        self.bag.get(LOOP_NUMBER_KEY).unwrap_or(0)
    }

    /// Persist a fresh capture: outfit, spell, activator, loop reset
    pub fn capture(&mut self, outfit: &Outfit, spell: &SpellDefinition, sender: Option<ActorId>) {
        self.bag.set(OUTFIT_KEY, outfit);
        self.bag.set(SPELL_KEY, spell);
        match sender {
            Some(sender) => {
                self.bag.set(SENDER_KEY, &sender);
            }
            None => {
                self.bag.remove(SENDER_KEY);
            }
        }
        self.bag.set(LOOP_NUMBER_KEY, &0u32);
    }

    /// Schedule the next spreading phase
    pub fn set_next_activation(&mut self, at: Timestamp) {
        self.bag.set(NEXT_ACTIVATION_KEY, &at);
    }

    /// Drop the schedule (the machine is spreading right now)
    pub fn clear_next_activation(&mut self) {
        self.bag.remove(NEXT_ACTIVATION_KEY);
    }

    /// Persist the loop counter
    pub fn set_loops_done(&mut self, loops: u32) {
        self.bag.set(LOOP_NUMBER_KEY, &loops);
    }

    /// Whether any curse field is persisted at all
    pub fn has_any(&self) -> bool {
        ALL_KEYS.iter().any(|key| self.bag.contains(key))
    }

    /// Erase every persisted field. All five keys go together.
    pub fn clear(&mut self) {
        for key in ALL_KEYS {
            self.bag.remove(key);
        }
    }
}
