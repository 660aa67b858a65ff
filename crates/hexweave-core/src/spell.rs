//! Spell configuration
//!
//! A `SpellDefinition` is the triggering configuration for a spreading
//! outfit: which item classes it may touch, the encoded outfit code, and
//! the optional delay and loop schedule. It is captured once at activation
//! and persisted verbatim, so editing the configuration later cannot
//! retroactively change a curse already in progress.

use serde::{Deserialize, Serialize};

/// Which classes of items the outfit may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutfitOption {
    /// Clothing slots only
    #[default]
    ClothesOnly,
    /// Restraint slots only
    BindsOnly,
    /// Both clothing and restraint slots
    Both,
}

/// Maximum number of times a spreading outfit may loop
pub const MAX_LOOP_COUNT: u32 = 20;
/// Longest allowed inter-loop interval, in minutes (24 hours)
pub const MAX_LOOP_MINUTES: u32 = 24 * 60;
/// Longest allowed initial delay, in minutes (100 hours)
pub const MAX_DELAY_MINUTES: u32 = 100 * 60;

/// The triggering configuration for a spreading-outfit curse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellDefinition {
    /// Which item classes the outfit may touch
    pub option: OutfitOption,
    /// Encoded outfit code
    pub code: String,
    /// Whether the first spreading phase is delayed
    pub delay_active: bool,
    /// Minutes before the first spreading phase
    pub delay_minutes: u32,
    /// Whether the outfit re-applies after finishing
    pub loop_active: bool,
    /// Maximum repeat count
    pub loop_count: u32,
    /// Minutes between loops
    pub loop_minutes: u32,
}

impl SpellDefinition {
    /// Create a definition with no delay and no looping
    pub fn new(option: OutfitOption, code: impl Into<String>) -> Self {
        Self {
            option,
            code: code.into(),
            delay_active: false,
            delay_minutes: 0,
            loop_active: false,
            loop_count: 0,
            loop_minutes: 0,
        }
    }

    /// Enable a delayed first activation
    pub fn with_delay(mut self, minutes: u32) -> Self {
        self.delay_active = true;
        self.delay_minutes = minutes;
        self
    }

    /// Enable looping with a repeat count and inter-loop interval
    pub fn with_loops(mut self, count: u32, minutes: u32) -> Self {
        self.loop_active = true;
        self.loop_count = count;
        self.loop_minutes = minutes;
        self
    }

    /// Apply the capture-time maxima.
    ///
    /// Called exactly once, when the definition is captured at activation;
    /// the clamped definition is what gets persisted and the limits are
    /// never re-checked afterwards.
    pub fn clamped(mut self) -> Self {
        self.loop_count = self.loop_count.min(MAX_LOOP_COUNT);
        self.loop_minutes = self.loop_minutes.min(MAX_LOOP_MINUTES);
        self.delay_minutes = self.delay_minutes.min(MAX_DELAY_MINUTES);
        self
    }
}
